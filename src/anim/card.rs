//! Per-card animation controller
//!
//! A card runs three independent tracks, each a small state machine:
//!
//! - Entrance: `Pending` (staggered by day) -> `Revealing` -> `Idle`
//! - Claim: `Idle` -> `Rising` -> `Settling` -> `Idle`, plus the stamp overlay
//! - Reroll: `Idle` -> `FadingOut` -> `FadingIn` -> `Idle`
//!
//! Tracks only start on a change in what they observe, so re-observing the
//! same card state never restarts anything.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion::{Channel, Motion, SpringConfig};
use crate::board::{RewardCard, RewardOffer};
use crate::consts::*;
use crate::saturate;

/// Entrance track state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntranceState {
    /// Waiting out the per-day stagger (seconds left)
    Pending { delay: f32 },
    Revealing,
    Idle,
}

/// Claim bounce track state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimState {
    Idle,
    /// Quick lift toward the peak pose
    Rising,
    /// Wobbly return to rest
    Settling,
}

/// Reroll flip track state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RerollState {
    Idle,
    /// Flipping away; `pending` is shown once fully faded out
    FadingOut { pending: RewardOffer },
    FadingIn,
}

/// Composed transform for the card body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardPose {
    pub opacity: f32,
    /// Translation in pixels (positive y is down)
    pub offset: Vec2,
    pub scale: f32,
    /// Rotation around the vertical axis (degrees)
    pub rotate_y: f32,
}

impl CardPose {
    pub const REST: CardPose = CardPose {
        opacity: 1.0,
        offset: Vec2::ZERO,
        scale: 1.0,
        rotate_y: 0.0,
    };
}

/// Transform for the "claimed" stamp overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StampPose {
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Debug, Clone)]
struct EntranceTrack {
    state: EntranceState,
    /// 0 = hidden below, 1 = in place
    progress: Channel,
}

impl EntranceTrack {
    fn staggered(day: u32) -> Self {
        Self {
            state: EntranceState::Pending {
                delay: day as f32 * ENTRANCE_STAGGER,
            },
            progress: Channel::at_rest(0.0),
        }
    }

    fn shown() -> Self {
        Self {
            state: EntranceState::Idle,
            progress: Channel::at_rest(1.0),
        }
    }

    fn tick(&mut self, dt: f32) {
        match self.state {
            EntranceState::Pending { delay } => {
                let delay = delay - dt;
                if delay <= 0.0 {
                    self.progress
                        .animate_to(1.0, Motion::Spring(SpringConfig::ENTRANCE));
                    self.state = EntranceState::Revealing;
                } else {
                    self.state = EntranceState::Pending { delay };
                }
            }
            EntranceState::Revealing => {
                if self.progress.step(dt) {
                    self.state = EntranceState::Idle;
                }
            }
            EntranceState::Idle => {}
        }
    }
}

#[derive(Debug, Clone)]
struct ClaimTrack {
    state: ClaimState,
    /// 0 = rest, 1 = peak lift
    bounce: Channel,
    /// 0 = large and transparent, 1 = stamped in place
    stamp: Channel,
    seen_claimed: bool,
}

impl ClaimTrack {
    fn new(claimed: bool) -> Self {
        Self {
            state: ClaimState::Idle,
            bounce: Channel::at_rest(0.0),
            stamp: Channel::at_rest(if claimed { 1.0 } else { 0.0 }),
            seen_claimed: claimed,
        }
    }

    /// Returns true if the bounce started
    fn observe(&mut self, claimed: bool, animate: bool) -> bool {
        let edge = claimed && !self.seen_claimed;
        self.seen_claimed = claimed;
        if !edge {
            return false;
        }

        if !animate {
            self.stamp.snap(1.0);
            return false;
        }

        self.bounce.animate_to(
            1.0,
            Motion::Timed {
                duration: CLAIM_RISE_DURATION,
            },
        );
        self.stamp.snap(0.0);
        self.stamp
            .animate_to(1.0, Motion::Spring(SpringConfig::STAMP));
        self.state = ClaimState::Rising;
        true
    }

    fn tick(&mut self, dt: f32) {
        self.stamp.step(dt);
        match self.state {
            ClaimState::Rising => {
                if self.bounce.step(dt) {
                    self.bounce
                        .animate_to(0.0, Motion::Spring(SpringConfig::WOBBLY));
                    self.state = ClaimState::Settling;
                }
            }
            ClaimState::Settling => {
                if self.bounce.step(dt) {
                    self.state = ClaimState::Idle;
                }
            }
            ClaimState::Idle => {}
        }
    }

    fn is_active(&self) -> bool {
        self.state != ClaimState::Idle || !self.stamp.is_settled()
    }
}

#[derive(Debug, Clone)]
struct RerollTrack {
    state: RerollState,
    /// 0 = face on, 1 = edge on and invisible
    flip: Channel,
    displayed: RewardOffer,
    observed: RewardOffer,
}

impl RerollTrack {
    fn new(offer: RewardOffer) -> Self {
        Self {
            state: RerollState::Idle,
            flip: Channel::at_rest(0.0),
            displayed: offer,
            observed: offer,
        }
    }

    /// Returns true if a flip started or was retargeted
    fn observe(&mut self, offer: RewardOffer, claimed: bool, animate: bool) -> bool {
        if offer == self.observed {
            return false;
        }
        self.observed = offer;

        if claimed || !animate {
            self.displayed = offer;
            self.flip.snap(0.0);
            self.state = RerollState::Idle;
            return false;
        }

        match self.state {
            RerollState::Idle | RerollState::FadingIn => {
                self.flip
                    .animate_to(1.0, Motion::Spring(SpringConfig::REROLL));
            }
            RerollState::FadingOut { .. } => {}
        }
        self.state = RerollState::FadingOut { pending: offer };
        true
    }

    fn tick(&mut self, dt: f32) {
        match self.state {
            RerollState::FadingOut { pending } => {
                if self.flip.step(dt) {
                    // Midpoint: swap content while the card is invisible
                    self.displayed = pending;
                    self.flip
                        .animate_to(0.0, Motion::Spring(SpringConfig::REROLL));
                    self.state = RerollState::FadingIn;
                }
            }
            RerollState::FadingIn => {
                if self.flip.step(dt) {
                    self.state = RerollState::Idle;
                }
            }
            RerollState::Idle => {}
        }
    }
}

/// Animation state for one mounted card
#[derive(Debug, Clone)]
pub struct CardAnimationController {
    day: u32,
    reduced_motion: bool,
    entrance: EntranceTrack,
    claim: ClaimTrack,
    reroll: RerollTrack,
}

impl CardAnimationController {
    /// Mount a controller for `card`, starting its entrance reveal
    pub fn mount(card: &RewardCard, reduced_motion: bool) -> Self {
        let entrance = if reduced_motion {
            EntranceTrack::shown()
        } else {
            EntranceTrack::staggered(card.day)
        };
        Self {
            day: card.day,
            reduced_motion,
            entrance,
            claim: ClaimTrack::new(card.claimed),
            reroll: RerollTrack::new(card.offer()),
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Feed the latest card state; returns true if any track started
    pub fn observe(&mut self, card: &RewardCard) -> bool {
        let animate = !self.reduced_motion;
        let bounced = self.claim.observe(card.claimed, animate);
        let flipped = self.reroll.observe(card.offer(), card.claimed, animate);
        if bounced {
            log::debug!("Day {}: claim bounce", self.day);
        }
        if flipped {
            log::debug!("Day {}: reroll flip toward {:?}", self.day, card.offer());
        }
        bounced || flipped
    }

    /// Advance every track by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.entrance.tick(dt);
        self.claim.tick(dt);
        self.reroll.tick(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.entrance.state != EntranceState::Idle
            || self.claim.is_active()
            || self.reroll.state != RerollState::Idle
    }

    pub fn entrance_state(&self) -> EntranceState {
        self.entrance.state
    }

    pub fn claim_state(&self) -> ClaimState {
        self.claim.state
    }

    pub fn reroll_state(&self) -> RerollState {
        self.reroll.state
    }

    /// The reward the card face should show right now
    ///
    /// Lags the board during a reroll flip until the card is fully faded out.
    pub fn displayed_offer(&self) -> RewardOffer {
        self.reroll.displayed
    }

    pub fn pose(&self) -> CardPose {
        let reveal = self.entrance.progress.value();
        let bounce = self.claim.bounce.value();
        let flip = self.reroll.flip.value();

        CardPose {
            opacity: saturate(reveal) * saturate(1.0 - flip),
            offset: Vec2::new(
                0.0,
                ENTRANCE_OFFSET * (1.0 - reveal) + CLAIM_PEAK_LIFT * bounce,
            ),
            scale: 1.0 + (CLAIM_PEAK_SCALE - 1.0) * bounce,
            rotate_y: REROLL_FLIP_DEGREES * flip,
        }
    }

    pub fn stamp_pose(&self) -> StampPose {
        let s = self.claim.stamp.value();
        StampPose {
            opacity: saturate(s),
            scale: STAMP_START_SCALE + (1.0 - STAMP_START_SCALE) * s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CardType, RewardKind};

    fn card(day: u32, kind: RewardKind, amount: u32) -> RewardCard {
        RewardCard::new(day, CardType::Free, RewardOffer::new(kind, amount))
    }

    fn run(controller: &mut CardAnimationController, secs: f32) {
        let steps = (secs / ANIM_DT).ceil() as u32;
        for _ in 0..steps {
            controller.tick(ANIM_DT);
        }
    }

    fn settle(controller: &mut CardAnimationController) {
        let mut guard = 0;
        while controller.is_animating() {
            controller.tick(ANIM_DT);
            guard += 1;
            assert!(guard < 120 * 10, "controller never settled");
        }
    }

    #[test]
    fn test_entrance_staggered_by_day() {
        let mut controller = CardAnimationController::mount(&card(3, RewardKind::Gems, 75), false);
        assert!(matches!(controller.entrance_state(), EntranceState::Pending { .. }));
        assert_eq!(controller.pose().opacity, 0.0);

        // Day 3 waits 240 ms
        run(&mut controller, 0.2);
        assert!(matches!(controller.entrance_state(), EntranceState::Pending { .. }));
        run(&mut controller, 0.1);
        assert_eq!(controller.entrance_state(), EntranceState::Revealing);

        settle(&mut controller);
        assert_eq!(controller.entrance_state(), EntranceState::Idle);
        assert_eq!(controller.pose(), CardPose::REST);
    }

    #[test]
    fn test_claim_bounce_only_on_edge() {
        let mut c = card(1, RewardKind::Coins, 100);
        let mut controller = CardAnimationController::mount(&c, false);
        settle(&mut controller);

        assert!(!controller.observe(&c));
        c.claimed = true;
        assert!(controller.observe(&c));
        assert_eq!(controller.claim_state(), ClaimState::Rising);
        assert_eq!(controller.stamp_pose().opacity, 0.0);

        run(&mut controller, 0.1);
        assert!(controller.pose().scale > 1.0);
        assert!(controller.pose().offset.y < 0.0);

        // Re-rendering with claimed still true must not restart the bounce
        assert!(!controller.observe(&c));
        run(&mut controller, 0.2);
        assert_eq!(controller.claim_state(), ClaimState::Settling);
        assert!(!controller.observe(&c));
        assert_eq!(controller.claim_state(), ClaimState::Settling);

        settle(&mut controller);
        assert_eq!(controller.claim_state(), ClaimState::Idle);
        assert_eq!(controller.pose().scale, 1.0);
        let stamp = controller.stamp_pose();
        assert_eq!(stamp.opacity, 1.0);
        assert!((stamp.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mounted_claimed_card_does_not_bounce() {
        let mut c = card(2, RewardKind::Gems, 150);
        c.claimed = true;
        let mut controller = CardAnimationController::mount(&c, false);
        assert!(!controller.observe(&c));
        assert_eq!(controller.claim_state(), ClaimState::Idle);
        assert_eq!(controller.stamp_pose().opacity, 1.0);
    }

    #[test]
    fn test_reroll_swaps_at_midpoint() {
        let old = card(1, RewardKind::Coins, 100);
        let new = card(1, RewardKind::XP, 200);
        let mut controller = CardAnimationController::mount(&old, false);
        settle(&mut controller);

        assert!(controller.observe(&new));
        assert_eq!(
            controller.reroll_state(),
            RerollState::FadingOut {
                pending: new.offer()
            }
        );

        // Content stays old for as long as the card is still fading out
        let mut guard = 0;
        while matches!(controller.reroll_state(), RerollState::FadingOut { .. }) {
            assert_eq!(controller.displayed_offer(), old.offer());
            controller.tick(ANIM_DT);
            guard += 1;
            assert!(guard < 120 * 5);
        }

        assert_eq!(controller.reroll_state(), RerollState::FadingIn);
        assert_eq!(controller.displayed_offer(), new.offer());
        assert_eq!(controller.pose().opacity, 0.0);
        assert_eq!(controller.pose().rotate_y, REROLL_FLIP_DEGREES);

        settle(&mut controller);
        assert_eq!(controller.reroll_state(), RerollState::Idle);
        assert_eq!(controller.pose(), CardPose::REST);
        // Same state again is a no-op
        assert!(!controller.observe(&new));
    }

    #[test]
    fn test_reroll_retarget_during_fade_out() {
        let old = card(1, RewardKind::Coins, 100);
        let mid = card(1, RewardKind::XP, 200);
        let last = card(1, RewardKind::Tokens, 25);
        let mut controller = CardAnimationController::mount(&old, false);
        settle(&mut controller);

        controller.observe(&mid);
        run(&mut controller, 0.02);
        controller.observe(&last);
        assert_eq!(
            controller.reroll_state(),
            RerollState::FadingOut {
                pending: last.offer()
            }
        );

        settle(&mut controller);
        assert_eq!(controller.displayed_offer(), last.offer());
    }

    #[test]
    fn test_reroll_during_fade_in_restarts_from_current_pose() {
        let old = card(1, RewardKind::Coins, 100);
        let mid = card(1, RewardKind::XP, 200);
        let last = card(1, RewardKind::Tokens, 25);
        let mut controller = CardAnimationController::mount(&old, false);
        settle(&mut controller);

        controller.observe(&mid);
        let mut guard = 0;
        while controller.reroll_state() != RerollState::FadingIn {
            controller.tick(ANIM_DT);
            guard += 1;
            assert!(guard < 120 * 5);
        }
        run(&mut controller, 3.0 * ANIM_DT);
        assert_eq!(controller.reroll_state(), RerollState::FadingIn);
        assert_eq!(controller.displayed_offer(), mid.offer());

        let rotate_before = controller.pose().rotate_y;
        assert!(controller.observe(&last));
        assert_eq!(
            controller.reroll_state(),
            RerollState::FadingOut {
                pending: last.offer()
            }
        );
        // No jump back to edge-on: the new fade-out starts where the card is
        assert!((controller.pose().rotate_y - rotate_before).abs() < 1e-6);

        let mut guard = 0;
        while matches!(controller.reroll_state(), RerollState::FadingOut { .. }) {
            assert_eq!(controller.displayed_offer(), mid.offer());
            controller.tick(ANIM_DT);
            guard += 1;
            assert!(guard < 120 * 5);
        }
        assert_eq!(controller.reroll_state(), RerollState::FadingIn);
        assert_eq!(controller.displayed_offer(), last.offer());

        settle(&mut controller);
        assert_eq!(controller.pose(), CardPose::REST);
    }

    #[test]
    fn test_tracks_run_concurrently() {
        let c = card(1, RewardKind::Coins, 100);
        let mut controller = CardAnimationController::mount(&c, false);
        run(&mut controller, 0.1);
        assert_eq!(controller.entrance_state(), EntranceState::Revealing);

        let mut claimed = c;
        claimed.claimed = true;
        controller.observe(&claimed);
        assert_eq!(controller.entrance_state(), EntranceState::Revealing);
        assert_eq!(controller.claim_state(), ClaimState::Rising);

        settle(&mut controller);
        assert_eq!(controller.pose(), CardPose::REST);
    }

    #[test]
    fn test_reduced_motion_snaps() {
        let mut c = card(2, RewardKind::Coins, 100);
        let mut controller = CardAnimationController::mount(&c, true);
        assert!(!controller.is_animating());
        assert_eq!(controller.pose(), CardPose::REST);

        c.reward_kind = RewardKind::Gems;
        c.reward_amount = 50;
        assert!(!controller.observe(&c));
        assert_eq!(controller.displayed_offer(), c.offer());

        c.claimed = true;
        assert!(!controller.observe(&c));
        assert!(!controller.is_animating());
        assert_eq!(controller.stamp_pose().opacity, 1.0);
    }
}
