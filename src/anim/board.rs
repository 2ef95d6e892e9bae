//! Frame loop for the whole card row
//!
//! Owns one controller per mounted card (keyed by day) and the wallet
//! readout, and advances them with a fixed timestep.

use std::collections::{BTreeMap, BTreeSet};

use super::card::CardAnimationController;
use super::counter::WalletDisplay;
use crate::board::{CurrencyWallet, RewardCard};
use crate::consts::*;

/// Fixed-step accumulator
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one display frame's worth of time; returns how many fixed steps to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= ANIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= ANIM_DT;
            substeps += 1;
        }
        // Never carry more than one step of debt into the next frame
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(ANIM_DT);
        }
        substeps
    }
}

/// Animation state for every mounted card plus the wallet readout
#[derive(Debug, Clone)]
pub struct BoardAnimator {
    controllers: BTreeMap<u32, CardAnimationController>,
    /// Days explicitly unmounted while still on the board; `sync` skips them
    detached: BTreeSet<u32>,
    wallet: Option<WalletDisplay>,
    clock: FrameClock,
    reduced_motion: bool,
}

impl BoardAnimator {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            controllers: BTreeMap::new(),
            detached: BTreeSet::new(),
            wallet: None,
            clock: FrameClock::new(),
            reduced_motion,
        }
    }

    /// Bring the mounted set in line with `cards` and feed each controller
    ///
    /// New days are mounted (entrance plays), days that disappeared are
    /// unmounted and stop receiving ticks. Days passed to [`unmount`](Self::unmount)
    /// stay unmounted until they leave `cards`.
    pub fn sync(&mut self, cards: &[RewardCard], wallet: &CurrencyWallet) {
        self.detached.retain(|day| cards.iter().any(|c| c.day == *day));
        self.controllers.retain(|day, _| {
            let keep = cards.iter().any(|c| c.day == *day);
            if !keep {
                log::debug!("Day {}: unmounted", day);
            }
            keep
        });

        for card in cards.iter().filter(|c| !self.detached.contains(&c.day)) {
            match self.controllers.get_mut(&card.day) {
                Some(controller) => {
                    controller.observe(card);
                }
                None => {
                    log::debug!("Day {}: mounted", card.day);
                    self.controllers.insert(
                        card.day,
                        CardAnimationController::mount(card, self.reduced_motion),
                    );
                }
            }
        }

        match &mut self.wallet {
            Some(display) => display.observe(wallet),
            None => self.wallet = Some(WalletDisplay::new(wallet, self.reduced_motion)),
        }
    }

    /// Stop animating one card; returns false if it was not mounted
    pub fn unmount(&mut self, day: u32) -> bool {
        let removed = self.controllers.remove(&day).is_some();
        if removed {
            log::debug!("Day {}: unmounted", day);
            self.detached.insert(day);
        }
        removed
    }

    /// Drop everything; the next `sync` mounts every card afresh
    pub fn unmount_all(&mut self) {
        self.controllers.clear();
        self.detached.clear();
        self.wallet = None;
    }

    /// Advance by one display frame; returns the number of fixed steps run
    pub fn frame(&mut self, frame_dt: f32) -> u32 {
        let steps = self.clock.advance(frame_dt);
        for _ in 0..steps {
            for controller in self.controllers.values_mut() {
                controller.tick(ANIM_DT);
            }
            if let Some(display) = &mut self.wallet {
                display.tick(ANIM_DT);
            }
        }
        steps
    }

    pub fn is_animating(&self) -> bool {
        self.controllers.values().any(|c| c.is_animating())
            || self.wallet.as_ref().is_some_and(|w| w.is_animating())
    }

    pub fn controller(&self, day: u32) -> Option<&CardAnimationController> {
        self.controllers.get(&day)
    }

    pub fn mounted_days(&self) -> impl Iterator<Item = u32> + '_ {
        self.controllers.keys().copied()
    }

    pub fn wallet_display(&self) -> Option<&WalletDisplay> {
        self.wallet.as_ref()
    }
}
