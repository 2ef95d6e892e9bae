//! JavaScript bridge
//!
//! The page owns `requestAnimationFrame` and the DOM; it calls into a
//! [`DailyRewardsHandle`] for actions and reads back JSON snapshots.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::anim::{BoardAnimator, CardPose, StampPose};
use crate::board::RewardOffer;
use crate::settings::Settings;
use crate::view_model::{BoardFrame, RewardBoardViewModel};

/// Animated state of one card for the current frame
#[derive(Debug, Serialize)]
struct CardMotion {
    day: u32,
    pose: CardPose,
    stamp: StampPose,
    displayed: RewardOffer,
}

/// Everything the page needs to paint one frame
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    board: &'a BoardFrame,
    cards: Vec<CardMotion>,
    coins_displayed: u64,
    gems_displayed: u64,
    animating: bool,
}

#[wasm_bindgen]
pub struct DailyRewardsHandle {
    view_model: RewardBoardViewModel,
    animator: BoardAnimator,
    frame: BoardFrame,
}

#[wasm_bindgen]
impl DailyRewardsHandle {
    /// Start a session; `settings_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<DailyRewardsHandle, JsValue> {
        crate::platform::init_logging();

        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };

        let view_model = RewardBoardViewModel::from_settings(&settings);
        let mut animator = BoardAnimator::new(settings.reduced_motion);
        animator.sync(view_model.cards(), view_model.wallet());
        let frame = view_model.frame();

        Ok(Self {
            view_model,
            animator,
            frame,
        })
    }

    /// Returns null on success or the rejection reason
    pub fn reroll(&mut self) -> Option<String> {
        let result = self.view_model.reroll();
        self.refresh();
        result.err().map(|e| e.to_string())
    }

    /// Returns null on success or the rejection reason
    pub fn claim(&mut self, day: u32) -> Option<String> {
        let result = self.view_model.claim(day);
        self.refresh();
        result.err().map(|e| e.to_string())
    }

    /// Advance animations by one display frame (seconds)
    pub fn frame(&mut self, dt: f32) -> bool {
        self.animator.frame(dt);
        self.animator.is_animating()
    }

    /// Stop animating a card whose element was removed
    ///
    /// Later refreshes leave the day unmounted for as long as it stays on the board.
    pub fn unmount(&mut self, day: u32) -> bool {
        self.animator.unmount(day)
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        let cards = self
            .frame
            .cards
            .iter()
            .filter_map(|card| {
                self.animator.controller(card.day).map(|c| CardMotion {
                    day: card.day,
                    pose: c.pose(),
                    stamp: c.stamp_pose(),
                    displayed: c.displayed_offer(),
                })
            })
            .collect();

        let wallet = self.animator.wallet_display();
        let snapshot = Snapshot {
            board: &self.frame,
            cards,
            coins_displayed: wallet.map_or(self.frame.coins, |w| w.coins.displayed()),
            gems_displayed: wallet.map_or(self.frame.gems, |w| w.gems.displayed()),
            animating: self.animator.is_animating(),
        };
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl DailyRewardsHandle {
    fn refresh(&mut self) {
        self.animator
            .sync(self.view_model.cards(), self.view_model.wallet());
        self.frame = self.view_model.frame();
    }
}
