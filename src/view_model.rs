//! View model for the daily rewards screen
//!
//! Owns the session (board, wallet, catalog, RNG), exposes the two user
//! actions and the derived values, and builds read-only [`BoardFrame`]
//! snapshots for the presentation layer.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::board::{
    BoardError, CardType, Credit, CurrencyWallet, RewardBoard, RewardCard, RewardCatalog,
    RewardIcon, RewardKind, apply_claim, apply_reroll,
};
use crate::platform;
use crate::settings::Settings;

/// One card as the view renders it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub day: u32,
    pub card_type: CardType,
    pub reward_kind: RewardKind,
    pub reward_amount: u32,
    pub claimed: bool,
    pub is_current_day: bool,
    pub icon: RewardIcon,
    /// "DAY n"
    pub title: String,
    pub aria_label: String,
}

impl CardView {
    fn from_card(card: &RewardCard, current_day: u32) -> Self {
        Self {
            day: card.day,
            card_type: card.card_type,
            reward_kind: card.reward_kind,
            reward_amount: card.reward_amount,
            claimed: card.claimed,
            is_current_day: card.day == current_day,
            icon: card.icon(),
            title: format!("DAY {}", card.day),
            aria_label: card.describe(),
        }
    }
}

/// Read-only snapshot of everything the screen shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardFrame {
    pub cards: Vec<CardView>,
    pub reroll_count: u32,
    pub max_rerolls: u32,
    pub remaining_rerolls: u32,
    pub can_reroll: bool,
    pub current_day: u32,
    pub coins: u64,
    pub gems: u64,
    pub reroll_info: String,
}

/// Session state plus actions
#[derive(Debug, Clone)]
pub struct RewardBoardViewModel {
    catalog: RewardCatalog,
    board: RewardBoard,
    wallet: CurrencyWallet,
    current_day: u32,
    rng: Pcg32,
}

impl RewardBoardViewModel {
    /// Start a session from the catalog's seed cards
    pub fn new(catalog: RewardCatalog, settings: &Settings, seed: u64) -> Self {
        let board = RewardBoard::from_catalog(&catalog, settings.max_rerolls);
        log::info!(
            "Session started: {} cards, {} rerolls, seed {}",
            board.cards().len(),
            board.max_rerolls(),
            seed
        );
        Self {
            catalog,
            board,
            wallet: CurrencyWallet::new(settings.starting_coins, settings.starting_gems),
            current_day: settings.current_day,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Standard catalog; seed from settings or the platform
    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(platform::random_seed);
        Self::new(RewardCatalog::standard(), settings, seed)
    }

    // --- Actions ---

    /// Resample every unclaimed card
    pub fn reroll(&mut self) -> Result<(), BoardError> {
        match apply_reroll(&self.board, &self.catalog, &mut self.rng) {
            Ok(next) => {
                self.board = next;
                log::info!(
                    "Rerolled ({}/{})",
                    self.board.reroll_count(),
                    self.board.max_rerolls()
                );
                Ok(())
            }
            Err(err) => Err(Self::rejected(err)),
        }
    }

    /// Claim one day's reward and credit the wallet
    pub fn claim(&mut self, day: u32) -> Result<Credit, BoardError> {
        match apply_claim(&self.board, day) {
            Ok((next, credit)) => {
                self.board = next;
                let total = self.wallet.apply(&credit);
                log::info!(
                    "Claimed day {}: +{} {} (now {})",
                    day,
                    credit.amount,
                    credit.kind.label(),
                    total
                );
                Ok(credit)
            }
            Err(err) => Err(Self::rejected(err)),
        }
    }

    fn rejected(err: BoardError) -> BoardError {
        log::debug!("Action ignored [{}]: {}", err.code(), err);
        err
    }

    // --- State ---

    pub fn board(&self) -> &RewardBoard {
        &self.board
    }

    pub fn cards(&self) -> &[RewardCard] {
        self.board.cards()
    }

    pub fn wallet(&self) -> &CurrencyWallet {
        &self.wallet
    }

    pub fn catalog(&self) -> &RewardCatalog {
        &self.catalog
    }

    // --- Computed ---

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn remaining_rerolls(&self) -> u32 {
        self.board.remaining_rerolls()
    }

    pub fn can_reroll(&self) -> bool {
        self.board.can_reroll()
    }

    /// Line shown under the card row
    pub fn reroll_info(&self) -> String {
        let remaining = self.remaining_rerolls();
        let tail = if remaining > 0 {
            format!("Remaining: {}", remaining)
        } else {
            "No rerolls left today".to_string()
        };
        format!(
            "Rerolls used: {}/{} \u{2014} {}",
            self.board.reroll_count(),
            self.board.max_rerolls(),
            tail
        )
    }

    /// Snapshot for rendering
    pub fn frame(&self) -> BoardFrame {
        BoardFrame {
            cards: self
                .board
                .cards()
                .iter()
                .map(|c| CardView::from_card(c, self.current_day))
                .collect(),
            reroll_count: self.board.reroll_count(),
            max_rerolls: self.board.max_rerolls(),
            remaining_rerolls: self.remaining_rerolls(),
            can_reroll: self.can_reroll(),
            current_day: self.current_day,
            coins: self.wallet.coins(),
            gems: self.wallet.gems(),
            reroll_info: self.reroll_info(),
        }
    }
}
