//! Board state and core reward types
//!
//! Everything a session needs to render the card row lives here.

use serde::{Deserialize, Serialize};

use super::catalog::{RewardCatalog, RewardIcon, RewardKind, RewardOffer};

/// Card tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CardType {
    #[default]
    Free,
    Premium,
    /// Shown but never claimable
    Locked,
}

impl CardType {
    pub fn is_claimable(&self) -> bool {
        *self != CardType::Locked
    }
}

/// One day's reward card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardCard {
    /// Day number (1-based, unique within a board)
    pub day: u32,
    pub card_type: CardType,
    pub reward_kind: RewardKind,
    pub reward_amount: u32,
    /// Only ever goes false -> true
    #[serde(default)]
    pub claimed: bool,
}

impl RewardCard {
    pub fn new(day: u32, card_type: CardType, offer: RewardOffer) -> Self {
        Self {
            day,
            card_type,
            reward_kind: offer.kind,
            reward_amount: offer.amount,
            claimed: false,
        }
    }

    /// Current payout of this card
    pub fn offer(&self) -> RewardOffer {
        RewardOffer::new(self.reward_kind, self.reward_amount)
    }

    pub fn is_locked(&self) -> bool {
        self.card_type == CardType::Locked
    }

    /// Locked cards always show the padlock
    pub fn icon(&self) -> RewardIcon {
        if self.is_locked() {
            RewardIcon::Lock
        } else {
            self.reward_kind.icon()
        }
    }

    /// Accessible description, e.g. "Day 4 reward: 75 GEMS (locked)"
    pub fn describe(&self) -> String {
        let suffix = if self.is_locked() {
            " (locked)"
        } else if self.claimed {
            " (claimed)"
        } else {
            ""
        };
        format!(
            "Day {} reward: {} {}{}",
            self.day,
            self.reward_amount,
            self.reward_kind.label(),
            suffix
        )
    }
}

/// Cards for one session plus the reroll counter
///
/// Fields are private: the only way to change a board is through
/// [`apply_reroll`](super::apply_reroll) and [`apply_claim`](super::apply_claim).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardBoard {
    /// Sorted by day
    cards: Vec<RewardCard>,
    reroll_count: u32,
    max_rerolls: u32,
}

impl RewardBoard {
    /// Fresh board from a validated catalog's seed cards
    ///
    /// A `max_rerolls` of zero gives a board that can never reroll.
    pub fn from_catalog(catalog: &RewardCatalog, max_rerolls: u32) -> Self {
        Self::new(catalog.initial_cards(), max_rerolls)
    }

    /// Cards must have unique non-zero days; only the catalog checks that
    pub(super) fn new(mut cards: Vec<RewardCard>, max_rerolls: u32) -> Self {
        cards.sort_by_key(|c| c.day);
        Self {
            cards,
            reroll_count: 0,
            max_rerolls,
        }
    }

    pub fn cards(&self) -> &[RewardCard] {
        &self.cards
    }

    pub fn card(&self, day: u32) -> Option<&RewardCard> {
        self.index_of(day).map(|i| &self.cards[i])
    }

    pub fn reroll_count(&self) -> u32 {
        self.reroll_count
    }

    pub fn max_rerolls(&self) -> u32 {
        self.max_rerolls
    }

    pub fn remaining_rerolls(&self) -> u32 {
        self.max_rerolls.saturating_sub(self.reroll_count)
    }

    pub fn can_reroll(&self) -> bool {
        self.reroll_count < self.max_rerolls
    }

    pub(super) fn index_of(&self, day: u32) -> Option<usize> {
        self.cards.binary_search_by_key(&day, |c| c.day).ok()
    }

    pub(super) fn cards_mut(&mut self) -> &mut [RewardCard] {
        &mut self.cards
    }

    pub(super) fn bump_reroll_count(&mut self) {
        self.reroll_count += 1;
    }
}
