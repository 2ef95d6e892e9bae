//! Reward catalog
//!
//! Static table of what a card can pay out, plus the seed cards every
//! session starts from. Constructed once and passed by reference.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::CatalogError;
use super::state::{CardType, RewardCard};

/// What a card pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    Coins,
    Gems,
    Tokens,
    XP,
}

/// Icon shown on a card face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardIcon {
    Star,
    Crown,
    Gem,
    Lock,
}

/// Wallet counter a reward is credited to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Coins,
    Gems,
}

impl RewardKind {
    pub fn label(&self) -> &'static str {
        match self {
            RewardKind::Coins => "COINS",
            RewardKind::Gems => "GEMS",
            RewardKind::Tokens => "TOKENS",
            RewardKind::XP => "XP",
        }
    }

    pub fn icon(&self) -> RewardIcon {
        match self {
            RewardKind::Coins | RewardKind::XP => RewardIcon::Star,
            RewardKind::Gems => RewardIcon::Gem,
            RewardKind::Tokens => RewardIcon::Crown,
        }
    }

    /// Only gems have their own counter; everything else pays coins
    pub fn currency(&self) -> Currency {
        match self {
            RewardKind::Gems => Currency::Gems,
            RewardKind::Coins | RewardKind::Tokens | RewardKind::XP => Currency::Coins,
        }
    }
}

/// A (kind, amount) payout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardOffer {
    pub kind: RewardKind,
    pub amount: u32,
}

impl RewardOffer {
    pub const fn new(kind: RewardKind, amount: u32) -> Self {
        Self { kind, amount }
    }
}

const STANDARD_POOL: [RewardOffer; 4] = [
    RewardOffer::new(RewardKind::Coins, 100),
    RewardOffer::new(RewardKind::Gems, 50),
    RewardOffer::new(RewardKind::Tokens, 25),
    RewardOffer::new(RewardKind::XP, 200),
];

const STANDARD_SEED: [(u32, CardType, RewardOffer); 4] = [
    (1, CardType::Free, RewardOffer::new(RewardKind::Coins, 100)),
    (2, CardType::Free, RewardOffer::new(RewardKind::Gems, 150)),
    (3, CardType::Free, RewardOffer::new(RewardKind::Gems, 75)),
    (4, CardType::Locked, RewardOffer::new(RewardKind::Gems, 75)),
];

/// Reroll pool and seed cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardCatalog {
    offers: Vec<RewardOffer>,
    seed: Vec<RewardCard>,
}

impl RewardCatalog {
    /// Build a catalog, rejecting seed data that would break board invariants
    pub fn new(offers: Vec<RewardOffer>, cards: Vec<RewardCard>) -> Result<Self, CatalogError> {
        if offers.is_empty() {
            return Err(CatalogError::EmptyPool);
        }
        if cards.is_empty() {
            return Err(CatalogError::EmptyBoard);
        }
        if let Some(offer) = offers.iter().find(|o| o.amount == 0) {
            return Err(CatalogError::ZeroOfferAmount { kind: offer.kind });
        }

        let mut days = BTreeSet::new();
        for card in &cards {
            if card.day == 0 {
                return Err(CatalogError::ZeroDay);
            }
            if card.reward_amount == 0 {
                return Err(CatalogError::ZeroCardAmount { day: card.day });
            }
            if !days.insert(card.day) {
                return Err(CatalogError::DuplicateDay { day: card.day });
            }
        }

        let mut seed: Vec<RewardCard> = cards
            .into_iter()
            .map(|card| RewardCard {
                claimed: false,
                ..card
            })
            .collect();
        seed.sort_by_key(|c| c.day);

        Ok(Self { offers, seed })
    }

    /// The built-in daily rewards table
    pub fn standard() -> Self {
        let seed = STANDARD_SEED
            .iter()
            .map(|&(day, card_type, offer)| RewardCard::new(day, card_type, offer))
            .collect();
        Self {
            offers: STANDARD_POOL.to_vec(),
            seed,
        }
    }

    /// Sampling pool for rerolls
    pub fn possible_rewards(&self) -> &[RewardOffer] {
        &self.offers
    }

    /// Fresh copy of the seed cards (day ascending, all unclaimed)
    pub fn initial_cards(&self) -> Vec<RewardCard> {
        self.seed.clone()
    }
}

impl Default for RewardCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
