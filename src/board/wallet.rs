//! Currency wallet
//!
//! Coin and gem totals. Crediting is the only mutation; there is no debit.

use serde::{Deserialize, Serialize};

use super::catalog::{Currency, RewardKind, RewardOffer};

/// Payout produced by a successful claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub day: u32,
    pub kind: RewardKind,
    pub amount: u32,
}

impl Credit {
    pub fn offer(&self) -> RewardOffer {
        RewardOffer::new(self.kind, self.amount)
    }
}

/// Coin/gem balance for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrencyWallet {
    coins: u64,
    gems: u64,
}

impl CurrencyWallet {
    pub fn new(coins: u64, gems: u64) -> Self {
        Self { coins, gems }
    }

    pub fn coins(&self) -> u64 {
        self.coins
    }

    pub fn gems(&self) -> u64 {
        self.gems
    }

    pub fn balance(&self, currency: Currency) -> u64 {
        match currency {
            Currency::Coins => self.coins,
            Currency::Gems => self.gems,
        }
    }

    /// Add `amount` to the counter `kind` routes to; returns that counter's new total
    ///
    /// `amount` must be positive. Catalog validation guarantees this for claims.
    pub fn credit(&mut self, kind: RewardKind, amount: u32) -> u64 {
        debug_assert!(amount > 0, "credit of zero {}", kind.label());
        let counter = match kind.currency() {
            Currency::Coins => &mut self.coins,
            Currency::Gems => &mut self.gems,
        };
        *counter += u64::from(amount);
        *counter
    }

    /// Apply a claim payout
    pub fn apply(&mut self, credit: &Credit) -> u64 {
        self.credit(credit.kind, credit.amount)
    }
}
