//! Rolling currency readout
//!
//! After a claim the wallet total jumps; the displayed number rolls from the
//! old total to the new one instead.

use super::motion::{Channel, Motion, SpringConfig};
use crate::board::CurrencyWallet;

/// One rolling number
#[derive(Debug, Clone)]
pub struct CounterTween {
    from: u64,
    to: u64,
    /// 0 = showing `from`, 1 = showing `to`
    progress: Channel,
}

impl CounterTween {
    pub fn new(value: u64) -> Self {
        Self {
            from: value,
            to: value,
            progress: Channel::at_rest(1.0),
        }
    }

    /// Roll toward a new total, starting from whatever is on screen now
    pub fn retarget(&mut self, total: u64) {
        if total == self.to {
            return;
        }
        self.from = self.displayed();
        self.to = total;
        self.progress.snap(0.0);
        self.progress
            .animate_to(1.0, Motion::Spring(SpringConfig::DEFAULT));
    }

    /// Jump straight to `total`
    pub fn snap(&mut self, total: u64) {
        self.from = total;
        self.to = total;
        self.progress.snap(1.0);
    }

    pub fn tick(&mut self, dt: f32) {
        self.progress.step(dt);
    }

    pub fn target(&self) -> u64 {
        self.to
    }

    pub fn is_animating(&self) -> bool {
        !self.progress.is_settled()
    }

    /// Whole number currently on screen
    pub fn displayed(&self) -> u64 {
        let t = f64::from(self.progress.value());
        let from = self.from as f64;
        let value = from + (self.to as f64 - from) * t;
        value.floor().max(0.0) as u64
    }
}

/// Coin and gem readouts
#[derive(Debug, Clone)]
pub struct WalletDisplay {
    pub coins: CounterTween,
    pub gems: CounterTween,
    reduced_motion: bool,
}

impl WalletDisplay {
    pub fn new(wallet: &CurrencyWallet, reduced_motion: bool) -> Self {
        Self {
            coins: CounterTween::new(wallet.coins()),
            gems: CounterTween::new(wallet.gems()),
            reduced_motion,
        }
    }

    pub fn observe(&mut self, wallet: &CurrencyWallet) {
        if self.reduced_motion {
            self.coins.snap(wallet.coins());
            self.gems.snap(wallet.gems());
        } else {
            self.coins.retarget(wallet.coins());
            self.gems.retarget(wallet.gems());
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.coins.tick(dt);
        self.gems.tick(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.coins.is_animating() || self.gems.is_animating()
    }
}
