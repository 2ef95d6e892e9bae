//! Reward board module
//!
//! All reward logic lives here. This module must stay free of animation,
//! rendering and platform concerns:
//! - Board mutation only through the transition functions in `reduce`
//! - Randomness only through the caller's RNG
//! - Stable card order (by day)

pub mod catalog;
pub mod error;
pub mod reduce;
pub mod state;
pub mod wallet;

pub use catalog::{Currency, RewardCatalog, RewardIcon, RewardKind, RewardOffer};
pub use error::{BoardError, CatalogError};
pub use reduce::{apply_claim, apply_reroll};
pub use state::{CardType, RewardBoard, RewardCard};
pub use wallet::{Credit, CurrencyWallet};
