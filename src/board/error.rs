//! Board and catalog errors.
//!
//! Board errors are expected outcomes of user actions: the action is a no-op
//! and the reason goes back to the caller. Catalog errors are seed-data bugs
//! caught at construction time.

use super::catalog::RewardKind;

// ============================================================================
// Board Action Errors
// ============================================================================

/// Why a reroll or claim did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// All rerolls for the session are used.
    #[error("No rerolls left ({max} of {max} used)")]
    RerollExhausted { max: u32 },

    /// Locked cards can never be claimed.
    #[error("Day {day} is locked")]
    ClaimOnLockedCard { day: u32 },

    /// The card's reward was already collected.
    #[error("Day {day} already claimed")]
    ClaimAlreadyClaimed { day: u32 },

    /// No card for that day on this board.
    #[error("No card for day {day}")]
    ClaimUnknownDay { day: u32 },
}

impl BoardError {
    /// Stable identifier for UI feedback
    pub fn code(&self) -> &'static str {
        use BoardError::*;
        match self {
            RerollExhausted { .. } => "BOARD_REROLL_EXHAUSTED",
            ClaimOnLockedCard { .. } => "BOARD_CLAIM_LOCKED",
            ClaimAlreadyClaimed { .. } => "BOARD_CLAIM_ALREADY_CLAIMED",
            ClaimUnknownDay { .. } => "BOARD_CLAIM_UNKNOWN_DAY",
        }
    }
}

// ============================================================================
// Catalog Construction Errors
// ============================================================================

/// Seed data that would violate board invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Reward pool is empty")]
    EmptyPool,

    #[error("Catalog has no cards")]
    EmptyBoard,

    /// Days are 1-based.
    #[error("Card day must be positive")]
    ZeroDay,

    #[error("Duplicate card for day {day}")]
    DuplicateDay { day: u32 },

    #[error("Card for day {day} has a zero reward amount")]
    ZeroCardAmount { day: u32 },

    #[error("Pool offer of {kind:?} has a zero amount")]
    ZeroOfferAmount { kind: RewardKind },
}
