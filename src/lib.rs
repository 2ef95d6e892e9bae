//! Daily Rewards - reward board engine
//!
//! Core modules:
//! - `board`: Reward catalog, board state, pure transitions, currency wallet
//! - `anim`: Per-card animation state machines and the frame clock
//! - `view_model`: Actions + derived values + render snapshots
//! - `platform`: Seeding, logging setup and the browser bridge
//! - `settings`: Session configuration

pub mod anim;
pub mod board;
pub mod platform;
pub mod settings;
pub mod view_model;

pub use board::{
    BoardError, CardType, CatalogError, Credit, CurrencyWallet, RewardBoard, RewardCard,
    RewardCatalog, RewardKind, RewardOffer,
};
pub use settings::{Settings, SettingsError};
pub use view_model::{BoardFrame, RewardBoardViewModel};

/// Engine configuration constants
pub mod consts {
    /// Fixed animation timestep (120 Hz)
    pub const ANIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta accepted (tab switches, debugger pauses)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Rerolls allowed per session
    pub const DEFAULT_MAX_REROLLS: u32 = 3;
    /// Highlighted day until a real date rule exists
    pub const DEFAULT_CURRENT_DAY: u32 = 3;
    /// Wallet totals at session start
    pub const DEFAULT_STARTING_COINS: u64 = 500;
    pub const DEFAULT_STARTING_GEMS: u64 = 50;

    /// Entrance stagger per day (seconds)
    pub const ENTRANCE_STAGGER: f32 = 0.08;
    /// Entrance slide distance (pixels, downward)
    pub const ENTRANCE_OFFSET: f32 = 60.0;
    /// Claim bounce peak
    pub const CLAIM_PEAK_SCALE: f32 = 1.05;
    pub const CLAIM_PEAK_LIFT: f32 = -7.0;
    /// Claim rise duration (seconds)
    pub const CLAIM_RISE_DURATION: f32 = 0.22;
    /// Stamp overlay starting scale
    pub const STAMP_START_SCALE: f32 = 1.6;
    /// Reroll flip angle at the midpoint (degrees)
    pub const REROLL_FLIP_DEGREES: f32 = 90.0;
}

/// Clamp to the unit interval
#[inline]
pub fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
