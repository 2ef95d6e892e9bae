//! Card animation module
//!
//! Presentation-only state: nothing here feeds back into the board. All
//! motion advances in fixed steps from [`BoardAnimator::frame`].

pub mod board;
pub mod card;
pub mod counter;
pub mod motion;

pub use board::{BoardAnimator, FrameClock};
pub use card::{
    CardAnimationController, CardPose, ClaimState, EntranceState, RerollState, StampPose,
};
pub use counter::{CounterTween, WalletDisplay};
pub use motion::{Channel, Motion, SpringConfig};
