//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Session seeding
//! - Logger setup
//! - The JavaScript bridge (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Fresh seed for a session that did not configure one
#[cfg(target_arch = "wasm32")]
pub fn random_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Fresh seed for a session that did not configure one
#[cfg(not(target_arch = "wasm32"))]
pub fn random_seed() -> u64 {
    rand::random()
}

/// Install the logger (safe to call more than once)
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Install the logger (safe to call more than once)
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();
}
