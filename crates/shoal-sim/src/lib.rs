//! `shoal-sim` — drives a population of fish through simulated time.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`tank`]     | `Tank` — clock + fish + per-tick update loop        |
//! | [`builder`]  | `TankBuilder` — fluent construction                 |
//! | [`observer`] | `TankObserver` trait, `NoopObserver`                |
//! | [`error`]    | `SimError`, `SimResult<T>`                          |
//!
//! # Concurrency model
//!
//! Strictly single-threaded: each tick updates every fish sequentially
//! against a read-only clock and bounds, and target-registry mutations
//! happen between ticks through [`Tank::add_target`] /
//! [`Tank::remove_target`].  A parallel host must give each fish to exactly
//! one worker and defer registry mutations to a frame boundary; nothing in
//! here suspends or blocks mid-update.

pub mod builder;
pub mod error;
pub mod observer;
pub mod tank;

#[cfg(test)]
mod tests;

pub use builder::TankBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TankObserver};
pub use tank::Tank;
