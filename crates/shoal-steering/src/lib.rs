//! `shoal-steering` — steering-behavior generators and their combiner.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`truncate`] | `truncate_addend` — quadratic-root force-budget truncation    |
//! | [`request`]  | `BehaviorKind`, `BehaviorOptions`, `SteeringRequest`, `AgentPhysics` |
//! | [`behavior`] | `SteeringBehavior` trait + `Wander`, `Seek`, `Evade`          |
//! | [`combiner`] | `SteeringCombiner` — weighted prioritised truncated sum       |
//! | [`error`]    | `SteeringError`, `SteeringResult<T>`                          |
//!
//! # The combining policy
//!
//! Behaviors are considered in the caller's priority order.  Each raw force
//! is multiplied by its weight and added to a running total; the first
//! contribution that would push the total to or past `max_force` is instead
//! truncated (via [`truncate_addend`]) to exactly exhaust the remaining
//! budget, and lower-priority behaviors get nothing.  A total that never
//! reaches the budget is rescaled up to exactly `max_force` — every tick
//! steers at full strength, which keeps the fish visibly alive.  The single
//! exception is a degenerate (all-zero) total, which stays zero since it has
//! no direction to scale along.

pub mod behavior;
pub mod combiner;
pub mod error;
pub mod request;
pub mod truncate;

#[cfg(test)]
mod tests;

pub use behavior::{Evade, Seek, SteeringBehavior, Wander};
pub use combiner::{Contribution, SteeringCombiner};
pub use error::{SteeringError, SteeringResult};
pub use request::{AgentPhysics, BehaviorKind, BehaviorOptions, SteeringRequest};
pub use truncate::truncate_addend;
