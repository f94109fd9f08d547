//! `shoal-core` — foundational types for the `rust_shoal` fish-motion engine.
//!
//! This crate is a dependency of every other `shoal-*` crate.  It
//! intentionally has no `shoal-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`vec2`]   | `Vec2`, `lerp`, `smoothstep`, `EPSILON`               |
//! | [`ids`]    | `FishId`, `TargetId`                                  |
//! | [`time`]   | `Millis`, `SimClock`                                  |
//! | [`rng`]    | `AgentRng` (per-agent), `SimRng`, `WeightedSampler`   |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{FishId, TargetId};
pub use rng::{AgentRng, SimRng, WeightedSampler};
pub use time::{Millis, SimClock};
pub use vec2::{EPSILON, Vec2, lerp, smoothstep};
