//! `shoal-locomotion` — the discrete locomotion layer of the fish motion
//! engine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`config`]     | `Swimming`, `SpeedRange`, `DurationRange`, `StateParams`, `LocomotionConfig` |
//! | [`transition`] | `Transition` — one eased speed interpolation              |
//! | [`machine`]    | `LocomotionStateMachine`, `clamp_angle_to_horizontal`     |
//! | [`error`]      | `LocomotionError`, `LocomotionResult<T>`                  |
//!
//! # The state model
//!
//! A fish is always in one of three states — `Hover`, `Swim`, `Dart` — each
//! with its own speed band and randomized dwell duration.  When the dwell
//! expires the machine picks the next state by weighted draw (darts always
//! fall back to `Swim`, never chain) and begins a smoothstep-eased speed
//! interpolation from the current speed to a speed sampled inside the new
//! state's band.  While the interpolation runs, the per-state speed clamps
//! are suspended; the interpolated speed may legitimately pass outside the
//! destination band for a moment.

pub mod config;
pub mod error;
pub mod machine;
pub mod transition;


pub use config::{DurationRange, LocomotionConfig, SpeedRange, StateParams, Swimming};
pub use error::{LocomotionError, LocomotionResult};
pub use machine::{LocomotionStateMachine, clamp_angle_to_horizontal};
pub use transition::Transition;
