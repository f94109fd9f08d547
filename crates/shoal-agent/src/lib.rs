//! `shoal-agent` — the fish itself: configuration, targets, boundaries, and
//! the per-tick update that composes steering and locomotion.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`config`]   | `FishConfig` + behavior parameter blocks, validated         |
//! | [`profile`]  | `FishProfile` — per-species ranges sampled into configs     |
//! | [`targets`]  | `TargetRegistry`, `TargetInfo`                              |
//! | [`boundary`] | `TankBounds`, `BoundaryPolicy` (wrap / turn)                |
//! | [`fish`]     | `Fish` — physical state and the tick update                 |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                              |
//!
//! # The tick, in order
//!
//! 1. The locomotion machine may begin a state transition (dwell expired).
//! 2. Steering requests are built from the live target registry in the
//!    configured priority order and combined into one bounded force.
//! 3. Friction opposes velocity; acceleration = net force / mass.
//! 4. Velocity integrates, is capped globally, then shaped by the machine
//!    (eased transition speed or state band, plus the heading cone).
//! 5. Position integrates; the boundary policy resolves wall contact.

pub mod boundary;
pub mod config;
pub mod error;
pub mod fish;
pub mod profile;
pub mod targets;


pub use boundary::{BoundaryPolicy, TankBounds};
pub use config::{EvadeParams, FishConfig, SeekParams, WanderParams};
pub use error::{AgentError, AgentResult};
pub use fish::Fish;
pub use profile::{FishProfile, Span};
pub use targets::{TargetInfo, TargetRegistry};
