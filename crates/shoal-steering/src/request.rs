//! Steering request types — what a fish asks its behaviors for each tick.
//!
//! Requests are rebuilt fresh every tick from the fish's live target
//! registry; nothing here is persisted.

use std::fmt;

use shoal_core::Vec2;

// ── BehaviorKind ──────────────────────────────────────────────────────────────

/// The three steering desires a fish can express.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorKind {
    /// Persistent random-walk toward a target on a forward-projected ring.
    Wander,
    /// Pursuit with deceleration inside an approach radius.
    Seek,
    /// Repulsion from a threat inside a detection radius.
    Evade,
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BehaviorKind::Wander => "wander",
            BehaviorKind::Seek => "seek",
            BehaviorKind::Evade => "evade",
        };
        f.write_str(name)
    }
}

// ── AgentPhysics ──────────────────────────────────────────────────────────────

/// The read-only slice of an agent's physical state that behaviors see.
///
/// Cheap to copy; assembled by the fish right before combining.
#[derive(Copy, Clone, Debug)]
pub struct AgentPhysics {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Top speed used to size desired velocities.
    pub max_speed: f32,
    /// The per-tick steering force budget.
    pub max_force: f32,
}

// ── BehaviorOptions ───────────────────────────────────────────────────────────

/// Behavior-specific tuning, one variant per [`BehaviorKind`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorOptions {
    Wander {
        /// Radius of the ring the wander target sits on.
        ring_radius: f32,
        /// How far ahead of the agent the ring's center is projected.
        ring_distance: f32,
    },
    Seek {
        target_pos: Vec2,
        /// Urgency of this particular target; multiplies the steering force.
        target_weight: f32,
        /// The target contributes nothing beyond this distance.
        detect_radius: f32,
        /// Inside this distance, desired speed scales down linearly.
        approach_radius: f32,
        /// Only react when the target is ahead (same horizontal sign as the
        /// current velocity).
        ahead_only: bool,
    },
    Evade {
        target_pos: Vec2,
        target_weight: f32,
        detect_radius: f32,
        ahead_only: bool,
    },
}

impl BehaviorOptions {
    /// The kind this options variant belongs to.
    pub fn kind(&self) -> BehaviorKind {
        match self {
            BehaviorOptions::Wander { .. } => BehaviorKind::Wander,
            BehaviorOptions::Seek { .. } => BehaviorKind::Seek,
            BehaviorOptions::Evade { .. } => BehaviorKind::Evade,
        }
    }
}

// ── SteeringRequest ───────────────────────────────────────────────────────────

/// One entry in the priority-ordered request list handed to the combiner.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringRequest {
    pub kind: BehaviorKind,
    /// Per-behavior-class weight.  Zero-weight requests are skipped entirely.
    pub weight: f32,
    pub opts: BehaviorOptions,
}

impl SteeringRequest {
    pub fn new(weight: f32, opts: BehaviorOptions) -> Self {
        Self {
            kind: opts.kind(),
            weight,
            opts,
        }
    }
}
