//! Per-fish configuration, validated at construction.
//!
//! Everything a fish needs is an explicit struct rather than a loose
//! parameter table, so a bad value fails loudly at spawn time instead of
//! misbehaving mid-simulation.

use shoal_core::Vec2;
use shoal_locomotion::LocomotionConfig;
use shoal_steering::BehaviorKind;

use crate::{AgentError, AgentResult};

// ── Behavior parameter blocks ─────────────────────────────────────────────────

/// Wander tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WanderParams {
    pub ring_radius: f32,
    pub ring_distance: f32,
    /// How often the wander target may re-roll.
    pub retarget_ms: u64,
    /// Per-behavior-class weight.
    pub weight: f32,
}

/// Seek tuning, shared by every seek target.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeekParams {
    pub detect_radius: f32,
    pub approach_radius: f32,
    pub weight: f32,
    pub ahead_only: bool,
}

/// Evade tuning, shared by every evade target.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvadeParams {
    pub detect_radius: f32,
    pub weight: f32,
    pub ahead_only: bool,
}

// ── FishConfig ────────────────────────────────────────────────────────────────

/// Everything that makes one fish behave the way it does.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FishConfig {
    /// Mass divides the net force into acceleration.
    pub mass: f32,
    /// Quadratic drag coefficient; friction force is `−c · |v|² · v̂`.
    pub friction_coeff: f32,
    /// Per-tick steering force budget.
    pub max_force: f32,
    /// Global speed ceiling, independent of the per-state bands.
    pub max_speed: f32,
    /// Half the fish's visual footprint; used by the wrap boundary so a
    /// fish fully exits one side before entering the other.
    pub half_extent: Vec2,

    pub locomotion: LocomotionConfig,

    pub wander: WanderParams,
    pub seek: SeekParams,
    pub evade: EvadeParams,

    /// Behavior classes in descending priority; the combiner starves
    /// later entries once the force budget is spent.
    pub priority: Vec<BehaviorKind>,
}

impl FishConfig {
    pub fn validate(&self) -> AgentResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(AgentError::Config(format!("mass {} must be > 0", self.mass)));
        }
        if !(self.friction_coeff.is_finite() && self.friction_coeff >= 0.0) {
            return Err(AgentError::Config(format!(
                "friction_coeff {} must be >= 0",
                self.friction_coeff
            )));
        }
        if !(self.max_force.is_finite() && self.max_force > 0.0) {
            return Err(AgentError::Config(format!(
                "max_force {} must be > 0",
                self.max_force
            )));
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return Err(AgentError::Config(format!(
                "max_speed {} must be > 0",
                self.max_speed
            )));
        }
        if self.half_extent.x < 0.0 || self.half_extent.y < 0.0 {
            return Err(AgentError::Config("half_extent must be non-negative".into()));
        }
        if self.wander.ring_distance <= 0.0 || self.wander.ring_radius < 0.0 {
            return Err(AgentError::Config(
                "wander ring_distance must be > 0 and ring_radius >= 0".into(),
            ));
        }
        if self.seek.approach_radius <= 0.0 {
            return Err(AgentError::Config(
                "seek approach_radius must be > 0".into(),
            ));
        }
        if self.seek.detect_radius < 0.0 || self.evade.detect_radius < 0.0 {
            return Err(AgentError::Config("detect radii must be >= 0".into()));
        }
        for (name, w) in [
            ("wander", self.wander.weight),
            ("seek", self.seek.weight),
            ("evade", self.evade.weight),
        ] {
            if !(w.is_finite() && w >= 0.0) {
                return Err(AgentError::Config(format!("{name} weight {w} must be >= 0")));
            }
        }
        if self.priority.is_empty() {
            return Err(AgentError::Config("priority order must not be empty".into()));
        }
        for (i, kind) in self.priority.iter().enumerate() {
            if self.priority[..i].contains(kind) {
                return Err(AgentError::Config(format!(
                    "behavior kind {kind} appears twice in priority order"
                )));
            }
        }
        self.locomotion.validate().map_err(AgentError::from)
    }
}

impl Default for FishConfig {
    /// A sensible tank fish: threats first, then the wander baseline,
    /// then food.
    fn default() -> Self {
        Self {
            mass: 1.0,
            friction_coeff: 0.0,
            max_force: 0.4,
            max_speed: 240.0,
            half_extent: Vec2::new(25.0, 15.0),
            locomotion: LocomotionConfig::default(),
            wander: WanderParams {
                ring_radius: 50.0,
                ring_distance: 400.0,
                retarget_ms: 200,
                weight: 1.0,
            },
            seek: SeekParams {
                detect_radius: 100.0,
                approach_radius: 20.0,
                weight: 2.0,
                ahead_only: false,
            },
            evade: EvadeParams {
                detect_radius: 55.0,
                weight: 4.0,
                ahead_only: false,
            },
            priority: vec![BehaviorKind::Evade, BehaviorKind::Wander, BehaviorKind::Seek],
        }
    }
}
