//! Locomotion configuration: states, speed bands, dwell ranges.

use std::fmt;

use shoal_core::AgentRng;

use crate::{LocomotionError, LocomotionResult};

// ── Swimming ──────────────────────────────────────────────────────────────────

/// The three locomotion states.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Swimming {
    /// Near-stationary idling, gentle drift.
    Hover,
    /// Normal cruising.  The initial state for every fish.
    Swim,
    /// A brief high-speed burst.  Always followed by `Swim`, never chained.
    Dart,
}

impl fmt::Display for Swimming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Swimming::Hover => "hover",
            Swimming::Swim => "swim",
            Swimming::Dart => "dart",
        };
        f.write_str(name)
    }
}

// ── SpeedRange ────────────────────────────────────────────────────────────────

/// A `[min, max]` speed band, units per second.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw a speed uniformly within the band.
    #[inline]
    pub fn sample(&self, rng: &mut AgentRng) -> f32 {
        rng.gen_range(self.min..=self.max)
    }

    fn validate(&self, state: Swimming) -> LocomotionResult<()> {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min < 0.0 {
            return Err(LocomotionError::Config(format!(
                "{state}: speeds must be finite and non-negative"
            )));
        }
        if self.min > self.max {
            return Err(LocomotionError::Config(format!(
                "{state}: min_speed {} > max_speed {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

// ── DurationRange ─────────────────────────────────────────────────────────────

/// A `[min, max]` dwell-duration sampling range in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DurationRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Draw a dwell duration uniformly within the range (inclusive).
    #[inline]
    pub fn sample(&self, rng: &mut AgentRng) -> u64 {
        rng.gen_range(self.min_ms..=self.max_ms)
    }

    fn validate(&self, state: Swimming) -> LocomotionResult<()> {
        if self.min_ms > self.max_ms {
            return Err(LocomotionError::Config(format!(
                "{state}: min_duration {}ms > max_duration {}ms",
                self.min_ms, self.max_ms
            )));
        }
        Ok(())
    }
}

// ── StateParams ───────────────────────────────────────────────────────────────

/// Per-state tuning: how fast and for how long.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateParams {
    pub speed: SpeedRange,
    pub dwell: DurationRange,
}

// ── LocomotionConfig ──────────────────────────────────────────────────────────

/// Full state-machine configuration for one fish.
///
/// Validated once at machine construction; every speed band must be ordered
/// and at least one transition weight must be positive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocomotionConfig {
    pub hover: StateParams,
    pub swim: StateParams,
    pub dart: StateParams,

    /// Relative transition weights out of a non-dart state.  Need not sum
    /// to 1; sampling is proportional.
    pub prob_swim: f32,
    pub prob_hover: f32,
    pub prob_dart: f32,

    /// A freshly chosen dart shrinks its sampled dwell by this factor —
    /// darts are short bursts.
    pub dart_dwell_factor: f32,

    /// Length of the eased speed interpolation across a state change.
    pub acceleration_ms: u64,

    /// Heading cone half-angle: the velocity's angle from horizontal is
    /// clamped to this every tick.
    pub max_angle_with_horizontal_deg: f32,
}

impl LocomotionConfig {
    /// The params for `state`.
    #[inline]
    pub fn params(&self, state: Swimming) -> &StateParams {
        match state {
            Swimming::Hover => &self.hover,
            Swimming::Swim => &self.swim,
            Swimming::Dart => &self.dart,
        }
    }

    pub fn validate(&self) -> LocomotionResult<()> {
        for state in [Swimming::Hover, Swimming::Swim, Swimming::Dart] {
            let p = self.params(state);
            p.speed.validate(state)?;
            p.dwell.validate(state)?;
        }
        let weights = [self.prob_swim, self.prob_hover, self.prob_dart];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(LocomotionError::Config(
                "transition weights must be finite and non-negative".into(),
            ));
        }
        if weights.iter().all(|w| *w == 0.0) {
            return Err(LocomotionError::Config(
                "at least one transition weight must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.dart_dwell_factor) {
            return Err(LocomotionError::Config(format!(
                "dart_dwell_factor {} outside [0, 1]",
                self.dart_dwell_factor
            )));
        }
        if self.acceleration_ms == 0 {
            return Err(LocomotionError::Config(
                "acceleration_ms must be positive".into(),
            ));
        }
        if !(0.0..=90.0).contains(&self.max_angle_with_horizontal_deg) {
            return Err(LocomotionError::Config(format!(
                "max_angle_with_horizontal {}° outside [0, 90]",
                self.max_angle_with_horizontal_deg
            )));
        }
        Ok(())
    }
}

impl Default for LocomotionConfig {
    /// A placid fish that mostly swims or hovers and occasionally darts.
    fn default() -> Self {
        let dwell = DurationRange::new(2_000, 10_000);
        Self {
            hover: StateParams {
                speed: SpeedRange::new(6.0, 15.0),
                dwell,
            },
            swim: StateParams {
                speed: SpeedRange::new(30.0, 60.0),
                dwell,
            },
            dart: StateParams {
                speed: SpeedRange::new(120.0, 240.0),
                dwell,
            },
            prob_swim: 0.45,
            prob_hover: 0.45,
            prob_dart: 0.1,
            dart_dwell_factor: 0.4,
            acceleration_ms: 2_000,
            max_angle_with_horizontal_deg: 10.0,
        }
    }
}
