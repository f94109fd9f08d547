//! Species profiles: per-type `(min, max)` ranges sampled into concrete
//! fish configurations.
//!
//! Fish of the same species share a profile but each individual draws its
//! own numbers from the ranges, so no two fish move identically.  Sampling
//! happens at spawn time with the simulation-level RNG.

use shoal_core::SimRng;
use shoal_locomotion::{DurationRange, SpeedRange};

use crate::{AgentResult, FishConfig};

/// An inclusive `[min, max]` range a profile draws from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A fixed value, expressed as a zero-width span.
    pub fn fixed(v: f32) -> Self {
        Self { min: v, max: v }
    }

    fn sample(&self, rng: &mut SimRng) -> f32 {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

/// Ranged parameters for one species of fish.
///
/// The non-ranged parts (behavior weights, priority order, footprint) come
/// from `base`, typically `FishConfig::default()` with tweaks.
#[derive(Clone, Debug)]
pub struct FishProfile {
    /// Human-readable species description ("large, happy, gormless").
    pub description: String,

    pub base: FishConfig,

    // physics
    pub max_force: Span,
    pub min_speed_hover: Span,
    pub max_speed_hover: Span,
    pub min_speed_swim: Span,
    pub max_speed_swim: Span,
    pub min_speed_dart: Span,
    pub max_speed_dart: Span,
    pub max_angle_with_horizontal: Span,

    // state changes
    pub min_state_duration_ms: Span,
    pub max_state_duration_ms: Span,
    pub acceleration_ms: Span,
    pub prob_swim: Span,
    pub prob_hover: Span,
    pub prob_dart: Span,

    // wander steering
    pub retarget_ms: Span,
    pub wander_ring_distance: Span,
    pub wander_ring_radius: Span,
}

impl FishProfile {
    /// Draw one concrete, validated configuration for an individual fish.
    pub fn sample(&self, rng: &mut SimRng) -> AgentResult<FishConfig> {
        let mut config = self.base.clone();

        config.max_force = self.max_force.sample(rng);

        let loco = &mut config.locomotion;
        loco.hover.speed = SpeedRange::new(
            self.min_speed_hover.sample(rng),
            self.max_speed_hover.sample(rng),
        );
        loco.swim.speed = SpeedRange::new(
            self.min_speed_swim.sample(rng),
            self.max_speed_swim.sample(rng),
        );
        loco.dart.speed = SpeedRange::new(
            self.min_speed_dart.sample(rng),
            self.max_speed_dart.sample(rng),
        );
        // the global cap tracks the fastest thing this fish can do
        config.max_speed = loco.dart.speed.max;

        let dwell = DurationRange::new(
            self.min_state_duration_ms.sample(rng) as u64,
            self.max_state_duration_ms.sample(rng) as u64,
        );
        loco.hover.dwell = dwell;
        loco.swim.dwell = dwell;
        loco.dart.dwell = dwell;

        loco.acceleration_ms = self.acceleration_ms.sample(rng) as u64;
        loco.prob_swim = self.prob_swim.sample(rng);
        loco.prob_hover = self.prob_hover.sample(rng);
        loco.prob_dart = self.prob_dart.sample(rng);
        loco.max_angle_with_horizontal_deg = self.max_angle_with_horizontal.sample(rng);

        config.wander.retarget_ms = self.retarget_ms.sample(rng) as u64;
        config.wander.ring_distance = self.wander_ring_distance.sample(rng);
        config.wander.ring_radius = self.wander_ring_radius.sample(rng);

        config.validate()?;
        Ok(config)
    }
}

impl Default for FishProfile {
    /// A good-natured default species.
    fn default() -> Self {
        Self {
            description: "large, happy, gormless".into(),
            base: FishConfig::default(),
            max_force: Span::new(0.3, 0.5),
            min_speed_hover: Span::new(4.0, 8.0),
            max_speed_hover: Span::new(10.0, 20.0),
            min_speed_swim: Span::new(20.0, 40.0),
            max_speed_swim: Span::new(40.0, 80.0),
            min_speed_dart: Span::new(100.0, 140.0),
            max_speed_dart: Span::new(200.0, 280.0),
            max_angle_with_horizontal: Span::new(5.0, 15.0),
            min_state_duration_ms: Span::new(1_500.0, 2_500.0),
            max_state_duration_ms: Span::new(8_000.0, 12_000.0),
            acceleration_ms: Span::new(1_500.0, 2_500.0),
            prob_swim: Span::new(0.4, 0.5),
            prob_hover: Span::new(0.4, 0.5),
            prob_dart: Span::new(0.05, 0.15),
            retarget_ms: Span::new(150.0, 250.0),
            wander_ring_distance: Span::new(300.0, 500.0),
            wander_ring_radius: Span::new(30.0, 70.0),
        }
    }
}
