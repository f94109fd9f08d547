//! Deterministic per-agent and simulation-level RNG wrappers, plus an
//! explicit weighted discrete sampler.
//!
//! # Determinism strategy
//!
//! Each fish gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (fish_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive fish IDs uniformly across the seed space.
//! This means:
//!
//! - Fish never share RNG state (no contention, no ordering dependency).
//! - Spawning or removing fish at the end of the list does not disturb the
//!   seeds of existing fish — runs are reproducible even as the tank fills.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{CoreError, CoreResult, FishId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-fish deterministic RNG.
///
/// Create one per fish at spawn time and keep it alongside the fish for its
/// whole life.  The type is `!Sync` to prevent accidental sharing across
/// threads — a parallel host must give each worker exclusive access.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and a fish ID.
    pub fn new(global_seed: u64, fish: FishId) -> Self {
        let seed = global_seed ^ (fish.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A uniform angle in `[0°, 360°)` — the ubiquitous heading roll.
    #[inline]
    pub fn angle_deg(&mut self) -> f32 {
        self.0.gen_range(0.0f32..360.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (initial placement, spawn
/// parameters, profile sampling).
///
/// Used only in single-threaded or explicitly synchronised contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// seeding auxiliary generators deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── WeightedSampler ───────────────────────────────────────────────────────────

/// A discrete distribution over a fixed outcome set with relative weights.
///
/// Weights need not sum to 1 — sampling is proportional.  Built once (the
/// alias table construction is not free) and reused for every draw, e.g. the
/// locomotion machine's swim/hover/dart transition distribution.
#[derive(Clone, Debug)]
pub struct WeightedSampler<T: Copy> {
    outcomes: Vec<T>,
    dist: WeightedIndex<f32>,
}

impl<T: Copy> WeightedSampler<T> {
    /// Build a sampler from parallel outcome / weight slices.
    ///
    /// Fails with [`CoreError::BadWeights`] when the slices differ in length,
    /// any weight is negative or non-finite, or all weights are zero.
    pub fn new(outcomes: &[T], weights: &[f32]) -> CoreResult<Self> {
        if outcomes.len() != weights.len() {
            return Err(CoreError::BadWeights(format!(
                "{} outcomes but {} weights",
                outcomes.len(),
                weights.len()
            )));
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(CoreError::BadWeights(
                "weights must be finite and non-negative".into(),
            ));
        }
        let dist = WeightedIndex::new(weights.iter().copied())
            .map_err(|e| CoreError::BadWeights(e.to_string()))?;
        Ok(Self {
            outcomes: outcomes.to_vec(),
            dist,
        })
    }

    /// Draw one outcome proportionally to its weight.
    #[inline]
    pub fn sample(&self, rng: &mut AgentRng) -> T {
        self.outcomes[self.dist.sample(rng.inner())]
    }
}
