//! Fluent construction of a [`Tank`].

use shoal_agent::{BoundaryPolicy, FishConfig, FishProfile, TankBounds};
use shoal_core::SimRng;

use crate::{SimError, SimResult, Tank};

/// How the builder decides what each spawned fish looks like.
enum Stock {
    /// Every fish gets a clone of the same config.
    Uniform(FishConfig),
    /// Each fish is sampled from a profile's parameter spans.
    Sampled(FishProfile),
}

/// Builder for a [`Tank`] and its initial population.
///
/// ```
/// use shoal_agent::TankBounds;
/// use shoal_sim::TankBuilder;
///
/// let tank = TankBuilder::new(TankBounds::new(800.0, 600.0), 42)
///     .count(12)
///     .build()
///     .unwrap();
/// assert_eq!(tank.len(), 12);
/// ```
pub struct TankBuilder {
    bounds: TankBounds,
    policy: BoundaryPolicy,
    dt_secs: f32,
    seed: u64,
    stock: Stock,
    count: usize,
}

impl TankBuilder {
    pub fn new(bounds: TankBounds, seed: u64) -> Self {
        Self {
            bounds,
            policy: BoundaryPolicy::default(),
            dt_secs: 1.0 / 60.0,
            seed,
            stock: Stock::Sampled(FishProfile::default()),
            count: 0,
        }
    }

    pub fn policy(mut self, policy: BoundaryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Physics timestep per tick.  Must be positive and finite.
    pub fn timestep_secs(mut self, dt_secs: f32) -> Self {
        self.dt_secs = dt_secs;
        self
    }

    /// Give every spawned fish the same configuration.
    pub fn config(mut self, config: FishConfig) -> Self {
        self.stock = Stock::Uniform(config);
        self
    }

    /// Sample each spawned fish's configuration from `profile`.
    pub fn profile(mut self, profile: FishProfile) -> Self {
        self.stock = Stock::Sampled(profile);
        self
    }

    /// Number of fish to spawn at build time.  More can be added later
    /// with [`Tank::spawn`].
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn build(self) -> SimResult<Tank> {
        if !(self.dt_secs.is_finite() && self.dt_secs > 0.0) {
            return Err(SimError::Config(format!(
                "timestep must be positive and finite, got {}",
                self.dt_secs
            )));
        }

        let mut tank = Tank::new(self.bounds, self.policy, self.dt_secs, self.seed);
        // Profile sampling draws from a stream separate from the per-fish
        // RNGs so population size does not perturb individual behavior.
        let mut profile_rng = SimRng::new(self.seed).child(u64::MAX);

        for _ in 0..self.count {
            let config = match &self.stock {
                Stock::Uniform(config) => config.clone(),
                Stock::Sampled(profile) => profile.sample(&mut profile_rng)?,
            };
            tank.spawn(config)?;
        }
        Ok(tank)
    }
}
