//! The `Tank` — a population of fish advanced in lockstep.

use shoal_agent::{BoundaryPolicy, Fish, FishConfig, TankBounds, TargetInfo};
use shoal_core::{AgentRng, FishId, SimClock, TargetId};
use shoal_steering::BehaviorKind;

use crate::{SimError, SimResult, TankObserver};

/// All simulation state: the clock, the bounds, and every fish with its
/// private RNG.
///
/// Create via [`TankBuilder`][crate::TankBuilder].  Updates are strictly
/// sequential; a tick either fully completes or the first failing fish's
/// error aborts it and the caller decides what to do with the frame.
pub struct Tank {
    bounds: TankBounds,
    policy: BoundaryPolicy,
    clock: SimClock,
    /// Physics timestep per tick, seconds.
    dt_secs: f32,
    /// Global seed; each fish's RNG derives from it and the fish's ID.
    seed: u64,
    next_id: u32,

    fish: Vec<Fish>,
    /// Parallel to `fish`: each fish's private RNG, kept outside `Fish` so
    /// updates borrow fish state and randomness independently.
    rngs: Vec<AgentRng>,
}

impl Tank {
    pub(crate) fn new(
        bounds: TankBounds,
        policy: BoundaryPolicy,
        dt_secs: f32,
        seed: u64,
    ) -> Self {
        Self {
            bounds,
            policy,
            clock: SimClock::new(),
            dt_secs,
            seed,
            next_id: 0,
            fish: Vec::new(),
            rngs: Vec::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn bounds(&self) -> &TankBounds {
        &self.bounds
    }

    pub fn fish(&self) -> &[Fish] {
        &self.fish
    }

    pub fn fish_by_id(&self, id: FishId) -> Option<&Fish> {
        self.fish.iter().find(|f| f.id() == id)
    }

    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    // ── Population management (between ticks) ─────────────────────────────

    /// Spawn one fish with `config` at a random position.  Returns its ID.
    pub fn spawn(&mut self, config: FishConfig) -> SimResult<FishId> {
        let id = FishId(self.next_id);
        self.next_id += 1;
        let mut rng = AgentRng::new(self.seed, id);
        let fish = Fish::spawn(id, config, &self.bounds, self.clock.now(), &mut rng)?;
        self.fish.push(fish);
        self.rngs.push(rng);
        Ok(id)
    }

    /// Remove a fish (eaten, despawned).  `false` if the ID was not present.
    pub fn remove(&mut self, id: FishId) -> bool {
        match self.fish.iter().position(|f| f.id() == id) {
            Some(i) => {
                self.fish.remove(i);
                self.rngs.remove(i);
                true
            }
            None => false,
        }
    }

    // ── Target plumbing (between ticks) ───────────────────────────────────

    /// Place or move a target on one fish's registry.
    pub fn add_target(
        &mut self,
        fish: FishId,
        kind: BehaviorKind,
        target: TargetId,
        info: TargetInfo,
    ) -> SimResult<()> {
        let f = self.fish_mut(fish)?;
        f.add_target(kind, target, info);
        Ok(())
    }

    /// Remove a target from one fish's registry; unknown target IDs no-op.
    pub fn remove_target(
        &mut self,
        fish: FishId,
        kind: BehaviorKind,
        target: TargetId,
    ) -> SimResult<()> {
        let f = self.fish_mut(fish)?;
        f.remove_target(kind, target);
        Ok(())
    }

    /// Place the same target on every fish — food dropped into the tank,
    /// a predator everyone should notice.
    pub fn broadcast_target(&mut self, kind: BehaviorKind, target: TargetId, info: TargetInfo) {
        for f in &mut self.fish {
            f.add_target(kind, target, info);
        }
    }

    /// Remove a broadcast target from every fish.
    pub fn retract_target(&mut self, kind: BehaviorKind, target: TargetId) {
        for f in &mut self.fish {
            f.remove_target(kind, target);
        }
    }

    fn fish_mut(&mut self, id: FishId) -> SimResult<&mut Fish> {
        self.fish
            .iter_mut()
            .find(|f| f.id() == id)
            .ok_or(SimError::UnknownFish(id))
    }

    // ── The loop ──────────────────────────────────────────────────────────

    /// Advance the whole tank by one tick.
    pub fn step(&mut self) -> SimResult<()> {
        let now = self.clock.now();
        for (fish, rng) in self.fish.iter_mut().zip(self.rngs.iter_mut()) {
            fish.update(self.dt_secs, now, &self.bounds, self.policy, rng)?;
        }
        self.clock.advance_secs(self.dt_secs);
        Ok(())
    }

    /// Run `n` ticks, calling observer hooks at each boundary.
    pub fn run_ticks<O: TankObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            observer.on_tick_start(self.clock.now());
            self.step()?;
            observer.on_tick_end(self.clock.now(), &self.fish);
        }
        observer.on_run_end(self.clock.now());
        Ok(())
    }
}
