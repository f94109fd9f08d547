//! The fish agent: physical state plus the per-tick update.

use shoal_core::{AgentRng, FishId, Millis, TargetId, Vec2};
use shoal_locomotion::{LocomotionStateMachine, Swimming};
use shoal_steering::{
    AgentPhysics, BehaviorKind, BehaviorOptions, Contribution, SteeringCombiner, SteeringRequest,
};

use crate::{AgentResult, BoundaryPolicy, FishConfig, TankBounds, TargetInfo, TargetRegistry};

/// One autonomous fish.
///
/// Owns everything that varies per agent: position, velocity, the locomotion
/// machine, the steering combiner (wander state lives in there), and the
/// target registry.  Mutated only by [`update`][Self::update] and the target
/// API; the renderer reads the accessors.
pub struct Fish {
    id: FishId,
    config: FishConfig,

    pos: Vec2,
    vel: Vec2,
    acc: Vec2,

    machine: LocomotionStateMachine,
    combiner: SteeringCombiner,
    targets: TargetRegistry,

    /// The combiner's applied forces from the last tick, for debug overlays.
    contributions: Vec<Contribution>,
}

impl Fish {
    /// Spawn a fish at a random position with a random swim-speed heading.
    ///
    /// Fails if `config` is invalid.
    pub fn spawn(
        id: FishId,
        config: FishConfig,
        bounds: &TankBounds,
        now: Millis,
        rng: &mut AgentRng,
    ) -> AgentResult<Self> {
        config.validate()?;
        let machine = LocomotionStateMachine::new(config.locomotion.clone(), now, rng)?;

        let pos = Vec2::new(
            rng.gen_range(0.0..=bounds.width),
            rng.gen_range(0.0..=bounds.height),
        );
        let speed = config.locomotion.swim.speed.sample(rng);
        let vel = Vec2::new(speed, 0.0).rotate_deg(rng.angle_deg());

        let combiner = SteeringCombiner::with_standard_behaviors(config.wander.retarget_ms);

        Ok(Self {
            id,
            config,
            pos,
            vel,
            acc: Vec2::ZERO,
            machine,
            combiner,
            targets: TargetRegistry::new(),
            contributions: Vec::new(),
        })
    }

    /// Spawn at an explicit position and velocity (tests, scripted intros).
    pub fn spawn_at(
        id: FishId,
        config: FishConfig,
        pos: Vec2,
        vel: Vec2,
        now: Millis,
        rng: &mut AgentRng,
    ) -> AgentResult<Self> {
        config.validate()?;
        let machine = LocomotionStateMachine::new(config.locomotion.clone(), now, rng)?;
        let combiner = SteeringCombiner::with_standard_behaviors(config.wander.retarget_ms);
        Ok(Self {
            id,
            config,
            pos,
            vel,
            acc: Vec2::ZERO,
            machine,
            combiner,
            targets: TargetRegistry::new(),
            contributions: Vec::new(),
        })
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> FishId {
        self.id
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    #[inline]
    pub fn state(&self) -> Swimming {
        self.machine.state()
    }

    pub fn is_transitioning(&self) -> bool {
        self.machine.is_transitioning()
    }

    pub fn config(&self) -> &FishConfig {
        &self.config
    }

    /// The combiner's applied forces from the most recent tick.
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    pub fn targets(&self) -> &TargetRegistry {
        &self.targets
    }

    // ── Target API ────────────────────────────────────────────────────────

    /// Register (or move) a seek/evade target.  Call between ticks.
    pub fn add_target(&mut self, kind: BehaviorKind, id: TargetId, info: TargetInfo) {
        self.targets.add(kind, id, info);
    }

    /// Drop a target; unknown IDs are a no-op.
    pub fn remove_target(&mut self, kind: BehaviorKind, id: TargetId) {
        self.targets.remove(kind, id);
    }

    // ── The tick ──────────────────────────────────────────────────────────

    /// Advance this fish by `dt_secs` of simulated time at clock time `now`.
    ///
    /// Either fully completes or leaves an error for the caller to decide
    /// whether to skip this fish for the frame; there is no partial state.
    pub fn update(
        &mut self,
        dt_secs: f32,
        now: Millis,
        bounds: &TankBounds,
        policy: BoundaryPolicy,
        rng: &mut AgentRng,
    ) -> AgentResult<()> {
        let _ = self.machine.maybe_transition(now, self.vel.length(), rng);

        let physics = AgentPhysics {
            pos: self.pos,
            vel: self.vel,
            max_speed: self.config.max_speed,
            max_force: self.config.max_force,
        };
        let requests = self.build_requests();
        let (steer, contributions) = self.combiner.combine(&physics, &requests, now, rng)?;
        self.contributions = contributions;

        let friction = if self.config.friction_coeff > 0.0 && !self.vel.is_degenerate() {
            -(self.config.friction_coeff * self.vel.length_sq()) * self.vel.normalize()?
        } else {
            Vec2::ZERO
        };

        self.acc = (steer + friction) / self.config.mass;
        self.vel += self.acc * dt_secs;
        self.vel = self.vel.clamp_length(self.config.max_speed);
        self.vel = self.machine.shape_velocity(self.vel, now)?;

        self.pos += self.vel * dt_secs;
        policy.resolve(bounds, &mut self.pos, &mut self.vel, self.config.half_extent);
        Ok(())
    }

    /// Assemble this tick's requests in the configured priority order:
    /// wander contributes once, seek/evade once per live target (sorted by
    /// ID for determinism).
    fn build_requests(&self) -> Vec<SteeringRequest> {
        let mut requests = Vec::new();
        for &kind in &self.config.priority {
            match kind {
                BehaviorKind::Wander => {
                    requests.push(SteeringRequest::new(
                        self.config.wander.weight,
                        BehaviorOptions::Wander {
                            ring_radius: self.config.wander.ring_radius,
                            ring_distance: self.config.wander.ring_distance,
                        },
                    ));
                }
                BehaviorKind::Seek => {
                    for (_, info) in self.targets.sorted(BehaviorKind::Seek) {
                        requests.push(SteeringRequest::new(
                            self.config.seek.weight,
                            BehaviorOptions::Seek {
                                target_pos: info.pos,
                                target_weight: info.weight,
                                detect_radius: self.config.seek.detect_radius,
                                approach_radius: self.config.seek.approach_radius,
                                ahead_only: self.config.seek.ahead_only,
                            },
                        ));
                    }
                }
                BehaviorKind::Evade => {
                    for (_, info) in self.targets.sorted(BehaviorKind::Evade) {
                        requests.push(SteeringRequest::new(
                            self.config.evade.weight,
                            BehaviorOptions::Evade {
                                target_pos: info.pos,
                                target_weight: info.weight,
                                detect_radius: self.config.evade.detect_radius,
                                ahead_only: self.config.evade.ahead_only,
                            },
                        ));
                    }
                }
            }
        }
        requests
    }
}
