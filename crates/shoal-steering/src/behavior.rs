//! The `SteeringBehavior` trait and the three built-in desire generators.
//!
//! Each generator turns the agent's physical state plus its options into a
//! *desired steering force* — never a final velocity.  Forces are clamped to
//! `max_force` before the per-target weight is applied; the per-class weight
//! is the combiner's job.

use shoal_core::{AgentRng, Millis, Vec2};

use crate::{AgentPhysics, BehaviorKind, BehaviorOptions, SteeringError, SteeringResult};

/// A pluggable steering-desire generator.
///
/// Generators may hold per-agent state (wander's rolling target), so each
/// fish owns its own instances via its combiner.  All randomness goes
/// through the injected [`AgentRng`] to keep runs reproducible.
pub trait SteeringBehavior {
    fn kind(&self) -> BehaviorKind;

    /// Compute this behavior's steering force for the current tick.
    ///
    /// `opts` must be the variant matching [`kind`][Self::kind]; anything
    /// else fails with [`SteeringError::MismatchedOptions`].
    fn steer(
        &mut self,
        physics: &AgentPhysics,
        opts: &BehaviorOptions,
        now: Millis,
        rng: &mut AgentRng,
    ) -> SteeringResult<Vec2>;
}

/// `desired − current`, clamped to the force budget.
fn steer_toward(desired_vel: Vec2, current_vel: Vec2, max_force: f32) -> Vec2 {
    (desired_vel - current_vel).clamp_length(max_force)
}

// ── Wander ────────────────────────────────────────────────────────────────────

/// Persistent random-walk target on a ring projected ahead of the agent.
///
/// The target is re-rolled at most once per `retarget_ms`: a fresh point on
/// a ring of `ring_radius`, centered `ring_distance` ahead along the current
/// heading, at a uniform random angle.  Between re-rolls the fish keeps
/// seeking the same point, which is what makes the walk look deliberate
/// rather than jittery.
pub struct Wander {
    retarget_ms: u64,
    target: Option<Vec2>,
    last_retarget: Millis,
}

impl Wander {
    pub fn new(retarget_ms: u64) -> Self {
        Self {
            retarget_ms,
            target: None,
            last_retarget: Millis::ZERO,
        }
    }

    /// The current wander target, if one has been rolled (debug overlays).
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }
}

impl SteeringBehavior for Wander {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Wander
    }

    fn steer(
        &mut self,
        physics: &AgentPhysics,
        opts: &BehaviorOptions,
        now: Millis,
        rng: &mut AgentRng,
    ) -> SteeringResult<Vec2> {
        let BehaviorOptions::Wander {
            ring_radius,
            ring_distance,
        } = *opts
        else {
            return Err(SteeringError::MismatchedOptions(self.kind()));
        };

        // A stationary fish has no heading to project the ring from; roll a
        // synthetic one so the walk can start.
        let vel = if physics.vel.is_degenerate() {
            Vec2::new(1.0, 0.0).rotate_deg(rng.angle_deg())
                * rng.gen_range(0.1..physics.max_speed.max(0.2))
        } else {
            physics.vel
        };

        if self.target.is_none() || now.since(self.last_retarget) > self.retarget_ms {
            self.last_retarget = now;
            let ahead = physics.pos + vel.normalize()? * ring_distance;
            let offset = Vec2::new(ring_radius, 0.0).rotate_deg(rng.angle_deg());
            self.target = Some(ahead + offset);
        }
        let target = self.target.unwrap_or(physics.pos);

        let to_target = target - physics.pos;
        if to_target.is_degenerate() {
            return Ok(Vec2::ZERO);
        }
        let desired = to_target.normalize()? * physics.max_speed;
        Ok(steer_toward(desired, vel, physics.max_force))
    }
}

// ── Seek ──────────────────────────────────────────────────────────────────────

/// Pursuit with linear deceleration inside the approach radius.
///
/// Stateless — everything it needs arrives in the options each tick.
pub struct Seek;

impl SteeringBehavior for Seek {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Seek
    }

    fn steer(
        &mut self,
        physics: &AgentPhysics,
        opts: &BehaviorOptions,
        _now: Millis,
        _rng: &mut AgentRng,
    ) -> SteeringResult<Vec2> {
        let BehaviorOptions::Seek {
            target_pos,
            target_weight,
            detect_radius,
            approach_radius,
            ahead_only,
        } = *opts
        else {
            return Err(SteeringError::MismatchedOptions(self.kind()));
        };

        let offset = target_pos - physics.pos;
        let dist = offset.length();
        if dist >= detect_radius || offset.is_degenerate() {
            return Ok(Vec2::ZERO);
        }
        if ahead_only && offset.x * physics.vel.x < 0.0 {
            return Ok(Vec2::ZERO);
        }

        let mut desired = offset.normalize()? * physics.max_speed;
        if dist < approach_radius {
            desired = desired * (dist / approach_radius);
        }
        Ok(steer_toward(desired, physics.vel, physics.max_force) * target_weight)
    }
}

// ── Evade ─────────────────────────────────────────────────────────────────────

/// Repulsion from a threat — seek's mirror, minus the approach scaling.
pub struct Evade;

impl SteeringBehavior for Evade {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Evade
    }

    fn steer(
        &mut self,
        physics: &AgentPhysics,
        opts: &BehaviorOptions,
        _now: Millis,
        _rng: &mut AgentRng,
    ) -> SteeringResult<Vec2> {
        let BehaviorOptions::Evade {
            target_pos,
            target_weight,
            detect_radius,
            ahead_only,
        } = *opts
        else {
            return Err(SteeringError::MismatchedOptions(self.kind()));
        };

        // Opposite sign to seek: away from the threat.
        let offset = physics.pos - target_pos;
        let dist = offset.length();
        if dist >= detect_radius || offset.is_degenerate() {
            return Ok(Vec2::ZERO);
        }
        if ahead_only && (target_pos - physics.pos).x * physics.vel.x < 0.0 {
            return Ok(Vec2::ZERO);
        }

        let desired = offset.normalize()? * physics.max_speed;
        Ok(steer_toward(desired, physics.vel, physics.max_force) * target_weight)
    }
}
