//! The per-fish locomotion state machine.

use shoal_core::{AgentRng, Millis, Vec2, WeightedSampler};

use crate::{LocomotionConfig, LocomotionResult, Swimming, Transition};

/// Discrete locomotion state plus the machinery that moves between states.
///
/// Drive it twice per tick:
///
/// 1. [`maybe_transition`][Self::maybe_transition] — once, before physics,
///    to let an expired dwell trigger a state change;
/// 2. [`shape_velocity`][Self::shape_velocity] — after steering and friction
///    have produced a raw velocity, to impose the eased transition speed (or
///    the state's speed band) and the heading-angle cone.
pub struct LocomotionStateMachine {
    config: LocomotionConfig,
    state: Swimming,
    time_of_last_change: Millis,
    dwell_ms: u64,
    transition: Option<Transition>,
    next_state: WeightedSampler<Swimming>,
}

impl LocomotionStateMachine {
    /// Build a machine in the `Swim` state with a freshly sampled dwell.
    ///
    /// Fails if the configuration is invalid (unordered speed band, all-zero
    /// transition weights, …).
    pub fn new(
        config: LocomotionConfig,
        now: Millis,
        rng: &mut AgentRng,
    ) -> LocomotionResult<Self> {
        config.validate()?;
        let next_state = WeightedSampler::new(
            &[Swimming::Swim, Swimming::Hover, Swimming::Dart],
            &[config.prob_swim, config.prob_hover, config.prob_dart],
        )?;
        let dwell_ms = config.params(Swimming::Swim).dwell.sample(rng);
        Ok(Self {
            config,
            state: Swimming::Swim,
            time_of_last_change: now,
            dwell_ms,
            transition: None,
            next_state,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> Swimming {
        self.state
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// The active speed ramp, if a transition is in progress.
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Remaining dwell before the next transition check can fire.
    pub fn dwell_remaining(&self, now: Millis) -> u64 {
        self.dwell_ms.saturating_sub(now.since(self.time_of_last_change))
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Evaluate the transition rule once for this tick.
    ///
    /// Fires only when no transition is mid-flight and the current state's
    /// dwell has expired.  Darts always fall back to `Swim`; every other
    /// state draws the successor from the weighted distribution.  A freshly
    /// chosen dart shrinks its dwell by the configured factor.
    ///
    /// Returns the new state when a change happened.
    pub fn maybe_transition(
        &mut self,
        now: Millis,
        current_speed: f32,
        rng: &mut AgentRng,
    ) -> Option<Swimming> {
        if self.transition.is_some() || now.since(self.time_of_last_change) <= self.dwell_ms {
            return None;
        }

        let next = if self.state == Swimming::Dart {
            Swimming::Swim
        } else {
            self.next_state.sample(rng)
        };

        let mut dwell = self.config.params(next).dwell.sample(rng);
        if next == Swimming::Dart {
            dwell = (dwell as f32 * self.config.dart_dwell_factor) as u64;
        }

        let new_speed = self.config.params(next).speed.sample(rng);
        self.transition = Some(Transition::new(
            current_speed,
            new_speed,
            now,
            self.config.acceleration_ms,
        ));
        self.state = next;
        self.time_of_last_change = now;
        self.dwell_ms = dwell;
        Some(next)
    }

    // ── Velocity shaping ──────────────────────────────────────────────────

    /// Impose the machine's speed on a raw post-steering velocity, then clamp
    /// the heading angle.
    ///
    /// Mid-transition, speed follows the eased ramp regardless of the state's
    /// band; otherwise the band is a hard floor and ceiling.  A degenerate
    /// velocity passes through unscaled — there is no direction to rescale
    /// along, and steering will have produced a heading by the next tick.
    pub fn shape_velocity(&mut self, vel: Vec2, now: Millis) -> LocomotionResult<Vec2> {
        let mut vel = vel;

        if let Some(t) = self.transition {
            if !vel.is_degenerate() {
                vel = vel.scale_to_length(t.speed_at(now))?;
            }
            if t.finished(now) {
                self.transition = None;
            }
        } else {
            let band = self.config.params(self.state).speed;
            let speed = vel.length();
            if speed > band.max {
                vel = vel.scale_to_length(band.max)?;
            } else if speed < band.min && !vel.is_degenerate() {
                vel = vel.scale_to_length(band.min)?;
            }
        }

        Ok(clamp_angle_to_horizontal(
            vel,
            self.config.max_angle_with_horizontal_deg,
        ))
    }
}

// ── Heading cone ──────────────────────────────────────────────────────────────

/// Clamp a velocity's angle from the horizontal axis to `max_angle_deg`.
///
/// The horizontal component is untouched (sign included); when the cone is
/// exceeded the vertical component is replaced by `|x| · tan(max_angle)`
/// with its original sign.  Keeps motion fish-like: long shallow glides,
/// never steep climbs or dives.
pub fn clamp_angle_to_horizontal(v: Vec2, max_angle_deg: f32) -> Vec2 {
    let angle_deg = v.y.abs().atan2(v.x.abs()).to_degrees();
    if angle_deg <= max_angle_deg {
        return v;
    }
    let clamped_y = (v.x.abs() * max_angle_deg.to_radians().tan()).copysign(v.y);
    Vec2::new(v.x, clamped_y)
}
