//! One eased speed interpolation across a state change.

use shoal_core::{Millis, lerp, smoothstep};

/// The speed ramp started when the machine changes state.
///
/// Created at the moment of transition, consumed once `frac(now) >= 1`.
/// Runs to completion deterministically from elapsed time; nothing aborts it
/// except the machine dropping it at the next natural state change.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// `|velocity|` at the instant the state changed.
    pub old_speed: f32,
    /// Speed sampled from the new state's band.
    pub new_speed: f32,
    pub started: Millis,
    pub duration_ms: u64,
}

impl Transition {
    pub fn new(old_speed: f32, new_speed: f32, started: Millis, duration_ms: u64) -> Self {
        Self {
            old_speed,
            new_speed,
            started,
            duration_ms,
        }
    }

    /// Raw progress `elapsed / duration`; can exceed 1 after the ramp ends.
    #[inline]
    pub fn frac(&self, now: Millis) -> f32 {
        now.since(self.started) as f32 / self.duration_ms as f32
    }

    /// The smoothstep-eased speed at `now`.
    #[inline]
    pub fn speed_at(&self, now: Millis) -> f32 {
        lerp(self.old_speed, self.new_speed, smoothstep(self.frac(now)))
    }

    /// `true` once the ramp has fully played out.
    #[inline]
    pub fn finished(&self, now: Millis) -> bool {
        self.frac(now) >= 1.0
    }
}
