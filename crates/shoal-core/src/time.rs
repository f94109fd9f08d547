//! Simulation time model.
//!
//! # Design
//!
//! The engine's canonical time unit is the **millisecond** — dwell
//! durations, acceleration windows, and wander re-targeting are all
//! configured in ms, and sub-ms resolution buys nothing.  `Millis` is an
//! absolute monotonic timestamp; `SimClock` owns the current time and is the
//! single injected clock collaborator — agents only ever read `clock.now()`.
//!
//! The physics timestep (`dt`, seconds) is independent of the clock: the
//! runner advances the clock by the same `dt` it integrates with, carrying
//! the sub-millisecond remainder in `f64` so long runs accumulate no drift.

use std::fmt;

// ── Millis ────────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp in milliseconds.
///
/// Stored as `u64`: at millisecond resolution a u64 lasts ~585 million years,
/// far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// The timestamp `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Millis {
        Millis(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self` (saturating, so a
    /// timestamp from before `earlier` reads as zero elapsed).
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0 + rhs)
    }
}

impl std::ops::Sub for Millis {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Millis) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The injected monotonic clock.
///
/// Advanced only by the simulation runner; everything else holds `&SimClock`
/// (or just the `Millis` it read) and cannot move time.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    now: Millis,
    /// Sub-millisecond remainder carried between `advance_secs` calls.
    carry_ms: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at an arbitrary timestamp (tests).
    pub fn starting_at(now: Millis) -> Self {
        Self { now, carry_ms: 0.0 }
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Advance by a physics timestep given in seconds.
    ///
    /// Fractional milliseconds are carried exactly, so e.g. 60 fps steps of
    /// 16.666… ms sum to precisely one second every 60 calls.
    pub fn advance_secs(&mut self, dt_secs: f32) {
        let total = self.carry_ms + dt_secs as f64 * 1_000.0;
        let whole = total.floor();
        self.carry_ms = total - whole;
        self.now = Millis(self.now.0 + whole as u64);
    }

    /// Advance by a whole number of milliseconds (tests, fixed-step hosts).
    #[inline]
    pub fn advance_ms(&mut self, ms: u64) {
        self.now = Millis(self.now.0 + ms);
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.now)
    }
}
