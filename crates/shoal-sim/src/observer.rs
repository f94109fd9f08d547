//! Tank observer trait for progress reporting and rendering hookup.

use shoal_agent::Fish;
use shoal_core::Millis;

/// Callbacks invoked by [`Tank::run_ticks`][crate::Tank::run_ticks] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The renderer typically implements
/// `on_tick_end` and reads each fish's position, heading, and state.
///
/// # Example — state census
///
/// ```rust,ignore
/// struct Census { darts: usize }
///
/// impl TankObserver for Census {
///     fn on_tick_end(&mut self, _now: Millis, fish: &[Fish]) {
///         self.darts += fish.iter().filter(|f| f.state() == Swimming::Dart).count();
///     }
/// }
/// ```
pub trait TankObserver {
    /// Called at the start of each tick, before any fish updates.
    fn on_tick_start(&mut self, _now: Millis) {}

    /// Called after every fish has updated, with read-only access to the
    /// whole population.
    fn on_tick_end(&mut self, _now: Millis, _fish: &[Fish]) {}

    /// Called once after the final tick completes.
    fn on_run_end(&mut self, _now: Millis) {}
}

/// A [`TankObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want callbacks.
pub struct NoopObserver;

impl TankObserver for NoopObserver {}
