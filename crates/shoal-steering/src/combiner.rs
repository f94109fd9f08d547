//! The weighted prioritised truncated-sum combiner.

use rustc_hash::FxHashMap;
use shoal_core::{AgentRng, Millis, Vec2};

use crate::behavior::{Evade, Seek, Wander};
use crate::{
    AgentPhysics, BehaviorKind, SteeringBehavior, SteeringError, SteeringRequest, SteeringResult,
    truncate_addend,
};

/// One behavior's applied (post-truncation) force, kept for debug overlays.
#[derive(Copy, Clone, Debug)]
pub struct Contribution {
    pub kind: BehaviorKind,
    pub force: Vec2,
}

/// Blends priority-ordered steering requests into one bounded force.
///
/// Owns a registry of [`SteeringBehavior`] generators keyed by kind.  Each
/// fish holds its own combiner because wander's rolling target is per-agent
/// state.
///
/// # Policy
///
/// Requests are processed in the order given (highest priority first).
/// Zero-weight requests are skipped.  Each force is weighted and added to a
/// running total until a contribution would reach `max_force`; that one is
/// truncated to exactly exhaust the budget and the rest get nothing.  A
/// total that never fills the budget is rescaled up to `max_force` (zero
/// totals stay zero — nothing to scale along).
pub struct SteeringCombiner {
    generators: FxHashMap<BehaviorKind, Box<dyn SteeringBehavior>>,
}

impl SteeringCombiner {
    /// An empty combiner with no registered generators.
    pub fn empty() -> Self {
        Self {
            generators: FxHashMap::default(),
        }
    }

    /// A combiner with the three standard generators registered.
    ///
    /// `wander_retarget_ms` is how often the wander target may re-roll.
    pub fn with_standard_behaviors(wander_retarget_ms: u64) -> Self {
        let mut combiner = Self::empty();
        combiner.register(Box::new(Wander::new(wander_retarget_ms)));
        combiner.register(Box::new(Seek));
        combiner.register(Box::new(Evade));
        combiner
    }

    /// Register (or replace) the generator for its kind.
    pub fn register(&mut self, generator: Box<dyn SteeringBehavior>) {
        self.generators.insert(generator.kind(), generator);
    }

    /// Blend `requests` into a single force of length `max_force` (or zero).
    ///
    /// Returns the total plus the per-request applied forces in processing
    /// order.  Fails on an unregistered kind or mismatched options; those
    /// are integration defects, not runtime conditions to retry.
    pub fn combine(
        &mut self,
        physics: &AgentPhysics,
        requests: &[SteeringRequest],
        now: Millis,
        rng: &mut AgentRng,
    ) -> SteeringResult<(Vec2, Vec<Contribution>)> {
        let mut total = Vec2::ZERO;
        let mut contributions = Vec::with_capacity(requests.len());

        for request in requests {
            if request.weight == 0.0 {
                continue;
            }
            let generator = self
                .generators
                .get_mut(&request.kind)
                .ok_or(SteeringError::UnknownBehavior(request.kind))?;
            let force = generator.steer(physics, &request.opts, now, rng)? * request.weight;

            let tentative = total + force;
            if tentative.length() >= physics.max_force {
                // Budget exhausted: fit what remains of this contribution
                // and stop considering lower-priority behaviors.
                let fitted = truncate_addend(total, force, physics.max_force)?;
                total += fitted;
                contributions.push(Contribution {
                    kind: request.kind,
                    force: fitted,
                });
                break;
            }
            total = tentative;
            contributions.push(Contribution {
                kind: request.kind,
                force,
            });
        }

        if total.length() < physics.max_force && !total.is_degenerate() {
            total = total.scale_to_length(physics.max_force)?;
        }
        Ok((total, contributions))
    }
}
