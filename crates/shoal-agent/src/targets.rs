//! Per-fish target registry.
//!
//! Seek and evade targets are placed and removed by an external controller
//! (input handling, game logic) between ticks; their lifecycle is
//! owner-controlled, not time-based.  Wander needs no targets, so the
//! registry only carries the two target-driven kinds.

use rustc_hash::FxHashMap;
use shoal_core::{TargetId, Vec2};
use shoal_steering::BehaviorKind;

/// Position and urgency of one target.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetInfo {
    pub pos: Vec2,
    /// Per-target weight; multiplies the behavior's steering force.
    pub weight: f32,
}

/// Registry of live seek/evade targets for one fish.
#[derive(Default, Debug, Clone)]
pub struct TargetRegistry {
    seek: FxHashMap<TargetId, TargetInfo>,
    evade: FxHashMap<TargetId, TargetInfo>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, kind: BehaviorKind) -> Option<&FxHashMap<TargetId, TargetInfo>> {
        match kind {
            BehaviorKind::Seek => Some(&self.seek),
            BehaviorKind::Evade => Some(&self.evade),
            BehaviorKind::Wander => None,
        }
    }

    /// Insert or update a target.  Kinds that take no targets (wander) are
    /// ignored.
    pub fn add(&mut self, kind: BehaviorKind, id: TargetId, info: TargetInfo) {
        match kind {
            BehaviorKind::Seek => {
                self.seek.insert(id, info);
            }
            BehaviorKind::Evade => {
                self.evade.insert(id, info);
            }
            BehaviorKind::Wander => {}
        }
    }

    /// Remove a target.  Idempotent: unknown IDs are a no-op.
    pub fn remove(&mut self, kind: BehaviorKind, id: TargetId) {
        match kind {
            BehaviorKind::Seek => {
                self.seek.remove(&id);
            }
            BehaviorKind::Evade => {
                self.evade.remove(&id);
            }
            BehaviorKind::Wander => {}
        }
    }

    /// Number of live targets for `kind` (zero for wander).
    pub fn count(&self, kind: BehaviorKind) -> usize {
        self.map(kind).map_or(0, FxHashMap::len)
    }

    /// Targets for `kind` sorted by ID.
    ///
    /// Hash-map iteration order is arbitrary; sorting keeps the combiner's
    /// request order — and therefore the run — deterministic.
    pub fn sorted(&self, kind: BehaviorKind) -> Vec<(TargetId, TargetInfo)> {
        let Some(map) = self.map(kind) else {
            return Vec::new();
        };
        let mut entries: Vec<_> = map.iter().map(|(id, info)| (*id, *info)).collect();
        entries.sort_by_key(|(id, _)| *id);
        entries
    }

    pub fn clear(&mut self) {
        self.seek.clear();
        self.evade.clear();
    }
}
