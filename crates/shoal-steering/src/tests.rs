//! Unit tests for shoal-steering.

use shoal_core::{AgentRng, FishId, Millis, Vec2};

use crate::{
    AgentPhysics, BehaviorKind, BehaviorOptions, SteeringBehavior, SteeringCombiner,
    SteeringError, SteeringRequest, truncate_addend,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn physics(pos: Vec2, vel: Vec2) -> AgentPhysics {
    AgentPhysics {
        pos,
        vel,
        max_speed: 2.0,
        max_force: 0.5,
    }
}

fn rng() -> AgentRng {
    AgentRng::new(42, FishId(0))
}

fn seek_opts(target: Vec2) -> BehaviorOptions {
    BehaviorOptions::Seek {
        target_pos: target,
        target_weight: 1.0,
        detect_radius: 100.0,
        approach_radius: 20.0,
        ahead_only: false,
    }
}

/// Test generator that always emits the same force, whatever the options say.
struct ConstantForce {
    kind: BehaviorKind,
    force: Vec2,
}

impl SteeringBehavior for ConstantForce {
    fn kind(&self) -> BehaviorKind {
        self.kind
    }

    fn steer(
        &mut self,
        _physics: &AgentPhysics,
        _opts: &BehaviorOptions,
        _now: Millis,
        _rng: &mut AgentRng,
    ) -> crate::SteeringResult<Vec2> {
        Ok(self.force)
    }
}

fn constant_combiner(forces: &[(BehaviorKind, Vec2)]) -> SteeringCombiner {
    let mut combiner = SteeringCombiner::empty();
    for &(kind, force) in forces {
        combiner.register(Box::new(ConstantForce { kind, force }));
    }
    combiner
}

// ── truncate_addend ───────────────────────────────────────────────────────────

#[cfg(test)]
mod truncate {
    use super::*;

    /// The 3-4-5 triangle: (0,3) + fitted (1,0) lands exactly on length 5.
    #[test]
    fn three_four_five() {
        let fitted = truncate_addend(Vec2::new(0.0, 3.0), Vec2::new(1.0, 0.0), 5.0).unwrap();
        let total = Vec2::new(0.0, 3.0) + fitted;
        assert!((fitted.x - 4.0).abs() < 1e-4, "got {fitted}");
        assert!(fitted.y.abs() < 1e-6);
        assert!((total.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn accumulator_at_limit_has_no_room() {
        let fitted = truncate_addend(Vec2::new(5.0, 0.0), Vec2::new(1.0, 1.0), 5.0).unwrap();
        assert_eq!(fitted, Vec2::ZERO);
    }

    #[test]
    fn overshot_accumulator_is_contract_violation() {
        let result = truncate_addend(Vec2::new(6.0, 0.0), Vec2::new(1.0, 0.0), 5.0);
        assert!(matches!(
            result,
            Err(SteeringError::InvalidTruncationState { .. })
        ));
    }

    #[test]
    fn zero_addend_adds_nothing() {
        let fitted = truncate_addend(Vec2::new(1.0, 1.0), Vec2::ZERO, 5.0).unwrap();
        assert_eq!(fitted, Vec2::ZERO);
    }

    #[test]
    fn negative_limit_behaves_like_magnitude() {
        let fitted = truncate_addend(Vec2::new(0.0, 3.0), Vec2::new(1.0, 0.0), -5.0).unwrap();
        assert!((fitted.x - 4.0).abs() < 1e-4);
    }

    /// Property sweep: wherever a non-trivial solution exists, the fitted
    /// contribution is a non-negative multiple of the addend and the sum
    /// lands on the limit.
    #[test]
    fn fitted_sum_lands_on_limit() {
        let cases = [
            (Vec2::new(0.2, 0.1), Vec2::new(-1.0, 2.0), 0.4),
            (Vec2::new(-3.0, 1.0), Vec2::new(0.5, 0.5), 6.0),
            (Vec2::ZERO, Vec2::new(2.0, -7.0), 1.0),
            (Vec2::new(1.0, -1.0), Vec2::new(-1.0, 1.0), 2.0),
        ];
        for (acc, addend, limit) in cases {
            let fitted = truncate_addend(acc, addend, limit).unwrap();
            // parallel to addend, same direction
            assert!(fitted.dot(addend) >= 0.0);
            let cross = fitted.x * addend.y - fitted.y * addend.x;
            assert!(cross.abs() < 1e-3, "not parallel: {fitted} vs {addend}");
            let total = acc + fitted;
            assert!(
                (total.length() - limit).abs() < 1e-3,
                "|{acc} + {fitted}| = {} != {limit}",
                total.length()
            );
        }
    }
}

// ── Behaviors ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod behaviors {
    use super::*;
    use crate::behavior::{Evade, Seek, Wander};

    #[test]
    fn seek_outside_detect_radius_is_inactive() {
        let p = physics(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let opts = BehaviorOptions::Seek {
            target_pos: Vec2::new(500.0, 0.0),
            target_weight: 1.0,
            detect_radius: 100.0,
            approach_radius: 20.0,
            ahead_only: false,
        };
        let force = Seek.steer(&p, &opts, Millis::ZERO, &mut rng()).unwrap();
        assert_eq!(force, Vec2::ZERO);
    }

    #[test]
    fn seek_points_toward_target_within_budget() {
        let p = physics(Vec2::ZERO, Vec2::ZERO);
        let force = Seek
            .steer(&p, &seek_opts(Vec2::new(50.0, 0.0)), Millis::ZERO, &mut rng())
            .unwrap();
        assert!(force.x > 0.0);
        assert!(force.length() <= p.max_force + 1e-5);
    }

    #[test]
    fn seek_decelerates_inside_approach_radius() {
        // Stationary agent: steering magnitude tracks desired speed, which
        // shrinks linearly inside the approach radius.
        let p = AgentPhysics {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            max_speed: 2.0,
            max_force: 100.0, // no clamping, observe the raw desired speed
        };
        let far = Seek
            .steer(&p, &seek_opts(Vec2::new(50.0, 0.0)), Millis::ZERO, &mut rng())
            .unwrap();
        let near = Seek
            .steer(&p, &seek_opts(Vec2::new(5.0, 0.0)), Millis::ZERO, &mut rng())
            .unwrap();
        assert!((far.length() - 2.0).abs() < 1e-5, "full speed outside");
        assert!((near.length() - 0.5).abs() < 1e-5, "5/20 of max speed inside");
    }

    #[test]
    fn seek_ahead_only_gates_targets_behind() {
        let p = physics(Vec2::ZERO, Vec2::new(1.0, 0.0)); // heading +x
        let mut opts = seek_opts(Vec2::new(-50.0, 0.0)); // target behind
        if let BehaviorOptions::Seek { ahead_only, .. } = &mut opts {
            *ahead_only = true;
        }
        let force = Seek.steer(&p, &opts, Millis::ZERO, &mut rng()).unwrap();
        assert_eq!(force, Vec2::ZERO);
    }

    #[test]
    fn seek_scales_by_target_weight() {
        let p = physics(Vec2::ZERO, Vec2::ZERO);
        let mut opts = seek_opts(Vec2::new(50.0, 0.0));
        if let BehaviorOptions::Seek { target_weight, .. } = &mut opts {
            *target_weight = 2.0;
        }
        let weighted = Seek.steer(&p, &opts, Millis::ZERO, &mut rng()).unwrap();
        let plain = Seek
            .steer(&p, &seek_opts(Vec2::new(50.0, 0.0)), Millis::ZERO, &mut rng())
            .unwrap();
        assert!((weighted.length() - 2.0 * plain.length()).abs() < 1e-5);
    }

    #[test]
    fn evade_points_away_from_threat() {
        let p = physics(Vec2::ZERO, Vec2::ZERO);
        let opts = BehaviorOptions::Evade {
            target_pos: Vec2::new(10.0, 0.0),
            target_weight: 1.0,
            detect_radius: 55.0,
            ahead_only: false,
        };
        let force = Evade.steer(&p, &opts, Millis::ZERO, &mut rng()).unwrap();
        assert!(force.x < 0.0, "should flee along -x, got {force}");
    }

    #[test]
    fn evade_inactive_outside_radius_or_coincident() {
        let p = physics(Vec2::ZERO, Vec2::ZERO);
        let far = BehaviorOptions::Evade {
            target_pos: Vec2::new(100.0, 0.0),
            target_weight: 1.0,
            detect_radius: 55.0,
            ahead_only: false,
        };
        assert_eq!(Evade.steer(&p, &far, Millis::ZERO, &mut rng()).unwrap(), Vec2::ZERO);
        let coincident = BehaviorOptions::Evade {
            target_pos: Vec2::ZERO,
            target_weight: 1.0,
            detect_radius: 55.0,
            ahead_only: false,
        };
        assert_eq!(
            Evade.steer(&p, &coincident, Millis::ZERO, &mut rng()).unwrap(),
            Vec2::ZERO
        );
    }

    #[test]
    fn wander_force_respects_budget() {
        let mut wander = Wander::new(200);
        let p = physics(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0));
        let opts = BehaviorOptions::Wander {
            ring_radius: 50.0,
            ring_distance: 400.0,
        };
        let mut r = rng();
        for step in 0..50u64 {
            let force = wander.steer(&p, &opts, Millis(step * 16), &mut r).unwrap();
            assert!(force.length() <= p.max_force + 1e-5);
        }
    }

    #[test]
    fn wander_target_persists_within_interval() {
        let mut wander = Wander::new(200);
        let p = physics(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let opts = BehaviorOptions::Wander {
            ring_radius: 50.0,
            ring_distance: 400.0,
        };
        let mut r = rng();
        wander.steer(&p, &opts, Millis(0), &mut r).unwrap();
        let first = wander.target().unwrap();
        wander.steer(&p, &opts, Millis(100), &mut r).unwrap();
        assert_eq!(wander.target().unwrap(), first, "no re-roll before interval");
        wander.steer(&p, &opts, Millis(500), &mut r).unwrap();
        assert_ne!(wander.target().unwrap(), first, "re-rolled after interval");
    }

    #[test]
    fn wander_survives_zero_velocity() {
        let mut wander = Wander::new(200);
        let p = physics(Vec2::new(10.0, 10.0), Vec2::ZERO);
        let opts = BehaviorOptions::Wander {
            ring_radius: 20.0,
            ring_distance: 150.0,
        };
        let force = wander.steer(&p, &opts, Millis(0), &mut rng()).unwrap();
        assert!(force.length() > 0.0, "synthetic heading yields a real force");
    }

    #[test]
    fn mismatched_options_rejected() {
        let p = physics(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let wander_opts = BehaviorOptions::Wander {
            ring_radius: 20.0,
            ring_distance: 150.0,
        };
        let result = Seek.steer(&p, &wander_opts, Millis::ZERO, &mut rng());
        assert!(matches!(result, Err(SteeringError::MismatchedOptions(_))));
    }
}

// ── Combiner ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod combiner {
    use super::*;

    fn p_with_force(max_force: f32) -> AgentPhysics {
        AgentPhysics {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            max_speed: 2.0,
            max_force,
        }
    }

    fn request(kind: BehaviorKind, weight: f32) -> SteeringRequest {
        // Options content is irrelevant to ConstantForce generators; the
        // kind just has to route to the right registry slot.
        let opts = match kind {
            BehaviorKind::Wander => BehaviorOptions::Wander {
                ring_radius: 1.0,
                ring_distance: 1.0,
            },
            BehaviorKind::Seek => seek_opts(Vec2::new(1.0, 0.0)),
            BehaviorKind::Evade => BehaviorOptions::Evade {
                target_pos: Vec2::new(1.0, 0.0),
                target_weight: 1.0,
                detect_radius: 10.0,
                ahead_only: false,
            },
        };
        SteeringRequest {
            kind,
            weight,
            opts,
        }
    }

    #[test]
    fn truncates_at_budget_and_starves_lower_priorities() {
        // (0,3) commits whole; (4,0) would land exactly on the budget of 5
        // and is the truncation point; the third request gets nothing.
        let mut combiner = constant_combiner(&[
            (BehaviorKind::Evade, Vec2::new(0.0, 3.0)),
            (BehaviorKind::Wander, Vec2::new(4.0, 0.0)),
            (BehaviorKind::Seek, Vec2::new(9.0, 9.0)),
        ]);
        let requests = [
            request(BehaviorKind::Evade, 1.0),
            request(BehaviorKind::Wander, 1.0),
            request(BehaviorKind::Seek, 1.0),
        ];
        let (total, contributions) = combiner
            .combine(&p_with_force(5.0), &requests, Millis::ZERO, &mut rng())
            .unwrap();
        assert!((total.length() - 5.0).abs() < 1e-3);
        assert_eq!(contributions.len(), 2, "seek never considered");
        assert_eq!(contributions[0].kind, BehaviorKind::Evade);
        assert_eq!(contributions[1].kind, BehaviorKind::Wander);
        assert!((contributions[1].force.x - 4.0).abs() < 1e-3);
    }

    #[test]
    fn never_exceeds_max_force() {
        let mut combiner = constant_combiner(&[
            (BehaviorKind::Evade, Vec2::new(0.3, -0.2)),
            (BehaviorKind::Wander, Vec2::new(-0.1, 0.4)),
            (BehaviorKind::Seek, Vec2::new(0.25, 0.25)),
        ]);
        for weight in [0.1, 1.0, 3.0, 10.0] {
            let requests = [
                request(BehaviorKind::Evade, weight),
                request(BehaviorKind::Wander, weight),
                request(BehaviorKind::Seek, weight),
            ];
            let (total, _) = combiner
                .combine(&p_with_force(0.4), &requests, Millis::ZERO, &mut rng())
                .unwrap();
            assert!(
                total.length() <= 0.4 + 1e-3,
                "weight {weight}: {}",
                total.length()
            );
        }
    }

    /// Chosen semantics for the unsaturated case: rescale up to the cap so
    /// every tick steers at full strength.
    #[test]
    fn unsaturated_total_is_rescaled_to_cap() {
        let mut combiner = constant_combiner(&[(BehaviorKind::Wander, Vec2::new(0.05, 0.0))]);
        let (total, _) = combiner
            .combine(
                &p_with_force(2.0),
                &[request(BehaviorKind::Wander, 1.0)],
                Millis::ZERO,
                &mut rng(),
            )
            .unwrap();
        assert!((total.length() - 2.0).abs() < 1e-4);
        assert!(total.x > 0.0, "direction preserved");
    }

    /// ...except a degenerate total, which has no direction to scale along.
    #[test]
    fn zero_contributions_stay_zero() {
        let mut combiner = constant_combiner(&[(BehaviorKind::Seek, Vec2::ZERO)]);
        let (total, contributions) = combiner
            .combine(
                &p_with_force(0.4),
                &[request(BehaviorKind::Seek, 1.0)],
                Millis::ZERO,
                &mut rng(),
            )
            .unwrap();
        assert_eq!(total, Vec2::ZERO);
        assert_eq!(contributions.len(), 1);
    }

    #[test]
    fn zero_weight_requests_are_skipped() {
        let mut combiner = constant_combiner(&[(BehaviorKind::Wander, Vec2::new(1.0, 0.0))]);
        let (total, contributions) = combiner
            .combine(
                &p_with_force(0.4),
                &[request(BehaviorKind::Wander, 0.0)],
                Millis::ZERO,
                &mut rng(),
            )
            .unwrap();
        assert_eq!(total, Vec2::ZERO);
        assert!(contributions.is_empty());
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let mut combiner = SteeringCombiner::empty();
        let result = combiner.combine(
            &p_with_force(0.4),
            &[request(BehaviorKind::Seek, 1.0)],
            Millis::ZERO,
            &mut rng(),
        );
        assert!(matches!(result, Err(SteeringError::UnknownBehavior(_))));
    }

    #[test]
    fn standard_combiner_runs_all_three_kinds() {
        let mut combiner = SteeringCombiner::with_standard_behaviors(200);
        let p = AgentPhysics {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(1.0, 0.0),
            max_speed: 2.0,
            max_force: 0.4,
        };
        let requests = [
            SteeringRequest::new(
                4.0,
                BehaviorOptions::Evade {
                    target_pos: Vec2::new(120.0, 100.0),
                    target_weight: 1.0,
                    detect_radius: 55.0,
                    ahead_only: false,
                },
            ),
            SteeringRequest::new(
                1.0,
                BehaviorOptions::Wander {
                    ring_radius: 50.0,
                    ring_distance: 400.0,
                },
            ),
            SteeringRequest::new(
                2.0,
                BehaviorOptions::Seek {
                    target_pos: Vec2::new(150.0, 90.0),
                    target_weight: 1.0,
                    detect_radius: 100.0,
                    approach_radius: 20.0,
                    ahead_only: false,
                },
            ),
        ];
        let (total, contributions) = combiner
            .combine(&p, &requests, Millis::ZERO, &mut rng())
            .unwrap();
        assert!((total.length() - 0.4).abs() < 1e-3, "always at the cap");
        assert!(!contributions.is_empty());
        assert_eq!(contributions[0].kind, BehaviorKind::Evade);
    }
}
