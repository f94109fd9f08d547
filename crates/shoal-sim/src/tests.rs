use shoal_agent::{BoundaryPolicy, FishConfig, TankBounds, TargetInfo};
use shoal_core::{FishId, Millis, TargetId, Vec2};
use shoal_steering::BehaviorKind;

use crate::{NoopObserver, SimError, Tank, TankBuilder, TankObserver};

fn small_tank(seed: u64, count: usize) -> Tank {
    TankBuilder::new(TankBounds::new(800.0, 600.0), seed)
        .config(FishConfig::default())
        .count(count)
        .build()
        .unwrap()
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn spawns_requested_count_with_unique_ids() {
        let tank = small_tank(7, 10);
        assert_eq!(tank.len(), 10);
        let mut ids: Vec<FishId> = tank.fish().iter().map(|f| f.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn empty_tank_is_valid() {
        let tank = TankBuilder::new(TankBounds::new(800.0, 600.0), 0)
            .build()
            .unwrap();
        assert!(tank.is_empty());
    }

    #[test]
    fn profile_sampling_produces_varied_configs() {
        let tank = TankBuilder::new(TankBounds::new(800.0, 600.0), 11)
            .count(8)
            .build()
            .unwrap();
        let forces: Vec<f32> = tank.fish().iter().map(|f| f.config().max_force).collect();
        assert!(forces.iter().any(|&m| (m - forces[0]).abs() > f32::EPSILON));
    }

    #[test]
    fn rejects_bad_timestep() {
        let err = TankBuilder::new(TankBounds::new(800.0, 600.0), 0)
            .timestep_secs(0.0)
            .build();
        assert!(matches!(err, Err(SimError::Config(_))));
    }

    #[test]
    fn fish_spawn_inside_bounds() {
        let tank = small_tank(3, 20);
        for f in tank.fish() {
            let p = f.pos();
            assert!(p.x >= 0.0 && p.x <= 800.0, "x out of bounds: {p:?}");
            assert!(p.y >= 0.0 && p.y <= 600.0, "y out of bounds: {p:?}");
        }
    }
}

#[cfg(test)]
mod stepping {
    use super::*;

    #[test]
    fn clock_advances_exactly() {
        let mut tank = small_tank(1, 2);
        for _ in 0..60 {
            tank.step().unwrap();
        }
        assert_eq!(tank.clock().now(), Millis(1000));
    }

    #[test]
    fn same_seed_same_trajectories() {
        let mut a = small_tank(99, 6);
        let mut b = small_tank(99, 6);
        for _ in 0..200 {
            a.step().unwrap();
            b.step().unwrap();
        }
        for (fa, fb) in a.fish().iter().zip(b.fish()) {
            assert_eq!(fa.pos(), fb.pos());
            assert_eq!(fa.vel(), fb.vel());
            assert_eq!(fa.state(), fb.state());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = small_tank(1, 4);
        let mut b = small_tank(2, 4);
        for _ in 0..200 {
            a.step().unwrap();
            b.step().unwrap();
        }
        let diverged = a
            .fish()
            .iter()
            .zip(b.fish())
            .any(|(fa, fb)| fa.pos() != fb.pos());
        assert!(diverged);
    }

    #[test]
    fn population_size_does_not_perturb_survivors() {
        // Fish 0 must trace the same path whether or not fish 1..5 exist,
        // since every fish has a private RNG stream.
        let mut solo = small_tank(42, 1);
        let mut crowd = small_tank(42, 6);
        for _ in 0..120 {
            solo.step().unwrap();
            crowd.step().unwrap();
        }
        assert_eq!(solo.fish()[0].pos(), crowd.fish()[0].pos());
    }

    #[test]
    fn speeds_stay_capped_under_turn_policy() {
        let mut tank = TankBuilder::new(TankBounds::new(400.0, 300.0), 5)
            .policy(BoundaryPolicy::Turn)
            .config(FishConfig::default())
            .count(5)
            .build()
            .unwrap();
        for _ in 0..600 {
            tank.step().unwrap();
            for f in tank.fish() {
                let cap = f.config().max_speed;
                assert!(f.vel().length() <= cap * 1.001);
            }
        }
    }
}

#[cfg(test)]
mod population {
    use super::*;

    #[test]
    fn spawn_and_remove() {
        let mut tank = small_tank(0, 2);
        let id = tank.spawn(FishConfig::default()).unwrap();
        assert_eq!(tank.len(), 3);
        assert!(tank.fish_by_id(id).is_some());

        assert!(tank.remove(id));
        assert_eq!(tank.len(), 2);
        assert!(!tank.remove(id));
    }

    #[test]
    fn removal_mid_run_keeps_others_stepping() {
        let mut tank = small_tank(8, 3);
        let victim = tank.fish()[1].id();
        for _ in 0..30 {
            tank.step().unwrap();
        }
        tank.remove(victim);
        for _ in 0..30 {
            tank.step().unwrap();
        }
        assert_eq!(tank.len(), 2);
        assert!(tank.fish_by_id(victim).is_none());
    }
}

#[cfg(test)]
mod targets {
    use super::*;

    fn food() -> TargetInfo {
        TargetInfo {
            pos: Vec2::new(100.0, 100.0),
            weight: 2.0,
        }
    }

    #[test]
    fn add_target_to_unknown_fish_fails() {
        let mut tank = small_tank(0, 1);
        let err = tank.add_target(FishId(999), BehaviorKind::Seek, TargetId(0), food());
        assert!(matches!(err, Err(SimError::UnknownFish(FishId(999)))));
    }

    #[test]
    fn broadcast_reaches_every_fish() {
        let mut tank = small_tank(0, 5);
        tank.broadcast_target(BehaviorKind::Seek, TargetId(7), food());
        for f in tank.fish() {
            assert_eq!(f.targets().count(BehaviorKind::Seek), 1);
        }

        tank.retract_target(BehaviorKind::Seek, TargetId(7));
        for f in tank.fish() {
            assert_eq!(f.targets().count(BehaviorKind::Seek), 0);
        }
    }

    #[test]
    fn per_fish_target_roundtrip() {
        let mut tank = small_tank(0, 2);
        let id = tank.fish()[0].id();
        tank.add_target(id, BehaviorKind::Evade, TargetId(1), food())
            .unwrap();
        assert_eq!(
            tank.fish_by_id(id).unwrap().targets().count(BehaviorKind::Evade),
            1
        );
        assert_eq!(tank.fish()[1].targets().count(BehaviorKind::Evade), 0);

        tank.remove_target(id, BehaviorKind::Evade, TargetId(1)).unwrap();
        assert_eq!(
            tank.fish_by_id(id).unwrap().targets().count(BehaviorKind::Evade),
            0
        );
    }
}

#[cfg(test)]
mod observer {
    use super::*;

    #[derive(Default)]
    struct Counter {
        starts: usize,
        ends: usize,
        run_ends: usize,
        last_now: Millis,
    }

    impl TankObserver for Counter {
        fn on_tick_start(&mut self, _now: Millis) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, now: Millis, fish: &[shoal_agent::Fish]) {
            self.ends += 1;
            self.last_now = now;
            assert!(!fish.is_empty());
        }
        fn on_run_end(&mut self, _now: Millis) {
            self.run_ends += 1;
        }
    }

    #[test]
    fn hooks_fire_once_per_tick() {
        let mut tank = small_tank(0, 3);
        let mut counter = Counter::default();
        tank.run_ticks(30, &mut counter).unwrap();
        assert_eq!(counter.starts, 30);
        assert_eq!(counter.ends, 30);
        assert_eq!(counter.run_ends, 1);
        assert_eq!(counter.last_now, Millis(500));
    }

    #[test]
    fn noop_observer_runs() {
        let mut tank = small_tank(0, 1);
        tank.run_ticks(10, &mut NoopObserver).unwrap();
        assert_eq!(tank.clock().now(), Millis(166));
    }
}
