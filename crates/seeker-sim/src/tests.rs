//! Tests for the simulation engine: command handling, engagement flow,
//! determinism, and graceful degradation when entities despawn mid-flight.

use seeker_core::commands::Command;
use seeker_core::components::{Guidance, Position};
use seeker_core::math::{Vec3, Vec3d};
use seeker_core::state::SimSnapshot;

use crate::engine::{SimConfig, SimulationEngine};
use crate::world;

/// Start the demo engagement and return the first snapshot.
fn start_engagement(engine: &mut SimulationEngine) -> SimSnapshot {
    engine.queue_command(Command::StartEngagement);
    engine.tick()
}

fn missile_target_range(snapshot: &SimSnapshot) -> f32 {
    let missile = &snapshot.missiles[0];
    let target = &snapshot.targets[0];
    (target.position - missile.position).sqr_magnitude().sqrt()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });

    let snap_a = start_engagement(&mut engine_a);
    let snap_b = start_engagement(&mut engine_b);
    let missile_a = snap_a.missiles[0].id;
    let missile_b = snap_b.missiles[0].id;

    engine_a.queue_command(Command::SetSeeking {
        missile: missile_a,
        seeking: true,
    });
    engine_b.queue_command(Command::SetSeeking {
        missile: missile_b,
        seeking: true,
    });

    for _ in 0..300 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });

    // Different seeds jitter the spawn geometry, so the first snapshots
    // already differ.
    let snap_a = start_engagement(&mut engine_a);
    let snap_b = start_engagement(&mut engine_b);

    let json_a = serde_json::to_string(&snap_a).unwrap();
    let json_b = serde_json::to_string(&snap_b).unwrap();
    assert_ne!(json_a, json_b, "Different seeds should diverge");
}

// ---- Engagement flow ----

#[test]
fn test_idle_missile_does_nothing() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    start_engagement(&mut engine);

    // Seeking never enabled: no thrust, no motion, timer pinned at zero.
    for _ in 0..99 {
        engine.tick();
    }
    let snapshot = engine.tick();

    let missile = &snapshot.missiles[0];
    assert!(!missile.seeking);
    assert_eq!(missile.seek_timer, 0.0);
    assert_eq!(missile.thrust, Vec3d::ZERO);
    assert_eq!(missile.velocity, Vec3d::ZERO);
    assert_eq!(missile.position, Vec3::ZERO);
}

#[test]
fn test_seeking_missile_closes_on_target() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let first = start_engagement(&mut engine);
    let missile = first.missiles[0].id;
    let initial_range = missile_target_range(&first);

    engine.queue_command(Command::SetSeeking {
        missile,
        seeking: true,
    });

    let mut min_range = initial_range;
    for _ in 0..2000 {
        let snapshot = engine.tick();
        min_range = min_range.min(missile_target_range(&snapshot));
    }

    assert!(
        min_range < 100.0,
        "guidance should close on a crossing target: initial {initial_range:.0}m, min {min_range:.1}m"
    );
}

#[test]
fn test_seeking_missile_emits_thrust_at_engine_magnitude() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let first = start_engagement(&mut engine);
    let missile = first.missiles[0].id;

    engine.queue_command(Command::SetSeeking {
        missile,
        seeking: true,
    });
    let snapshot = engine.tick();

    let view = &snapshot.missiles[0];
    assert!(view.seeking);
    assert!(view.time_to_intercept > 0.0, "first tick should solve");
    let magnitude = view.thrust.sqr_magnitude().sqrt();
    let expected = Guidance::default().engine_thrust;
    assert!(
        (magnitude - expected).abs() < 1e-3,
        "thrust magnitude {magnitude} != engine thrust {expected}"
    );
}

#[test]
fn test_reticles_track_solution() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let first = start_engagement(&mut engine);
    let missile_id = first.missiles[0].id;
    assert_eq!(first.reticles.len(), 2);

    engine.queue_command(Command::SetSeeking {
        missile: missile_id,
        seeking: true,
    });
    for _ in 0..10 {
        engine.tick();
    }

    // The targeting reticle sits at missile position + solved intercept
    // offset (placed just before this tick's movement, so allow one tick of
    // drift).
    let world_ref = engine.world();
    let entity = world::entity(missile_id).unwrap();
    let guidance = world_ref.get::<&Guidance>(entity).unwrap();
    let missile_position = world_ref.get::<&Position>(entity).unwrap().0;
    let reticle_position =
        world::position(world_ref, guidance.targeting_reticle.id).unwrap();

    let drift = (reticle_position - (missile_position + guidance.intercept))
        .sqr_magnitude()
        .sqrt();
    assert!(drift < 10.0, "reticle {drift:.1}m off the solved point");
}

#[test]
fn test_target_despawn_keeps_last_solution_flying() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let first = start_engagement(&mut engine);
    let missile = first.missiles[0].id;
    let target = first.targets[0].id;

    engine.queue_command(Command::SetSeeking {
        missile,
        seeking: true,
    });
    for _ in 0..49 {
        engine.tick();
    }
    let last = engine.tick();
    let thrust_before = last.missiles[0].thrust;
    assert!(thrust_before != Vec3d::ZERO);

    let target_entity = world::entity(target).unwrap();
    engine.world_mut().despawn(target_entity).unwrap();

    // The tick survives the stale reference and keeps flying the cached
    // solution.
    let snapshot = engine.tick();
    assert_eq!(snapshot.missiles[0].thrust, thrust_before);
    assert!(snapshot.targets.is_empty());
}

#[test]
fn test_set_target_rewires_guidance() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let first = start_engagement(&mut engine);
    let missile = first.missiles[0].id;

    let new_target = crate::world_setup::spawn_target(
        engine.world_mut(),
        Vec3::new(0.0, -3000.0, 0.0),
        Vec3d::new(10.0, 0.0, 0.0),
    );
    engine.queue_command(Command::SetTarget {
        missile,
        target: new_target,
    });
    engine.tick();

    let entity = world::entity(missile).unwrap();
    let guidance = engine.world().get::<&Guidance>(entity).unwrap();
    assert_eq!(guidance.target.id, new_target);
}

#[test]
fn test_seeking_toggle_resets_timer() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let first = start_engagement(&mut engine);
    let missile = first.missiles[0].id;

    engine.queue_command(Command::SetSeeking {
        missile,
        seeking: true,
    });
    for _ in 0..20 {
        engine.tick();
    }

    engine.queue_command(Command::SetSeeking {
        missile,
        seeking: false,
    });
    let snapshot = engine.tick();
    assert_eq!(snapshot.missiles[0].seek_timer, 0.0);
    assert!(!snapshot.missiles[0].seeking);
}
