//! Entity spawn factories for setting up the simulation world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use seeker_core::components::*;
use seeker_core::constants::*;
use seeker_core::math::{Vec3, Vec3d};
use seeker_core::types::{EntityId, EntityRef};

use crate::world;

/// Spawn a missile with default tuning, wired to a target and two fresh
/// reticle markers. Guidance starts idle — seeking is enabled by command.
pub fn spawn_missile(world_ref: &mut World, position: Vec3, target: EntityId) -> EntityId {
    let targeting_reticle = spawn_reticle(world_ref);
    let aiming_reticle = spawn_reticle(world_ref);

    let guidance = Guidance {
        target: EntityRef::new(target),
        targeting_reticle: EntityRef::new(targeting_reticle),
        aiming_reticle: EntityRef::new(aiming_reticle),
        ..Default::default()
    };

    let entity = world_ref.spawn((
        Missile,
        Position(position),
        Velocity(Vec3d::ZERO),
        Thrust(Vec3d::ZERO),
        Body {
            mass: DEFAULT_MISSILE_MASS,
        },
        guidance,
    ));
    world::id_of(entity)
}

/// Spawn a constant-velocity target.
pub fn spawn_target(world_ref: &mut World, position: Vec3, velocity: Vec3d) -> EntityId {
    let entity = world_ref.spawn((TargetTrack, Position(position), Velocity(velocity)));
    world::id_of(entity)
}

/// Spawn a reticle marker at the origin.
pub fn spawn_reticle(world_ref: &mut World) -> EntityId {
    let entity = world_ref.spawn((Reticle, Position(Vec3::ZERO)));
    world::id_of(entity)
}

/// Set up the demo engagement: a missile at the origin and a crossing target
/// at jittered range. Returns (missile, target).
pub fn setup_engagement(world_ref: &mut World, rng: &mut ChaCha8Rng) -> (EntityId, EntityId) {
    let range: f32 = rng.gen_range(1_500.0..2_500.0);
    let bearing: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let crossing_speed: f64 = rng.gen_range(30.0..80.0);

    let target_position = Vec3::new(range * bearing.cos(), range * bearing.sin(), 0.0);
    // Perpendicular to the line of sight, so the engagement is a crossing
    // shot rather than a tail chase.
    let target_velocity =
        Vec3d::new(-bearing.sin() as f64, bearing.cos() as f64, 0.0) * crossing_speed;

    let target = spawn_target(world_ref, target_position, target_velocity);
    let missile = spawn_missile(world_ref, Vec3::ZERO, target);
    (missile, target)
}
