//! Snapshot system: queries the ECS world and builds a complete SimSnapshot.
//!
//! Read-only — it never modifies the world.

use hecs::World;

use seeker_core::components::{Guidance, Missile, Position, Reticle, TargetTrack, Thrust, Velocity};
use seeker_core::state::{MissileView, ReticleView, SimSnapshot, TargetView};
use seeker_core::types::SimTime;

use crate::world;

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(world_ref: &World, time: &SimTime) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        missiles: build_missiles(world_ref),
        targets: build_targets(world_ref),
        reticles: build_reticles(world_ref),
    }
}

fn build_missiles(world_ref: &World) -> Vec<MissileView> {
    let mut missiles: Vec<MissileView> = world_ref
        .query::<(&Missile, &Position, &Velocity, &Guidance, &Thrust)>()
        .iter()
        .map(|(entity, (_m, position, velocity, guidance, thrust))| MissileView {
            id: world::id_of(entity),
            position: position.0,
            velocity: velocity.0,
            seeking: guidance.seeking,
            seek_timer: guidance.seek_timer,
            time_to_intercept: guidance.time_to_intercept,
            thrust: thrust.0,
        })
        .collect();
    missiles.sort_by_key(|view| view.id.0);
    missiles
}

fn build_targets(world_ref: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world_ref
        .query::<(&TargetTrack, &Position, &Velocity)>()
        .iter()
        .map(|(entity, (_t, position, velocity))| TargetView {
            id: world::id_of(entity),
            position: position.0,
            velocity: velocity.0,
        })
        .collect();
    targets.sort_by_key(|view| view.id.0);
    targets
}

fn build_reticles(world_ref: &World) -> Vec<ReticleView> {
    let mut reticles: Vec<ReticleView> = world_ref
        .query::<(&Reticle, &Position)>()
        .iter()
        .map(|(entity, (_r, position))| ReticleView {
            id: world::id_of(entity),
            position: position.0,
        })
        .collect();
    reticles.sort_by_key(|view| view.id.0);
    reticles
}
