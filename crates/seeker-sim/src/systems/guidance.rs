//! Guidance system — runs the per-missile control loop over the world.
//!
//! Two phases to keep hecs borrows simple: a read-only query phase that runs
//! the pure guidance step against a [`WorldOracle`] and collects results, and
//! an apply phase that writes guidance state, thrust commands, and reticle
//! positions back.

use hecs::World;

use seeker_core::components::{Guidance, Missile, Position, Thrust};

use crate::guidance::{guide, GuidanceOutput};
use crate::oracle::WorldOracle;
use crate::world;

/// Run one guidance tick for every missile.
pub fn run(world_ref: &mut World, dt: f32) {
    let mut updates: Vec<(hecs::Entity, Guidance, GuidanceOutput)> = Vec::new();

    {
        let oracle = WorldOracle::new(world_ref);
        let mut query = world_ref.query::<(&Missile, &Guidance, &Position)>();
        for (entity, (_missile, guidance, position)) in query.iter() {
            let mut state = guidance.clone();
            let output = guide(
                &mut state,
                world::id_of(entity),
                position.0,
                dt,
                &oracle,
                |reference| world::is_alive(world_ref, reference),
            );
            updates.push((entity, state, output));
        }
    }

    for (entity, state, output) in updates {
        if let Ok(mut guidance) = world_ref.get::<&mut Guidance>(entity) {
            *guidance = state;
        }

        if let Some(command) = output.thrust {
            if let Ok(mut thrust) = world_ref.get::<&mut Thrust>(entity) {
                thrust.0 = command;
            }
        }

        let placements = [output.targeting_reticle, output.aiming_reticle];
        for (id, new_position) in placements.into_iter().flatten() {
            if let Some(reticle) = world::entity(id) {
                if let Ok(mut position) = world_ref.get::<&mut Position>(reticle) {
                    position.0 = new_position;
                }
            }
        }
    }
}
