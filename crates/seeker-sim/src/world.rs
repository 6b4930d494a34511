//! Bridging between opaque [`EntityId`] handles and the hecs world.
//!
//! Guidance state holds weak 64-bit handles, never `hecs::Entity` values
//! directly, so liveness is always an explicit query answered here.

use hecs::World;

use seeker_core::components::{Position, Velocity};
use seeker_core::math::{Vec3, Vec3d};
use seeker_core::types::{EntityId, EntityRef};

/// Resolve a handle to a live hecs entity, if the id is well-formed.
pub fn entity(id: EntityId) -> Option<hecs::Entity> {
    hecs::Entity::from_bits(id.0)
}

/// The opaque handle for a hecs entity.
pub fn id_of(entity: hecs::Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

/// Whether a weak reference still names a live entity.
pub fn is_alive(world: &World, reference: EntityRef) -> bool {
    entity(reference.id).is_some_and(|e| world.contains(e))
}

/// Read an entity's position, if it is alive and has one.
pub fn position(world: &World, id: EntityId) -> Option<Vec3> {
    let e = entity(id)?;
    world.get::<&Position>(e).ok().map(|p| p.0)
}

/// Read an entity's velocity, if it is alive and has one.
pub fn velocity(world: &World, id: EntityId) -> Option<Vec3d> {
    let e = entity(id)?;
    world.get::<&Velocity>(e).ok().map(|v| v.0)
}
