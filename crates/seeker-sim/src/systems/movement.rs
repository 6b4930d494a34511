//! Kinematic integration system.
//!
//! Thrust accelerates bodies in double precision, then velocity integrates
//! into the rendering-grade position with an explicit narrowing per tick.

use hecs::World;

use seeker_core::components::{Body, Position, Thrust, Velocity};

/// Integrate thrust into velocity, then velocity into position.
pub fn run(world: &mut World, dt: f32) {
    let dt_d = dt as f64;

    for (_entity, (thrust, body, velocity)) in
        world.query_mut::<(&Thrust, &Body, &mut Velocity)>()
    {
        if body.mass > 0.0 {
            velocity.0 = velocity.0 + (thrust.0 / body.mass) * dt_d;
        }
    }

    for (_entity, (velocity, position)) in world.query_mut::<(&Velocity, &mut Position)>() {
        position.0 = position.0 + (velocity.0 * dt_d).to_vec3();
    }
}
