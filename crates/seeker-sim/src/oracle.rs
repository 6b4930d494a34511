//! Targeting oracle — the physics boundary guidance calls each tick.
//!
//! The controller only ever talks to the [`TargetingOracle`] trait, so it can
//! be exercised against stubs returning fixed vectors. [`WorldOracle`] is the
//! production implementation: a kinematic solver over the hecs world that
//! projects targets along straight-line (constant velocity) paths and models
//! the missile as a constant-magnitude, variable-direction thrust.

use hecs::World;

use seeker_core::components::Body;
use seeker_core::math::{Vec3, Vec3d};
use seeker_core::types::EntityId;

use crate::world;

/// Result of an intercept solve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InterceptSolution {
    /// Solved intercept point, relative to the missile.
    pub intercept: Vec3,
    /// Estimated flight time to that point (seconds).
    pub time_to_intercept: f32,
}

/// Separation between two entities.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Separation {
    /// Unit direction from the first entity toward the second (zero when
    /// they coincide).
    pub direction: Vec3,
    /// Distance in meters.
    pub distance: f32,
}

/// Synchronous physics queries the guidance controller depends on.
///
/// All calls take opaque entity handles and answer for the current tick only.
/// The solver is advisory about its own convergence: hitting the iteration
/// cap still returns the best estimate, and the caller accepts it as-is.
pub trait TargetingOracle {
    /// Solve for the point where constant-magnitude thrust from `missile`
    /// meets `target`'s projected path. `None` only when the query is
    /// degenerate (dead entity, zero separation, no achievable acceleration).
    fn solve_intercept(
        &self,
        missile: EntityId,
        target: EntityId,
        thrust: f64,
        tolerance: f32,
        max_iterations: usize,
    ) -> Option<InterceptSolution>;

    /// Lateral acceleration command of a proportional-navigation law:
    /// line-of-sight rotation rate scaled by `gain`, in thrust units.
    fn proportional_navigation(&self, missile: EntityId, target: EntityId, gain: f64) -> Vec3d;

    /// Maximum acceleration achievable at the given thrust.
    fn local_acceleration(&self, missile: EntityId, thrust: f64) -> f64;

    /// Current velocity of an entity.
    fn velocity(&self, missile: EntityId) -> Vec3d;

    /// Direction and distance from `missile` to `target`.
    fn separation(&self, missile: EntityId, target: EntityId) -> Separation;
}

/// Kinematic [`TargetingOracle`] over the live hecs world.
///
/// Borrows the world read-only for one tick; construct it fresh inside each
/// system invocation.
pub struct WorldOracle<'w> {
    world: &'w World,
}

impl<'w> WorldOracle<'w> {
    pub fn new(world: &'w World) -> Self {
        Self { world }
    }
}

impl TargetingOracle for WorldOracle<'_> {
    fn solve_intercept(
        &self,
        missile: EntityId,
        target: EntityId,
        thrust: f64,
        tolerance: f32,
        max_iterations: usize,
    ) -> Option<InterceptSolution> {
        let missile_pos = world::position(self.world, missile)?;
        let missile_vel = world::velocity(self.world, missile)?;
        let target_pos = world::position(self.world, target)?;
        let target_vel = world::velocity(self.world, target)?;

        let acceleration = self.local_acceleration(missile, thrust);
        let mut separation = target_pos - missile_pos;
        if separation == Vec3::ZERO || acceleration <= 0.0 {
            return None;
        }

        // Fixed-point refinement: solve time-of-flight against the current
        // estimate of the intercept point, re-project the target, repeat
        // until the point stops moving (or the iteration cap is hit — the
        // caller accepts the best estimate either way).
        let tolerance_sqrd = tolerance * tolerance;
        let mut time_to_intercept = 0.0f32;
        let mut iteration = 0;
        loop {
            let range = separation.sqr_magnitude().sqrt();
            if range == 0.0 {
                break;
            }

            let relative_velocity = missile_vel - target_vel;
            let approach_speed =
                relative_velocity.dot(Vec3d::from(separation.normalized())) as f32;

            // Time to close `range` under constant acceleration:
            //   0.5*a*t^2 + v*t - range = 0
            let accel = acceleration as f32;
            let initial_guess = 0.5 * range
                / (approach_speed
                    + (approach_speed * approach_speed + 2.0 * accel * range).sqrt());
            time_to_intercept = solve_newton(
                |t| 0.5 * accel * t * t + approach_speed * t - range,
                |t| accel * t + approach_speed,
                initial_guess,
                0.01 * initial_guess,
                5,
            );

            // Target's actual position at the solved time of flight.
            let predicted =
                target_pos + (target_vel * time_to_intercept as f64).to_vec3();

            // Targeting delta: how far the solved point moved this iteration.
            let new_separation = predicted - missile_pos;
            let delta_sqrd = (new_separation - separation).sqr_magnitude();
            separation = new_separation;

            iteration += 1;
            if iteration >= max_iterations || delta_sqrd <= tolerance_sqrd {
                break;
            }
        }

        Some(InterceptSolution {
            intercept: separation,
            time_to_intercept,
        })
    }

    fn proportional_navigation(&self, missile: EntityId, target: EntityId, gain: f64) -> Vec3d {
        let (Some(missile_pos), Some(missile_vel), Some(target_pos), Some(target_vel)) = (
            world::position(self.world, missile),
            world::velocity(self.world, missile),
            world::position(self.world, target),
            world::velocity(self.world, target),
        ) else {
            return Vec3d::ZERO;
        };

        let relative_position = target_pos - missile_pos;
        let relative_velocity = target_vel - missile_vel;
        let velocity_direction = missile_vel.normalized();

        // Line-of-sight rotation rate: omega = (r x v_rel) / |r|^2.
        // A zero range saturates the divide, which zeroes the command.
        let rotation = Vec3d::from(relative_position).cross(relative_velocity)
            / relative_position.sqr_magnitude() as f64;

        let closing_speed = relative_velocity.sqr_magnitude().sqrt();
        velocity_direction.cross(rotation) * (-gain * closing_speed)
    }

    fn local_acceleration(&self, missile: EntityId, thrust: f64) -> f64 {
        let Some(e) = world::entity(missile) else {
            return 0.0;
        };
        match self.world.get::<&Body>(e) {
            Ok(body) if body.mass > 0.0 => thrust / body.mass,
            _ => 0.0,
        }
    }

    fn velocity(&self, missile: EntityId) -> Vec3d {
        world::velocity(self.world, missile).unwrap_or(Vec3d::ZERO)
    }

    fn separation(&self, missile: EntityId, target: EntityId) -> Separation {
        let (Some(missile_pos), Some(target_pos)) = (
            world::position(self.world, missile),
            world::position(self.world, target),
        ) else {
            return Separation::default();
        };

        let offset = target_pos - missile_pos;
        Separation {
            direction: offset.normalized(),
            distance: offset.sqr_magnitude().sqrt(),
        }
    }
}

/// Newton-Raphson root solve. Low iteration count — favours speed over
/// accuracy; returns the current estimate when the derivative vanishes.
fn solve_newton(
    f: impl Fn(f32) -> f32,
    f_prime: impl Fn(f32) -> f32,
    initial_guess: f32,
    tolerance: f32,
    max_iterations: usize,
) -> f32 {
    let mut x = initial_guess;
    for _ in 0..max_iterations {
        let slope = f_prime(x);
        if slope == 0.0 {
            break;
        }
        let step = f(x) / slope;
        x -= step;
        if step.abs() <= tolerance {
            break;
        }
    }
    x
}
