//! Per-missile guidance control loop.
//!
//! Blends a pure-pursuit intercept direction with a proportional-navigation
//! correction, throttling the expensive intercept solve on a seek timer. The
//! step is a pure function over a [`TargetingOracle`] and a liveness query,
//! so it unit-tests against stub oracles returning fixed vectors.
//!
//! Two macro-states per missile: Idle (seeking disabled, timer held at zero)
//! and Seeking (timer running, periodic recompute). The transition between
//! them is owned by gameplay commands, never by this module.

use seeker_core::components::Guidance;
use seeker_core::math::{Vec3, Vec3d};
use seeker_core::types::{EntityId, EntityRef};

use crate::oracle::TargetingOracle;

/// What one guidance step wants written back to the world.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GuidanceOutput {
    /// Thrust command for this tick. `None` while idle — propulsion is owned
    /// elsewhere and this controller simply stops talking to it.
    pub thrust: Option<Vec3d>,
    /// New world position for the targeting reticle, if its reference held.
    pub targeting_reticle: Option<(EntityId, Vec3)>,
    /// New world position for the aiming reticle, if its reference held.
    pub aiming_reticle: Option<(EntityId, Vec3)>,
}

/// Advance one missile's guidance by one tick.
///
/// While seeking, a thrust command is issued every tick: freshly blended when
/// the target is alive, from the cached direction when it is not. Stale
/// references degrade gracefully — they are logged and the affected update is
/// skipped, never aborting the tick.
pub fn guide(
    guidance: &mut Guidance,
    missile: EntityId,
    missile_position: Vec3,
    dt: f32,
    oracle: &impl TargetingOracle,
    is_alive: impl Fn(EntityRef) -> bool,
) -> GuidanceOutput {
    if !guidance.seeking {
        guidance.seek_timer = 0.0;
        return GuidanceOutput::default();
    }

    guidance.seek_timer += dt;

    let target_alive = is_alive(guidance.target);
    if target_alive {
        if guidance.seek_timer > 0.0 {
            if let Some(solution) = oracle.solve_intercept(
                missile,
                guidance.target.id,
                guidance.engine_thrust,
                guidance.targeting_tolerance,
                guidance.max_solver_iterations,
            ) {
                guidance.intercept = solution.intercept;
                guidance.time_to_intercept = solution.time_to_intercept;
                // Throttle: push the timer down by a fraction of the flight
                // time. Unclamped on purpose — see the component docs.
                guidance.seek_timer -=
                    solution.time_to_intercept * guidance.recompute_factor;
            }
        }

        let pn_acceleration =
            oracle.proportional_navigation(missile, guidance.target.id, guidance.pn_gain);
        let local_acceleration =
            oracle.local_acceleration(missile, guidance.engine_thrust);

        // Unitless maneuver bias: how hard the target is turning relative to
        // our own authority. With no authority at all, any maneuver
        // dominates.
        let pn_render = pn_acceleration.to_vec3();
        let bias = if local_acceleration == 0.0 {
            1.0
        } else {
            (pn_render.sqr_magnitude().sqrt() / local_acceleration as f32).clamp(0.0, 1.0)
        };

        guidance.thrust_direction = (guidance.intercept.normalized() * (1.0 - bias)
            + pn_render.normalized() * bias)
            .normalized();
    } else {
        log::warn!(
            "guidance target {:?} is no longer valid; flying last solution",
            guidance.target.id
        );
    }

    let thrust = Vec3d::from(guidance.thrust_direction) * guidance.engine_thrust;

    let mut output = GuidanceOutput {
        thrust: Some(thrust),
        ..Default::default()
    };

    // Reticles are cosmetic: place them only when there was a live target to
    // solve against, and report (without aborting) when a marker is gone.
    if target_alive {
        if is_alive(guidance.targeting_reticle) {
            output.targeting_reticle = Some((
                guidance.targeting_reticle.id,
                missile_position + guidance.intercept,
            ));
        } else {
            log::error!("targeting reticle {:?} not found", guidance.targeting_reticle.id);
        }

        if is_alive(guidance.aiming_reticle) {
            let range = guidance.intercept.sqr_magnitude().sqrt();
            output.aiming_reticle = Some((
                guidance.aiming_reticle.id,
                missile_position + guidance.thrust_direction * range,
            ));
        } else {
            log::error!("aiming reticle {:?} not found", guidance.aiming_reticle.id);
        }
    }

    output
}
