//! ECS components for simulation entities.
//!
//! Components are plain data structs with no behavior.
//! Guidance logic lives in the sim crate's systems, not here.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::math::{Vec3, Vec3d};
use crate::types::EntityRef;

/// Marker for missile entities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Missile;

/// Marker for target entities a missile can pursue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetTrack;

/// Marker for reticle entities — cosmetic markers repositioned each tick to
/// show a computed targeting point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reticle;

/// Rendering-space position (meters, Cartesian).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Physical velocity (m/s). Double precision — integrates every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3d);

/// The thrust command most recently issued by guidance (force units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Thrust(pub Vec3d);

/// Physical body properties.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    /// Mass in localized units. Zero mass means no achievable acceleration.
    pub mass: f64,
}

/// Per-missile guidance state and tuning.
///
/// The `seeking` flag is owned by gameplay logic (commands), not by the
/// guidance system itself. Everything under "cached solution" is refreshed by
/// the guidance system and carries the most recent intercept solve between
/// recomputes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guidance {
    /// Whether active guidance is enabled.
    pub seeking: bool,
    /// Counts up while seeking; an intercept solve fires when it rises above
    /// zero, and each solve decrements it by `time_to_intercept *
    /// recompute_factor`. Deliberately unclamped: a large recompute factor
    /// can leave it negative for several ticks, skipping solves.
    pub seek_timer: f32,

    /// The entity being pursued.
    pub target: EntityRef,
    /// Marker placed at the solved intercept point.
    pub targeting_reticle: EntityRef,
    /// Marker placed along the blended thrust direction.
    pub aiming_reticle: EntityRef,

    // --- Cached solution ---
    /// Solved intercept point, relative to the missile.
    pub intercept: Vec3,
    /// Estimated flight time to the intercept point (seconds).
    pub time_to_intercept: f32,
    /// Last blended thrust direction (unit vector, or zero before the first
    /// solve). Thrust is issued from this every seeking tick, whether or not
    /// a solve ran.
    pub thrust_direction: Vec3,

    // --- Tuning (constant for the component's lifetime) ---
    /// Engine thrust magnitude (force units).
    pub engine_thrust: f64,
    /// Intercept-point tolerance (meters).
    pub targeting_tolerance: f32,
    /// Iteration cap for the intercept solve.
    pub max_solver_iterations: usize,
    /// Proportional-navigation gain.
    pub pn_gain: f64,
    /// Seek-timer decrement scale (see `seek_timer`).
    pub recompute_factor: f32,
}

impl Default for Guidance {
    fn default() -> Self {
        Self {
            seeking: false,
            seek_timer: 0.0,
            target: EntityRef::NULL,
            targeting_reticle: EntityRef::NULL,
            aiming_reticle: EntityRef::NULL,
            intercept: Vec3::ZERO,
            time_to_intercept: 0.0,
            thrust_direction: Vec3::ZERO,
            engine_thrust: DEFAULT_ENGINE_THRUST,
            targeting_tolerance: DEFAULT_TARGETING_TOLERANCE,
            max_solver_iterations: DEFAULT_MAX_SOLVER_ITERATIONS,
            pn_gain: DEFAULT_PN_GAIN,
            recompute_factor: DEFAULT_RECOMPUTE_FACTOR,
        }
    }
}
