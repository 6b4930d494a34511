//! Simulation snapshot — the complete visible state emitted after each tick.

use serde::{Deserialize, Serialize};

use crate::math::{Vec3, Vec3d};
use crate::types::{EntityId, SimTime};

/// Complete simulation state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub missiles: Vec<MissileView>,
    pub targets: Vec<TargetView>,
    pub reticles: Vec<ReticleView>,
}

/// A missile's visible state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissileView {
    pub id: EntityId,
    pub position: Vec3,
    pub velocity: Vec3d,
    pub seeking: bool,
    pub seek_timer: f32,
    /// Estimated flight time to intercept from the last solve (seconds).
    pub time_to_intercept: f32,
    /// The thrust command in effect this tick.
    pub thrust: Vec3d,
}

/// A target's visible state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub id: EntityId,
    pub position: Vec3,
    pub velocity: Vec3d,
}

/// A reticle marker's visible state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReticleView {
    pub id: EntityId,
    pub position: Vec3,
}
