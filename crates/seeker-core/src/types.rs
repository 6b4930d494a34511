//! Entity handles and simulation time.

use serde::{Deserialize, Serialize};

/// Opaque 64-bit entity handle.
///
/// Carries identity only — the entity it names may have been destroyed since
/// the handle was taken. Liveness is checked through the world, never assumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl EntityId {
    /// The null handle. Never names a live entity.
    pub const NULL: EntityId = EntityId(0);
}

/// Weak reference to another entity: an [`EntityId`] with no ownership.
///
/// Must be re-validated against the world before every dereference, because
/// the referenced entity may have despawned since the last tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: EntityId,
}

impl EntityRef {
    pub const NULL: EntityRef = EntityRef { id: EntityId::NULL };

    pub const fn new(id: EntityId) -> Self {
        Self { id }
    }

    pub fn is_null(&self) -> bool {
        self.id == EntityId::NULL
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}
