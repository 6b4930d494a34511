//! External commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Ownership of
//! the seeking flag lives here, on the gameplay side — the guidance system
//! only reads it.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// All possible external actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Spawn the demo engagement (one missile, one target, reticles).
    StartEngagement,
    /// Enable or disable active guidance on a missile.
    SetSeeking { missile: EntityId, seeking: bool },
    /// Re-assign a missile's pursuit target.
    SetTarget { missile: EntityId, target: EntityId },
}
