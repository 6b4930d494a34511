//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state — all state lives in components.

pub mod guidance;
pub mod movement;
pub mod snapshot;
