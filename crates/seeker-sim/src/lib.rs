//! Headless guidance simulation engine for SEEKER.
//!
//! Owns the hecs ECS world, runs guidance and movement systems at a fixed
//! tick rate, and produces SimSnapshots for the host.

pub mod engine;
pub mod guidance;
pub mod oracle;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use seeker_core as core;

#[cfg(test)]
mod tests;
