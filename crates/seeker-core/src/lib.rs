//! Core types and definitions for the SEEKER guidance simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vector math, entity handles, components, commands, snapshot views,
//! and constants. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod math;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
