//! Simulation engine — the host loop's entry point.
//!
//! `SimulationEngine` owns the hecs ECS world, processes queued commands at
//! tick boundaries, runs guidance then movement, and produces a `SimSnapshot`
//! per tick. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use seeker_core::commands::Command;
use seeker_core::components::Guidance;
use seeker_core::constants::DT;
use seeker_core::state::SimSnapshot;
use seeker_core::types::{EntityId, EntityRef, SimTime};

use crate::systems;
use crate::world;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Seconds per tick.
    pub dt: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42, dt: DT }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    dt: f32,
    rng: ChaCha8Rng,
    command_queue: VecDeque<Command>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            dt: config.dt,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        systems::guidance::run(&mut self.world, self.dt);
        systems::movement::run(&mut self.world, self.dt);
        self.time.advance(self.dt);

        systems::snapshot::build_snapshot(&self.world, &self.time)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Direct world access (tests and host integration).
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for host-driven setup.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                Command::StartEngagement => {
                    world_setup::setup_engagement(&mut self.world, &mut self.rng);
                }
                Command::SetSeeking { missile, seeking } => {
                    self.with_guidance(missile, |guidance| guidance.seeking = seeking);
                }
                Command::SetTarget { missile, target } => {
                    self.with_guidance(missile, |guidance| {
                        guidance.target = EntityRef::new(target)
                    });
                }
            }
        }
    }

    fn with_guidance(&mut self, missile: EntityId, apply: impl FnOnce(&mut Guidance)) {
        let Some(entity) = world::entity(missile) else {
            log::warn!("command addressed malformed entity id {missile:?}");
            return;
        };
        match self.world.get::<&mut Guidance>(entity) {
            Ok(mut guidance) => apply(&mut guidance),
            Err(_) => log::warn!("command addressed non-missile entity {missile:?}"),
        }
    }
}
