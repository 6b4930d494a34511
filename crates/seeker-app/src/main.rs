//! Headless runner: spins up the demo engagement and streams JSON snapshots
//! to stdout until the missile passes its target (or a tick cap).
//!
//! Usage: `seeker-app [seed] [max_ticks]`

use std::process::ExitCode;

use seeker_core::commands::Command;
use seeker_core::constants::TICK_RATE;
use seeker_sim::engine::{SimConfig, SimulationEngine};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next().map(|s| s.parse()).transpose() {
        Ok(seed) => seed.unwrap_or(42),
        Err(_) => {
            eprintln!("usage: seeker-app [seed] [max_ticks]");
            return ExitCode::FAILURE;
        }
    };
    let max_ticks: u64 = match args.next().map(|s| s.parse()).transpose() {
        Ok(ticks) => ticks.unwrap_or(60 * TICK_RATE as u64),
        Err(_) => {
            eprintln!("usage: seeker-app [seed] [max_ticks]");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    });

    engine.queue_command(Command::StartEngagement);
    let first = engine.tick();
    let missile = first.missiles[0].id;
    log::info!("engagement started: missile {missile:?}, seed {seed}");

    engine.queue_command(Command::SetSeeking {
        missile,
        seeking: true,
    });

    let mut closest = f32::MAX;
    for _ in 0..max_ticks {
        let snapshot = engine.tick();

        let range = match (snapshot.missiles.first(), snapshot.targets.first()) {
            (Some(m), Some(t)) => (t.position - m.position).sqr_magnitude().sqrt(),
            _ => break,
        };

        // One status line per second of sim time.
        if snapshot.time.tick % TICK_RATE as u64 == 0 {
            match serde_json::to_string(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("snapshot serialization failed: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }

        if range < closest {
            closest = range;
        } else if range > closest * 2.0 {
            // Passed the target and opening range again.
            break;
        }
    }

    log::info!("closest approach: {closest:.1} m");
    ExitCode::SUCCESS
}
