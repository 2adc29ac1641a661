//! Conway's Game of Life
//!
//! Grids, the generation stepper and initial-state seeding, plus the
//! configuration and display helpers used by the command line driver.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Grid, LifeError, PatternFormat, Seeder, Stepper};
pub use simulation::Simulation;

use anyhow::Result;

/// Seed a grid from `settings` and run it for the configured number of generations
pub fn run_to_completion(settings: &Settings) -> Result<Grid> {
    let mut simulation = Simulation::from_settings(settings)?;
    simulation.run(
        settings.simulation.generations,
        settings.simulation.stop_when_static,
        |_, _| {},
    );
    Ok(simulation.into_grid())
}
