//! Generation loop driving a grid through successive steps

use crate::config::Settings;
use crate::game_of_life::{Grid, Seeder, Stepper};
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// Owns the latest generation of a run.
///
/// Only the current grid is kept. Each step replaces it wholesale, so the
/// loop can be stopped between any two steps.
#[derive(Debug)]
pub struct Simulation {
    current: Grid,
    generation: usize,
    stepper: Stepper,
}

/// What happened during a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub generation: usize,
    pub population: usize,
    /// Whether the new generation differs from the previous one
    pub changed: bool,
    pub elapsed: Duration,
}

/// Outcome of [`Simulation::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generations_run: usize,
    pub stopped_static: bool,
    pub elapsed: Duration,
}

impl Simulation {
    pub fn new(initial: Grid, stepper: Stepper) -> Self {
        Self {
            current: initial,
            generation: 0,
            stepper,
        }
    }

    /// Seed generation zero and build the stepper described by `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let initial = Seeder::new(settings.pattern)
            .create(&settings.seed)
            .context("Failed to seed initial generation")?;

        let stepper = match settings.simulation.workers {
            Some(workers) => {
                Stepper::with_workers(workers).context("Failed to create stepper")?
            }
            None => Stepper::new(),
        };

        Ok(Self::new(initial, stepper))
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn into_grid(self) -> Grid {
        self.current
    }

    /// Advance one generation
    pub fn step(&mut self) -> StepReport {
        let start = Instant::now();
        let next = self.stepper.next(&self.current);
        let elapsed = start.elapsed();

        let changed = next != self.current;
        self.current = next;
        self.generation += 1;

        StepReport {
            generation: self.generation,
            population: self.current.population(),
            changed,
            elapsed,
        }
    }

    /// Step up to `limit` generations, calling `observer` after each one.
    ///
    /// With `stop_when_static` the run ends at the first step that leaves the
    /// grid unchanged.
    pub fn run<F>(&mut self, limit: usize, stop_when_static: bool, mut observer: F) -> RunSummary
    where
        F: FnMut(&Grid, &StepReport),
    {
        let start = Instant::now();
        let mut generations_run = 0;
        let mut stopped_static = false;

        for _ in 0..limit {
            let report = self.step();
            generations_run += 1;
            observer(&self.current, &report);

            if stop_when_static && !report.changed {
                stopped_static = true;
                break;
            }
        }

        RunSummary {
            generations_run,
            stopped_static,
            elapsed: start.elapsed(),
        }
    }
}
