//! Generation-zero construction

use super::error::Result as LifeResult;
use super::io::{load_pattern_file, PatternFormat};
use super::{patterns, Grid};
use crate::config::SeedConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Produces the initial grid of a run
pub struct Seeder {
    format: PatternFormat,
}

impl Default for Seeder {
    fn default() -> Self {
        Self::new(PatternFormat::default())
    }
}

impl Seeder {
    pub fn new(format: PatternFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &PatternFormat {
        &self.format
    }

    /// Random fill, see [`Grid::create_random`]
    pub fn random(&self, width: usize, height: usize, seed: Option<u64>) -> LifeResult<Grid> {
        Grid::create_random(width, height, seed)
    }

    /// Parse pattern text using this seeder's glyphs
    pub fn parse(&self, content: &str) -> LifeResult<Grid> {
        self.format.parse(content)
    }

    /// Load a pattern file using this seeder's glyphs
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Grid> {
        load_pattern_file(path, &self.format)
    }

    /// One of the built-in patterns; these always use the default glyphs
    pub fn named(&self, name: &str) -> LifeResult<Grid> {
        patterns::named(name)
    }

    /// Build the initial grid described by `config`
    pub fn create(&self, config: &SeedConfig) -> Result<Grid> {
        match config {
            SeedConfig::Random { width, height, seed } => self
                .random(*width, *height, *seed)
                .context("Failed to create random grid"),
            SeedConfig::File { path } => self.load(path),
            SeedConfig::Named {
                name,
                width,
                height,
                x,
                y,
            } => patterns::named_on(name, *width, *height, *x, *y)
                .with_context(|| format!("Failed to load named pattern '{}'", name)),
        }
    }
}
