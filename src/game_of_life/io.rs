//! Text pattern parsing and file I/O for grids
//!
//! A pattern is one row per line. The alive glyph marks a live cell and every
//! other character is dead; line terminators are not part of a row.

use super::error::{LifeError, Result as LifeResult};
use super::patterns::NAMED_PATTERNS;
use super::Grid;
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Glyphs used to read and write text patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternFormat {
    pub alive: char,
    pub dead: char,
}

impl Default for PatternFormat {
    fn default() -> Self {
        Self {
            alive: '*',
            dead: '.',
        }
    }
}

impl PatternFormat {
    /// Parse a grid from pattern text.
    ///
    /// Height is the number of lines and width the length of the first line;
    /// every line must have that same length.
    pub fn parse(&self, content: &str) -> LifeResult<Grid> {
        let lines: Vec<&str> = content.lines().collect();

        let Some(first) = lines.first() else {
            return Err(LifeError::MalformedPattern(
                "pattern contains no rows".to_string(),
            ));
        };
        let width = first.chars().count();

        let rows = lines
            .iter()
            .enumerate()
            .map(|(row_idx, line)| {
                let row: Vec<bool> = line.chars().map(|ch| ch == self.alive).collect();
                if row.len() != width {
                    return Err(LifeError::MalformedPattern(format!(
                        "row {} has length {}, expected {} (all rows must have the same length)",
                        row_idx,
                        row.len(),
                        width
                    )));
                }
                Ok(row)
            })
            .collect::<LifeResult<Vec<_>>>()?;

        Grid::from_rows(rows)
    }

    /// Render a grid as pattern text, one newline-terminated line per row
    pub fn render(&self, grid: &Grid) -> String {
        if grid.width() == 0 {
            return "\n".repeat(grid.height());
        }
        grid.cells()
            .chunks(grid.width())
            .map(|row| {
                row.iter()
                    .map(|&alive| if alive { self.alive } else { self.dead })
                    .collect::<String>()
            })
            .map(|line| line + "\n")
            .join("")
    }
}

/// Load a grid from a pattern file
pub fn load_pattern_file<P: AsRef<Path>>(path: P, format: &PatternFormat) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    format
        .parse(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Save a grid to a pattern file
pub fn save_pattern_file<P: AsRef<Path>>(
    grid: &Grid,
    path: P,
    format: &PatternFormat,
) -> Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, format.render(grid))
        .with_context(|| format!("Failed to write pattern file: {}", path.as_ref().display()))?;

    Ok(())
}

/// File name used for a named pattern, e.g. `state_glider.txt`
pub fn pattern_file_name(name: &str) -> String {
    format!("state_{}.txt", name)
}

/// Write every named pattern into `output_dir`, returning the written paths
pub fn write_named_patterns<P: AsRef<Path>>(output_dir: P) -> Result<Vec<PathBuf>> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    NAMED_PATTERNS
        .iter()
        .map(|(name, text)| -> Result<PathBuf> {
            let path = dir.join(pattern_file_name(name));
            std::fs::write(&path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(path)
        })
        .collect()
}
