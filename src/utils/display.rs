//! Display and output formatting utilities

use crate::config::RenderConfig;
use crate::game_of_life::Grid;
use itertools::Itertools;

/// Turns grids into terminal frames.
///
/// Remembers the last frame it produced so a driver can skip redrawing, or
/// stop, when nothing changed.
pub struct FrameRenderer {
    alive_glyph: String,
    dead_glyph: String,
    last_frame: Option<String>,
}

impl FrameRenderer {
    pub fn new(alive_glyph: impl Into<String>, dead_glyph: impl Into<String>) -> Self {
        Self {
            alive_glyph: alive_glyph.into(),
            dead_glyph: dead_glyph.into(),
            last_frame: None,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.alive_glyph.as_str(), config.dead_glyph.as_str())
    }

    /// Format a grid using this renderer's glyphs
    pub fn format(&self, grid: &Grid) -> String {
        (0..grid.height())
            .map(|y| {
                (0..grid.width())
                    .map(|x| {
                        if grid.is_alive(x as isize, y as isize) {
                            self.alive_glyph.as_str()
                        } else {
                            self.dead_glyph.as_str()
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
    }

    /// Produce the frame for `grid`, or `None` if it matches the previous frame
    pub fn render(&mut self, grid: &Grid) -> Option<String> {
        let frame = self.format(grid);
        if self.last_frame.as_deref() == Some(frame.as_str()) {
            return None;
        }
        self.last_frame = Some(frame.clone());
        Some(frame)
    }

    /// Forget the previous frame
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}

/// Format a grid in compact form
pub fn format_grid_compact(grid: &Grid) -> String {
    FrameRenderer::new("█", "·").format(grid) + "\n"
}

/// Format a grid with column and row coordinates
pub fn format_grid_with_coords(grid: &Grid) -> String {
    let mut output = String::new();

    output.push_str("   ");
    for x in 0..grid.width() {
        output.push_str(&format!("{:2} ", x));
    }
    output.push('\n');

    for y in 0..grid.height() {
        output.push_str(&format!("{:2} ", y));
        for x in 0..grid.width() {
            let symbol = if grid.is_alive(x as isize, y as isize) { '█' } else { '·' };
            output.push_str(&format!(" {} ", symbol));
        }
        output.push('\n');
    }

    output
}

/// One-line population summary
pub fn format_stats(grid: &Grid) -> String {
    let total = grid.width() * grid.height();
    let density = if total > 0 {
        grid.population() as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    format!(
        "{}x{} grid, {} living cells ({:.1}%)",
        grid.width(),
        grid.height(),
        grid.population(),
        density
    )
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
