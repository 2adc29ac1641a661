//! Well-known starting patterns, padded so they evolve without touching the edge

use super::error::{LifeError, Result};
use super::io::PatternFormat;
use super::Grid;

pub const BLOCK: &str = "\
....
.**.
.**.
....
";

pub const BLINKER: &str = "\
.....
.....
.***.
.....
.....
";

pub const TOAD: &str = "\
......
......
..***.
.***..
......
......
";

pub const BEACON: &str = "\
......
.**...
.**...
...**.
...**.
......
";

pub const GLIDER: &str = "\
.*.
..*
***
";

pub const PENTA_DECATHLON: &str = "\
..................
..................
..................
..................
......*....*......
....**.****.**....
......*....*......
..................
..................
..................
..................
";

/// Every named pattern with its text, in the default glyph format
pub static NAMED_PATTERNS: [(&str, &str); 6] = [
    ("block", BLOCK),
    ("blinker", BLINKER),
    ("toad", TOAD),
    ("beacon", BEACON),
    ("glider", GLIDER),
    ("penta_decathlon", PENTA_DECATHLON),
];

/// Names accepted by [`named`]
pub fn names() -> impl Iterator<Item = &'static str> {
    NAMED_PATTERNS.iter().map(|(name, _)| *name)
}

/// Look up a named pattern's text
pub fn text(name: &str) -> Option<&'static str> {
    NAMED_PATTERNS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, text)| *text)
}

/// Build the grid for a named pattern
pub fn named(name: &str) -> Result<Grid> {
    let text = text(name).ok_or_else(|| LifeError::UnknownPattern(name.to_string()))?;
    PatternFormat::default().parse(text)
}

/// Build a named pattern on a board of its own size or a larger one.
///
/// A missing dimension falls back to the pattern's own size and a missing
/// offset centers the pattern on that axis.
pub fn named_on(
    name: &str,
    width: Option<usize>,
    height: Option<usize>,
    x: Option<usize>,
    y: Option<usize>,
) -> Result<Grid> {
    let pattern = named(name)?;
    let width = width.unwrap_or(pattern.width());
    let height = height.unwrap_or(pattern.height());
    let x = x.unwrap_or(width.saturating_sub(pattern.width()) / 2);
    let y = y.unwrap_or(height.saturating_sub(pattern.height()) / 2);
    pattern.place_on(width, height, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Stepper;

    fn period_of(grid: &Grid, max: usize) -> Option<usize> {
        let stepper = Stepper::new();
        let mut current = grid.clone();
        for generation in 1..=max {
            current = stepper.next(&current);
            if current == *grid {
                return Some(generation);
            }
        }
        None
    }

    #[test]
    fn test_all_named_patterns_parse() {
        for name in names() {
            let grid = named(name).unwrap();
            assert!(grid.population() > 0, "{} is empty", name);
        }
    }

    #[test]
    fn test_unknown_pattern() {
        assert!(matches!(named("spaceship"), Err(LifeError::UnknownPattern(_))));
    }

    #[test]
    fn test_block_is_still_life() {
        assert_eq!(period_of(&named("block").unwrap(), 1), Some(1));
    }

    #[test]
    fn test_period_two_oscillators() {
        for name in ["blinker", "toad", "beacon"] {
            assert_eq!(period_of(&named(name).unwrap(), 4), Some(2), "{}", name);
        }
    }

    #[test]
    fn test_penta_decathlon_period() {
        assert_eq!(period_of(&named("penta_decathlon").unwrap(), 20), Some(15));
    }

    #[test]
    fn test_glider_travels_on_larger_board() {
        let start = named_on("glider", Some(10), Some(10), Some(1), Some(1)).unwrap();
        let stepper = Stepper::new();

        let mut current = start.clone();
        for shift in 1..=3 {
            current = stepper.advance(current, 4);
            let expected: Vec<_> = start
                .living_cells()
                .into_iter()
                .map(|(x, y)| (x + shift, y + shift))
                .collect();
            assert_eq!(current.living_cells(), expected, "after {} periods", shift);
        }
    }

    #[test]
    fn test_named_on_defaults() {
        assert_eq!(
            named_on("blinker", None, None, None, None).unwrap(),
            named("blinker").unwrap()
        );

        let centered = named_on("glider", Some(9), Some(7), None, None).unwrap();
        assert_eq!((centered.width(), centered.height()), (9, 7));
        assert_eq!(centered.living_cells()[0], (4, 2));

        assert!(matches!(
            named_on("toad", Some(4), None, None, None),
            Err(LifeError::DoesNotFit { .. })
        ));
    }

    #[test]
    fn test_glider_round_trip() {
        let format = PatternFormat::default();
        let glider = named("glider").unwrap();
        assert_eq!((glider.width(), glider.height()), (3, 3));
        assert_eq!(format.render(&glider), GLIDER);
    }
}
