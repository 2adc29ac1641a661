//! Grid representation and utilities for Game of Life

use super::error::{LifeError, Result};
use super::io::PatternFormat;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative offsets of the eight Moore neighbors
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// A fixed-size field of cells, `true` meaning alive.
///
/// Cells are stored row-major. Anything outside `[0, width) x [0, height)` is
/// permanently dead, there is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

/// Unchecked serialized form of a [`Grid`]
#[derive(Deserialize)]
struct GridData {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl TryFrom<GridData> for Grid {
    type Error = LifeError;

    fn try_from(data: GridData) -> Result<Self> {
        let expected = data.width.checked_mul(data.height);
        if expected != Some(data.cells.len()) {
            return Err(LifeError::MalformedPattern(format!(
                "{}x{} grid needs {} cells, found {}",
                data.width,
                data.height,
                data.width.saturating_mul(data.height),
                data.cells.len()
            )));
        }
        Ok(Self {
            width: data.width,
            height: data.height,
            cells: data.cells,
        })
    }
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn create_empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a grid where each cell is alive with probability 0.5.
    ///
    /// The same `seed` always produces the same grid. Without a seed the
    /// generator is seeded from OS entropy.
    pub fn create_random(width: usize, height: usize, seed: Option<u64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }

        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let cells = (0..width * height).map(|_| rng.gen::<bool>()).collect();

        Ok(Self { width, height, cells })
    }

    /// Create a grid from rows of cells
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        // Verify all rows have the same length
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LifeError::MalformedPattern(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a grid from an already flattened, row-major cell buffer
    pub(crate) fn from_flat(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether the cell at `(x, y)` is alive. Out-of-bounds coordinates are dead.
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        x < self.width && y < self.height && self.cells[self.index(x, y)]
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.cells[idx] = alive;
        Ok(())
    }

    /// Copy this grid onto an empty `width` x `height` board with its
    /// top-left corner at `(x, y)`
    pub fn place_on(&self, width: usize, height: usize, x: usize, y: usize) -> Result<Grid> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }
        let fits_x = x.checked_add(self.width).is_some_and(|right| right <= width);
        let fits_y = y.checked_add(self.height).is_some_and(|bottom| bottom <= height);
        if !fits_x || !fits_y {
            return Err(LifeError::DoesNotFit {
                pattern_width: self.width,
                pattern_height: self.height,
                width,
                height,
                x,
                y,
            });
        }

        let mut board = Grid::create_empty(width, height);
        for (px, py) in self.living_cells() {
            let idx = board.index(x + px, y + py);
            board.cells[idx] = true;
        }
        Ok(board)
    }

    /// Like [`Grid::place_on`], centered on the board
    pub fn center_on(&self, width: usize, height: usize) -> Result<Grid> {
        let x = width.saturating_sub(self.width) / 2;
        let y = height.saturating_sub(self.height) / 2;
        self.place_on(width, height, x, y)
    }

    /// Count living cells among the eight neighbors of `(x, y)`
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as isize, y as isize);
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dx, dy)| self.is_alive(x + dx, y + dy))
            .count() as u8
    }

    /// Coordinates of all living cells, in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(|(i, _)| (i % self.width, i / self.width))
            .collect()
    }

    /// Count total living cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check whether no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&PatternFormat::default().render(self))
    }
}
