//! Game of Life update rule and the generation stepper

use super::error::{LifeError, Result};
use super::Grid;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Computes successive generations of a grid.
///
/// Each row of the next generation is computed independently from a shared,
/// read-only borrow of the current grid, so rows are spread across rayon
/// workers. By default the global rayon pool is used; [`Stepper::with_workers`]
/// gives the stepper its own pool.
#[derive(Debug, Default)]
pub struct Stepper {
    pool: Option<ThreadPool>,
}

impl Stepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stepper backed by a dedicated pool of `workers` threads
    pub fn with_workers(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(LifeError::InvalidWorkerCount(workers));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("life-worker-{}", i))
            .build()?;
        Ok(Self { pool: Some(pool) })
    }

    /// Number of threads the per-cell loop may use
    pub fn workers(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Next state of a single cell.
    ///
    /// Matches the standard rule (survive on 2 or 3, birth on 3) for every
    /// neighbor count in `0..=8`.
    #[inline]
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        if alive {
            if neighbors <= 1 {
                false
            } else if neighbors >= 4 {
                false
            } else {
                true
            }
        } else {
            neighbors == 3
        }
    }

    /// Compute the next generation
    pub fn next(&self, current: &Grid) -> Grid {
        match &self.pool {
            Some(pool) => pool.install(|| Self::next_parallel(current)),
            None => Self::next_parallel(current),
        }
    }

    /// Compute the next generation on the calling thread.
    ///
    /// Reference form of [`Stepper::next`]; both produce identical grids.
    pub fn next_serial(current: &Grid) -> Grid {
        let (width, height) = (current.width(), current.height());
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Self::cell_next(current, x, y));
            }
        }
        Grid::from_flat(width, height, cells)
    }

    /// Apply `generations` steps in sequence
    pub fn advance(&self, mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = self.next(&grid);
        }
        grid
    }

    fn next_parallel(current: &Grid) -> Grid {
        let (width, height) = (current.width(), current.height());
        let cells: Vec<bool> = (0..height)
            .into_par_iter()
            .flat_map_iter(|y| (0..width).map(move |x| Self::cell_next(current, x, y)))
            .collect();
        Grid::from_flat(width, height, cells)
    }

    #[inline]
    fn cell_next(current: &Grid, x: usize, y: usize) -> bool {
        let alive = current.is_alive(x as isize, y as isize);
        Self::next_state(alive, current.count_neighbors(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::create_empty(width, height);
        for &(x, y) in alive {
            grid.set(x, y, true).unwrap();
        }
        grid
    }

    #[test]
    fn test_still_life_block() {
        let grid = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let evolved = Stepper::new().next(&grid);
        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let stepper = Stepper::new();

        let evolved = stepper.next(&horizontal);
        assert_eq!(evolved, vertical);

        let evolved_twice = stepper.next(&evolved);
        assert_eq!(evolved_twice, horizontal);
    }

    #[test]
    fn test_rule_truth_table() {
        for neighbors in 0..=8u8 {
            assert_eq!(
                Stepper::next_state(true, neighbors),
                neighbors == 2 || neighbors == 3,
                "alive cell with {} neighbors",
                neighbors
            );
            assert_eq!(
                Stepper::next_state(false, neighbors),
                neighbors == 3,
                "dead cell with {} neighbors",
                neighbors
            );
        }
    }

    /// Place a cell at the center of a 3x3 grid with `n` of its neighbors alive
    fn center_fixture(center: bool, n: usize) -> Grid {
        const RING: [(usize, usize); 8] = [
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 1),
        ];
        let mut grid = grid_with(3, 3, &RING[..n]);
        grid.set(1, 1, center).unwrap();
        grid
    }

    #[test]
    fn test_birth_and_survival_from_fixtures() {
        let stepper = Stepper::new();
        for n in 0..=8 {
            let dead = center_fixture(false, n);
            assert_eq!(dead.count_neighbors(1, 1) as usize, n);
            assert_eq!(stepper.next(&dead).is_alive(1, 1), n == 3, "birth with {}", n);

            let alive = center_fixture(true, n);
            assert_eq!(
                stepper.next(&alive).is_alive(1, 1),
                n == 2 || n == 3,
                "survival with {}",
                n
            );
        }
    }

    #[test]
    fn test_empty_grid() {
        let stepper = Stepper::new();
        for (w, h) in [(0, 0), (0, 4), (4, 0)] {
            let next = stepper.next(&Grid::create_empty(w, h));
            assert_eq!((next.width(), next.height()), (w, h));
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let grid = Grid::create_random(64, 37, Some(7)).unwrap();
        let stepper = Stepper::new();
        let mut parallel = grid.clone();
        let mut serial = grid;
        for _ in 0..10 {
            parallel = stepper.next(&parallel);
            serial = Stepper::next_serial(&serial);
            assert_eq!(parallel, serial);
        }
    }

    #[test]
    fn test_dedicated_pool() {
        let stepper = Stepper::with_workers(3).unwrap();
        assert_eq!(stepper.workers(), 3);

        let grid = Grid::create_random(30, 30, Some(11)).unwrap();
        assert_eq!(stepper.next(&grid), Stepper::new().next(&grid));
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(matches!(
            Stepper::with_workers(0),
            Err(LifeError::InvalidWorkerCount(0))
        ));
    }

    #[test]
    fn test_advance() {
        let blinker = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let stepper = Stepper::new();
        assert_eq!(stepper.advance(blinker.clone(), 0), blinker);
        assert_eq!(stepper.advance(blinker.clone(), 4), blinker);
        assert_ne!(stepper.advance(blinker.clone(), 3), blinker);
    }
}
