//! Game of Life core functionality

pub mod error;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;
pub mod seeder;

pub use error::{LifeError, Result};
pub use grid::Grid;
pub use io::{load_pattern_file, save_pattern_file, write_named_patterns, PatternFormat};
pub use rules::Stepper;
pub use seeder::Seeder;
