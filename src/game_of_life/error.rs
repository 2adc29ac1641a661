//! Error types for grid construction, stepping and pattern loading

use thiserror::Error;

/// Errors raised by the simulation core
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("invalid grid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { width: usize, height: usize },

    #[error("malformed pattern: {0}")]
    MalformedPattern(String),

    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("{pattern_width}x{pattern_height} pattern does not fit a {width}x{height} board at ({x}, {y})")]
    DoesNotFit {
        pattern_width: usize,
        pattern_height: usize,
        width: usize,
        height: usize,
        x: usize,
        y: usize,
    },

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    #[error("failed to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, LifeError>;
