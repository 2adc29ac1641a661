//! Output helpers for the command line driver

pub mod display;

pub use display::{format_grid_compact, format_grid_with_coords, format_stats, ColorOutput, FrameRenderer};
