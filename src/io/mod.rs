/// Command-line interface for building and printing grids
pub mod cli;
/// Grid limits and runtime defaults
pub mod configuration;
/// Error types for grid operations
pub mod error;
/// Text rendering of grids
pub mod render;
