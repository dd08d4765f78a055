//! Spatial data structures for tile grids
//!
//! This module contains:
//! - The fixed-size grid and its row/column views
//! - Axis-aligned neighbor directions
//! - The tile capability and built-in tile types

/// Axis-aligned neighbor directions
pub mod direction;
/// Fixed-size grid storage and queries
pub mod grid;
/// Tile capability and built-in tile types
pub mod tiles;

pub use direction::Direction;
pub use grid::Grid;
pub use tiles::{BasicTile, Tile, TileType};
