//! Fixed-size 2D tile grid for game engines
//!
//! A grid owns a rectangle of tiles addressed by column and row, validates
//! coordinates, looks up axis-aligned neighbors in a fixed order, and renders
//! tile glyphs as text.

#![forbid(unsafe_code)]

/// Input/output operations, rendering, and error handling
pub mod io;
/// Grid storage, neighbor directions, and tile types
pub mod spatial;

pub use io::error::{GridError, Result};
pub use io::render::RenderStyle;
pub use spatial::{BasicTile, Direction, Grid, Tile, TileType};
