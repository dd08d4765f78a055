//! Text rendering of tile grids
//!
//! Each row becomes one line of tile glyphs, left to right, with `y = 0`
//! first. Older output put a newline before every row, including the first,
//! which leaves a blank leading line. [`RenderStyle::Legacy`] keeps that
//! format for callers comparing against existing output.

use std::fmt;

use crate::spatial::grid::Grid;
use crate::spatial::tiles::Tile;

/// Line layout used when rendering a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Rows joined by newlines, no leading or trailing newline
    #[default]
    Compact,
    /// Newline before every row, so the text starts with a blank line
    Legacy,
}

/// Display adapter rendering a grid in a fixed style
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a, T> {
    grid: &'a Grid<T>,
    style: RenderStyle,
}

impl<'a, T> Rendered<'a, T> {
    /// Wrap `grid` for display in `style`
    pub const fn new(grid: &'a Grid<T>, style: RenderStyle) -> Self {
        Self { grid, style }
    }
}

impl<T: Tile> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.grid.rows().enumerate() {
            if self.style == RenderStyle::Legacy || y > 0 {
                f.write_str("\n")?;
            }
            for tile in row {
                write!(f, "{}", tile.tile_type())?;
            }
        }
        Ok(())
    }
}
