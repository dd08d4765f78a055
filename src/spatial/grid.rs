//! Fixed-size tile grid with bounds checks and neighbor lookup
//!
//! Tiles live in a single row-major `Array2` indexed `[y, x]`. Row and
//! column access are views into that one store, so a tile seen through a
//! row is always the same tile seen through its column.

use ndarray::{Array2, ArrayView1};
use num_traits::ToPrimitive;
use std::fmt;
use tracing::debug;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{GridError, Result, index_out_of_bounds};
use crate::io::render::{RenderStyle, Rendered};
use crate::spatial::direction::Direction;
use crate::spatial::tiles::Tile;

/// Rectangular grid of tiles addressed by column `x` and row `y`
///
/// Dimensions are fixed at construction. `y = 0` is the top row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    tiles: Array2<T>,
}

impl<T> Grid<T> {
    /// Create a grid with every tile cloned from `fill`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize, fill: T) -> Result<Self>
    where
        T: Clone,
    {
        validate_dimensions(width, height)?;
        debug!(width, height, "creating filled grid");
        Ok(Self {
            tiles: Array2::from_elem((height, width), fill),
        })
    }

    /// Create a grid whose tiles are produced by `f(x, y)`
    ///
    /// Tiles are generated in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        validate_dimensions(width, height)?;
        debug!(width, height, "creating grid from generator");
        Ok(Self {
            tiles: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        })
    }

    /// Create a grid of default tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn with_default(width: usize, height: usize) -> Result<Self>
    where
        T: Default,
    {
        Self::from_fn(width, height, |_, _| T::default())
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Grid size as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Total number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Check whether `(x, y)` lies inside the grid
    ///
    /// Accepts any primitive integer so negative coordinates from offset
    /// arithmetic can be tested directly; they are never valid.
    pub fn is_valid<C: ToPrimitive>(&self, x: C, y: C) -> bool {
        match (x.to_usize(), y.to_usize()) {
            (Some(x), Some(y)) => x < self.width() && y < self.height(),
            _ => false,
        }
    }

    /// Tile at column `x`, row `y`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `(x, y)` is outside the grid
    pub fn tile(&self, x: usize, y: usize) -> Result<&T> {
        let (width, height) = self.dimensions();
        self.tiles
            .get((y, x))
            .ok_or_else(|| index_out_of_bounds(x, y, width, height))
    }

    /// Mutable tile at column `x`, row `y`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `(x, y)` is outside the grid
    pub fn tile_mut(&mut self, x: usize, y: usize) -> Result<&mut T> {
        let (width, height) = self.dimensions();
        self.tiles
            .get_mut((y, x))
            .ok_or_else(|| index_out_of_bounds(x, y, width, height))
    }

    /// Replace the tile at `(x, y)`, returning the previous one
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `(x, y)` is outside the grid
    pub fn set_tile(&mut self, x: usize, y: usize, tile: T) -> Result<T> {
        let slot = self.tile_mut(x, y)?;
        Ok(std::mem::replace(slot, tile))
    }

    /// In-bounds positions adjacent to `(x, y)`
    ///
    /// Positions come back as `[x, y]` in left, right, down, up order with
    /// off-grid positions dropped. Diagonals are never included.
    pub fn neighbor_positions(&self, x: usize, y: usize) -> Vec<[usize; 2]> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| direction.step(x, y))
            .filter(|&[nx, ny]| self.is_valid(nx, ny))
            .collect()
    }

    /// Tiles adjacent to `(x, y)`, in the order of [`Self::neighbor_positions`]
    ///
    /// Returns between zero and four tiles. Off-grid positions are filtered
    /// before access, so this never fails.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<&T> {
        self.neighbor_positions(x, y)
            .into_iter()
            .filter_map(|[nx, ny]| self.tiles.get((ny, nx)))
            .collect()
    }

    /// View of row `y`, indexed by `x`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `y` is not a valid row
    pub fn row(&self, y: usize) -> Result<ArrayView1<'_, T>> {
        if y < self.height() {
            Ok(self.tiles.row(y))
        } else {
            Err(index_out_of_bounds(0, y, self.width(), self.height()))
        }
    }

    /// View of column `x`, indexed by `y`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `x` is not a valid column
    pub fn column(&self, x: usize) -> Result<ArrayView1<'_, T>> {
        if x < self.width() {
            Ok(self.tiles.column(x))
        } else {
            Err(index_out_of_bounds(x, 0, self.width(), self.height()))
        }
    }

    /// All rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, T>> {
        self.tiles.rows().into_iter()
    }

    /// All columns from left to right
    pub fn columns(&self) -> impl Iterator<Item = ArrayView1<'_, T>> {
        self.tiles.columns().into_iter()
    }

    /// Every tile with its `[x, y]` position, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ([usize; 2], &T)> {
        self.tiles.indexed_iter().map(|((y, x), tile)| ([x, y], tile))
    }
}

impl<T: Tile> Grid<T> {
    /// Display adapter for the grid in the given style
    pub const fn rendered(&self, style: RenderStyle) -> Rendered<'_, T> {
        Rendered::new(self, style)
    }

    /// Render tile glyphs as text, one line per row
    pub fn render(&self, style: RenderStyle) -> String {
        self.rendered(style).to_string()
    }
}

impl<T: Tile> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rendered(RenderStyle::default()), f)
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    for (axis, value) in [("width", width), ("height", height)] {
        if value == 0 {
            return Err(GridError::InvalidDimension {
                axis,
                value,
                reason: "must be at least 1".to_string(),
            });
        }
        if value > MAX_GRID_DIMENSION {
            return Err(GridError::InvalidDimension {
                axis,
                value,
                reason: format!("must not exceed {MAX_GRID_DIMENSION}"),
            });
        }
    }
    Ok(())
}
