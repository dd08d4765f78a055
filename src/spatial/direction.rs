//! Axis-aligned neighbor directions
//!
//! Rows grow downward: `y = 0` is the top row, so [`Direction::Down`] adds
//! one to `y`.

/// One of the four axis-aligned neighbor directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(-1, 0)`
    Left,
    /// `(1, 0)`
    Right,
    /// `(0, 1)`
    Down,
    /// `(0, -1)`
    Up,
}

impl Direction {
    /// Neighbor lookup order. Callers rely on this exact sequence.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Down, Self::Up];

    /// Coordinate offset as `(dx, dy)`
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Up => (0, -1),
        }
    }

    /// Apply this direction to `(x, y)`
    ///
    /// Returns `None` when the step would go below zero on either axis.
    /// Upper bounds are the caller's concern.
    pub const fn step(self, x: usize, y: usize) -> Option<[usize; 2]> {
        let (dx, dy) = self.offset();
        match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
            (Some(nx), Some(ny)) => Some([nx, ny]),
            _ => None,
        }
    }
}
