//! Error types for grid construction, tile access, and CLI output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Grid dimension is zero or exceeds the supported maximum
    InvalidDimension {
        /// Axis that failed validation (`"width"` or `"height"`)
        axis: &'static str,
        /// Provided dimension
        value: usize,
        /// Explanation of why the dimension is rejected
        reason: String,
    },

    /// Coordinates fall outside the grid
    ///
    /// Raised by direct tile access. Neighbor lookup filters positions
    /// before accessing tiles and never produces this error.
    IndexOutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Grid width at the time of access
        width: usize,
        /// Grid height at the time of access
        height: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                axis,
                value,
                reason,
            } => {
                write!(f, "Invalid grid {axis} {value}: {reason}")
            }
            Self::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Tile ({x}, {y}) is out of bounds (grid size {width}x{height})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds error for a grid of the given size
pub const fn index_out_of_bounds(x: usize, y: usize, width: usize, height: usize) -> GridError {
    GridError::IndexOutOfBounds {
        x,
        y,
        width,
        height,
    }
}
