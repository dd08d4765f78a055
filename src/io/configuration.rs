//! Grid limits and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension on either axis
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Default grid width used by the CLI
pub const DEFAULT_WIDTH: usize = 16;

/// Default grid height used by the CLI
pub const DEFAULT_HEIGHT: usize = 8;

/// Fixed seed for reproducible random fills
pub const DEFAULT_SEED: u64 = 42;

/// Environment variable read for the log filter
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Log filter applied when the environment variable is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
