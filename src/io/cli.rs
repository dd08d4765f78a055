//! Command-line interface for building, querying, and printing a grid

use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::io::render::RenderStyle;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::{BasicTile, Tile, TileType};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// Destination name reported when writing to standard output fails
const STDOUT_DESTINATION: &str = "<stdout>";

/// Grid cell coordinates given on the command line as `X,Y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| format!("invalid coordinate '{}': {e}", part.trim()))
        };
        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

#[derive(Parser)]
#[command(name = "tilegrid")]
#[command(author, version, about = "Build a tile grid and print it as text")]
/// Command-line arguments for the grid tool
// Each flag toggles an independent output option
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Number of rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible fills
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Glyph of the tile type every cell starts as
    #[arg(short, long, value_name = "GLYPH", default_value_t = TileType::Empty)]
    pub fill: TileType,

    /// Fill the grid with random tile types instead of the fill glyph
    #[arg(short, long)]
    pub random: bool,

    /// Prefix every row with a newline, matching the legacy text format
    #[arg(short, long)]
    pub legacy: bool,

    /// Also list the neighbors of the tile at X,Y
    #[arg(short, long, value_name = "X,Y")]
    pub neighbors: Option<Position>,

    /// Write the rendered grid to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Render style selected by the flags
    pub const fn render_style(&self) -> RenderStyle {
        if self.legacy {
            RenderStyle::Legacy
        } else {
            RenderStyle::Compact
        }
    }
}

/// Builds the grid described by the CLI and writes its report
pub struct GridPrinter {
    cli: Cli,
}

impl GridPrinter {
    /// Create a printer for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the grid, filled randomly when requested and with the fill
    /// type otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the requested dimensions are invalid
    pub fn build_grid(&self) -> Result<Grid<BasicTile>> {
        let (width, height) = (self.cli.width, self.cli.height);
        if self.cli.random {
            debug!(seed = self.cli.seed, "filling grid with random tiles");
            let mut rng = StdRng::seed_from_u64(self.cli.seed);
            Grid::from_fn(width, height, |_, _| {
                BasicTile::new(TileType::random(&mut rng))
            })
        } else {
            Grid::new(width, height, BasicTile::new(self.cli.fill))
        }
    }

    /// Produce the full text report: the rendered grid, then the neighbor
    /// line if one was requested
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be built or the neighbor
    /// position lies outside it
    pub fn report(&self) -> Result<String> {
        let grid = self.build_grid()?;
        let mut report = grid.render(self.cli.render_style());
        report.push('\n');

        if let Some(position) = self.cli.neighbors {
            let line = neighbor_line(&grid, position)?;
            report.push_str(&line);
            report.push('\n');
        }

        Ok(report)
    }

    /// Write the report to the output file, or stdout when none is given
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be produced or written
    pub fn run(&self) -> Result<()> {
        let report = self.report()?;

        match &self.cli.output {
            Some(path) => {
                std::fs::write(path, &report).map_err(|e| GridError::FileSystem {
                    path: path.clone(),
                    operation: "write grid",
                    source: e,
                })?;
                debug!(path = %path.display(), "grid written");
                // Allow print for user feedback on where the output went
                #[allow(clippy::print_stderr)]
                if !self.cli.quiet {
                    eprintln!("Wrote grid to {}", path.display());
                }
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                write_report(&mut stdout, &report, Path::new(STDOUT_DESTINATION))?;
            }
        }

        Ok(())
    }
}

/// Write `report` to `out` and flush it
///
/// # Errors
///
/// Returns `FileSystem` naming `destination` if writing or flushing fails
pub fn write_report<W: Write>(out: &mut W, report: &str, destination: &Path) -> Result<()> {
    out.write_all(report.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| GridError::FileSystem {
            path: destination.to_path_buf(),
            operation: "write grid",
            source: e,
        })
}

fn neighbor_line(grid: &Grid<BasicTile>, position: Position) -> Result<String> {
    let Position { x, y } = position;
    if !grid.is_valid(x, y) {
        let (width, height) = grid.dimensions();
        warn!(x, y, width, height, "neighbor query outside grid");
        return Err(invalid_parameter(
            "neighbors",
            &format!("{x},{y}"),
            &format!("position is outside the {width}x{height} grid"),
        ));
    }

    let listed = grid
        .neighbor_positions(x, y)
        .into_iter()
        .map(|[nx, ny]| {
            grid.tile(nx, ny)
                .map(|tile| format!("({nx}, {ny})={}", tile.tile_type()))
        })
        .collect::<Result<Vec<_>>>()?;

    if listed.is_empty() {
        Ok(format!("neighbors of ({x}, {y}): none"))
    } else {
        Ok(format!("neighbors of ({x}, {y}): {}", listed.join(" ")))
    }
}
