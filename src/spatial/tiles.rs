//! Tile capability and the built-in tile type set
//!
//! The grid only needs each tile to expose a type that can be displayed as
//! a glyph. Engines with their own tile representation implement [`Tile`];
//! [`BasicTile`] covers the common case of a single enumerated type field.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A value that can be stored in a grid and rendered as a glyph
pub trait Tile {
    /// Type attribute used for display
    type Kind: fmt::Display;

    /// The tile's type, rendered as its glyph
    fn tile_type(&self) -> &Self::Kind;
}

/// Built-in tile types with single-character glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    /// Nothing placed yet
    #[default]
    Empty,
    /// Walkable ground
    Floor,
    /// Impassable wall
    Wall,
    /// Water
    Water,
    /// Tree
    Tree,
}

impl TileType {
    /// Every tile type, in glyph table order
    pub const ALL: [Self; 5] = [Self::Empty, Self::Floor, Self::Wall, Self::Water, Self::Tree];

    /// Display glyph for this type
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Floor => ',',
            Self::Wall => '#',
            Self::Water => '~',
            Self::Tree => 'T',
        }
    }

    /// Look up the type rendered as `glyph`
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tile_type| tile_type.glyph() == glyph)
    }

    /// Pick a type uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let index = rng.random_range(0..Self::ALL.len());
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}

impl FromStr for TileType {
    type Err = String;

    /// Parse a single glyph such as `#`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(glyph), None) => {
                Self::from_glyph(glyph).ok_or_else(|| format!("unknown tile glyph '{glyph}'"))
            }
            _ => Err(format!("expected a single tile glyph but got '{s}'")),
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Minimal tile carrying only its type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BasicTile {
    /// Type rendered for this tile
    pub tile_type: TileType,
}

impl BasicTile {
    /// Create a tile of the given type
    pub const fn new(tile_type: TileType) -> Self {
        Self { tile_type }
    }
}

impl From<TileType> for BasicTile {
    fn from(tile_type: TileType) -> Self {
        Self::new(tile_type)
    }
}

impl Tile for BasicTile {
    type Kind = TileType;

    fn tile_type(&self) -> &TileType {
        &self.tile_type
    }
}
