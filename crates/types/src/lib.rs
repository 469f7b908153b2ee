//! Core types shared across the engine workspace.
//! This crate contains pure data types with no external dependencies.

/// Minimum run length that counts as a match, and the divisor used when
/// converting cleared tiles into reward units.
pub const MATCH_GROUP_SIZE: u32 = 3;

/// Smallest palette that keeps a board solvable at reasonable density.
pub const MIN_PALETTE_SIZE: u8 = 3;

/// Upper bound on board width/height. Keeps per-line and per-column scan
/// scratch stack-allocated.
pub const MAX_BOARD_DIM: u8 = 32;

/// Default round configuration for the jewel mini-game.
pub const DEFAULT_BOARD_DIM: u8 = 8;
pub const DEFAULT_PALETTE_SIZE: u8 = 5;

/// Reward units subtracted when a player attempts a swap that produces no
/// match. Applied by the session wrapper, never by the engine itself.
pub const DEFAULT_INVALID_MOVE_PENALTY: i64 = 1;

/// Gem kinds. A session plays with the first `palette_size` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Ruby,
    Amber,
    Topaz,
    Emerald,
    Sapphire,
    Amethyst,
    Pearl,
    Onyx,
}

impl TileKind {
    /// All kinds, in palette order.
    pub const ALL: [TileKind; 8] = [
        TileKind::Ruby,
        TileKind::Amber,
        TileKind::Topaz,
        TileKind::Emerald,
        TileKind::Sapphire,
        TileKind::Amethyst,
        TileKind::Pearl,
        TileKind::Onyx,
    ];

    /// Number of distinct kinds (the maximum palette size).
    pub const COUNT: u8 = Self::ALL.len() as u8;

    /// Kind at the given palette index.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Palette index of this kind.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Convert to lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Ruby => "ruby",
            TileKind::Amber => "amber",
            TileKind::Topaz => "topaz",
            TileKind::Emerald => "emerald",
            TileKind::Sapphire => "sapphire",
            TileKind::Amethyst => "amethyst",
            TileKind::Pearl => "pearl",
            TileKind::Onyx => "onyx",
        }
    }

    /// Parse kind from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ruby" => Some(TileKind::Ruby),
            "amber" => Some(TileKind::Amber),
            "topaz" => Some(TileKind::Topaz),
            "emerald" => Some(TileKind::Emerald),
            "sapphire" => Some(TileKind::Sapphire),
            "amethyst" => Some(TileKind::Amethyst),
            "pearl" => Some(TileKind::Pearl),
            "onyx" => Some(TileKind::Onyx),
            _ => None,
        }
    }
}

/// A gem on the board. Immutable once created; a removed tile is simply
/// absent from the grid.
///
/// `id` is an identity token for animation/tracking on the presentation
/// side. Matching logic only ever reads `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub kind: TileKind,
    pub id: u32,
}

/// Cell on the board (None = empty, Some = occupied).
pub type Cell = Option<Tile>;

/// Axis of a match run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Errors the engine can report. All are local, synchronous, and
/// recoverable by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    InvalidDimensions,
    OutOfBounds,
    NotAdjacent,
}

impl EngineError {
    pub fn code(self) -> &'static str {
        match self {
            EngineError::InvalidDimensions => "invalid_dimensions",
            EngineError::OutOfBounds => "out_of_bounds",
            EngineError::NotAdjacent => "not_adjacent",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            EngineError::InvalidDimensions => {
                "board dimensions or palette size outside the supported range"
            }
            EngineError::OutOfBounds => "coordinate outside the board",
            EngineError::NotAdjacent => "cells are not 4-directionally adjacent",
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_index_roundtrip() {
        for kind in TileKind::ALL {
            assert_eq!(TileKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(TileKind::from_index(TileKind::COUNT), None);
    }

    #[test]
    fn test_kind_str_roundtrip() {
        for kind in TileKind::ALL {
            assert_eq!(TileKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(TileKind::from_str("RUBY"), Some(TileKind::Ruby));
        assert_eq!(TileKind::from_str("garnet"), None);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(EngineError::OutOfBounds.code(), "out_of_bounds");
        assert_eq!(EngineError::NotAdjacent.code(), "not_adjacent");
        assert_eq!(
            EngineError::InvalidDimensions.to_string(),
            format!(
                "invalid_dimensions: {}",
                EngineError::InvalidDimensions.message()
            )
        );
    }
}
