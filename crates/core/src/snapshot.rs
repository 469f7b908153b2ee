//! Board snapshots - the hand-off format for the presentation layer
//!
//! The renderer animates from snapshots, never from the live board, so
//! mid-cascade states can be staged without holding a borrow across frames.
//! Snapshots are serde-serializable for callers that ship them across a
//! process boundary.

use serde::{Deserialize, Serialize};

use gemcascade_types::TileKind;

use crate::board::Board;

/// One cell as seen by the presentation layer: palette index plus the
/// tile's identity token for move/fall animation matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub kind: u8,
    pub id: u32,
}

/// Immutable copy of a board's visible state, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: u8,
    pub height: u8,
    pub tiles: Vec<Option<TileView>>,
}

impl BoardSnapshot {
    /// Kind at (x, y), or None when out of bounds or empty.
    pub fn kind_at(&self, x: u8, y: u8) -> Option<TileKind> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles[y as usize * self.width as usize + x as usize]
            .and_then(|view| TileKind::from_index(view.kind))
    }

    /// True when every cell holds a tile.
    pub fn is_fully_occupied(&self) -> bool {
        self.tiles.iter().all(|cell| cell.is_some())
    }
}

impl Board {
    /// Capture the board's visible state.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.width(),
            height: self.height(),
            tiles: self
                .cells()
                .iter()
                .map(|cell| {
                    cell.map(|tile| TileView {
                        kind: tile.kind.index(),
                        id: tile.id,
                    })
                })
                .collect(),
        }
    }
}
