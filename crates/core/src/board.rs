//! Board module - manages the jewel grid
//!
//! The board is a width x height grid where each cell holds a tile or is
//! transiently empty during a resolution step. Uses a flat row-major buffer
//! for cache locality. Coordinates: (x, y) with x running left to right and
//! y running top to bottom; gravity pulls tiles toward the highest y.

use arrayvec::ArrayVec;

use gemcascade_types::{
    Cell, EngineError, Tile, TileKind, MAX_BOARD_DIM, MIN_PALETTE_SIZE,
};

use crate::rng::TileSource;

const MAX_DIM: usize = MAX_BOARD_DIM as usize;

/// The jewel grid. Dimensions and palette are fixed for the lifetime of a
/// round; tiles are swapped, removed, and refilled in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    palette_size: u8,
    /// Flat array of cells, row-major order (y * width + x).
    cells: Vec<Cell>,
    /// Monotonic identity token handed to freshly generated tiles.
    next_tile_id: u32,
}

impl Board {
    /// Create a board with every cell filled by a uniformly random kind
    /// drawn from the first `palette_size` kinds.
    ///
    /// Fails with `InvalidDimensions` for zero or oversized dimensions, or
    /// a palette outside `[MIN_PALETTE_SIZE, TileKind::COUNT]`.
    ///
    /// The fresh board is not checked for ready-made matches or for the
    /// existence of a valid move; see `GameSession` for the settle-first
    /// variant.
    pub fn new<R: TileSource>(
        width: u8,
        height: u8,
        palette_size: u8,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        if width == 0 || height == 0 || width > MAX_BOARD_DIM || height > MAX_BOARD_DIM {
            return Err(EngineError::InvalidDimensions);
        }
        if !(MIN_PALETTE_SIZE..=TileKind::COUNT).contains(&palette_size) {
            return Err(EngineError::InvalidDimensions);
        }

        let mut board = Self {
            width,
            height,
            palette_size,
            cells: vec![None; width as usize * height as usize],
            next_tile_id: 0,
        };
        for idx in 0..board.cells.len() {
            let tile = board.fresh_tile(rng);
            board.cells[idx] = Some(tile);
        }
        Ok(board)
    }

    /// Build a board from explicit rows of kinds, for deterministic
    /// fixtures. Rows must be rectangular, within dimension bounds, and
    /// every kind must sit inside the palette.
    pub fn from_kinds(rows: &[Vec<TileKind>], palette_size: u8) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if height == 0 || width == 0 || height > MAX_DIM || width > MAX_DIM {
            return Err(EngineError::InvalidDimensions);
        }
        if rows.iter().any(|r| r.len() != width) {
            return Err(EngineError::InvalidDimensions);
        }
        if !(MIN_PALETTE_SIZE..=TileKind::COUNT).contains(&palette_size) {
            return Err(EngineError::InvalidDimensions);
        }
        if rows
            .iter()
            .flatten()
            .any(|kind| kind.index() >= palette_size)
        {
            return Err(EngineError::InvalidDimensions);
        }

        let mut next_tile_id = 0u32;
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            for &kind in row {
                cells.push(Some(Tile {
                    kind,
                    id: next_tile_id,
                }));
                next_tile_id += 1;
            }
        }
        Ok(Self {
            width: width as u8,
            height: height as u8,
            palette_size,
            cells,
            next_tile_id,
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: u8, y: u8) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn palette_size(&self) -> u8 {
        self.palette_size
    }

    /// Whether (x, y) lies inside the grid.
    pub fn in_bounds(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height
    }

    /// Whether two coordinates are 4-directionally adjacent
    /// (Manhattan distance exactly 1).
    pub fn is_adjacent(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
        let dx = (x1 as i16 - x2 as i16).abs();
        let dy = (y1 as i16 - y2 as i16).abs();
        dx + dy == 1
    }

    /// Bounds-checked cell read.
    pub fn get(&self, x: u8, y: u8) -> Result<Cell, EngineError> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(EngineError::OutOfBounds)
    }

    /// Kind at (x, y), or None when out of bounds or empty.
    pub fn kind_at(&self, x: u8, y: u8) -> Option<TileKind> {
        self.index(x, y)
            .and_then(|idx| self.cells[idx])
            .map(|tile| tile.kind)
    }

    /// Exchange the tiles at two adjacent coordinates, in place.
    ///
    /// Knows nothing about match legality; the move validator decides
    /// whether a swap is worth performing. Never mutates on failure.
    pub fn swap(&mut self, x1: u8, y1: u8, x2: u8, y2: u8) -> Result<(), EngineError> {
        let a = self.index(x1, y1).ok_or(EngineError::OutOfBounds)?;
        let b = self.index(x2, y2).ok_or(EngineError::OutOfBounds)?;
        if !Self::is_adjacent(x1, y1, x2, y2) {
            return Err(EngineError::NotAdjacent);
        }
        self.cells.swap(a, b);
        Ok(())
    }

    /// Clear the given cells, compact every column downward (stable: the
    /// relative vertical order of survivors is preserved), and refill the
    /// vacated top cells with fresh random tiles.
    ///
    /// Out-of-bounds or already-empty entries are ignored, so a caller may
    /// pass an overlapping set without double-counting. Returns the number
    /// of tiles actually cleared.
    pub fn remove_and_compact<R: TileSource>(
        &mut self,
        cells: &[(u8, u8)],
        rng: &mut R,
    ) -> u32 {
        let mut cleared = 0u32;
        for &(x, y) in cells {
            if let Some(idx) = self.index(x, y) {
                if self.cells[idx].is_some() {
                    self.cells[idx] = None;
                    cleared += 1;
                }
            }
        }
        if cleared == 0 {
            return 0;
        }

        // Columns compact independently, left to right, so refill draws are
        // consumed in a deterministic order.
        for x in 0..self.width {
            self.compact_column(x, rng);
        }
        cleared
    }

    /// Drop survivors of one column to the bottom and top up with fresh
    /// tiles.
    fn compact_column<R: TileSource>(&mut self, x: u8, rng: &mut R) {
        let mut survivors: ArrayVec<Tile, MAX_DIM> = ArrayVec::new();
        for y in 0..self.height {
            if let Some(idx) = self.index(x, y) {
                if let Some(tile) = self.cells[idx] {
                    survivors.push(tile);
                }
            }
        }

        let gap = self.height as usize - survivors.len();
        if gap == 0 {
            return;
        }
        for y in 0..self.height {
            let tile = if (y as usize) < gap {
                self.fresh_tile(rng)
            } else {
                survivors[y as usize - gap]
            };
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = Some(tile);
            }
        }
    }

    fn fresh_tile<R: TileSource>(&mut self, rng: &mut R) -> Tile {
        let id = self.next_tile_id;
        self.next_tile_id = self.next_tile_id.wrapping_add(1);
        Tile {
            kind: rng.next_kind(self.palette_size),
            id,
        }
    }

    /// True when no cell is empty (the steady-state invariant).
    pub fn is_fully_occupied(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of occupied cells in column `x`.
    pub fn column_occupancy(&self, x: u8) -> u32 {
        (0..self.height)
            .filter(|&y| self.index(x, y).map(|idx| self.cells[idx].is_some()) == Some(true))
            .count() as u32
    }

    /// Get a reference to the internal cells array (row-major).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
