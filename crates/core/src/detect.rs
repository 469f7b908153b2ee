//! Match detection - single-pass run scanning per axis
//!
//! Scans every row left to right and every column top to bottom,
//! accumulating runs of identical kind and emitting each run of length
//! >= MATCH_GROUP_SIZE as one `Match`. A tile sitting in both a horizontal
//! and a vertical run appears in two records; de-duplicating the cleared
//! cell set is the resolution engine's job, which keeps this layer a pure
//! O(width * height) scan.

use arrayvec::ArrayVec;

use gemcascade_types::{Orientation, TileKind, MATCH_GROUP_SIZE, MAX_BOARD_DIM};

use crate::board::Board;

const MAX_DIM: usize = MAX_BOARD_DIM as usize;

/// A maximal same-kind run of length >= 3 along one axis. Derived fresh on
/// every detection pass, never stored or mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub kind: TileKind,
    pub orientation: Orientation,
    /// Member coordinates in scan order.
    pub cells: Vec<(u8, u8)>,
}

impl Match {
    /// Run length in tiles.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Find every match on the board.
///
/// An all-identical line yields one full-length run, not several 3-tile
/// slices; an axis shorter than 3 can never produce matches.
pub fn find_matches(board: &Board) -> Vec<Match> {
    let mut matches = Vec::new();

    for y in 0..board.height() {
        let line = (0..board.width()).map(|x| (x, y));
        scan_line(board, line, Orientation::Horizontal, &mut matches);
    }
    for x in 0..board.width() {
        let line = (0..board.height()).map(|y| (x, y));
        scan_line(board, line, Orientation::Vertical, &mut matches);
    }

    matches
}

/// Scan one row or column, emitting runs as they break.
fn scan_line(
    board: &Board,
    line: impl Iterator<Item = (u8, u8)>,
    orientation: Orientation,
    out: &mut Vec<Match>,
) {
    let mut run: ArrayVec<(u8, u8), MAX_DIM> = ArrayVec::new();
    let mut run_kind: Option<TileKind> = None;

    for (x, y) in line {
        let kind = board.kind_at(x, y);
        if kind.is_some() && kind == run_kind {
            run.push((x, y));
            continue;
        }
        flush_run(run_kind, &run, orientation, out);
        run.clear();
        run_kind = kind;
        if kind.is_some() {
            run.push((x, y));
        }
    }
    flush_run(run_kind, &run, orientation, out);
}

fn flush_run(
    kind: Option<TileKind>,
    run: &[(u8, u8)],
    orientation: Orientation,
    out: &mut Vec<Match>,
) {
    if let Some(kind) = kind {
        if run.len() >= MATCH_GROUP_SIZE as usize {
            out.push(Match {
                kind,
                orientation,
                cells: run.to_vec(),
            });
        }
    }
}
