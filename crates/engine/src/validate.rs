//! Move validation - speculative swap simulation
//!
//! Legality is probed on a clone of the board so the caller's board is
//! never touched and no RNG draws are consumed. Probing is a frequent,
//! expected operation, so every rejection is a plain `false` rather than
//! an error.

use gemcascade_core::{find_matches, Board};

/// Whether swapping (x1, y1) and (x2, y2) would produce at least one
/// match.
///
/// Returns false for out-of-bounds or non-adjacent coordinates instead of
/// failing: this is a query, not a mutation. Idempotent; repeated calls
/// with the same board and coordinates always agree.
pub fn is_valid_move(board: &Board, x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    if !board.in_bounds(x1, y1) || !board.in_bounds(x2, y2) {
        return false;
    }
    if !Board::is_adjacent(x1, y1, x2, y2) {
        return false;
    }

    let mut probe = board.clone();
    if probe.swap(x1, y1, x2, y2).is_err() {
        return false;
    }
    !find_matches(&probe).is_empty()
}

/// Whether any adjacent pair on the board admits a legal swap.
///
/// Scans each cell's right and down neighbor once, O(width * height)
/// validator probes. Used by callers to detect dead boards before the
/// round clock runs them out.
pub fn has_any_valid_move(board: &Board) -> bool {
    for y in 0..board.height() {
        for x in 0..board.width() {
            if x + 1 < board.width() && is_valid_move(board, x, y, x + 1, y) {
                return true;
            }
            if y + 1 < board.height() && is_valid_move(board, x, y, x, y + 1) {
                return true;
            }
        }
    }
    false
}
