//! Resolution engine - the clear/gravity/refill cascade
//!
//! One resolution is the loop `Detecting -> Clearing -> Settling ->
//! Detecting` until no matches remain (`Stable`). Steps are strictly
//! sequential: step i+1 only begins on step i's fully settled board,
//! because later cascades depend on the exact post-gravity layout of
//! earlier ones. The engine has no failure modes once given a valid
//! post-swap board; rejected moves never reach it.

use std::collections::HashSet;

use gemcascade_core::{find_matches, scoring, Board, BoardSnapshot, Match, TileSource};

use crate::validate::is_valid_move;

/// One clear/gravity/refill cycle within a resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeStep {
    /// Match records found at the start of the step. Overlapping
    /// horizontal/vertical runs through the same cell appear as separate
    /// records here; `cleared` already counts the de-duplicated union.
    pub matches: Vec<Match>,
    /// Tiles actually removed this step.
    pub cleared: u32,
    /// Board state after gravity and refill settled, for per-step
    /// animation.
    pub board: BoardSnapshot,
}

/// Outcome of a full resolution call: the ordered cascade steps and the
/// total reward they earned.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub steps: Vec<CascadeStep>,
    pub reward: u32,
}

impl Resolution {
    /// Total tiles cleared across all steps.
    pub fn cleared_total(&self) -> u32 {
        self.steps.iter().map(|step| step.cleared).sum()
    }

    /// Number of chained cascades.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }
}

/// Outcome of a caller-requested swap.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The swap was legal; the board was mutated and resolved to Stable.
    Applied(Resolution),
    /// The swap would not produce a match (or the coordinates were not a
    /// playable pair). The board is untouched; penalty policy is the
    /// session's call.
    Rejected,
}

/// Run the cascade loop until the board is stable.
///
/// Each iteration unions all matched cells into one cleared set, so a
/// cell shared by a horizontal and a vertical run is removed exactly
/// once, then compacts and refills before re-detecting.
pub fn resolve<R: TileSource>(board: &mut Board, rng: &mut R) -> Resolution {
    let mut steps = Vec::new();

    loop {
        let matches = find_matches(board);
        if matches.is_empty() {
            break;
        }

        let union: HashSet<(u8, u8)> = matches
            .iter()
            .flat_map(|m| m.cells.iter().copied())
            .collect();
        let cells: Vec<(u8, u8)> = union.into_iter().collect();
        let cleared = board.remove_and_compact(&cells, rng);

        log::debug!(
            "cascade step {}: {} match(es), {} tile(s) cleared",
            steps.len() + 1,
            matches.len(),
            cleared
        );

        steps.push(CascadeStep {
            matches,
            cleared,
            board: board.snapshot(),
        });
    }

    let reward = scoring::total_reward(steps.iter().map(|step| step.cleared));
    log::debug!(
        "resolution stable after {} step(s), reward {}",
        steps.len(),
        reward
    );
    Resolution { steps, reward }
}

/// The full control flow for one requested swap: validate, apply, resolve.
///
/// A rejected request leaves the board bit-for-bit unchanged and consumes
/// no RNG draws.
pub fn apply_move<R: TileSource>(
    board: &mut Board,
    x1: u8,
    y1: u8,
    x2: u8,
    y2: u8,
    rng: &mut R,
) -> MoveOutcome {
    if !is_valid_move(board, x1, y1, x2, y2) {
        log::trace!("swap ({x1},{y1})<->({x2},{y2}) rejected");
        return MoveOutcome::Rejected;
    }
    // The validator proved bounds and adjacency on this exact board.
    if board.swap(x1, y1, x2, y2).is_err() {
        return MoveOutcome::Rejected;
    }
    MoveOutcome::Applied(resolve(board, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemcascade_core::types::TileKind;
    use gemcascade_core::{ScriptedSource, SimpleRng};

    fn board(indices: &[&[u8]]) -> Board {
        let rows: Vec<Vec<TileKind>> = indices
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&i| TileKind::from_index(i).unwrap())
                    .collect()
            })
            .collect();
        Board::from_kinds(&rows, TileKind::COUNT).unwrap()
    }

    #[test]
    fn test_stable_board_resolves_to_zero_steps() {
        let mut b = board(&[&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]]);
        let before = b.clone();
        let mut rng = SimpleRng::new(1);
        let res = resolve(&mut b, &mut rng);
        assert!(res.steps.is_empty());
        assert_eq!(res.reward, 0);
        assert_eq!(b, before);
    }

    #[test]
    fn test_single_step_clears_and_refills() {
        // Row 0 is a ready-made 3-run; refills are scripted so no new
        // match forms.
        let mut b = board(&[
            &[0, 0, 0],
            &[1, 2, 1],
            &[2, 1, 2],
        ]);
        // Refill draws: columns left to right, one vacated cell each.
        let mut refill = ScriptedSource::new(vec![3, 4, 3]);
        let res = resolve(&mut b, &mut refill);

        assert_eq!(res.depth(), 1);
        assert_eq!(res.cleared_total(), 3);
        assert_eq!(res.reward, 1);
        assert!(b.is_fully_occupied());
        assert_eq!(b.kind_at(0, 0), Some(TileKind::Emerald));
        assert_eq!(b.kind_at(1, 0), Some(TileKind::Sapphire));
    }

    #[test]
    fn test_overlapping_cross_cleared_once() {
        // 5 distinct cells across two overlapping match records.
        let mut b = board(&[&[1, 0, 2], &[0, 0, 0], &[2, 0, 1]]);
        let mut refill = ScriptedSource::new(vec![3, 4, 5, 4, 3]);
        let res = resolve(&mut b, &mut refill);

        assert_eq!(res.steps[0].matches.len(), 2);
        assert_eq!(res.steps[0].cleared, 5);
        assert!(b.is_fully_occupied());
    }

    #[test]
    fn test_rejected_move_leaves_board_untouched() {
        let mut b = board(&[&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]]);
        let before = b.clone();
        let mut rng = SimpleRng::new(5);
        let seed_before = rng.seed();

        assert_eq!(apply_move(&mut b, 0, 0, 1, 0, &mut rng), MoveOutcome::Rejected);
        assert_eq!(b, before);
        assert_eq!(rng.seed(), seed_before);
    }
}
