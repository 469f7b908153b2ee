//! Session wrapper - the mini-game side of the engine contract
//!
//! The engine itself is a pure function of (board, move); score
//! accumulator, invalid-move counter, and penalty policy belong to the
//! caller. `GameSession` is that caller-side container: one board, one
//! seeded RNG, and the round counters the platform ledger reads out when
//! the round clock expires. Round timing itself stays external; the
//! session has no notion of time.

use gemcascade_core::{Board, SimpleRng};
use gemcascade_types::{
    EngineError, DEFAULT_BOARD_DIM, DEFAULT_INVALID_MOVE_PENALTY, DEFAULT_PALETTE_SIZE,
};

use crate::resolve::{apply_move, resolve, MoveOutcome, Resolution};
use crate::validate::{has_any_valid_move, is_valid_move};

/// Initial-board policy.
///
/// The source game fills the board uniformly at random and starts play
/// without checking for ready-made matches or for the existence of a
/// valid move. `Raw` reproduces that; `Settled` resolves the fresh board
/// to stability first, awarding nothing for the free clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardInit {
    #[default]
    Raw,
    Settled,
}

/// Per-round configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: u8,
    pub height: u8,
    pub palette_size: u8,
    /// Reward units subtracted on a rejected swap attempt.
    pub invalid_move_penalty: i64,
    pub board_init: BoardInit,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_DIM,
            height: DEFAULT_BOARD_DIM,
            palette_size: DEFAULT_PALETTE_SIZE,
            invalid_move_penalty: DEFAULT_INVALID_MOVE_PENALTY,
            board_init: BoardInit::Raw,
        }
    }
}

/// Result of one swap attempt as seen by the player.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapResult {
    pub accepted: bool,
    /// Signed change to the session score: cascade reward when accepted,
    /// the negated penalty when rejected.
    pub reward_delta: i64,
    /// Cascade detail for animation; None on rejection.
    pub resolution: Option<Resolution>,
}

/// One round of the jewel mini-game.
///
/// Score may go negative under penalties; conversion rates and per-round
/// reward caps are the external ledger's concern.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    rng: SimpleRng,
    score: i64,
    invalid_moves: u32,
    moves_played: u32,
    config: SessionConfig,
}

impl GameSession {
    /// Start a round with the given RNG seed.
    pub fn new(config: SessionConfig, seed: u32) -> Result<Self, EngineError> {
        let mut rng = SimpleRng::new(seed);
        let mut board = Board::new(config.width, config.height, config.palette_size, &mut rng)?;

        if config.board_init == BoardInit::Settled {
            let settled = resolve(&mut board, &mut rng);
            if !settled.steps.is_empty() {
                log::debug!(
                    "settled fresh board in {} step(s), {} free tile(s) discarded",
                    settled.depth(),
                    settled.cleared_total()
                );
            }
        }

        Ok(Self {
            board,
            rng,
            score: 0,
            invalid_moves: 0,
            moves_played: 0,
            config,
        })
    }

    /// Attempt a swap. A legal move mutates the board, runs the cascade,
    /// and credits its reward; an illegal one leaves the board alone and
    /// debits the configured penalty.
    pub fn try_swap(&mut self, x1: u8, y1: u8, x2: u8, y2: u8) -> SwapResult {
        match apply_move(&mut self.board, x1, y1, x2, y2, &mut self.rng) {
            MoveOutcome::Applied(resolution) => {
                let delta = resolution.reward as i64;
                self.score += delta;
                self.moves_played += 1;
                SwapResult {
                    accepted: true,
                    reward_delta: delta,
                    resolution: Some(resolution),
                }
            }
            MoveOutcome::Rejected => {
                self.invalid_moves += 1;
                self.score -= self.config.invalid_move_penalty;
                SwapResult {
                    accepted: false,
                    reward_delta: -self.config.invalid_move_penalty,
                    resolution: None,
                }
            }
        }
    }

    /// Probe a swap without applying it.
    pub fn can_swap(&self, x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
        is_valid_move(&self.board, x1, y1, x2, y2)
    }

    /// Whether the board still admits any legal move.
    pub fn has_any_valid_move(&self) -> bool {
        has_any_valid_move(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn invalid_moves(&self) -> u32 {
        self.invalid_moves
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
