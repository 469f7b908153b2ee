//! Cascade engine - move validation, resolution, and the session wrapper
//!
//! This crate layers the match-3 control flow over the core board: a
//! caller requests a swap, the validator simulates it on a copy, a legal
//! swap is applied and the board cascades to stability, and the scoring
//! policy prices the cleared tiles. Everything is synchronous and
//! side-effect-free apart from the board it is explicitly given; any
//! animation pacing belongs to the presentation layer between calls,
//! never inside one.
//!
//! - [`validate`]: speculative swap legality, dead-board probing
//! - [`resolve`]: the clear/gravity/refill cascade loop
//! - [`session`]: caller-side round state (score, penalties, counters)

pub mod resolve;
pub mod session;
pub mod validate;

// Re-export commonly used types for convenience
pub use resolve::{apply_move, resolve, CascadeStep, MoveOutcome, Resolution};
pub use session::{BoardInit, GameSession, SessionConfig, SwapResult};
pub use validate::{has_any_valid_move, is_valid_move};
