//! Core board logic - pure, deterministic, and testable
//!
//! This crate owns the jewel grid and everything computed directly from
//! it. It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the RNG is an injected strategy; the same seed
//!   produces identical boards and refills
//! - **Testable**: fixture boards are built from explicit kind grids and
//!   scripted tile sources
//! - **Portable**: runs anywhere the mini-game front end does, headless
//!   included
//!
//! # Module Structure
//!
//! - [`board`]: flat-array grid with bounds-checked access, adjacent
//!   swaps, and gravity compaction with refill
//! - [`detect`]: single-pass-per-axis run scanning for matches of 3+
//! - [`scoring`]: cleared-tile counts to reward units
//! - [`rng`]: injectable tile sources (seedable LCG, scripted fixture)
//! - [`snapshot`]: serializable board views for the presentation layer
//!
//! Cascade orchestration and move validation live in the engine crate;
//! this crate deliberately stops at single operations on one board.

pub mod board;
pub mod detect;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use gemcascade_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use detect::{find_matches, Match};
pub use rng::{ScriptedSource, SimpleRng, TileSource};
pub use scoring::{step_reward, total_reward};
pub use snapshot::{BoardSnapshot, TileView};
