//! RNG module - injectable tile generation
//!
//! Tile generation (initial fill and cascade refill) draws from a
//! [`TileSource`] passed in by the caller rather than an ambient random
//! function, so tests can supply deterministic sequences.
//!
//! [`SimpleRng`] is the production source: a small seedable LCG.
//! [`ScriptedSource`] replays a fixed index sequence for fixtures.

use gemcascade_types::TileKind;

/// Strategy for drawing tile kinds during fill and refill.
///
/// Implementations must return an index strictly below `bound`.
pub trait TileSource {
    /// Draw a palette index in `[0, bound)`.
    fn next_index(&mut self, bound: u8) -> u8;

    /// Draw a tile kind from the first `palette_size` kinds.
    fn next_kind(&mut self, palette_size: u8) -> TileKind {
        let idx = (self.next_index(palette_size) as usize).min(TileKind::ALL.len() - 1);
        TileKind::ALL[idx]
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for restarting a round with the same sequence).
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl TileSource for SimpleRng {
    fn next_index(&mut self, bound: u8) -> u8 {
        self.next_range(bound.max(1) as u32) as u8
    }
}

/// Replays a fixed sequence of palette indices, cycling when exhausted.
///
/// Used to build deterministic refill behavior in tests and tooling;
/// never used in production play.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    indices: Vec<u8>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(indices: Vec<u8>) -> Self {
        Self { indices, cursor: 0 }
    }

    /// Number of draws consumed so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl TileSource for ScriptedSource {
    fn next_index(&mut self, bound: u8) -> u8 {
        if self.indices.is_empty() {
            return 0;
        }
        let raw = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        raw % bound.max(1)
    }
}
