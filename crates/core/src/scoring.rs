//! Scoring policy - cleared tiles to reward units
//!
//! Reward scales with tiles cleared, not with the number of discrete
//! match records: a 4-run and two separate 3-runs clearing 6 tiles pay
//! the same. The invalid-move penalty is session policy (see the engine
//! crate); this module only prices successful cascades.

use gemcascade_types::MATCH_GROUP_SIZE;

/// Reward units for one cascade step: floor(cleared / group size).
pub fn step_reward(cleared_tiles: u32) -> u32 {
    cleared_tiles / MATCH_GROUP_SIZE
}

/// Total reward across the steps of one resolution, purely additive.
pub fn total_reward(cleared_per_step: impl IntoIterator<Item = u32>) -> u32 {
    cleared_per_step.into_iter().map(step_reward).sum()
}
