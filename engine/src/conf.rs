//! Rules constants.
//!
//! Kept as a flat module of `const`s, same as the teacher's
//! `common/src/conf.rs` -- these are the numeric rules of the game, not
//! anything a player ever tunes at runtime.

/// Grid width: x ranges `0..GRID_WIDTH`.
pub const GRID_WIDTH: u8 = 12;

/// Grid height: y ranges `0..GRID_HEIGHT`.
pub const GRID_HEIGHT: u8 = 10;

/// Minimum Manhattan distance between the two home stars.
pub const MIN_HOME_DISTANCE: u32 = 6;

/// Minimum number of stars on a generated map, homes included.
pub const MIN_STARS: u32 = 10;

/// Maximum number of stars on a generated map, homes included.
pub const MAX_STARS: u32 = 14;

/// Resource units of a home star.
pub const HOME_RU: u8 = 4;

/// Cumulative weights for non-home star RU draws, indices 0..5 representing
/// RU values 1..5. Biased toward lower values.
pub const RU_WEIGHTS: [u32; 5] = [3, 3, 2, 1, 1];

/// Per-fleet, per-turn chance of hyperspace loss, expressed as "1 in N".
pub const HYPERSPACE_LOSS_DENOMINATOR: u32 = 50;

/// Per-turn chance that an under-garrisoned, non-home star owned by a
/// player reverts to `npc`.
pub const REBELLION_CHANCE: f64 = 0.5;
