//! Space Conquest: a deterministic, turn-based 4X strategy engine.
//!
//! This crate is the authoritative state machine for the game: map
//! generation, order validation, turn execution, combat resolution, and the
//! fog-of-war-limited observation surface consumed by an external agent
//! loop. Everything here is pure/synchronous; no I/O, no threads, no RNG
//! source other than the one carried on [`game::Game`].

pub mod conf;
pub mod game;
mod name;
pub mod rng;

pub use game::{
    combat, distance,
    error::{FatalInconsistency, GameError},
    event::Event,
    map_gen, observation, order, snapshot, turn, victory, Game, Order, Outcome, Owner, Phase,
    Player, PlayerId,
};
pub use rng::GameRng;
