//! The authoritative game state machine (spec.md §3, §4).
//!
//! `Game` is a value, not a singleton: every piece of mutable state
//! (including the RNG) is a field on it, per the Design Notes in spec.md
//! §9 ("engine is a value; RNG is a field on the Game value"). Mirrors the
//! teacher's `common/src/game/mod.rs` top-level `Game` struct in shape,
//! without the teacher's n-player/async/city-production generality this
//! spec doesn't need.

pub mod coord;
pub mod combat;
pub mod error;
pub mod event;
pub mod fleet;
pub mod map_gen;
pub mod observation;
pub mod order;
pub mod player;
#[cfg(test)]
mod properties;
#[cfg(test)]
mod scenarios;
pub mod snapshot;
pub mod star;
pub mod turn;
pub mod victory;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use coord::Coord;
pub use error::GameError;
pub use event::Event;
pub use fleet::{Fleet, FleetId};
pub use order::{validate_orders, Order, OrderValidation};
pub use player::{Owner, Player, PlayerId};
pub use snapshot::{Snapshot, SnapshotError};
pub use star::{Star, StarId};
pub use turn::TurnReport;
pub use victory::Outcome;

use crate::rng::GameRng;

/// Whether the game is still accepting turns.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Phase {
    Running,
    Completed,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PlayerSet {
    pub p1: Player,
    pub p2: Player,
}

impl PlayerSet {
    pub fn get(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::P1 => &self.p1,
            PlayerId::P2 => &self.p2,
        }
    }

    pub fn get_mut(&mut self, id: PlayerId) -> &mut Player {
        match id {
            PlayerId::P1 => &mut self.p1,
            PlayerId::P2 => &mut self.p2,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Game {
    pub turn: u32,
    pub phase: Phase,
    pub(crate) rng: GameRng,
    pub stars: BTreeMap<StarId, Star>,
    pub fleets: Vec<Fleet>,
    pub players: PlayerSet,
    pub winner: Option<Outcome>,
    pub(crate) next_fleet_id: u64,
}

impl Game {
    /// `new_game(seed)` from the engine API surface (spec.md §6).
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let generated = map_gen::generate(&mut rng);

        let players = PlayerSet {
            p1: Player::new(PlayerId::P1, generated.home_p1),
            p2: Player::new(PlayerId::P2, generated.home_p2),
        };

        Self {
            turn: 0,
            phase: Phase::Running,
            rng,
            stars: generated.stars,
            fleets: Vec::new(),
            players,
            winner: None,
            next_fleet_id: 0,
        }
    }

    pub fn load(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        snapshot::load(snapshot)
    }

    pub fn save(&self) -> Snapshot {
        snapshot::save(self)
    }

    pub fn validate_orders(&self, player: PlayerId, orders: &[Order]) -> OrderValidation {
        order::validate_orders(self, player, orders)
    }

    /// `execute_turn(State, orders_p1, orders_p2)` from the engine API
    /// surface (spec.md §6). See [`turn::execute_turn`] for the step
    /// order, which is the core replay contract. `Err` only on the
    /// "should be impossible" internal-consistency violation from
    /// spec.md §7.
    pub fn execute_turn(
        &mut self,
        p1_orders: Vec<Order>,
        p2_orders: Vec<Order>,
    ) -> Result<TurnReport, error::FatalInconsistency> {
        turn::execute_turn(self, p1_orders, p2_orders)
    }

    pub fn distance(&self, a: StarId, b: StarId) -> Result<u32, GameError> {
        let star_a = self.stars.get(&a).ok_or(GameError::UnknownStar(a))?;
        let star_b = self.stars.get(&b).ok_or(GameError::UnknownStar(b))?;
        Ok(star_a.coord.manhattan_distance(star_b.coord))
    }
}

/// Free-function form of [`Game::distance`], matching the language-agnostic
/// engine API surface in spec.md §6 (`distance(State, star_a, star_b)`).
pub fn distance(game: &Game, a: StarId, b: StarId) -> Result<u32, GameError> {
    game.distance(a, b)
}
