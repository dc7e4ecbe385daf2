//! Serialization (spec.md §4.9, §6).
//!
//! `Snapshot` mirrors the External Interfaces table field-for-field. This
//! is plain data -- the shape the teacher's `common/src/rpc.rs` carries
//! over the wire without the `tarpc` service-trait machinery around it,
//! since this engine has no RPC boundary.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::{Owner, Player, PlayerId};
use super::star::{Star, StarId};
use super::{Fleet, FleetId, Game, Outcome, Phase, PlayerSet};
use crate::rng::GameRng;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StarRecord {
    pub id: StarId,
    pub name: String,
    pub x: u8,
    pub y: u8,
    pub base_ru: u8,
    pub is_home: bool,
    pub owner: Owner,
    pub stationed_ships: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FleetRecord {
    pub id: FleetId,
    pub owner: PlayerId,
    pub origin: StarId,
    pub dest: StarId,
    pub ships: u32,
    pub turns_remaining: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub home_star_id: StarId,
    pub visited_star_ids: Vec<StarId>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Snapshot {
    pub turn: u32,
    pub phase: Phase,
    pub rng_state: GameRng,
    pub stars: Vec<StarRecord>,
    pub fleets: Vec<FleetRecord>,
    pub players: Vec<PlayerRecord>,
    pub winner: Option<Outcome>,
    pub next_fleet_id: u64,
}

#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("duplicate star coordinates in snapshot")]
    DuplicateCoordinates,

    #[error("snapshot is missing a home star for {0}")]
    MissingHome(PlayerId),

    #[error("snapshot has more than one home star for {0}")]
    TooManyHomes(PlayerId),

    #[error("star '{0}' has a negative or malformed garrison")]
    NegativeGarrison(StarId),

    #[error("fleet '{0}' references unknown star '{1}'")]
    UnknownFleetStar(FleetId, StarId),

    #[error("player record references unknown star '{0}'")]
    UnknownPlayerStar(StarId),

    #[error("snapshot is missing a record for {0}")]
    MissingPlayer(PlayerId),
}

pub fn save(game: &Game) -> Snapshot {
    let stars = game
        .stars
        .values()
        .map(|s| StarRecord {
            id: s.id,
            name: s.name.clone(),
            x: s.coord.x,
            y: s.coord.y,
            base_ru: s.base_ru,
            is_home: s.is_home,
            owner: s.owner,
            stationed_ships: s.stationed_ships,
        })
        .collect();

    let fleets = game
        .fleets
        .iter()
        .map(|f| FleetRecord {
            id: f.id,
            owner: f.owner,
            origin: f.origin,
            dest: f.dest,
            ships: f.ships,
            turns_remaining: f.turns_remaining,
        })
        .collect();

    let players = vec![
        PlayerRecord {
            id: PlayerId::P1,
            home_star_id: game.players.p1.home_star,
            visited_star_ids: game.players.p1.visited().iter().copied().collect(),
        },
        PlayerRecord {
            id: PlayerId::P2,
            home_star_id: game.players.p2.home_star,
            visited_star_ids: game.players.p2.visited().iter().copied().collect(),
        },
    ];

    Snapshot {
        turn: game.turn,
        phase: game.phase,
        rng_state: game.rng.clone(),
        stars,
        fleets,
        players,
        winner: game.winner,
        next_fleet_id: game.next_fleet_id,
    }
}

pub fn load(snapshot: Snapshot) -> Result<Game, SnapshotError> {
    let mut seen_coords = HashSet::new();
    let mut stars: BTreeMap<StarId, Star> = BTreeMap::new();
    let mut home_of: BTreeMap<PlayerId, Vec<StarId>> = BTreeMap::new();

    for record in &snapshot.stars {
        if !seen_coords.insert((record.x, record.y)) {
            return Err(SnapshotError::DuplicateCoordinates);
        }

        if record.is_home {
            if let Owner::Player(p) = record.owner {
                home_of.entry(p).or_default().push(record.id);
            }
        }

        stars.insert(
            record.id,
            Star {
                id: record.id,
                name: record.name.clone(),
                coord: super::coord::Coord::new(record.x, record.y),
                base_ru: record.base_ru,
                is_home: record.is_home,
                owner: record.owner,
                stationed_ships: record.stationed_ships,
            },
        );
    }

    for player in [PlayerId::P1, PlayerId::P2] {
        match home_of.get(&player).map(|v| v.len()).unwrap_or(0) {
            0 => return Err(SnapshotError::MissingHome(player)),
            1 => {}
            _ => return Err(SnapshotError::TooManyHomes(player)),
        }
    }

    for fleet in &snapshot.fleets {
        if !stars.contains_key(&fleet.origin) {
            return Err(SnapshotError::UnknownFleetStar(fleet.id, fleet.origin));
        }
        if !stars.contains_key(&fleet.dest) {
            return Err(SnapshotError::UnknownFleetStar(fleet.id, fleet.dest));
        }
    }

    let mut players_by_id: BTreeMap<PlayerId, PlayerRecord> = BTreeMap::new();
    for record in snapshot.players {
        players_by_id.insert(record.id, record);
    }

    let mut make_player = |id: PlayerId| -> Result<Player, SnapshotError> {
        let record = players_by_id
            .remove(&id)
            .ok_or(SnapshotError::MissingPlayer(id))?;
        if !stars.contains_key(&record.home_star_id) {
            return Err(SnapshotError::UnknownPlayerStar(record.home_star_id));
        }
        let mut visited = BTreeSet::new();
        for star_id in record.visited_star_ids {
            if !stars.contains_key(&star_id) {
                return Err(SnapshotError::UnknownPlayerStar(star_id));
            }
            visited.insert(star_id);
        }
        visited.insert(record.home_star_id);
        Ok(Player {
            id,
            home_star: record.home_star_id,
            visited,
        })
    };

    let p1 = make_player(PlayerId::P1)?;
    let p2 = make_player(PlayerId::P2)?;

    let fleets: Vec<Fleet> = snapshot
        .fleets
        .into_iter()
        .map(|f| Fleet {
            id: f.id,
            owner: f.owner,
            origin: f.origin,
            dest: f.dest,
            ships: f.ships,
            turns_remaining: f.turns_remaining,
        })
        .collect();

    Ok(Game {
        turn: snapshot.turn,
        phase: snapshot.phase,
        rng: snapshot.rng_state,
        stars,
        fleets,
        players: PlayerSet { p1, p2 },
        winner: snapshot.winner,
        next_fleet_id: snapshot.next_fleet_id,
    })
}
