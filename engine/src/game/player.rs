use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::star::StarId;

/// The two competing players. Fixed at exactly two -- this engine never
/// generalizes to `PlayerNum`, unlike the teacher's n-player `PlayerNum`
/// (`common/src/game/mod.rs`), because the spec is fixed at exactly two.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerId::P1 => write!(f, "p1"),
            PlayerId::P2 => write!(f, "p2"),
        }
    }
}

/// Who currently controls a star.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Owner {
    Player(PlayerId),
    Npc,
    Unowned,
}

impl Owner {
    pub fn is_player(self, player: PlayerId) -> bool {
        matches!(self, Owner::Player(p) if p == player)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Owner::Player(p) => fmt::Display::fmt(p, f),
            Owner::Npc => write!(f, "npc"),
            Owner::Unowned => write!(f, "unowned"),
        }
    }
}

/// A player's persistent record: their home star and everything they've
/// ever seen.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub home_star: StarId,
    pub(crate) visited: BTreeSet<StarId>,
}

impl Player {
    pub fn new(id: PlayerId, home_star: StarId) -> Self {
        let mut visited = BTreeSet::new();
        visited.insert(home_star);
        Self {
            id,
            home_star,
            visited,
        }
    }

    pub fn visited(&self) -> &BTreeSet<StarId> {
        &self.visited
    }

    pub fn has_visited(&self, star: StarId) -> bool {
        self.visited.contains(&star)
    }

    pub fn mark_visited(&mut self, star: StarId) {
        self.visited.insert(star);
    }
}
