use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::star::StarId;

/// A fleet's stable identifier: monotonically assigned, never reused, even
/// across fleet destruction. Mirrors the teacher's `CityID::next()`
/// (`common/src/game/city.rs`), but as a free-standing counter on `Game`
/// rather than a method on the id itself, since fleets (unlike cities) are
/// destroyed and the next id must keep climbing regardless.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct FleetId(u64);

impl FleetId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for FleetId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Fleet {
    pub id: FleetId,
    pub owner: PlayerId,
    pub origin: StarId,
    pub dest: StarId,
    pub ships: u32,
    pub turns_remaining: u32,
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} ships {}->{} ({} turns left)",
            self.id, self.ships, self.origin, self.dest, self.turns_remaining
        )
    }
}
