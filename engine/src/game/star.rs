use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::Owner;

/// A star's stable identifier: `'A'..`, mirroring the teacher's
/// `CityID` (`common/src/game/city.rs`) in spirit -- a small newtype with a
/// monotonic-in-placement-order constructor -- but over `char` since the
/// spec fixes the id alphabet, not a counter.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct StarId(char);

impl StarId {
    /// The id assigned to the `n`th star placed during generation (0-based).
    pub fn from_placement_order(n: usize) -> Self {
        let offset = u32::try_from(n).expect("unreasonably large star count");
        let c = char::from_u32('A' as u32 + offset).expect("star id out of char range");
        Self(c)
    }

    /// Build a `StarId` from a raw character, e.g. parsing a player-facing
    /// identifier off the CLI or a saved order. Does not check that the id
    /// corresponds to a star that actually exists in any particular game.
    pub fn from_char(c: char) -> Self {
        Self(c)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Star {
    pub id: StarId,
    pub name: String,
    pub coord: Coord,
    pub base_ru: u8,
    pub is_home: bool,
    pub owner: Owner,
    pub stationed_ships: u32,
}

impl Star {
    pub fn short_desc(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{}] RU={} owner={} ships={}",
            self.short_desc(),
            self.coord,
            self.base_ru,
            self.owner,
            self.stationed_ships
        )
    }
}
