//! Agent observation (spec.md §4.8) -- the fog-of-war-limited view and tool
//! surface exposed to an external decision loop.
//!
//! Per the REDESIGN FLAGS in spec.md §9, fog-of-war fields are modeled as
//! an explicit sum type rather than optional/absent keys, so a caller must
//! handle the unknown case rather than discovering it at runtime the way
//! the teacher's JSON-ish `Option<T>` fields let a consumer forget to.

use serde::{Deserialize, Serialize};

use super::error::ToolError;
use super::fleet::Fleet;
use super::player::{Owner, PlayerId};
use super::star::StarId;
use super::Game;

/// Fog-of-war discriminator: either the querying player has this piece of
/// information, or they don't. Never modeled as a missing/null JSON key.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Known<T> {
    Known(T),
    Unknown,
}

impl<T> Known<T> {
    pub fn from_option(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Known::Known(v),
            None => Known::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Known::Known(_))
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct StarView {
    pub id: StarId,
    pub name: String,
    pub x: u8,
    pub y: u8,
    pub is_home: bool,
    pub base_ru: Known<u8>,
    pub owner: Known<Owner>,
    /// Only ever `Known` when the querying player currently owns the star
    /// -- the fog-of-war bright line spec.md §4.8 draws.
    pub stationed_ships: Known<u32>,
}

impl StarView {
    /// Whether the querying player has ever visited this star, i.e. its
    /// `owner`/`base_ru` fields carry real data rather than `Unknown`.
    pub fn is_explored(&self) -> bool {
        self.owner.is_known()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FleetView {
    pub origin: StarId,
    pub dest: StarId,
    pub ships: u32,
    pub turns_remaining: u32,
}

impl From<&Fleet> for FleetView {
    fn from(f: &Fleet) -> Self {
        Self {
            origin: f.origin,
            dest: f.dest,
            ships: f.ships,
            turns_remaining: f.turns_remaining,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Rules {
    pub hyperspace_loss_chance: f64,
    pub rebellion_chance: f64,
    pub production_formula: &'static str,
}

pub const RULES: Rules = Rules {
    hyperspace_loss_chance: 1.0 / crate::conf::HYPERSPACE_LOSS_DENOMINATOR as f64,
    rebellion_chance: crate::conf::REBELLION_CHANCE,
    production_formula: "stationed_ships += base_ru each turn for owned stars",
};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Observation {
    pub turn: u32,
    pub stars: Vec<StarView>,
    pub fleets: Vec<FleetView>,
    pub rules: Rules,
}

fn star_view(game: &Game, player: PlayerId, star_id: StarId) -> Option<StarView> {
    let star = game.stars.get(&star_id)?;
    let visited = game.players.get(player).has_visited(star_id);
    let owned_by_viewer = star.owner.is_player(player);

    Some(StarView {
        id: star.id,
        name: star.name.clone(),
        x: star.coord.x,
        y: star.coord.y,
        is_home: star.is_home,
        base_ru: Known::from_option(visited.then_some(star.base_ru)),
        owner: Known::from_option(visited.then_some(star.owner)),
        stationed_ships: Known::from_option(owned_by_viewer.then_some(star.stationed_ships)),
    })
}

/// Pure, read-only projection of `game` as seen by `player`. Never reveals
/// another player's stationed counts or in-transit fleets, and never
/// reveals `base_ru`/`owner` for a star the player hasn't visited.
pub fn observe(game: &Game, player: PlayerId) -> Observation {
    let stars = game
        .stars
        .keys()
        .map(|&id| star_view(game, player, id).expect("star exists"))
        .collect();

    let fleets = game
        .fleets
        .iter()
        .filter(|f| f.owner == player)
        .map(FleetView::from)
        .collect();

    Observation {
        turn: game.turn,
        stars,
        fleets,
        rules: RULES,
    }
}

/// Tool: single-star fog-filtered lookup, same rules as [`observe`]'s
/// `stars[]`. Returns a typed not-found error rather than panicking.
pub fn query_star(game: &Game, player: PlayerId, star_id: StarId) -> Result<StarView, ToolError> {
    star_view(game, player, star_id).ok_or(ToolError::UnknownStar(star_id))
}

/// Tool: Manhattan distance between any two known star ids.
pub fn calculate_distance(game: &Game, a: StarId, b: StarId) -> Result<u32, ToolError> {
    let star_a = game.stars.get(&a).ok_or(ToolError::UnknownStar(a))?;
    let star_b = game.stars.get(&b).ok_or(ToolError::UnknownStar(b))?;
    Ok(star_a.coord.manhattan_distance(star_b.coord))
}
