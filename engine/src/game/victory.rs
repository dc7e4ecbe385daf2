//! Victory check (spec.md §4.7).

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Outcome {
    Winner(PlayerId),
    Draw,
}

/// `p1_home_captured`/`p2_home_captured` indicate whether each player's
/// home star changed owner away from that player during this turn's
/// combat resolution.
pub fn check(p1_home_captured: bool, p2_home_captured: bool) -> Option<Outcome> {
    match (p1_home_captured, p2_home_captured) {
        (true, true) => Some(Outcome::Draw),
        (true, false) => Some(Outcome::Winner(PlayerId::P1.other())),
        (false, true) => Some(Outcome::Winner(PlayerId::P2.other())),
        (false, false) => None,
    }
}
