use serde::{Deserialize, Serialize};

use super::fleet::FleetId;
use super::player::{Owner, PlayerId};
use super::star::StarId;

/// Who won a single pairwise combat resolution.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CombatWinner {
    Attacker,
    Defender,
    Mutual,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RebellionOutcome {
    Suppressed,
    Lost,
}

/// A closed sum type of everything that can happen in a single turn.
/// Modeled as a tagged enum rather than the teacher's looser
/// `AiPlayerAction`-style data carried through dynamic dispatch
/// (`common/src/game/action.rs`), since spec.md §3 fixes a closed,
/// serializable event vocabulary for an external consumer.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Event {
    Combat {
        star_id: StarId,
        attacker: PlayerId,
        defender: Owner,
        attacker_ships: u32,
        defender_ships: u32,
        winner: CombatWinner,
        attacker_survivors: u32,
        defender_survivors: u32,
        was_home_capture: bool,
    },
    HyperspaceLoss {
        fleet_id: FleetId,
        owner: PlayerId,
        origin: StarId,
        dest: StarId,
        ships: u32,
    },
    Rebellion {
        star_id: StarId,
        garrison_before: u32,
        rebel_ships: u32,
        outcome: RebellionOutcome,
        garrison_after: u32,
    },
    Production {
        player: PlayerId,
        star_id: StarId,
        ships_added: u32,
    },
    Arrival {
        fleet_id: FleetId,
        star_id: StarId,
        owner: PlayerId,
        ships: u32,
    },
}
