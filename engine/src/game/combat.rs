//! Combat resolution (spec.md §4.6).
//!
//! Arriving ships are grouped by owner before this module ever runs (see
//! `turn::resolve_arrivals`); `resolve` only ever sees at most one
//! defending party and one or two attacking parties, matching the "rare
//! three parties" case spec.md describes. Three-or-more-attacker combat
//! cannot occur because there are only two players.

use super::event::{CombatWinner, Event};
use super::player::{Owner, PlayerId};
use super::star::StarId;

pub struct CombatOutcome {
    pub events: Vec<Event>,
    pub final_owner: Owner,
    pub final_stationed: u32,
}

/// `ceil(loser / 2)` using integer division, per spec.md §4.6.
fn ceil_half(n: u32) -> u32 {
    (n + 1) / 2
}

/// Resolve a single pairwise clash. Exact ties destroy both sides.
fn resolve_pair(a: u32, b: u32) -> (u32, u32) {
    if a == b {
        (0, 0)
    } else if a > b {
        (a - ceil_half(b), 0)
    } else {
        (0, b - ceil_half(a))
    }
}

/// One pairwise fight: `attacker` vs whatever currently holds
/// `defender_ships` under `defender_owner`. `defender_is_original` marks
/// whether `defender_owner` is the star's true pre-turn owner (as opposed
/// to an attacker from an earlier pairwise stage this same resolution who
/// provisionally took the star but hasn't actually ended up holding it).
/// That distinction only matters for the tie case: a tie against the true
/// original owner leaves the star with that owner at zero garrison (spec.md
/// §4.6 step 5, "ownership is unchanged"); a tie against a mid-resolution
/// provisional holder leaves the star with no owner at all, since that
/// holder never durably took it (spec.md §8 Scenario E).
#[allow(clippy::too_many_arguments)]
fn fight(
    star_id: StarId,
    attacker: PlayerId,
    attacker_ships: u32,
    defender_owner: Owner,
    defender_ships: u32,
    defender_is_original: bool,
) -> (Owner, u32, Event) {
    if defender_ships == 0 {
        let event = Event::Combat {
            star_id,
            attacker,
            defender: defender_owner,
            attacker_ships,
            defender_ships: 0,
            winner: CombatWinner::Attacker,
            attacker_survivors: attacker_ships,
            defender_survivors: 0,
            was_home_capture: false,
        };
        return (Owner::Player(attacker), attacker_ships, event);
    }

    let (attacker_survivors, defender_survivors) = resolve_pair(attacker_ships, defender_ships);
    let winner = if attacker_survivors > 0 {
        CombatWinner::Attacker
    } else if defender_survivors > 0 {
        CombatWinner::Defender
    } else {
        CombatWinner::Mutual
    };

    let (owner, ships) = match winner {
        CombatWinner::Attacker => (Owner::Player(attacker), attacker_survivors),
        CombatWinner::Defender => (defender_owner, defender_survivors),
        CombatWinner::Mutual => {
            if defender_is_original {
                (defender_owner, 0)
            } else {
                (Owner::Unowned, 0)
            }
        }
    };

    let event = Event::Combat {
        star_id,
        attacker,
        defender: defender_owner,
        attacker_ships,
        defender_ships,
        winner,
        attacker_survivors,
        defender_survivors,
        was_home_capture: false,
    };

    (owner, ships, event)
}

/// Resolve combat at `star_id`. `attackers` holds each attacking player's
/// total arriving ships (at most two entries, since there are only two
/// players). `is_home` marks whether `star_id` is a home star, used to set
/// `was_home_capture` on the deciding event.
pub fn resolve(
    star_id: StarId,
    defender_owner: Owner,
    defender_ships: u32,
    mut attackers: Vec<(PlayerId, u32)>,
    is_home: bool,
) -> CombatOutcome {
    attackers.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let (final_owner, final_stationed, mut events) = if attackers.len() == 1 {
        let (p, ships) = attackers[0];
        let (owner, stationed, event) =
            fight(star_id, p, ships, defender_owner, defender_ships, true);
        (owner, stationed, vec![event])
    } else {
        let (big_p, big_ships) = attackers[0];
        let (small_p, small_ships) = attackers[1];

        let (round1_owner, round1_ships, event1) = fight(
            star_id,
            big_p,
            big_ships,
            defender_owner,
            defender_ships,
            true,
        );
        let round1_was_original_survivor = matches!(event1, Event::Combat { winner: CombatWinner::Defender, .. });

        let (final_owner, final_ships, event2) = fight(
            star_id,
            small_p,
            small_ships,
            round1_owner,
            round1_ships,
            round1_was_original_survivor,
        );

        (final_owner, final_ships, vec![event1, event2])
    };

    if let Some(Event::Combat {
        was_home_capture, ..
    }) = events.last_mut()
    {
        *was_home_capture = is_home && final_owner != defender_owner;
    }

    CombatOutcome {
        events,
        final_owner,
        final_stationed,
    }
}
