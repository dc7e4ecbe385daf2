//! The turn executor (spec.md §4.4).
//!
//! One outer function composing private step functions in a fixed order --
//! this order is the core replay contract. Mirrors the way the teacher
//! composes a turn out of named sub-steps in `common/src/game/turn.rs`,
//! minus the `async_trait`/`TurnTaker` machinery: this executor is
//! synchronous, takes both players' orders at once, and returns rather than
//! mutating a shared turn-in-progress object.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;
use serde::{Deserialize, Serialize};

use super::combat;
use super::error::FatalInconsistency;
use super::event::{Event, RebellionOutcome};
use super::fleet::{Fleet, FleetId};
use super::order::{self, Order};
use super::player::{Owner, PlayerId};
use super::star::StarId;
use super::victory::{self, Outcome};
use super::Game;
use crate::conf;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TurnReport {
    pub events: Vec<Event>,
    pub outcome: Option<Outcome>,
}

/// Run one full turn given both players' orders. See module docs for the
/// step order; each step is a private function below, called in sequence.
///
/// Returns `Err(FatalInconsistency)` only if a combat resolution is caught
/// producing more ships than entered it -- the "should be impossible" case
/// from spec.md §7. The engine never attempts to repair state when this
/// happens; it surfaces the violation with enough context (turn number) to
/// reproduce from the snapshot and seed.
pub fn execute_turn(
    game: &mut Game,
    p1_orders: Vec<Order>,
    p2_orders: Vec<Order>,
) -> Result<TurnReport, FatalInconsistency> {
    debug!("turn {}: executing", game.turn);
    let mut events = Vec::new();

    validate_and_spawn(game, PlayerId::P1, p1_orders);
    validate_and_spawn(game, PlayerId::P2, p2_orders);

    hyperspace_loss_pass(game, &mut events);
    travel_decrement(game);

    let arrivals = group_arrivals(game);
    let (p1_home_captured, p2_home_captured) = resolve_combats(game, arrivals, &mut events)?;

    rebellion_pass(game, &mut events);
    production_pass(game, &mut events);

    let fought = fought_stars(&events);
    update_visibility(game, &fought);

    let outcome = victory::check(p1_home_captured, p2_home_captured);
    if let Some(o) = outcome {
        game.phase = super::Phase::Completed;
        game.winner = Some(o);
    }
    game.turn += 1;

    Ok(TurnReport { events, outcome })
}

/// Step 1: validate each player's batch independently and spawn accepted
/// orders as fleets. A rejected batch is a no-op for that player only --
/// the other player's valid orders still proceed.
fn validate_and_spawn(game: &mut Game, player: PlayerId, orders: Vec<Order>) {
    debug!("turn {}: validating orders for {}", game.turn, player);
    let validation = order::validate_orders(game, player, &orders);
    if !validation.accepted {
        return;
    }

    for order in orders {
        let turns_remaining = game
            .distance(order.from_star, order.to_star)
            .expect("validated order references real stars");

        if let Some(star) = game.stars.get_mut(&order.from_star) {
            star.stationed_ships -= order.ships;
        }

        let id = FleetId::new(game.next_fleet_id);
        game.next_fleet_id += 1;
        game.fleets.push(Fleet {
            id,
            owner: player,
            origin: order.from_star,
            dest: order.to_star,
            ships: order.ships,
            turns_remaining,
        });
    }
}

/// Step 2: per-fleet 1-in-`HYPERSPACE_LOSS_DENOMINATOR` destruction, rolled
/// in fleet-id order so replays are insensitive to incidental `Vec` layout.
fn hyperspace_loss_pass(game: &mut Game, events: &mut Vec<Event>) {
    debug!("turn {}: hyperspace loss pass", game.turn);
    let mut survivors = Vec::with_capacity(game.fleets.len());
    for fleet in game.fleets.drain(..) {
        let roll = game.rng.uniform_int(conf::HYPERSPACE_LOSS_DENOMINATOR);
        if roll == 0 {
            events.push(Event::HyperspaceLoss {
                fleet_id: fleet.id,
                owner: fleet.owner,
                origin: fleet.origin,
                dest: fleet.dest,
                ships: fleet.ships,
            });
        } else {
            survivors.push(fleet);
        }
    }
    game.fleets = survivors;
}

/// Step 3.
fn travel_decrement(game: &mut Game) {
    debug!("turn {}: travel decrement", game.turn);
    for fleet in game.fleets.iter_mut() {
        fleet.turns_remaining -= 1;
    }
}

/// Step 4: split fleets into those arriving this turn (grouped by
/// destination) and those still in flight.
fn group_arrivals(game: &mut Game) -> BTreeMap<StarId, Vec<Fleet>> {
    debug!("turn {}: grouping arrivals", game.turn);
    let mut arrivals: BTreeMap<StarId, Vec<Fleet>> = BTreeMap::new();
    let mut in_flight = Vec::with_capacity(game.fleets.len());
    for fleet in game.fleets.drain(..) {
        if fleet.turns_remaining == 0 {
            arrivals.entry(fleet.dest).or_default().push(fleet);
        } else {
            in_flight.push(fleet);
        }
    }
    game.fleets = in_flight;
    arrivals
}

/// Step 5: resolve each arriving star in star-id lexicographic order
/// (`BTreeMap` iteration order). Returns whether each player's home star
/// was captured away from them this turn, for the victory check.
fn resolve_combats(
    game: &mut Game,
    arrivals: BTreeMap<StarId, Vec<Fleet>>,
    events: &mut Vec<Event>,
) -> Result<(bool, bool), FatalInconsistency> {
    debug!("turn {}: resolving combat at {} star(s)", game.turn, arrivals.len());
    let p1_home = game.players.p1.home_star;
    let p2_home = game.players.p2.home_star;
    let mut p1_home_captured = false;
    let mut p2_home_captured = false;

    for (star_id, landing_fleets) in arrivals {
        let mut by_owner: BTreeMap<PlayerId, u32> = BTreeMap::new();
        for fleet in &landing_fleets {
            *by_owner.entry(fleet.owner).or_insert(0) += fleet.ships;
        }

        let (current_owner, is_home) = {
            let star = game.stars.get(&star_id).expect("arrival at a known star");
            (star.owner, star.is_home)
        };

        // A landing fleet owned by the star's current owner reinforces
        // rather than attacks, even when other parties arrive the same
        // turn -- it's folded into the defending garrison before combat.
        let mut defender_ships = game.stars[&star_id].stationed_ships;
        let mut attacker_totals = by_owner;
        if let Owner::Player(owner) = current_owner {
            if let Some(reinforcement) = attacker_totals.remove(&owner) {
                defender_ships += reinforcement;
            }
        }

        if attacker_totals.is_empty() {
            let star = game.stars.get_mut(&star_id).unwrap();
            star.stationed_ships = defender_ships;
            for fleet in &landing_fleets {
                events.push(Event::Arrival {
                    fleet_id: fleet.id,
                    star_id,
                    owner: fleet.owner,
                    ships: fleet.ships,
                });
            }
            continue;
        }

        let attackers: Vec<(PlayerId, u32)> = attacker_totals.into_iter().collect();
        let total_in: u32 = defender_ships + attackers.iter().map(|(_, ships)| ships).sum::<u32>();
        let outcome = combat::resolve(star_id, current_owner, defender_ships, attackers, is_home);

        // Garrison conservation: combat only ever destroys ships, so the
        // survivors at a star can never exceed the total that fought there.
        if outcome.final_stationed > total_in {
            return Err(FatalInconsistency {
                turn: game.turn,
                message: format!(
                    "combat at {star_id} produced {} surviving ships from {total_in} entering combat",
                    outcome.final_stationed
                ),
            });
        }

        let star = game.stars.get_mut(&star_id).unwrap();
        star.owner = outcome.final_owner;
        star.stationed_ships = outcome.final_stationed;

        if star_id == p1_home && outcome.final_owner != Owner::Player(PlayerId::P1) {
            p1_home_captured = true;
        }
        if star_id == p2_home && outcome.final_owner != Owner::Player(PlayerId::P2) {
            p2_home_captured = true;
        }

        events.extend(outcome.events);
    }

    Ok((p1_home_captured, p2_home_captured))
}

/// Step 6: non-home stars under-garrisoned relative to their RU revert to
/// `npc` at 50% chance per turn. Suppressed attempts are emitted too, as
/// telemetry (spec.md §4.4 step 6 notes this is optional; this engine
/// always emits both outcomes for a uniform event stream).
fn rebellion_pass(game: &mut Game, events: &mut Vec<Event>) {
    debug!("turn {}: rebellion pass", game.turn);
    let candidates: Vec<StarId> = game
        .stars
        .iter()
        .filter(|(_, star)| {
            matches!(star.owner, Owner::Player(_))
                && !star.is_home
                && star.stationed_ships < star.base_ru as u32
        })
        .map(|(&id, _)| id)
        .collect();

    for star_id in candidates {
        let roll = game.rng.percent();
        let star = game.stars.get_mut(&star_id).unwrap();
        let garrison_before = star.stationed_ships;
        let rebel_ships = star.base_ru as u32;

        if roll < conf::REBELLION_CHANCE {
            star.owner = Owner::Npc;
            star.stationed_ships = rebel_ships;
            events.push(Event::Rebellion {
                star_id,
                garrison_before,
                rebel_ships,
                outcome: RebellionOutcome::Lost,
                garrison_after: rebel_ships,
            });
        } else {
            events.push(Event::Rebellion {
                star_id,
                garrison_before,
                rebel_ships,
                outcome: RebellionOutcome::Suppressed,
                garrison_after: garrison_before,
            });
        }
    }
}

/// Step 7: every player-owned star produces `base_ru` ships.
fn production_pass(game: &mut Game, events: &mut Vec<Event>) {
    debug!("turn {}: production pass", game.turn);
    let owned: Vec<StarId> = game
        .stars
        .iter()
        .filter(|(_, star)| matches!(star.owner, Owner::Player(_)))
        .map(|(&id, _)| id)
        .collect();

    for star_id in owned {
        let star = game.stars.get_mut(&star_id).unwrap();
        let added = star.base_ru as u32;
        star.stationed_ships += added;
        let Owner::Player(player) = star.owner else {
            unreachable!("filtered to player-owned stars above")
        };
        events.push(Event::Production {
            player,
            star_id,
            ships_added: added,
        });
    }
}

/// Stars each player fought at this turn, derived from this turn's combat
/// events -- used to extend `visited` beyond currently-owned stars.
fn fought_stars(events: &[Event]) -> HashMap<PlayerId, HashSet<StarId>> {
    let mut fought: HashMap<PlayerId, HashSet<StarId>> = HashMap::new();
    for event in events {
        if let Event::Combat {
            star_id,
            attacker,
            defender,
            ..
        } = event
        {
            fought.entry(*attacker).or_default().insert(*star_id);
            if let Owner::Player(p) = defender {
                fought.entry(*p).or_default().insert(*star_id);
            }
        }
    }
    fought
}

/// Step 8: extend each player's visited set with stars they currently own
/// or fought at this turn.
fn update_visibility(game: &mut Game, fought: &HashMap<PlayerId, HashSet<StarId>>) {
    debug!("turn {}: updating visibility", game.turn);
    for player in [PlayerId::P1, PlayerId::P2] {
        let owned: Vec<StarId> = game
            .stars
            .iter()
            .filter(|(_, star)| star.owner.is_player(player))
            .map(|(&id, _)| id)
            .collect();

        let record = game.players.get_mut(player);
        for star_id in owned {
            record.mark_visited(star_id);
        }
        if let Some(stars) = fought.get(&player) {
            for &star_id in stars {
                record.mark_visited(star_id);
            }
        }
    }
}
