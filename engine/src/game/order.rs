//! Order validation (spec.md §4.5).
//!
//! Pure: given a `Game` and a player's proposed orders, produces the same
//! verdict every time, with no RNG draw and no mutation. Errors are plain
//! human-readable strings rather than a typed enum, matching spec.md §7
//! ("Validation errors ... Returned to caller, not fatal") and the
//! teacher's `parse_spec` CLI-facing `Result<_, String>` convention
//! (`common/src/cli.rs`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::PlayerId;
use super::star::StarId;
use super::Game;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Order {
    pub from_star: StarId,
    pub to_star: StarId,
    pub ships: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderValidation {
    pub accepted: bool,
    pub errors: Vec<String>,
}

/// Validate a batch of orders submitted by `player` against `game`.
/// All-or-nothing: any single bad order rejects the whole batch
/// (spec.md §4.5, "no partial acceptance").
pub fn validate_orders(game: &Game, player: PlayerId, orders: &[Order]) -> OrderValidation {
    let mut errors = Vec::new();
    let mut committed: HashMap<StarId, u32> = HashMap::new();

    for order in orders {
        if order.ships == 0 {
            errors.push(format!(
                "order {}->{} has zero ships",
                order.from_star, order.to_star
            ));
            continue;
        }

        if order.from_star == order.to_star {
            errors.push(format!(
                "order from {} to itself is not allowed",
                order.from_star
            ));
            continue;
        }

        let Some(from) = game.stars.get(&order.from_star) else {
            errors.push(format!("unknown source star '{}'", order.from_star));
            continue;
        };

        if !game.stars.contains_key(&order.to_star) {
            errors.push(format!("unknown destination star '{}'", order.to_star));
            continue;
        }

        if !from.owner.is_player(player) {
            errors.push(GameError::NotOwner(order.from_star, player).to_string());
            continue;
        }

        *committed.entry(order.from_star).or_insert(0) += order.ships;
    }

    for (star_id, total) in &committed {
        let stationed = game.stars.get(star_id).map(|s| s.stationed_ships).unwrap_or(0);
        if *total > stationed {
            errors.push(format!(
                "{} commits {} ships from {} but only {} are stationed there",
                player, total, star_id, stationed
            ));
        }
    }

    OrderValidation {
        accepted: errors.is_empty(),
        errors,
    }
}
