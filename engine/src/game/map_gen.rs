//! Map generation (spec.md §4.2).
//!
//! Mirrors the shape of the teacher's `MapType::generate`
//! (`common/src/game/map/gen.rs`, a `rng`-driven generator producing a
//! populated `MapData`): sample terrain/positions from the shared RNG in a
//! fixed order, then lay stars onto a grid. There is no terrain here, only
//! star placement, so the continent-growth machinery doesn't carry over --
//! but the "thread one `RngCore` through a handful of free functions, in a
//! fixed call order" shape does.

use std::collections::BTreeMap;

use super::coord::Coord;
use super::player::Owner;
use super::star::{Star, StarId};
use crate::conf;
use crate::name::star_name;
use crate::rng::GameRng;

pub struct GeneratedMap {
    pub stars: BTreeMap<StarId, Star>,
    pub home_p1: StarId,
    pub home_p2: StarId,
}

fn sample_coord(rng: &mut GameRng) -> Coord {
    let x = rng.uniform_int(conf::GRID_WIDTH as u32) as u8;
    let y = rng.uniform_int(conf::GRID_HEIGHT as u32) as u8;
    Coord::new(x, y)
}

fn draw_ru(rng: &mut GameRng) -> u8 {
    let total: u32 = conf::RU_WEIGHTS.iter().sum();
    let roll = rng.uniform_int(total);
    let mut cumulative = 0;
    for (i, weight) in conf::RU_WEIGHTS.iter().enumerate() {
        cumulative += weight;
        if roll < cumulative {
            return (i + 1) as u8;
        }
    }
    unreachable!("RU_WEIGHTS cumulative sum must equal `total`");
}

/// Generate a galaxy deterministically from `seed`. Same seed, same map,
/// byte-for-byte, since `rng` is the only source of variation and every
/// draw happens in this fixed order.
pub fn generate(rng: &mut GameRng) -> GeneratedMap {
    let home1 = sample_coord(rng);
    let mut home2 = sample_coord(rng);
    while home2 == home1 || home1.manhattan_distance(home2) < conf::MIN_HOME_DISTANCE {
        home2 = sample_coord(rng);
    }

    let star_count_range = conf::MAX_STARS - conf::MIN_STARS + 1;
    let total_stars = conf::MIN_STARS + rng.uniform_int(star_count_range);

    let mut occupied: Vec<Coord> = vec![home1, home2];
    let mut stars = BTreeMap::new();

    let home_p1 = StarId::from_placement_order(0);
    stars.insert(
        home_p1,
        Star {
            id: home_p1,
            name: star_name(0).to_string(),
            coord: home1,
            base_ru: conf::HOME_RU,
            is_home: true,
            owner: Owner::Player(super::player::PlayerId::P1),
            stationed_ships: conf::HOME_RU as u32,
        },
    );

    let home_p2 = StarId::from_placement_order(1);
    stars.insert(
        home_p2,
        Star {
            id: home_p2,
            name: star_name(1).to_string(),
            coord: home2,
            base_ru: conf::HOME_RU,
            is_home: true,
            owner: Owner::Player(super::player::PlayerId::P2),
            stationed_ships: conf::HOME_RU as u32,
        },
    );

    for placement in 2..total_stars {
        let mut coord = sample_coord(rng);
        while occupied.contains(&coord) {
            coord = sample_coord(rng);
        }
        occupied.push(coord);

        let ru = draw_ru(rng);
        let id = StarId::from_placement_order(placement as usize);
        stars.insert(
            id,
            Star {
                id,
                name: star_name(placement as usize).to_string(),
                coord,
                base_ru: ru,
                is_home: false,
                owner: Owner::Npc,
                stationed_ships: ru as u32,
            },
        );
    }

    GeneratedMap {
        stars,
        home_p1,
        home_p2,
    }
}
