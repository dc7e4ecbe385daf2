//! Star display names.
//!
//! The teacher's `ListNamer`/`WeightedNamer` machinery (`src/name.rs`) is
//! overkill here: there's no admiral-name weighting or CSV-backed name bank
//! to support, since that lives in the out-of-scope front-end. A single
//! fixed, deterministic list indexed by placement order is all §4.2 needs.

/// Display names for generated stars, in a fixed order. Cycles if a map
/// ever has more stars than names (it never does at `MAX_STARS`, but
/// cycling keeps the lookup total rather than partial).
const STAR_NAMES: &[&str] = &[
    "Sol", "Alderamin", "Vega", "Altair", "Rigel", "Antares", "Polaris", "Capella", "Arcturus",
    "Deneb", "Procyon", "Spica", "Regulus", "Canopus", "Fomalhaut", "Sirius", "Betelgeuse",
    "Aldebaran", "Bellatrix", "Castor",
];

pub fn star_name(placement_order: usize) -> &'static str {
    STAR_NAMES[placement_order % STAR_NAMES.len()]
}
