use thiserror::Error;

use super::player::PlayerId;
use super::star::StarId;

/// Lookup/internal-consistency errors raised by the engine API surface.
/// `thiserror`-derived, matching the teacher's newer error style
/// (`common/src/game/obs.rs`'s `ObsTrackerError`) rather than the older
/// `failure`-crate style (`common/src/game/error.rs`, `move_.rs`), which is
/// not carried forward -- see DESIGN.md.
#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("no star with id '{0}'")]
    UnknownStar(StarId),

    #[error("star '{0}' is not owned by {1}")]
    NotOwner(StarId, PlayerId),
}

/// Errors surfaced by the agent tool surface (spec.md §4.8, §7): "querying
/// an unknown star id returns a typed not-found result, never an
/// exception."
#[derive(Debug, Error, PartialEq)]
pub enum ToolError {
    #[error("no star with id '{0}'")]
    UnknownStar(StarId),
}

/// The "should be impossible" internal-consistency violation from spec.md
/// §7: never silently repaired, always carries enough to reproduce from the
/// snapshot + seed.
#[derive(Debug, Error)]
#[error("internal consistency violation at turn {turn}: {message}")]
pub struct FatalInconsistency {
    pub turn: u32,
    pub message: String,
}
