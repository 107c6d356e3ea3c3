//! Where each faction may enter the board.

use crate::constants::{NUM_RANKS, OUTER_CIRCLE};
use crate::piece::Faction;
use crate::position::Position;
use tracing::instrument;

/// True when `faction` may place a piece at `position`.
///
/// Insurgents enter anywhere on the outer ring; state pieces only in the
/// capital.
#[instrument]
pub fn valid_placement(faction: Faction, position: Position) -> bool {
    match faction {
        Faction::Insurgent => position.is_outer_circle(),
        Faction::State => position.is_capital(),
    }
}

/// Every slot where `faction` may place a piece.
#[instrument]
pub fn placement_targets(faction: Faction) -> Vec<Position> {
    match faction {
        Faction::Insurgent => (0..NUM_RANKS)
            .map(|rank| Position::at(OUTER_CIRCLE, rank))
            .collect(),
        Faction::State => vec![Position::CAPITAL],
    }
}
