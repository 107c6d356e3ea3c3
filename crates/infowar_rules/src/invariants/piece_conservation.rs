//! Piece conservation invariant: pieces are neither created nor destroyed by moves.

use super::Invariant;
use super::placement_quota::placements_by;
use crate::engine::Infowar;
use crate::piece::Faction;
use strum::IntoEnumIterator;

/// Invariant: each faction has exactly as many pieces on the board as it
/// has placements in the history.
#[derive(Debug, Clone, Copy)]
pub struct PieceConservationInvariant;

impl Invariant<Infowar> for PieceConservationInvariant {
    fn holds(game: &Infowar) -> bool {
        Faction::iter().all(|faction| {
            game.board().count(faction) == placements_by(game.history(), faction)
        })
    }

    fn description() -> &'static str {
        "Pieces on the board match the placements in the history"
    }
}
