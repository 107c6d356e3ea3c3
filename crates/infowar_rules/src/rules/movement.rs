//! Where pieces may move.

use crate::board::Board;
use crate::geometry::adjacent_positions;
use crate::history::Move;
use crate::piece::Faction;
use crate::position::Position;
use tracing::instrument;

/// Destinations reachable by a `faction` piece standing on `src`.
///
/// Empty when `src` holds no piece of that faction. Movement is one
/// adjacency step; stacking on occupied slots is allowed.
#[instrument(skip(board))]
pub fn legal_destinations(board: &Board, faction: Faction, src: Position) -> Vec<Position> {
    if !board.has_faction_at(src, faction) {
        return Vec::new();
    }
    adjacent_positions(src)
}

/// Every single-step move available to `faction`, in board order.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, faction: Faction) -> Vec<Move> {
    board
        .occupied_by(faction)
        .flat_map(|src| {
            legal_destinations(board, faction, src)
                .into_iter()
                .map(move |dest| Move::new(src, dest))
        })
        .collect()
}
