//! Win detection for Infowar.

use crate::board::Board;
use crate::constants::{INNER_CIRCLE, NUM_RANKS, WINNING_BLOCK};
use crate::piece::Faction;
use crate::position::Position;
use tracing::instrument;

/// Finds a run of [`WINNING_BLOCK`] consecutive inner-circle slots, each
/// holding at least one insurgent. Runs may wrap past the last rank.
///
/// Returns the run starting from the lowest qualifying rank.
#[instrument(skip(board))]
pub fn winning_block(board: &Board) -> Option<[Position; WINNING_BLOCK as usize]> {
    let held: [bool; NUM_RANKS as usize] = std::array::from_fn(|rank| {
        board.has_faction_at(Position::at(INNER_CIRCLE, rank as u8), Faction::Insurgent)
    });

    let start = (0..NUM_RANKS).find(|start| {
        (0..WINNING_BLOCK).all(|offset| held[usize::from((start + offset) % NUM_RANKS)])
    })?;

    Some(std::array::from_fn(|offset| {
        Position::at(INNER_CIRCLE, (start + offset as u8) % NUM_RANKS)
    }))
}

/// Checks if either faction has won.
///
/// Insurgents win by holding a [`winning_block`]. No state victory exists
/// in these rules.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Faction> {
    winning_block(board).map(|_| Faction::Insurgent)
}
