//! Serializable view of a game for broadcasting to observers.

use crate::engine::Infowar;
use crate::history::HistoryEntry;
use crate::phase::Phase;
use crate::piece::{Faction, Piece};
use crate::position::Position;
use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One occupied slot.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct Square {
    /// Where the stack is.
    position: Position,
    /// Pieces in placement/arrival order.
    pieces: Vec<Piece>,
}

/// Everything a client needs to render and audit a game.
///
/// Snapshots are read-only copies: observers discard them and take a new
/// one whenever the authoritative history grows.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct GameSnapshot {
    /// Current phase.
    phase: Phase,
    /// Faction to move, if any.
    current_turn: Option<Faction>,
    /// Winner, once decided.
    winner: Option<Faction>,
    /// Insurgents still to be placed.
    insurgents_remaining: u8,
    /// Occupied slots in board order.
    board: Vec<Square>,
    /// Full history, oldest first.
    history: Vec<HistoryEntry>,
}

impl GameSnapshot {
    /// One-line status for display.
    pub fn status_string(&self) -> String {
        match (self.phase, self.current_turn, self.winner) {
            (Phase::Setup, _, _) => format!(
                "Setup. {} insurgent(s) left to place.",
                self.insurgents_remaining
            ),
            (Phase::Playing, Some(turn), _) => format!("In progress. {turn} to move."),
            (Phase::Playing, None, _) => "In progress.".to_string(),
            (Phase::GameOver, _, Some(winner)) => format!("Game over. {winner} wins!"),
            (Phase::GameOver, _, None) => "Game over.".to_string(),
        }
    }

    /// True once the game has ended.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }
}

impl From<&Infowar> for GameSnapshot {
    fn from(game: &Infowar) -> Self {
        Self {
            phase: game.current_phase(),
            current_turn: game.current_turn(),
            winner: game.winner(),
            insurgents_remaining: game.initial_insurgents(),
            board: game
                .board()
                .stacks()
                .map(|(position, pieces)| Square {
                    position,
                    pieces: pieces.to_vec(),
                })
                .collect(),
            history: game.history().to_vec(),
        }
    }
}
