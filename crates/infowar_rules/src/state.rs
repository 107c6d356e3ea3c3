//! Derived game state and the reducer that builds it.
//!
//! [`GameState::apply`] is the only way state changes. Live play and replay
//! both go through it, which is what makes them converge.

use crate::board::Board;
use crate::constants::INITIAL_INSURGENTS;
use crate::contracts::LegalEntry;
use crate::error::RulesError;
use crate::history::HistoryEntry;
use crate::phase::Phase;
use crate::piece::{Faction, Piece};
use crate::rules::{check_winner, winning_block};
use tracing::{debug, info, instrument};

/// Everything derivable from a history prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    phase: Phase,
    current_turn: Option<Faction>,
    winner: Option<Faction>,
    insurgents_placed: u8,
    state_pieces_placed: u8,
}

impl GameState {
    /// State of an empty history: empty board, setup phase, nobody's turn.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `entries` over an empty state.
    ///
    /// # Errors
    ///
    /// Returns the error of the first entry that is illegal given the
    /// entries before it.
    #[instrument(skip(entries), fields(len = entries.len()))]
    pub fn replay(entries: &[HistoryEntry]) -> Result<Self, RulesError> {
        entries.iter().try_fold(Self::new(), |mut state, entry| {
            state.apply(entry)?;
            Ok(state)
        })
    }

    /// Validates `entry` and, if legal, folds it into the state.
    ///
    /// Validation runs to completion before anything is touched, so a
    /// rejected entry leaves the state unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition of [`LegalEntry`].
    pub fn apply(&mut self, entry: &HistoryEntry) -> Result<(), RulesError> {
        LegalEntry::check(entry, self)?;
        match *entry {
            HistoryEntry::Placement { player, position } => {
                self.board.place(position, Piece::of(player));
                match player {
                    Faction::Insurgent => self.insurgents_placed += 1,
                    Faction::State => self.state_pieces_placed += 1,
                }
                debug!(%player, %position, "Piece placed");
                if self.phase == Phase::Setup && self.insurgents_placed == INITIAL_INSURGENTS {
                    self.phase = Phase::Playing;
                    self.current_turn = Some(Faction::Insurgent);
                    info!("Setup complete, insurgents to move");
                }
            }
            HistoryEntry::Move { player, movement } => {
                self.board.relocate(player, movement.src, movement.dest);
                self.current_turn = Some(player.opponent());
                debug!(%player, %movement, "Piece moved");
                self.evaluate_win();
            }
        }
        Ok(())
    }

    /// Ends the game if a faction has met its win condition.
    fn evaluate_win(&mut self) {
        if let Some(winner) = check_winner(&self.board) {
            self.phase = Phase::GameOver;
            self.winner = Some(winner);
            self.current_turn = None;
            info!(%winner, block = ?winning_block(&self.board), "Game over");
        }
    }

    /// Projected board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Faction to move, `None` during setup and after the game ends.
    pub fn current_turn(&self) -> Option<Faction> {
        self.current_turn
    }

    /// Winning faction once the game is over.
    pub fn winner(&self) -> Option<Faction> {
        self.winner
    }

    /// Insurgent placements so far.
    pub fn insurgents_placed(&self) -> u8 {
        self.insurgents_placed
    }

    /// State placements so far.
    pub fn state_pieces_placed(&self) -> u8 {
        self.state_pieces_placed
    }

    /// Insurgents still to be placed.
    pub fn insurgents_remaining(&self) -> u8 {
        INITIAL_INSURGENTS.saturating_sub(self.insurgents_placed)
    }
}
