//! The Infowar engine: an append-only history plus its derived state.

use crate::board::Board;
use crate::constants::INITIAL_STATE_PIECES;
use crate::contracts::{Contract, EntryContract};
use crate::error::RulesError;
use crate::history::{HistoryEntry, Move};
use crate::phase::Phase;
use crate::piece::{Faction, Piece};
use crate::position::Position;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::state::GameState;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// One game of Infowar.
///
/// The history is the source of truth; the board, phase, turn and winner
/// are cached from it and always equal a fresh replay. Every mutating call
/// is atomic: on error the game is exactly as it was.
///
/// A game serializes as its history, and deserializing replays it, so a
/// tampered history never produces a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct Infowar {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) state: GameState,
}

impl Infowar {
    /// Starts a new game with the state pieces already in the capital.
    ///
    /// The history opens with [`INITIAL_STATE_PIECES`] state placements.
    #[instrument]
    pub fn new() -> Self {
        let mut game = Self::empty();
        for _ in 0..INITIAL_STATE_PIECES {
            let entry = HistoryEntry::placement(Faction::State, Position::CAPITAL);
            game.state.apply(&entry).unwrap_or_else(|error| {
                unreachable!("seeding the capital of an empty game cannot fail: {error}")
            });
            game.history.push(entry);
        }
        game
    }

    /// A game with no history at all, not even the state pieces.
    pub fn empty() -> Self {
        Self {
            history: Vec::new(),
            state: GameState::new(),
        }
    }

    /// Rebuilds a game by replaying `entries` in order.
    ///
    /// The history is used verbatim; nothing is seeded.
    ///
    /// # Errors
    ///
    /// Returns the error of the first illegal entry. No partially built
    /// game is returned.
    #[instrument(skip(entries))]
    pub fn from_history(
        entries: impl IntoIterator<Item = HistoryEntry>,
    ) -> Result<Self, RulesError> {
        let mut game = Self::empty();
        for (index, entry) in entries.into_iter().enumerate() {
            game.append(entry).inspect_err(|error| {
                warn!(index, %entry, %error, "History replay rejected");
            })?;
        }
        debug!(len = game.history.len(), phase = %game.current_phase(), "History replayed");
        Ok(game)
    }

    /// Validates `entry` against the current state and appends it.
    ///
    /// # Errors
    ///
    /// Returns the rule the entry breaks; the game is left unchanged.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn append(&mut self, entry: HistoryEntry) -> Result<(), RulesError> {
        let mut state = self.state.clone();
        state.apply(&entry).inspect_err(|error| {
            warn!(%entry, %error, "Entry rejected");
        })?;

        #[cfg(debug_assertions)]
        {
            let mut after = self.clone();
            after.history.push(entry);
            after.state = state.clone();
            EntryContract::post(self, &after)?;
        }

        self.history.push(entry);
        self.state = state;
        debug!(%entry, phase = %self.state.phase(), "Entry appended");
        Ok(())
    }

    /// Checks whether `entry` would be accepted, without appending it.
    ///
    /// # Errors
    ///
    /// Returns the same error [`Infowar::append`] would.
    pub fn validate(&self, entry: &HistoryEntry) -> Result<(), RulesError> {
        EntryContract::pre(self, entry)
    }

    /// Places an insurgent during setup.
    ///
    /// # Errors
    ///
    /// [`RulesError::InvalidPlacement`] off the outer ring,
    /// [`RulesError::TooManyInsurgents`] once all five are placed,
    /// [`RulesError::GameOver`] after the game ends.
    pub fn add_insurgent(&mut self, position: Position) -> Result<(), RulesError> {
        self.append(HistoryEntry::placement(Faction::Insurgent, position))
    }

    /// Places a state piece in the capital during setup.
    ///
    /// Only needed for games rebuilt from a history that did not seed the
    /// capital.
    ///
    /// # Errors
    ///
    /// [`RulesError::InvalidPlacement`] outside the capital or after setup,
    /// [`RulesError::TooManyStatePieces`] once all five are placed.
    pub fn add_state_piece(&mut self, position: Position) -> Result<(), RulesError> {
        self.append(HistoryEntry::placement(Faction::State, position))
    }

    /// Moves one insurgent a single step.
    ///
    /// # Errors
    ///
    /// [`RulesError::NotYourTurn`], [`RulesError::IllegalMove`] or
    /// [`RulesError::GameOver`].
    pub fn insurgent_move(&mut self, src: Position, dest: Position) -> Result<(), RulesError> {
        self.append(HistoryEntry::movement(Faction::Insurgent, src, dest))
    }

    /// Moves one state piece a single step.
    ///
    /// # Errors
    ///
    /// [`RulesError::NotYourTurn`], [`RulesError::IllegalMove`] or
    /// [`RulesError::GameOver`].
    pub fn state_move(&mut self, src: Position, dest: Position) -> Result<(), RulesError> {
        self.append(HistoryEntry::movement(Faction::State, src, dest))
    }

    /// Faction to move, or `None` during setup and after the game ends.
    pub fn current_turn(&self) -> Option<Faction> {
        self.state.current_turn()
    }

    /// Current phase.
    pub fn current_phase(&self) -> Phase {
        self.state.phase()
    }

    /// Winner, once the game is over.
    pub fn winner(&self) -> Option<Faction> {
        self.state.winner()
    }

    /// Pieces at `position`, or `None` when the slot is empty.
    pub fn pieces_at(&self, position: Position) -> Option<&[Piece]> {
        self.state.board().pieces_at(position)
    }

    /// Insurgents still to be placed.
    pub fn initial_insurgents(&self) -> u8 {
        self.state.insurgents_remaining()
    }

    /// The full history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Projected board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Derived state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Every move the side to act may make; empty when nobody has the turn.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.current_turn()
            .map(|faction| rules::legal_moves(self.board(), faction))
            .unwrap_or_default()
    }

    /// Slots where the next insurgent may be placed; empty once all are in.
    #[instrument(skip(self))]
    pub fn legal_placements(&self) -> Vec<Position> {
        if self.current_phase().is_terminal() || self.initial_insurgents() == 0 {
            return Vec::new();
        }
        rules::placement_targets(Faction::Insurgent)
    }

    /// Serializable view of the whole game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

impl Default for Infowar {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<HistoryEntry>> for Infowar {
    type Error = RulesError;

    fn try_from(entries: Vec<HistoryEntry>) -> Result<Self, Self::Error> {
        Self::from_history(entries)
    }
}

impl From<Infowar> for Vec<HistoryEntry> {
    fn from(game: Infowar) -> Self {
        game.history
    }
}
