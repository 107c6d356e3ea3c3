//! Contract-based validation for Infowar.
//!
//! Each precondition is a small named check over the derived
//! [`GameState`]. They compose into [`LegalPlacement`], [`LegalMove`] and
//! finally [`LegalEntry`], which the reducer runs before touching any state.

use crate::constants::{INITIAL_INSURGENTS, INITIAL_STATE_PIECES};
use crate::engine::Infowar;
use crate::error::{IllegalMoveReason, RulesError};
use crate::geometry::is_adjacent;
use crate::history::{HistoryEntry, Move};
use crate::invariants::{InfowarInvariants, InvariantSet};
use crate::phase::Phase;
use crate::piece::Faction;
use crate::position::Position;
use crate::rules::valid_placement;
use crate::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RulesError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), RulesError>;
}

// ─────────────────────────────────────────────────────────────
//  Shared Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
#[derive(Debug, Clone, Copy)]
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`RulesError::GameOver`] once the game is decided.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), RulesError> {
        if state.phase().is_terminal() {
            Err(RulesError::GameOver)
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the faction may enter the board at this slot now.
#[derive(Debug, Clone, Copy)]
pub struct PlacementSite;

impl PlacementSite {
    /// Insurgents must use the outer ring; state pieces the capital, and
    /// only during setup.
    #[instrument(skip(state))]
    pub fn check(player: Faction, position: Position, state: &GameState) -> Result<(), RulesError> {
        let late_state_piece = player == Faction::State && state.phase() != Phase::Setup;
        if !valid_placement(player, position) || late_state_piece {
            Err(RulesError::InvalidPlacement { player, position })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the faction still has pieces left to place.
#[derive(Debug, Clone, Copy)]
pub struct PlacementQuota;

impl PlacementQuota {
    /// Fails once the faction's starting pieces are all on the board.
    #[instrument(skip(state))]
    pub fn check(player: Faction, state: &GameState) -> Result<(), RulesError> {
        match player {
            Faction::Insurgent if state.insurgents_placed() >= INITIAL_INSURGENTS => {
                Err(RulesError::TooManyInsurgents)
            }
            Faction::State if state.state_pieces_placed() >= INITIAL_STATE_PIECES => {
                Err(RulesError::TooManyStatePieces)
            }
            _ => Ok(()),
        }
    }
}

/// Composite precondition for placements.
#[derive(Debug, Clone, Copy)]
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all placement preconditions, in order.
    #[instrument(skip(state))]
    pub fn check(player: Faction, position: Position, state: &GameState) -> Result<(), RulesError> {
        GameNotOver::check(state)?;
        PlacementSite::check(player, position, state)?;
        PlacementQuota::check(player, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: it must be the mover's turn.
#[derive(Debug, Clone, Copy)]
pub struct PlayersTurn;

impl PlayersTurn {
    /// Nobody has the turn during setup or after the game ends.
    #[instrument(skip(state))]
    pub fn check(player: Faction, state: &GameState) -> Result<(), RulesError> {
        if state.current_turn() == Some(player) {
            Ok(())
        } else {
            Err(RulesError::NotYourTurn {
                player,
                expected: state.current_turn(),
            })
        }
    }
}

/// Precondition: the mover has a piece on the source slot.
#[derive(Debug, Clone, Copy)]
pub struct PieceAtSource;

impl PieceAtSource {
    /// Fails when `movement.src` holds no piece of `player`'s faction.
    #[instrument(skip(state))]
    pub fn check(player: Faction, movement: Move, state: &GameState) -> Result<(), RulesError> {
        if state.board().has_faction_at(movement.src, player) {
            Ok(())
        } else {
            Err(RulesError::IllegalMove {
                src: movement.src,
                dest: movement.dest,
                reason: IllegalMoveReason::NoPieceAtSource,
            })
        }
    }
}

/// Precondition: the destination is one step from the source.
#[derive(Debug, Clone, Copy)]
pub struct AdjacentDestination;

impl AdjacentDestination {
    /// Fails when the move skips over slots.
    #[instrument]
    pub fn check(movement: Move) -> Result<(), RulesError> {
        if is_adjacent(movement.src, movement.dest) {
            Ok(())
        } else {
            Err(RulesError::IllegalMove {
                src: movement.src,
                dest: movement.dest,
                reason: IllegalMoveReason::NotAdjacent,
            })
        }
    }
}

/// Composite precondition for moves.
#[derive(Debug, Clone, Copy)]
pub struct LegalMove;

impl LegalMove {
    /// Validates all move preconditions, in order.
    #[instrument(skip(state))]
    pub fn check(player: Faction, movement: Move, state: &GameState) -> Result<(), RulesError> {
        GameNotOver::check(state)?;
        PlayersTurn::check(player, state)?;
        PieceAtSource::check(player, movement, state)?;
        AdjacentDestination::check(movement)?;
        Ok(())
    }
}

/// Composite precondition for any history entry.
#[derive(Debug, Clone, Copy)]
pub struct LegalEntry;

impl LegalEntry {
    /// Dispatches to [`LegalPlacement`] or [`LegalMove`].
    #[instrument(skip(state))]
    pub fn check(entry: &HistoryEntry, state: &GameState) -> Result<(), RulesError> {
        match *entry {
            HistoryEntry::Placement { player, position } => {
                LegalPlacement::check(player, position, state)
            }
            HistoryEntry::Move { player, movement } => LegalMove::check(player, movement, state),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Entry Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for appending an entry to a game.
///
/// Preconditions:
/// - [`LegalEntry`] against the current derived state
///
/// Postconditions:
/// - The log grew by exactly one entry and its prefix is untouched
/// - [`InfowarInvariants`] hold for the new game
#[derive(Debug, Clone, Copy)]
pub struct EntryContract;

impl Contract<Infowar, HistoryEntry> for EntryContract {
    fn pre(game: &Infowar, entry: &HistoryEntry) -> Result<(), RulesError> {
        LegalEntry::check(entry, game.state())
    }

    fn post(before: &Infowar, after: &Infowar) -> Result<(), RulesError> {
        let old = before.history();
        let new = after.history();
        if new.len() != old.len() + 1 || !new.starts_with(old) {
            warn!(before = old.len(), after = new.len(), "History was not appended in place");
            return Err(RulesError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one entry".to_string(),
            ));
        }

        InfowarInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            RulesError::InvariantViolation(format!("Postcondition failed: {descriptions}"))
        })
    }
}
