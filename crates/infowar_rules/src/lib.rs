//! Infowar rules engine - event-sourced asymmetric board game
//!
//! Two factions share a board of five concentric rings. Five insurgents
//! enter on the outer ring and try to seize four adjacent slots of the inner
//! ring; five state pieces start in the capital at the center.
//!
//! # Architecture
//!
//! - **History**: the append-only log of placements and moves; the only
//!   source of truth
//! - **State**: board, phase, turn and winner, always a fold of the history
//! - **Contracts**: preconditions every entry must pass before it is logged
//! - **Invariants**: properties checked after every append in debug builds
//!
//! # Example
//!
//! ```
//! use infowar_rules::{Faction, Infowar, Phase, Position};
//!
//! # fn example() -> Result<(), infowar_rules::RulesError> {
//! let mut game = Infowar::new();
//! for rank in [0, 2, 4, 6, 8] {
//!     game.add_insurgent(Position::new(0, rank)?)?;
//! }
//! assert_eq!(game.current_phase(), Phase::Playing);
//! assert_eq!(game.current_turn(), Some(Faction::Insurgent));
//!
//! game.insurgent_move(Position::new(0, 0)?, Position::new(1, 0)?)?;
//! assert_eq!(game.current_turn(), Some(Faction::State));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod constants;
mod contracts;
mod engine;
mod error;
mod geometry;
mod history;
mod invariants;
mod phase;
mod piece;
mod position;
mod rules;
mod snapshot;
mod state;

// Crate-level exports - Engine
pub use engine::Infowar;
pub use state::GameState;

// Crate-level exports - Board and pieces
pub use board::Board;
pub use phase::Phase;
pub use piece::{Faction, Piece, PieceKind};
pub use position::{Position, RawPosition};

// Crate-level exports - History
pub use history::{EntryKind, HistoryEntry, Move};

// Crate-level exports - Errors
pub use error::{IllegalMoveReason, RulesError};

// Crate-level exports - Snapshots
pub use snapshot::{GameSnapshot, Square};

// Crate-level exports - Geometry
pub use constants::{
    CAPITAL, INITIAL_INSURGENTS, INITIAL_STATE_PIECES, INNER_CIRCLE, NUM_CIRCLES, NUM_RANKS,
    OUTER_CIRCLE, RING_CROSSING_DISTANCE, WINNING_BLOCK,
};
pub use geometry::{
    adjacent_positions, all_positions, decrement_rank, distance, increment_rank, is_adjacent,
    validate_position,
};

// Crate-level exports - Rules
pub use rules::{
    check_winner, legal_destinations, legal_moves, placement_targets, valid_placement,
    winning_block,
};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    AdjacentDestination, Contract, EntryContract, GameNotOver, LegalEntry, LegalMove,
    LegalPlacement, PieceAtSource, PlacementQuota, PlacementSite, PlayersTurn,
};
pub use invariants::{
    AlternatingTurnInvariant, InfowarInvariants, Invariant, InvariantSet, InvariantViolation,
    PieceConservationInvariant, PlacementQuotaInvariant, ReplayConsistentInvariant,
};
