//! Rule violations reported by the engine.

use crate::piece::Faction;
use crate::position::Position;

/// Why a proposed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IllegalMoveReason {
    /// The mover has no piece on the source slot.
    #[display("no piece of the mover's faction at the source")]
    NoPieceAtSource,

    /// The destination is not a neighbour of the source.
    #[display("destination is not adjacent to the source")]
    NotAdjacent,
}

/// Error raised when an event or query breaks the rules.
///
/// Every variant is non-fatal: the engine that produced it is left exactly
/// as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RulesError {
    /// Circle or rank outside the board, or a non-zero rank in the capital.
    #[display("Invalid coordinate: circle {circle}, rank {rank}")]
    InvalidCoordinate {
        /// Requested ring.
        circle: i64,
        /// Requested slot.
        rank: i64,
    },

    /// A piece was placed somewhere its faction may not enter the board.
    #[display("Invalid placement: {:?} may not be placed at {}", player, position)]
    InvalidPlacement {
        /// Faction attempting the placement.
        player: Faction,
        /// Rejected target.
        position: Position,
    },

    /// All insurgents have already been placed.
    #[display("Cannot add more insurgents")]
    TooManyInsurgents,

    /// All state pieces have already been placed.
    #[display("Cannot add more state pieces")]
    TooManyStatePieces,

    /// The mover is not the faction whose turn it is.
    #[display("It's not {:?}'s turn (expected {:?})", player, expected)]
    NotYourTurn {
        /// Faction that attempted to move.
        player: Faction,
        /// Faction whose turn it actually is, if anyone's.
        expected: Option<Faction>,
    },

    /// The move itself is not permitted.
    #[display("Illegal move {} -> {}: {}", src, dest, reason)]
    IllegalMove {
        /// Source slot.
        src: Position,
        /// Destination slot.
        dest: Position,
        /// What made it illegal.
        reason: IllegalMoveReason,
    },

    /// Distance requested between rings more than one apart.
    #[display("Distance between {} and {} is not supported", from, to)]
    UnsupportedDistance {
        /// First endpoint.
        from: Position,
        /// Second endpoint.
        to: Position,
    },

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// A postcondition failed after applying an event.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for RulesError {}
