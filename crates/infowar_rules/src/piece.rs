//! Factions and the pieces they field.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    /// Starts on the outer ring and moves first.
    Insurgent,
    /// Starts in the capital.
    State,
}

impl Faction {
    /// Returns the other faction.
    pub fn opponent(self) -> Self {
        match self {
            Faction::Insurgent => Faction::State,
            Faction::State => Faction::Insurgent,
        }
    }

    /// The piece type this faction fields.
    pub fn piece_kind(self) -> PieceKind {
        match self {
            Faction::Insurgent => PieceKind::InsurgentType,
            Faction::State => PieceKind::StateType,
        }
    }
}

/// Type of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    /// Insurgent cell.
    InsurgentType,
    /// State force.
    StateType,
}

/// A piece on the board.
///
/// Pieces of the same faction are interchangeable; moving "a" piece moves
/// any one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Piece {
    faction: Faction,
    kind: PieceKind,
}

impl Piece {
    /// The piece fielded by `faction`.
    pub fn of(faction: Faction) -> Self {
        Self {
            faction,
            kind: faction.piece_kind(),
        }
    }

    /// Owning faction.
    pub fn faction(self) -> Faction {
        self.faction
    }

    /// Piece type.
    pub fn kind(self) -> PieceKind {
        self.kind
    }
}
