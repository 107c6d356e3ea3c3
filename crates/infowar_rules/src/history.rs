//! History log entries.
//!
//! The history is the only authoritative record of a game. Entries are
//! plain values: they describe what a player did, and the engine derives
//! everything else by folding them in order.

use crate::piece::Faction;
use crate::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A one-step relocation of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Move {
    /// Slot the piece leaves.
    pub src: Position,
    /// Slot the piece enters.
    pub dest: Position,
}

impl Move {
    /// Creates a move.
    pub fn new(src: Position, dest: Position) -> Self {
        Self { src, dest }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.src.history_key(), self.dest.history_key())
    }
}

/// Discriminant of a [`HistoryEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum EntryKind {
    /// A piece entered the board.
    Placement,
    /// A piece moved.
    Move,
}

/// One event in the history log.
///
/// On the wire a placement is `{"player", "position"}` and a move is
/// `{"player", "move": {"src", "dest"}}`; the field set identifies the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum HistoryEntry {
    /// A piece entering the board.
    Placement {
        /// Faction placing the piece.
        player: Faction,
        /// Where the piece enters.
        position: Position,
    },
    /// A piece moving one step.
    Move {
        /// Faction moving.
        player: Faction,
        /// Source and destination.
        #[serde(rename = "move")]
        movement: Move,
    },
}

impl HistoryEntry {
    /// Creates a placement entry.
    pub fn placement(player: Faction, position: Position) -> Self {
        Self::Placement { player, position }
    }

    /// Creates a move entry.
    pub fn movement(player: Faction, src: Position, dest: Position) -> Self {
        Self::Move {
            player,
            movement: Move::new(src, dest),
        }
    }

    /// Faction that produced the entry.
    pub fn player(&self) -> Faction {
        match self {
            Self::Placement { player, .. } | Self::Move { player, .. } => *player,
        }
    }

    /// Whether this is a placement or a move.
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Placement { .. } => EntryKind::Placement,
            Self::Move { .. } => EntryKind::Move,
        }
    }

    /// Target of a placement.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Placement { position, .. } => Some(*position),
            Self::Move { .. } => None,
        }
    }

    /// Source and destination of a move.
    pub fn as_move(&self) -> Option<Move> {
        match self {
            Self::Move { movement, .. } => Some(*movement),
            Self::Placement { .. } => None,
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Placement { player, position } => {
                write!(f, "{player} placed at {}", position.history_key())
            }
            Self::Move { player, movement } => write!(f, "{player} moved {movement}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(circle: i64, rank: i64) -> Position {
        Position::new(circle, rank).unwrap()
    }

    #[test]
    fn test_placement_wire_shape() {
        let entry = HistoryEntry::placement(Faction::Insurgent, pos(0, 3));
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"player": "insurgent", "position": {"circle": 0, "rank": 3}})
        );
    }

    #[test]
    fn test_move_wire_shape() {
        let entry = HistoryEntry::movement(Faction::State, Position::CAPITAL, pos(3, 0));
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "player": "state",
                "move": {"src": {"circle": 4, "rank": 0}, "dest": {"circle": 3, "rank": 0}}
            })
        );
        let back: HistoryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
        assert_eq!(back.kind(), EntryKind::Move);
    }

    #[test]
    fn test_off_board_entry_does_not_deserialize() {
        let json = r#"{"player": "insurgent", "position": {"circle": 9, "rank": 0}}"#;
        assert!(serde_json::from_str::<HistoryEntry>(json).is_err());
    }

    #[test]
    fn test_display_uses_history_keys() {
        let entry = HistoryEntry::movement(Faction::Insurgent, pos(2, 4), pos(3, 4));
        assert_eq!(entry.to_string(), "Insurgent moved C,4 -> Inner Circle B,4");
    }
}
