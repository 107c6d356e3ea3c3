//! Game phases.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a game.
///
/// Phases only move forward: `Setup -> Playing -> GameOver`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Insurgents are being placed on the outer ring; nobody has the turn.
    #[default]
    Setup,
    /// Factions alternate moves.
    Playing,
    /// A winner has been decided.
    GameOver,
}

impl Phase {
    /// True once the game has ended.
    pub fn is_terminal(self) -> bool {
        self == Phase::GameOver
    }
}
