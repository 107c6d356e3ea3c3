//! Replay consistency invariant: the cached state equals a fresh fold of the log.

use super::Invariant;
use crate::engine::Infowar;
use crate::state::GameState;
use tracing::warn;

/// Invariant: replaying the history from an empty game reproduces the
/// engine's cached board, phase, turn and winner exactly.
///
/// This is what lets any number of independent copies of a game agree.
#[derive(Debug, Clone, Copy)]
pub struct ReplayConsistentInvariant;

impl Invariant<Infowar> for ReplayConsistentInvariant {
    fn holds(game: &Infowar) -> bool {
        match GameState::replay(game.history()) {
            Ok(replayed) => replayed == *game.state(),
            Err(error) => {
                warn!(%error, "Stored history no longer replays");
                false
            }
        }
    }

    fn description() -> &'static str {
        "Replaying the history reproduces the current state"
    }
}
