//! Placement quota invariant: no faction places more pieces than it owns.

use super::Invariant;
use crate::constants::{INITIAL_INSURGENTS, INITIAL_STATE_PIECES};
use crate::engine::Infowar;
use crate::history::HistoryEntry;
use crate::piece::Faction;

/// Invariant: at most [`INITIAL_INSURGENTS`] insurgent placements and
/// [`INITIAL_STATE_PIECES`] state placements appear in the history.
#[derive(Debug, Clone, Copy)]
pub struct PlacementQuotaInvariant;

/// Number of placements by `faction` in `history`.
pub(crate) fn placements_by(history: &[HistoryEntry], faction: Faction) -> usize {
    history
        .iter()
        .filter(|entry| matches!(entry, HistoryEntry::Placement { player, .. } if *player == faction))
        .count()
}

impl Invariant<Infowar> for PlacementQuotaInvariant {
    fn holds(game: &Infowar) -> bool {
        let history = game.history();
        placements_by(history, Faction::Insurgent) <= usize::from(INITIAL_INSURGENTS)
            && placements_by(history, Faction::State) <= usize::from(INITIAL_STATE_PIECES)
    }

    fn description() -> &'static str {
        "No faction places more pieces than its starting quota"
    }
}
