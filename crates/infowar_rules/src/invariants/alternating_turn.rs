//! Alternating turn invariant: Insurgent, State, Insurgent, ...

use super::Invariant;
use crate::engine::Infowar;
use crate::history::HistoryEntry;
use crate::phase::Phase;
use crate::piece::Faction;

/// Invariant: moves alternate, Insurgent first, and the current turn is
/// the faction after the last mover.
///
/// Nobody holds the turn during setup or once the game is over.
#[derive(Debug, Clone, Copy)]
pub struct AlternatingTurnInvariant;

impl Invariant<Infowar> for AlternatingTurnInvariant {
    fn holds(game: &Infowar) -> bool {
        let movers: Vec<Faction> = game
            .history()
            .iter()
            .filter_map(|entry| match entry {
                HistoryEntry::Move { player, .. } => Some(*player),
                HistoryEntry::Placement { .. } => None,
            })
            .collect();

        if movers.first().is_some_and(|first| *first != Faction::Insurgent) {
            return false;
        }
        if movers.windows(2).any(|pair| pair[0] == pair[1]) {
            return false;
        }

        let expected = match game.current_phase() {
            Phase::Setup | Phase::GameOver => None,
            Phase::Playing => Some(
                movers
                    .last()
                    .map_or(Faction::Insurgent, |last| last.opponent()),
            ),
        };
        game.current_turn() == expected
    }

    fn description() -> &'static str {
        "Factions alternate moves (Insurgent, State, Insurgent, ...)"
    }
}
