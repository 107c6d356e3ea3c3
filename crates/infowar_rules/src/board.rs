//! Board projection: which pieces sit where.

use crate::constants::{CAPITAL, NUM_RANKS};
use crate::piece::{Faction, Piece};
use crate::position::Position;
use std::collections::BTreeMap;

/// Pieces stacked on each occupied slot.
///
/// The board is never edited directly by callers; it is always the result
/// of folding the history log. Slots with no pieces have no entry, so
/// [`Board::pieces_at`] reports them as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    stacks: BTreeMap<Position, Vec<Piece>>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pieces at `position`, or `None` when the slot is empty.
    pub fn pieces_at(&self, position: Position) -> Option<&[Piece]> {
        self.stacks.get(&position).map(Vec::as_slice)
    }

    /// True when at least one piece of `faction` sits at `position`.
    pub fn has_faction_at(&self, position: Position, faction: Faction) -> bool {
        self.pieces_at(position)
            .is_some_and(|pieces| pieces.iter().any(|p| p.faction() == faction))
    }

    /// Number of `faction` pieces at `position`.
    pub fn count_at(&self, position: Position, faction: Faction) -> usize {
        self.pieces_at(position)
            .map_or(0, |pieces| pieces.iter().filter(|p| p.faction() == faction).count())
    }

    /// Number of `faction` pieces on the whole board.
    pub fn count(&self, faction: Faction) -> usize {
        self.stacks
            .values()
            .flatten()
            .filter(|p| p.faction() == faction)
            .count()
    }

    /// Slots holding at least one `faction` piece, in board order.
    pub fn occupied_by(&self, faction: Faction) -> impl Iterator<Item = Position> + '_ {
        self.stacks
            .iter()
            .filter(move |(_, pieces)| pieces.iter().any(|p| p.faction() == faction))
            .map(|(position, _)| *position)
    }

    /// Every occupied slot with its stack, in board order.
    pub fn stacks(&self) -> impl Iterator<Item = (Position, &[Piece])> {
        self.stacks
            .iter()
            .map(|(position, pieces)| (*position, pieces.as_slice()))
    }

    /// Adds a piece to the stack at `position`.
    pub(crate) fn place(&mut self, position: Position, piece: Piece) {
        self.stacks.entry(position).or_default().push(piece);
    }

    /// Moves one `faction` piece from `src` to `dest`.
    ///
    /// Returns `false` (and changes nothing) when `src` holds no such piece.
    pub(crate) fn relocate(&mut self, faction: Faction, src: Position, dest: Position) -> bool {
        let Some(stack) = self.stacks.get_mut(&src) else {
            return false;
        };
        let Some(index) = stack.iter().rposition(|p| p.faction() == faction) else {
            return false;
        };
        let piece = stack.remove(index);
        if stack.is_empty() {
            self.stacks.remove(&src);
        }
        self.place(dest, piece);
        true
    }

    /// Renders the board one ring per line, capital first.
    ///
    /// Each slot shows `I<n>` / `S<n>` counts, or `.` when empty.
    pub fn display(&self) -> String {
        let cell = |position: Position| {
            let insurgents = self.count_at(position, Faction::Insurgent);
            let state = self.count_at(position, Faction::State);
            match (insurgents, state) {
                (0, 0) => ".".to_string(),
                (i, 0) => format!("I{i}"),
                (0, s) => format!("S{s}"),
                (i, s) => format!("I{i}S{s}"),
            }
        };

        let mut lines = vec![format!("{:<16}| {}", "Capital", cell(Position::CAPITAL))];
        for circle in (0..CAPITAL).rev() {
            let label = Position::at(circle, 0).history_key();
            let ring_name = label.trim_end_matches(",0");
            let cells: Vec<String> = (0..NUM_RANKS)
                .map(|rank| format!("{:>5}", cell(Position::at(circle, rank))))
                .collect();
            lines.push(format!("{:<16}|{}", ring_name, cells.join("")));
        }
        lines.join("\n")
    }
}
