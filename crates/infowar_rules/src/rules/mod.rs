//! Game rules for Infowar.
//!
//! Pure functions over a [`Board`](crate::Board) describing where pieces
//! may enter, where they may go, and when the game is won. They hold no
//! state of their own so the contracts and the reducer can share them.

pub mod movement;
pub mod placement;
pub mod win;

pub use movement::{legal_destinations, legal_moves};
pub use placement::{placement_targets, valid_placement};
pub use win::{check_winner, winning_block};
