//! Board dimensions and game quotas.

/// Number of rings on the board, including the capital.
pub const NUM_CIRCLES: u8 = 5;

/// Number of angular slots in every ring except the capital.
pub const NUM_RANKS: u8 = 12;

/// Ring index of the single-slot capital (the innermost ring).
pub const CAPITAL: u8 = NUM_CIRCLES - 1;

/// Ring index of the outermost ring, where insurgents enter the board.
pub const OUTER_CIRCLE: u8 = 0;

/// Ring immediately outside the capital.
pub const INNER_CIRCLE: u8 = CAPITAL - 1;

/// Insurgent pieces placed during setup.
pub const INITIAL_INSURGENTS: u8 = 5;

/// State pieces seeded into the capital of a new game.
pub const INITIAL_STATE_PIECES: u8 = 5;

/// Consecutive inner-circle ranks insurgents must hold to win.
pub const WINNING_BLOCK: u8 = 4;

/// Distance charged for stepping between two neighbouring rings.
pub const RING_CROSSING_DISTANCE: u8 = 2;
