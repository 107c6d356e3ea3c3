//! Ring geometry: rank arithmetic, adjacency and distance.
//!
//! All functions are pure. Ranks form a cycle, so stepping past the last
//! rank wraps to the first and vice versa.

use crate::constants::{CAPITAL, INNER_CIRCLE, NUM_RANKS, RING_CROSSING_DISTANCE};
use crate::error::RulesError;
use crate::position::Position;

/// Validates raw coordinates into a [`Position`].
///
/// # Errors
///
/// Returns [`RulesError::InvalidCoordinate`] for off-board coordinates.
pub fn validate_position(circle: i64, rank: i64) -> Result<Position, RulesError> {
    Position::new(circle, rank)
}

/// Next rank clockwise.
pub fn increment_rank(rank: u8) -> u8 {
    (rank + 1) % NUM_RANKS
}

/// Next rank counter-clockwise.
pub fn decrement_rank(rank: u8) -> u8 {
    (rank + NUM_RANKS - 1) % NUM_RANKS
}

/// Every on-board neighbour of `position`.
///
/// The capital neighbours every slot of the inner circle. Any other slot
/// neighbours two slots on the ring outside it, its two ring-mates, and
/// either the capital or two slots on the ring inside it. Candidates that
/// fall off the board edge are dropped.
pub fn adjacent_positions(position: Position) -> Vec<Position> {
    if position.is_capital() {
        return (0..NUM_RANKS)
            .map(|rank| Position::at(INNER_CIRCLE, rank))
            .collect();
    }

    let circle = i64::from(position.circle());
    let rank = position.rank();
    let next = i64::from(increment_rank(rank));
    let previous = i64::from(decrement_rank(rank));
    let rank = i64::from(rank);

    let mut candidates = vec![
        (circle - 1, rank),
        (circle - 1, next),
        (circle, next),
        (circle, previous),
    ];
    if circle + 1 == i64::from(CAPITAL) {
        candidates.push((circle + 1, 0));
    } else {
        candidates.push((circle + 1, rank));
        candidates.push((circle + 1, previous));
    }

    candidates
        .into_iter()
        .filter_map(|(circle, rank)| validate_position(circle, rank).ok())
        .collect()
}

/// True when `b` is one step from `a`.
pub fn is_adjacent(a: Position, b: Position) -> bool {
    adjacent_positions(a).contains(&b)
}

/// Step distance between two positions.
///
/// Same-ring distance is the shorter way round the ring. The capital is one
/// step from every inner-circle slot. Crossing into a neighbouring ring
/// costs [`RING_CROSSING_DISTANCE`].
///
/// # Errors
///
/// Returns [`RulesError::UnsupportedDistance`] when the rings are more than
/// one apart (this includes the capital paired with anything outside the
/// inner circle).
pub fn distance(a: Position, b: Position) -> Result<u8, RulesError> {
    let unsupported = || RulesError::UnsupportedDistance { from: a, to: b };
    match (a.is_capital(), b.is_capital()) {
        (true, true) => Ok(0),
        (true, false) if b.is_inner_circle() => Ok(1),
        (false, true) if a.is_inner_circle() => Ok(1),
        (true, false) | (false, true) => Err(unsupported()),
        (false, false) => match a.circle().abs_diff(b.circle()) {
            0 => {
                let diff = a.rank().abs_diff(b.rank());
                Ok(diff.min(NUM_RANKS - diff))
            }
            1 => Ok(RING_CROSSING_DISTANCE),
            _ => Err(unsupported()),
        },
    }
}

/// Every slot on the board, ordered by circle then rank.
pub fn all_positions() -> Vec<Position> {
    (0..CAPITAL)
        .flat_map(|circle| (0..NUM_RANKS).map(move |rank| Position::at(circle, rank)))
        .chain(std::iter::once(Position::CAPITAL))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(circle: i64, rank: i64) -> Position {
        Position::new(circle, rank).unwrap()
    }

    #[test]
    fn test_rank_wraps_both_ways() {
        assert_eq!(increment_rank(11), 0);
        assert_eq!(decrement_rank(0), 11);
        assert_eq!(increment_rank(4), 5);
        assert_eq!(decrement_rank(4), 3);
    }

    #[test]
    fn test_capital_neighbours_whole_inner_circle() {
        let neighbours = adjacent_positions(Position::CAPITAL);
        assert_eq!(neighbours.len(), usize::from(NUM_RANKS));
        assert!(neighbours.iter().all(|p| p.is_inner_circle()));
    }

    #[test]
    fn test_outer_ring_drops_off_board_candidates() {
        let neighbours = adjacent_positions(pos(0, 0));
        assert_eq!(neighbours, vec![pos(0, 1), pos(0, 11), pos(1, 0), pos(1, 11)]);
    }

    #[test]
    fn test_inner_circle_reaches_capital() {
        let neighbours = adjacent_positions(pos(3, 5));
        assert_eq!(
            neighbours,
            vec![pos(2, 5), pos(2, 6), pos(3, 6), pos(3, 4), Position::CAPITAL]
        );
    }

    #[test]
    fn test_middle_ring_has_six_neighbours() {
        assert_eq!(adjacent_positions(pos(2, 0)).len(), 6);
    }

    #[test]
    fn test_same_ring_distance_takes_short_way() {
        assert_eq!(distance(pos(1, 0), pos(1, 11)), Ok(1));
        assert_eq!(distance(pos(1, 2), pos(1, 8)), Ok(6));
        assert_eq!(distance(pos(1, 3), pos(1, 3)), Ok(0));
    }

    #[test]
    fn test_capital_distance() {
        assert_eq!(distance(Position::CAPITAL, pos(3, 9)), Ok(1));
        assert_eq!(distance(pos(3, 9), Position::CAPITAL), Ok(1));
        assert_eq!(distance(Position::CAPITAL, Position::CAPITAL), Ok(0));
        assert!(matches!(
            distance(Position::CAPITAL, pos(1, 0)),
            Err(RulesError::UnsupportedDistance { .. })
        ));
    }

    #[test]
    fn test_cross_ring_distance() {
        assert_eq!(distance(pos(0, 0), pos(1, 0)), Ok(RING_CROSSING_DISTANCE));
        assert!(matches!(
            distance(pos(0, 0), pos(2, 0)),
            Err(RulesError::UnsupportedDistance { .. })
        ));
    }

    #[test]
    fn test_all_positions_count() {
        let all = all_positions();
        assert_eq!(all.len(), usize::from(CAPITAL) * usize::from(NUM_RANKS) + 1);
        assert_eq!(all.last(), Some(&Position::CAPITAL));
    }
}
