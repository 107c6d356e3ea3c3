//! Tests for ring geometry over the whole board.

use infowar_rules::{
    adjacent_positions, all_positions, distance, is_adjacent, Position, RulesError, CAPITAL,
    INNER_CIRCLE, NUM_CIRCLES, NUM_RANKS, RING_CROSSING_DISTANCE,
};

fn pos(circle: i64, rank: i64) -> Position {
    Position::new(circle, rank).unwrap()
}

#[test]
fn test_board_has_every_slot_once() {
    let positions = all_positions();
    let expected = usize::from(CAPITAL) * usize::from(NUM_RANKS) + 1;
    assert_eq!(positions.len(), expected);
    let mut sorted = positions.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), expected);
}

#[test]
fn test_adjacency_is_symmetric() {
    for a in all_positions() {
        for b in adjacent_positions(a) {
            assert!(is_adjacent(b, a), "{a} -> {b} but not back");
        }
    }
}

#[test]
fn test_unit_distance_implies_adjacency() {
    for a in all_positions() {
        for b in all_positions() {
            if distance(a, b) == Ok(1) {
                assert!(is_adjacent(a, b), "{a} / {b}");
                assert!(is_adjacent(b, a), "{b} / {a}");
            }
        }
    }
}

#[test]
fn test_nothing_is_its_own_neighbour() {
    for position in all_positions() {
        assert!(!is_adjacent(position, position), "{position}");
    }
}

#[test]
fn test_neighbour_counts_by_ring() {
    for position in all_positions() {
        let expected = match position.circle() {
            0 => 4,
            c if c == INNER_CIRCLE => 5,
            c if c == CAPITAL => usize::from(NUM_RANKS),
            _ => 6,
        };
        assert_eq!(adjacent_positions(position).len(), expected, "{position}");
    }
}

#[test]
fn test_neighbours_stay_within_one_ring() {
    for a in all_positions() {
        for b in adjacent_positions(a) {
            assert!(a.circle().abs_diff(b.circle()) <= 1, "{a} -> {b}");
        }
    }
}

#[test]
fn test_same_ring_distance_is_cyclic() {
    for circle in 0..i64::from(CAPITAL) {
        assert_eq!(distance(pos(circle, 0), pos(circle, 0)), Ok(0));
        assert_eq!(distance(pos(circle, 0), pos(circle, 6)), Ok(6));
        assert_eq!(distance(pos(circle, 1), pos(circle, 10)), Ok(3));
        assert_eq!(distance(pos(circle, 11), pos(circle, 0)), Ok(1));
    }
}

#[test]
fn test_distance_is_symmetric() {
    for a in all_positions() {
        for b in all_positions() {
            assert_eq!(distance(a, b).is_ok(), distance(b, a).is_ok());
            if let (Ok(ab), Ok(ba)) = (distance(a, b), distance(b, a)) {
                assert_eq!(ab, ba, "{a} / {b}");
            }
        }
    }
}

#[test]
fn test_cross_ring_distances() {
    assert_eq!(distance(pos(0, 3), pos(1, 9)), Ok(RING_CROSSING_DISTANCE));
    assert_eq!(distance(Position::CAPITAL, pos(3, 8)), Ok(1));
    assert_eq!(distance(Position::CAPITAL, Position::CAPITAL), Ok(0));
    assert_eq!(
        distance(pos(0, 0), pos(2, 0)),
        Err(RulesError::UnsupportedDistance {
            from: pos(0, 0),
            to: pos(2, 0),
        })
    );
    assert!(distance(Position::CAPITAL, pos(1, 0)).is_err());
}

#[test]
fn test_coordinates_outside_board_rejected() {
    assert!(Position::new(i64::from(NUM_CIRCLES), 0).is_err());
    assert!(Position::new(0, i64::from(NUM_RANKS)).is_err());
    assert!(Position::new(i64::from(CAPITAL), 3).is_err());
}
