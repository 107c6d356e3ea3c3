//! Tests for the Infowar engine: setup, turn order, winning and replay.

use infowar_rules::{
    Faction, GameState, HistoryEntry, IllegalMoveReason, Infowar, InfowarInvariants,
    InvariantSet, Phase, Position, RulesError,
};

fn pos(circle: i64, rank: i64) -> Position {
    Position::new(circle, rank).unwrap()
}

fn setup(ranks: [i64; 5]) -> Infowar {
    let mut game = Infowar::new();
    for rank in ranks {
        game.add_insurgent(pos(0, rank)).unwrap();
    }
    game
}

/// Marches the insurgents on `ranks` straight inward, one step per turn,
/// while a single state piece shuffles between the capital and `(3, 6)`.
fn march_inward(game: &mut Infowar, ranks: [i64; 4]) {
    let mut state_in_capital = true;
    for rank in ranks {
        for circle in 0..3 {
            game.insurgent_move(pos(circle, rank), pos(circle + 1, rank))
                .unwrap();
            if game.current_phase() == Phase::GameOver {
                return;
            }
            let (src, dest) = if state_in_capital {
                (Position::CAPITAL, pos(3, 6))
            } else {
                (pos(3, 6), Position::CAPITAL)
            };
            game.state_move(src, dest).unwrap();
            state_in_capital = !state_in_capital;
        }
    }
}

#[test]
fn test_new_game_waits_for_insurgents() {
    let game = Infowar::new();
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.current_phase(), Phase::Setup);
    assert_eq!(game.current_turn(), None);
    assert_eq!(game.initial_insurgents(), 5);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_setup_completes_after_fifth_insurgent() {
    let mut game = Infowar::new();
    for (placed, rank) in [0, 2, 4, 6, 8].into_iter().enumerate() {
        assert_eq!(game.current_phase(), Phase::Setup);
        game.add_insurgent(pos(0, rank)).unwrap();
        assert_eq!(usize::from(game.initial_insurgents()), 4 - placed);
    }
    assert_eq!(game.current_phase(), Phase::Playing);
    assert_eq!(game.current_turn(), Some(Faction::Insurgent));
    assert_eq!(game.history().len(), 10);
}

#[test]
fn test_stacked_insurgents_allowed() {
    let mut game = Infowar::new();
    game.add_insurgent(pos(0, 5)).unwrap();
    game.add_insurgent(pos(0, 5)).unwrap();
    assert_eq!(game.pieces_at(pos(0, 5)).map(|stack| stack.len()), Some(2));
}

#[test]
fn test_sixth_insurgent_rejected() {
    let mut game = setup([0, 2, 4, 6, 8]);
    assert_eq!(
        game.add_insurgent(pos(0, 10)),
        Err(RulesError::TooManyInsurgents)
    );
    assert_eq!(game.history().len(), 10);
}

#[test]
fn test_insurgents_only_enter_on_outer_ring() {
    let mut game = Infowar::new();
    for circle in 1..=3 {
        assert_eq!(
            game.add_insurgent(pos(circle, 0)),
            Err(RulesError::InvalidPlacement {
                player: Faction::Insurgent,
                position: pos(circle, 0),
            })
        );
    }
    assert!(matches!(
        game.add_insurgent(Position::CAPITAL),
        Err(RulesError::InvalidPlacement { .. })
    ));
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_sixth_state_piece_rejected() {
    let mut game = Infowar::new();
    assert_eq!(
        game.add_state_piece(Position::CAPITAL),
        Err(RulesError::TooManyStatePieces)
    );
}

#[test]
fn test_state_cannot_move_first() {
    let mut game = setup([0, 2, 4, 6, 8]);
    assert_eq!(
        game.state_move(Position::CAPITAL, pos(3, 0)),
        Err(RulesError::NotYourTurn {
            player: Faction::State,
            expected: Some(Faction::Insurgent),
        })
    );
}

#[test]
fn test_no_moves_during_setup() {
    let mut game = Infowar::new();
    game.add_insurgent(pos(0, 0)).unwrap();
    assert!(matches!(
        game.insurgent_move(pos(0, 0), pos(1, 0)),
        Err(RulesError::NotYourTurn { expected: None, .. })
    ));
}

#[test]
fn test_turns_alternate() {
    let mut game = setup([0, 2, 4, 6, 8]);
    game.insurgent_move(pos(0, 0), pos(1, 0)).unwrap();
    assert_eq!(game.current_turn(), Some(Faction::State));
    assert!(matches!(
        game.insurgent_move(pos(1, 0), pos(2, 0)),
        Err(RulesError::NotYourTurn { .. })
    ));
    game.state_move(Position::CAPITAL, pos(3, 11)).unwrap();
    assert_eq!(game.current_turn(), Some(Faction::Insurgent));
}

#[test]
fn test_rejected_moves_keep_the_turn() {
    let mut game = setup([0, 2, 4, 6, 8]);
    let before = game.clone();

    assert!(matches!(
        game.insurgent_move(pos(0, 1), pos(1, 1)),
        Err(RulesError::IllegalMove {
            reason: IllegalMoveReason::NoPieceAtSource,
            ..
        })
    ));
    assert!(matches!(
        game.insurgent_move(pos(0, 0), pos(2, 0)),
        Err(RulesError::IllegalMove {
            reason: IllegalMoveReason::NotAdjacent,
            ..
        })
    ));
    assert_eq!(game, before);
    assert_eq!(game.current_turn(), Some(Faction::Insurgent));
}

#[test]
fn test_moving_onto_opponent_stacks() {
    let mut game = setup([0, 2, 4, 6, 8]);
    game.insurgent_move(pos(0, 0), pos(1, 0)).unwrap();
    game.state_move(Position::CAPITAL, pos(3, 0)).unwrap();
    game.insurgent_move(pos(1, 0), pos(2, 0)).unwrap();
    game.state_move(pos(3, 0), pos(2, 0)).unwrap();

    let stack = game.pieces_at(pos(2, 0)).unwrap();
    assert_eq!(stack.len(), 2);
    assert_eq!(stack[0].faction(), Faction::Insurgent);
    assert_eq!(stack[1].faction(), Faction::State);
    assert_eq!(game.pieces_at(pos(3, 0)), None);
}

#[test]
fn test_insurgents_win_on_inner_circle() {
    let mut game = setup([0, 1, 2, 3, 4]);
    march_inward(&mut game, [0, 1, 2, 3]);

    assert_eq!(game.current_phase(), Phase::GameOver);
    assert_eq!(game.winner(), Some(Faction::Insurgent));
    assert_eq!(game.current_turn(), None);
    for rank in 0..4 {
        assert!(game.board().has_faction_at(pos(3, rank), Faction::Insurgent));
    }
}

#[test]
fn test_winning_block_wraps_around() {
    let mut game = setup([11, 0, 1, 2, 6]);
    march_inward(&mut game, [11, 0, 1, 2]);
    assert_eq!(game.winner(), Some(Faction::Insurgent));
}

#[test]
fn test_three_in_a_row_is_not_a_win() {
    let mut game = setup([0, 1, 2, 5, 7]);
    march_inward(&mut game, [0, 1, 2, 7]);
    // Rank 7 is not contiguous with 0..=2, so the march ends without a winner.
    assert_eq!(game.current_phase(), Phase::Playing);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_game_over_rejects_everything() {
    let mut game = setup([0, 1, 2, 3, 4]);
    march_inward(&mut game, [0, 1, 2, 3]);
    let before = game.clone();

    assert_eq!(
        game.insurgent_move(pos(0, 4), pos(1, 4)),
        Err(RulesError::GameOver)
    );
    assert_eq!(
        game.state_move(Position::CAPITAL, pos(3, 5)),
        Err(RulesError::GameOver)
    );
    assert_eq!(game.add_insurgent(pos(0, 9)), Err(RulesError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_replay_reproduces_live_game() {
    let mut game = setup([0, 1, 2, 3, 4]);
    march_inward(&mut game, [0, 1, 2, 3]);

    let replayed = Infowar::from_history(game.history().to_vec()).unwrap();
    assert_eq!(replayed, game);
    assert_eq!(GameState::replay(game.history()).as_ref(), Ok(game.state()));
    assert!(InfowarInvariants::check_all(&game).is_ok());
}

#[test]
fn test_every_prefix_replays() {
    let mut game = setup([0, 2, 4, 6, 8]);
    game.insurgent_move(pos(0, 0), pos(1, 0)).unwrap();
    game.state_move(Position::CAPITAL, pos(3, 0)).unwrap();
    game.insurgent_move(pos(1, 0), pos(2, 11)).unwrap();

    for len in 0..=game.history().len() {
        assert!(
            Infowar::from_history(game.history()[..len].to_vec()).is_ok(),
            "prefix of length {len} should replay"
        );
    }
}

#[test]
fn test_tampered_history_rejected() {
    let mut entries = setup([0, 2, 4, 6, 8]).history().to_vec();
    entries.push(HistoryEntry::movement(
        Faction::State,
        Position::CAPITAL,
        pos(3, 0),
    ));
    assert_eq!(
        Infowar::from_history(entries),
        Err(RulesError::NotYourTurn {
            player: Faction::State,
            expected: Some(Faction::Insurgent),
        })
    );

    let mut entries = Infowar::new().history().to_vec();
    entries.push(HistoryEntry::placement(Faction::Insurgent, pos(2, 2)));
    assert!(matches!(
        Infowar::from_history(entries),
        Err(RulesError::InvalidPlacement { .. })
    ));
}

#[test]
fn test_unseeded_history_needs_state_pieces() {
    let mut game = Infowar::empty();
    game.add_state_piece(Position::CAPITAL).unwrap();
    assert!(matches!(
        game.add_state_piece(pos(3, 0)),
        Err(RulesError::InvalidPlacement { .. })
    ));
    for rank in 0..5 {
        game.add_insurgent(pos(0, rank)).unwrap();
    }
    assert_eq!(game.current_phase(), Phase::Playing);
    assert!(matches!(
        game.add_state_piece(Position::CAPITAL),
        Err(RulesError::InvalidPlacement { .. })
    ));
}

#[test]
fn test_legal_moves_are_all_accepted() {
    let game = setup([0, 2, 4, 6, 8]);
    let moves = game.legal_moves();
    assert!(!moves.is_empty());
    for movement in moves {
        let mut copy = game.clone();
        assert!(
            copy.insurgent_move(movement.src, movement.dest).is_ok(),
            "{movement} should be legal"
        );
    }
}
