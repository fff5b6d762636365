use super::*;
use crate::{ActionKind, SearchResult, movegen::all_moves};

/// Plays the first generated move, or forfeits.
struct FirstMoveEngine;

impl Engine for FirstMoveEngine {
    fn search(&mut self, board: &Board, side: Side) -> SearchResult {
        let moves = all_moves(board, side);
        SearchResult {
            best_move: moves.first().copied(),
            score: 0.0,
            nodes: moves.len() as u64,
        }
    }

    fn name(&self) -> &str {
        "first-move"
    }
}

fn at(name: &str) -> Square {
    Square::parse(name).unwrap()
}

fn play(game: &mut Game, from: &str, to: &str) -> CombatOutcome {
    game.submit_move(at(from), at(to))
        .unwrap_or_else(|e| panic!("{from}{to} rejected: {e}"))
}

#[test]
fn test_new_game_state() {
    let game = Game::new();
    assert_eq!(game.side_to_move(), Side::First);
    assert_eq!(game.winner(), None);
    assert_eq!(game.turn(), 0);

    let snap = game.snapshot();
    let queen = snap.get(at("d1")).unwrap();
    assert_eq!(queen.archetype, Archetype::Queen);
    assert_eq!(queen.attack_power, 9);
    assert_eq!(queen.max_hp, 15);
    assert_eq!(snap.get(at("e7")).unwrap().attack_power, 4);
    assert!(snap.get(at("e4")).is_none());
    assert_eq!(snap.cells.iter().flatten().flatten().count(), 32);
}

#[test]
fn test_submit_move_advances_turn() {
    let mut game = Game::new();
    let out = play(&mut game, "e2", "e4");
    assert_eq!(out.kind, ActionKind::Move);
    assert_eq!(game.side_to_move(), Side::Second);
    assert_eq!(game.turn(), 1);
    assert!(game.board().is_empty(at("e2")));
}

#[test]
fn test_rejected_moves_leave_state() {
    let mut game = Game::new();
    let before = game.board().clone();

    let cases = [
        ("e2", "e5", RejectReason::IllegalDestination),
        ("e4", "e5", RejectReason::EmptySquare),
        ("e7", "e6", RejectReason::NotYourUnit),
        ("d1", "d3", RejectReason::IllegalDestination),
    ];
    for (from, to, reason) in cases {
        let err = game.submit_move(at(from), at(to)).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidMove {
                from: at(from),
                to: at(to),
                reason
            }
        );
    }

    assert_eq!(game.board(), &before);
    assert_eq!(game.side_to_move(), Side::First);
    assert_eq!(game.turn(), 0);
}

#[test]
fn test_change_turn_decays_cooldown() {
    let mut board = Board::standard();
    board.unit_at_mut(at("d1")).unwrap().special_cooldown = 3;
    let mut game = Game::from_board(board, Side::First);

    game.change_turn();
    assert_eq!(game.board().unit_at(at("d1")).unwrap().special_cooldown, 2);
    assert_eq!(game.board().unit_at(at("d8")).unwrap().special_cooldown, 0);
    assert_eq!(game.side_to_move(), Side::Second);

    game.change_turn();
    assert_eq!(game.board().unit_at(at("d1")).unwrap().special_cooldown, 1);
    assert_eq!(game.side_to_move(), Side::First);

    // floored at zero
    for _ in 0..4 {
        game.change_turn();
    }
    assert_eq!(game.board().unit_at(at("d1")).unwrap().special_cooldown, 0);
    assert_eq!(game.side_to_move(), Side::First);
    assert_eq!(game.turn(), 6);
}

#[test]
fn test_queen_kills_king_and_game_ends() {
    let mut game = Game::new();
    assert!(game.legal_moves_at(at("d1")).is_empty());

    play(&mut game, "e2", "e3");
    play(&mut game, "f7", "f6");
    assert!(game.legal_moves_at(at("d1")).contains(&at("h5")));
    play(&mut game, "d1", "h5");
    play(&mut game, "a7", "a6");

    let first = play(&mut game, "h5", "e8");
    assert_eq!(first.strikes[0].damage, 9);
    assert_eq!(first.landed, at("h5"));
    // set to 3 on the attack, then one turn change
    assert_eq!(game.board().unit_at(at("h5")).unwrap().special_cooldown, 2);

    play(&mut game, "a6", "a5");
    let second = play(&mut game, "h5", "e8");
    assert_eq!(second.strikes[0].remaining_hp, 2);
    play(&mut game, "a5", "a4");

    let last = play(&mut game, "h5", "e8");
    assert_eq!(last.winner, Some(Side::First));
    assert_eq!(game.winner(), Some(Side::First));
    assert!(game.is_over());
    assert_eq!(game.board().unit_at(at("e8")).unwrap().archetype, Archetype::Queen);
    // no turn change after the winning move
    assert_eq!(game.side_to_move(), Side::First);

    let err = game.submit_move(at("b7"), at("b6")).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidMove {
            from: at("b7"),
            to: at("b6"),
            reason: RejectReason::GameOver
        }
    );
    assert_eq!(
        game.request_ai_move(&mut FirstMoveEngine).unwrap_err(),
        GameError::GameOver {
            winner: Side::First
        }
    );
}

#[test]
fn test_ai_move_applies_choice() {
    let mut game = Game::new();
    let turn = game.request_ai_move(&mut FirstMoveEngine).unwrap().unwrap();
    assert_eq!(turn.chosen, Move::new(at("a2"), at("a3")));
    assert_eq!(turn.outcome.landed, at("a3"));
    assert_eq!(game.side_to_move(), Side::Second);
}

#[test]
fn test_ai_forfeits_without_moves() {
    let board = Board::from_diagram(
        "........
         p.......
         P.......
         ........
         ........
         ........
         ........
         .......K",
    )
    .unwrap();
    let mut game = Game::from_board(board.clone(), Side::Second);

    let turn = game.request_ai_move(&mut FirstMoveEngine).unwrap();

    assert!(turn.is_none());
    assert_eq!(game.side_to_move(), Side::First);
    assert_eq!(game.turn(), 1);
    assert_eq!(game.board(), &board);
}

#[test]
fn test_click_selection_flow() {
    let mut game = Game::new();

    match game.click(at("e2")).unwrap() {
        ClickResult::Selected { square, moves } => {
            assert_eq!(square, at("e2"));
            assert_eq!(moves, vec![at("e3"), at("e4")]);
        }
        other => panic!("expected selection, got {other:?}"),
    }
    assert_eq!(game.selected(), Some(at("e2")));

    // switching to another own unit reselects
    assert!(matches!(
        game.click(at("g1")).unwrap(),
        ClickResult::Selected { .. }
    ));
    assert_eq!(game.selected_moves().len(), 2);

    // a square that is not highlighted drops the selection
    assert_eq!(game.click(at("e5")).unwrap(), ClickResult::Deselected);
    assert_eq!(game.selected(), None);

    game.click(at("g1")).unwrap();
    match game.click(at("f3")).unwrap() {
        ClickResult::Moved(out) => assert_eq!(out.landed, at("f3")),
        other => panic!("expected move, got {other:?}"),
    }
    assert_eq!(game.selected(), None);
    assert!(game.selected_moves().is_empty());
    assert_eq!(game.side_to_move(), Side::Second);

    // enemy units cannot be selected
    assert_eq!(game.click(at("f3")).unwrap(), ClickResult::Deselected);
}
