use super::*;
use battle_core::{Board, SearchResult};
use greedy_engine::GreedyEngine;
use random_engine::RandomEngine;

/// Never finds a move.
struct Passer;

impl Engine for Passer {
    fn search(&mut self, _board: &Board, _side: Side) -> SearchResult {
        SearchResult::forfeit()
    }

    fn name(&self) -> &str {
        "passer"
    }
}

fn config(num_games: u32, max_turns: u32) -> MatchConfig {
    MatchConfig {
        num_games,
        max_turns,
        ..Default::default()
    }
}

#[test]
fn test_match_plays_all_games() {
    let mut engine1 = GreedyEngine::with_seed(1);
    let mut engine2 = RandomEngine::with_seed(2);

    let runner = MatchRunner::new(config(4, 60));
    let (result, games) = runner.run_match(&mut engine1, &mut engine2).unwrap();

    assert_eq!(result.total_games(), 4);
    assert_eq!(games.len(), 4);
    for (i, game) in games.iter().enumerate() {
        assert_eq!(game.index, i as u32);
        assert_eq!(game.engine1_first, i % 2 == 0);
        assert!(game.turns <= 60);
        if game.winner.is_none() {
            assert_eq!(game.result, GameResult::Draw);
        }
    }
}

#[test]
fn test_match_is_reproducible() {
    let run = || {
        let mut engine1 = GreedyEngine::with_seed(5);
        let mut engine2 = GreedyEngine::with_seed(6);
        MatchRunner::new(config(2, 80))
            .run_match(&mut engine1, &mut engine2)
            .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_turn_cap_is_a_draw() {
    let runner = MatchRunner::new(config(1, 12));
    let (winner, turns, forfeits) = runner.play_game(&mut Passer, &mut Passer).unwrap();
    assert_eq!(winner, None);
    assert_eq!(turns, 12);
    assert_eq!(forfeits, 12);

    let (result, _) = runner.run_match(&mut Passer, &mut Passer).unwrap();
    assert_eq!(result.draws, 1);
    assert_eq!(result.score(), 0.5);
}

#[test]
fn test_winner_maps_to_engine_one() {
    // engine one passes forever, so it can only lose or draw
    let mut engine2 = GreedyEngine::with_seed(3);
    let runner = MatchRunner::new(MatchConfig {
        num_games: 2,
        max_turns: 400,
        alternate_sides: true,
    });

    let (result, games) = runner.run_match(&mut Passer, &mut engine2).unwrap();

    assert_eq!(result.wins, 0);
    for game in &games {
        if let Some(winner) = game.winner {
            let engine1_side = if game.engine1_first { Side::First } else { Side::Second };
            assert_ne!(winner, engine1_side);
            assert_eq!(game.result, GameResult::Loss);
        }
    }
}

#[test]
fn test_play_game_takes_unrelated_engines() {
    let mut greedy = GreedyEngine::with_seed(8);
    let mut random = RandomEngine::with_seed(9);
    let runner = MatchRunner::new(config(1, 30));

    let (_, turns, _) = runner.play_game(&mut greedy, &mut random).unwrap();
    assert!(turns > 0 && turns <= 30);
    let (_, turns, _) = runner.play_game(&mut random, &mut greedy).unwrap();
    assert!(turns > 0 && turns <= 30);
}
