//! Match runner for playing games between engines

use battle_core::{Engine, Game, GameError, Side};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ArenaConfig;

/// Result of a single game from engine one's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games), from engine one's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points per game, a draw counting half
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total as f64
    }

    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    /// Zero-based game number within the match
    pub index: u32,
    /// Whether engine one played white
    pub engine1_first: bool,
    /// None when the turn cap was reached
    pub winner: Option<Side>,
    pub turns: u32,
    /// Turns a side skipped for lack of legal moves
    pub forfeits: u32,
    pub result: GameResult,
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Turns per game before declaring a draw
    pub max_turns: u32,
    /// Whether to alternate sides each game
    pub alternate_sides: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_turns: 200,
            alternate_sides: true,
        }
    }
}

impl From<&ArenaConfig> for MatchConfig {
    fn from(config: &ArenaConfig) -> Self {
        Self {
            num_games: config.games,
            max_turns: config.max_turns,
            alternate_sides: config.alternate_sides,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Results are from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<(MatchResult, Vec<GameRecord>), GameError> {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for index in 0..self.config.num_games {
            let engine1_first = !self.config.alternate_sides || index % 2 == 0;

            let (winner, turns, forfeits) = if engine1_first {
                self.play_game(engine1, engine2)?
            } else {
                self.play_game(engine2, engine1)?
            };
            let engine1_side = if engine1_first { Side::First } else { Side::Second };
            let game_result = match winner {
                Some(side) if side == engine1_side => GameResult::Win,
                Some(_) => GameResult::Loss,
                None => GameResult::Draw,
            };
            result.record(game_result);

            info!(
                game = index + 1,
                of = self.config.num_games,
                side = engine1_side.color_name(),
                result = ?game_result,
                turns,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
            games.push(GameRecord {
                index,
                engine1_first,
                winner,
                turns,
                forfeits,
                result: game_result,
            });
        }

        Ok((result, games))
    }

    /// Play a single game, returns (winner, turns, forfeits)
    pub fn play_game(
        &self,
        first: &mut dyn Engine,
        second: &mut dyn Engine,
    ) -> Result<(Option<Side>, u32, u32), GameError> {
        let mut game = Game::new();
        first.new_game();
        second.new_game();
        let mut forfeits = 0;

        while !game.is_over() && game.turn() < self.config.max_turns {
            let turn = match game.side_to_move() {
                Side::First => game.request_ai_move(first)?,
                Side::Second => game.request_ai_move(second)?,
            };
            if turn.is_none() {
                forfeits += 1;
            }
        }

        Ok((game.winner(), game.turn(), forfeits))
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
