//! Random Move Battle Chess Engine
//!
//! Picks uniformly among all legal moves of the side to move.
//! Useful as a baseline opponent for the greedy engine and for
//! stress-running the combat resolver.

use battle_core::{all_moves, Board, Engine, SearchResult, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An engine that plays random legal moves from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    seed: u64,
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, side: Side) -> SearchResult {
        let moves = all_moves(board, side);
        self.nodes = moves.len() as u64;

        SearchResult {
            best_move: moves.choose(&mut self.rng).copied(),
            score: 0.0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.nodes = 0;
    }
}
