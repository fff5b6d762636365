//! Greedy Battle Chess Engine
//!
//! Plays every legal move on a scratch copy of the board, resolves the combat
//! in simulation mode and keeps the move whose resulting position evaluates
//! best for the side to move. A small seeded perturbation breaks ties.

pub mod search;

use battle_core::{Board, Engine, SearchResult, Side};
use tracing::debug;

pub use search::{pick_best_move, SearchOutcome, TIE_BREAK_NOISE};

/// Seed used by `GreedyEngine::new`.
pub const DEFAULT_SEED: u64 = 0x5eed_c0de;

/// One-ply greedy engine.
///
/// Reproducible for a fixed seed: the same sequence of positions yields the
/// same sequence of moves, whether or not the rayon pool is used.
#[derive(Debug, Clone)]
pub struct GreedyEngine {
    seed: u64,
    /// Searches done since the last new_game, feeds the noise seed
    searches: u64,
    parallel: bool,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            searches: 0,
            parallel: false,
            nodes: 0,
        }
    }

    /// Score candidates on the rayon pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for GreedyEngine {
    fn search(&mut self, board: &Board, side: Side) -> SearchResult {
        let outcome = pick_best_move(board, side, self.seed, self.searches, self.parallel);
        self.searches += 1;
        self.nodes = outcome.nodes;

        if let Some((mv, score)) = outcome.best_move {
            debug!(side = side.color_name(), %mv, score, nodes = outcome.nodes, "greedy pick");
        }

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0.0),
            nodes: outcome.nodes,
        }
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }

    fn new_game(&mut self) {
        self.searches = 0;
        self.nodes = 0;
    }
}
