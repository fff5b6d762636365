pub mod board;
pub mod combat;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod unit;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use combat::*;
pub use eval::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;
pub use unit::*;

// =============================================================================
// Engine trait: implemented by every move picker (greedy, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The chosen move (None if the side has no legal moves)
    pub best_move: Option<Move>,
    /// Score of the chosen move from the searching side's perspective
    pub score: f64,
    /// Number of candidate positions simulated
    pub nodes: u64,
}

impl SearchResult {
    pub fn forfeit() -> Self {
        Self {
            best_move: None,
            score: 0.0,
            nodes: 0,
        }
    }
}

/// Trait that all engines must implement.
///
/// Engines only ever see a borrowed board; anything they simulate happens on
/// their own copies.
pub trait Engine: Send {
    /// Pick a move for `side` on `board`.
    fn search(&mut self, board: &Board, side: Side) -> SearchResult;

    /// Returns the engine's name for logs and match reports
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "battle-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
