//! One-ply search: copy, simulate, evaluate.

use battle_core::{all_moves, evaluate_for, resolve, Board, Move, Resolution, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Upper bound (exclusive) of the tie-breaking noise added to each score.
pub const TIE_BREAK_NOISE: f64 = 0.5;

/// Result from pick_best_move.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Best move found with its perturbed score (None if no legal moves exist)
    pub best_move: Option<(Move, f64)>,
    /// Number of candidate positions simulated
    pub nodes: u64,
}

/// Derives the generator seed for one candidate so every candidate's noise is
/// independent of the order in which candidates are scored.
pub fn candidate_seed(seed: u64, search: u64, index: usize) -> u64 {
    // splitmix64 over the three inputs
    let mut z = seed
        ^ search.wrapping_mul(0x9e37_79b9_7f4a_7c15)
        ^ (index as u64).wrapping_mul(0xd1b5_4a32_d192_ed03);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Scores a single candidate on its own copy of `board`.
pub fn score_candidate(board: &Board, side: Side, mv: Move, rng: &mut impl Rng) -> f64 {
    let mut scratch = board.clone();
    resolve(&mut scratch, mv.from, mv.to, Resolution::Simulated);
    evaluate_for(&scratch, side) as f64 + rng.gen_range(0.0..TIE_BREAK_NOISE)
}

/// Searches every move of `side` one ply deep and returns the best.
///
/// # Arguments
/// * `board` - The position to search; never modified
/// * `side` - The side to pick a move for
/// * `seed` - Engine seed
/// * `search` - Per-engine search counter, so repeated positions get fresh noise
/// * `parallel` - Score candidates on the rayon pool
pub fn pick_best_move(
    board: &Board,
    side: Side,
    seed: u64,
    search: u64,
    parallel: bool,
) -> SearchOutcome {
    let moves = all_moves(board, side);
    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            nodes: 0,
        };
    }

    let score_at = |(index, &mv): (usize, &Move)| {
        let mut rng = StdRng::seed_from_u64(candidate_seed(seed, search, index));
        score_candidate(board, side, mv, &mut rng)
    };
    // Both branches yield scores in move order
    let scores: Vec<f64> = if parallel {
        moves.par_iter().enumerate().map(score_at).collect()
    } else {
        moves.iter().enumerate().map(score_at).collect()
    };

    let mut best = moves[0];
    let mut best_score = f64::NEG_INFINITY;
    for (&mv, &score) in moves.iter().zip(&scores) {
        if score > best_score {
            best_score = score;
            best = mv;
        }
    }

    SearchOutcome {
        best_move: Some((best, best_score)),
        nodes: moves.len() as u64,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
