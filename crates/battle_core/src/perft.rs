use crate::{
    board::Board,
    combat::{Resolution, resolve},
    movegen::all_moves,
    types::Side,
};

/// Pure perft node count.
/// Counts all positions reachable from `board` in exactly `depth` plies, with
/// `side` to move first. A position where a king has fallen is a leaf.
///
/// Moves are played with `Resolution::Simulated` and no turn change happens
/// between plies, so queen cooldowns stay as they are in `board`.
pub fn perft(board: &Board, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = board.clone();
        let game_over = resolve(&mut child, mv.from, mv.to, Resolution::Simulated)
            .is_some_and(|out| out.winner.is_some());
        nodes += if game_over {
            1
        } else {
            perft(&child, side.other(), depth - 1)
        };
    }
    nodes
}
