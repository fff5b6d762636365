use crate::{board::Board, types::*, unit::Unit};

pub const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Destination squares `unit` may legally move to or attack on `board`.
/// There is no check filtering: kings may step into danger.
pub fn legal_moves(unit: &Unit, board: &Board) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    legal_moves_into(unit, board, &mut out);
    out
}

/// Same as `legal_moves`, appending into a reusable buffer.
pub fn legal_moves_into(unit: &Unit, board: &Board, out: &mut Vec<Square>) {
    match unit.archetype {
        Archetype::Pawn => gen_pawn(unit, board, out),
        Archetype::Knight => gen_steps(unit, board, &KNIGHT_DELTAS, out),
        Archetype::King => gen_steps(unit, board, &ALL_DIRECTIONS, out),
        Archetype::Rook => gen_slider(unit, board, &ORTHOGONAL, out),
        Archetype::Bishop => gen_slider(unit, board, &DIAGONAL, out),
        Archetype::Queen => gen_slider(unit, board, &ALL_DIRECTIONS, out),
    }
}

/// Legal destinations of whatever stands on `sq`; empty for an empty square.
pub fn legal_moves_at(board: &Board, sq: Square) -> Vec<Square> {
    board
        .unit_at(sq)
        .map(|u| legal_moves(u, board))
        .unwrap_or_default()
}

/// Every (from, to) pair available to `side`, units in row-major order.
pub fn all_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    let mut buf = Vec::with_capacity(28);
    for unit in board.units_of(side) {
        buf.clear();
        legal_moves_into(unit, board, &mut buf);
        out.extend(buf.iter().map(|&to| Move::new(unit.square, to)));
    }
    out
}

fn is_enemy(board: &Board, sq: Square, side: Side) -> bool {
    board.unit_at(sq).is_some_and(|u| u.side != side)
}

fn gen_pawn(unit: &Unit, board: &Board, out: &mut Vec<Square>) {
    let dir = unit.side.forward();
    let from = unit.square;

    // forward 1
    if let Some(one) = from.offset(dir, 0)
        && board.is_empty(one)
    {
        out.push(one);

        // forward 2 from the starting row
        if from.row() == unit.side.pawn_row()
            && let Some(two) = from.offset(2 * dir, 0)
            && board.is_empty(two)
        {
            out.push(two);
        }
    }

    // diagonal attacks
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && is_enemy(board, to, unit.side)
        {
            out.push(to);
        }
    }
}

fn gen_steps(unit: &Unit, board: &Board, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in deltas {
        if let Some(to) = unit.square.offset(dr, dc) {
            match board.unit_at(to) {
                None => out.push(to),
                Some(other) if other.side != unit.side => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(unit: &Unit, board: &Board, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = unit.square;
        while let Some(to) = cur.offset(dr, dc) {
            match board.unit_at(to) {
                None => out.push(to),
                Some(other) if other.side != unit.side => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
