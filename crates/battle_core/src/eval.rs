use crate::{board::Board, types::*, unit::Unit};

pub const QUEEN_PRIORITY: i32 = 15;
pub const KING_PRIORITY: i32 = 100;

/// Heuristic worth of a single unit: remaining hp plus twice its attack,
/// with flat bonuses for the pieces that matter most.
pub fn unit_value(unit: &Unit) -> i32 {
    let bonus = match unit.archetype {
        Archetype::Queen => QUEEN_PRIORITY,
        Archetype::King => KING_PRIORITY,
        Archetype::Rook | Archetype::Bishop | Archetype::Knight | Archetype::Pawn => 0,
    };
    unit.hp + 2 * unit.attack_power() + bonus
}

pub fn evaluate(board: &Board) -> i32 {
    // Material balance from the Second side's perspective
    let mut score = 0i32;
    for unit in board.units() {
        let v = unit_value(unit);
        score += if unit.side == Side::Second { v } else { -v };
    }
    score
}

/// `evaluate` seen from `side`.
pub fn evaluate_for(board: &Board, side: Side) -> i32 {
    match side {
        Side::Second => evaluate(board),
        Side::First => -evaluate(board),
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
