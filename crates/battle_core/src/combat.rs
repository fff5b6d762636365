//! Combat resolution.
//!
//! `resolve` is the single place where a move changes a board. The same code
//! path runs on the live board and on scratch copies used by search; the only
//! difference is `Resolution`, which controls whether the queen's pierce
//! consumes its cooldown.

use tracing::debug;

use crate::{board::Board, types::*};

/// Flat damage bonus added to every knight strike.
pub const KNIGHT_STRIKE_BONUS: i32 = 3;
/// Hp restored to allies around a bishop after it acts.
pub const BISHOP_HEAL: i32 = 3;
/// Hp a king restores to itself after acting.
pub const KING_HEAL: i32 = 4;
/// Damage reduction a rook holds until its next move.
pub const ROOK_GUARD: i32 = 3;

/// Whether a resolution commits real game state or only scores a hypothetical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Live,
    Simulated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    /// Onto an empty or friendly-occupied square.
    Move,
    Attack,
}

/// One unit taking damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strike {
    pub square: Square,
    pub archetype: Archetype,
    pub side: Side,
    pub damage: i32,
    pub remaining_hp: i32,
    pub destroyed: bool,
    /// Hit by the queen's pierce rather than the main attack.
    pub pierced: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heal {
    pub square: Square,
    pub amount: i32,
}

/// Everything a presentation layer needs to show what a move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatOutcome {
    pub archetype: Archetype,
    pub side: Side,
    pub from: Square,
    pub to: Square,
    /// Where the acting unit ended up.
    pub landed: Square,
    pub kind: ActionKind,
    pub strikes: Vec<Strike>,
    pub heals: Vec<Heal>,
    /// Set when this resolution destroyed a king.
    pub winner: Option<Side>,
}

impl CombatOutcome {
    pub fn total_damage(&self) -> i32 {
        self.strikes.iter().map(|s| s.damage).sum()
    }

    /// Units removed from the board by this resolution.
    pub fn captured(&self) -> impl Iterator<Item = &Strike> {
        self.strikes.iter().filter(|s| s.destroyed)
    }

    pub fn advanced(&self) -> bool {
        self.landed == self.to && self.from != self.to
    }
}

/// Resolves the unit on `from` acting toward `to` and mutates `board` in place.
///
/// Callers own legality; this plays the request literally. Returns `None`
/// when `from` is empty.
pub fn resolve(
    board: &mut Board,
    from: Square,
    to: Square,
    mode: Resolution,
) -> Option<CombatOutcome> {
    let attacker = *board.unit_at(from)?;
    let target_side = board.unit_at(to).map(|t| t.side);

    let mut outcome = CombatOutcome {
        archetype: attacker.archetype,
        side: attacker.side,
        from,
        to,
        landed: from,
        kind: ActionKind::Move,
        strikes: Vec::new(),
        heals: Vec::new(),
        winner: None,
    };

    match target_side {
        Some(side) if side != attacker.side => {
            outcome.kind = ActionKind::Attack;
            let damage = attacker.strike_damage();

            let killed = strike(board, to, damage, false, &mut outcome).is_some_and(|s| s.destroyed);

            if attacker.special_ready() {
                if let Some(behind) = pierce_square(from, to)
                    && board.unit_at(behind).is_some_and(|u| u.side != attacker.side)
                {
                    strike(board, behind, damage, true, &mut outcome);
                }
                if mode == Resolution::Live
                    && let Some(queen) = board.unit_at_mut(from)
                {
                    queen.special_cooldown = queen.special_cooldown_max();
                }
            }

            if killed {
                board.relocate(from, to);
                outcome.landed = to;
            }
            if let Some(u) = board.unit_at_mut(outcome.landed) {
                u.first_attack_spent = true;
            }
        }
        _ => {
            // Plain moves onto a friendly square cannot come out of move
            // generation; played literally the friend would be lost.
            debug_assert!(target_side.is_none() || from == to, "move onto a friendly unit");
            if from != to {
                board.relocate(from, to);
            }
            outcome.landed = to;
        }
    }

    apply_abilities(board, outcome.landed, &mut outcome);
    Some(outcome)
}

/// The square one step past `to` along the line from `from`, if it exists.
///
/// Queens only move along straight or diagonal lines; any other direction is a
/// caller bug and yields no pierce.
pub fn pierce_square(from: Square, to: Square) -> Option<Square> {
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;
    let straight = dr == 0 || dc == 0 || dr.abs() == dc.abs();
    debug_assert!(straight, "pierce direction {from}->{to} is not a line");
    if !straight || (dr == 0 && dc == 0) {
        return None;
    }
    to.offset(dr.signum(), dc.signum())
}

fn strike(
    board: &mut Board,
    sq: Square,
    damage: i32,
    pierced: bool,
    outcome: &mut CombatOutcome,
) -> Option<Strike> {
    let target = board.unit_at_mut(sq)?;
    let dealt = target.take_hit(damage);
    let hit = Strike {
        square: sq,
        archetype: target.archetype,
        side: target.side,
        damage: dealt,
        remaining_hp: target.hp,
        destroyed: !target.is_alive(),
        pierced,
    };
    debug!(
        target = ?hit.archetype,
        square = %sq,
        damage = dealt,
        remaining = hit.remaining_hp,
        pierced,
        "strike"
    );

    if hit.destroyed {
        board.remove(sq);
        if hit.archetype == Archetype::King {
            outcome.winner = Some(hit.side.other());
        }
    }
    outcome.strikes.push(hit);
    Some(hit)
}

fn apply_abilities(board: &mut Board, at: Square, outcome: &mut CombatOutcome) {
    let Some(unit) = board.unit_at(at).copied() else {
        return;
    };
    match unit.archetype {
        Archetype::Bishop => {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let Some(sq) = at.offset(dr, dc) else {
                        continue;
                    };
                    if let Some(ally) = board.unit_at_mut(sq)
                        && ally.side == unit.side
                    {
                        let amount = ally.heal(BISHOP_HEAL);
                        if amount > 0 {
                            outcome.heals.push(Heal { square: sq, amount });
                        }
                    }
                }
            }
        }
        Archetype::Rook => {
            if let Some(rook) = board.unit_at_mut(at) {
                rook.damage_reduction = ROOK_GUARD;
            }
        }
        Archetype::King => {
            if let Some(king) = board.unit_at_mut(at) {
                let amount = king.heal(KING_HEAL);
                if amount > 0 {
                    outcome.heals.push(Heal { square: at, amount });
                }
            }
        }
        Archetype::Queen | Archetype::Knight | Archetype::Pawn => {}
    }
    for heal in &outcome.heals {
        debug!(square = %heal.square, amount = heal.amount, "heal");
    }
}

#[cfg(test)]
#[path = "combat_tests.rs"]
mod combat_tests;
