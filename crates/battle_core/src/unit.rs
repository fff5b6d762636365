use crate::{combat::KNIGHT_STRIKE_BONUS, types::*};

/// A single board occupant with its combat state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unit {
    pub archetype: Archetype,
    pub side: Side,
    pub square: Square,
    pub hp: i32,
    pub max_hp: i32,
    pub base_attack: i32,
    /// Flat subtraction from incoming damage. Cleared whenever the unit moves.
    pub damage_reduction: i32,
    /// Pawns hit one harder until their first attack connects.
    pub first_attack_spent: bool,
    pub special_cooldown: u8,
}

impl Unit {
    pub fn new(archetype: Archetype, side: Side, square: Square) -> Self {
        let stats = archetype.stats();
        Self {
            archetype,
            side,
            square,
            hp: stats.max_hp,
            max_hp: stats.max_hp,
            base_attack: stats.base_attack,
            damage_reduction: 0,
            first_attack_spent: false,
            special_cooldown: 0,
        }
    }

    pub fn attack_power(&self) -> i32 {
        if self.archetype == Archetype::Pawn && !self.first_attack_spent {
            self.base_attack + 1
        } else {
            self.base_attack
        }
    }

    /// Damage this unit deals per strike before the target's reduction.
    pub fn strike_damage(&self) -> i32 {
        let bonus = if self.archetype == Archetype::Knight {
            KNIGHT_STRIKE_BONUS
        } else {
            0
        };
        self.attack_power() + bonus
    }

    pub fn special_cooldown_max(&self) -> u8 {
        self.archetype.stats().special_cooldown_max
    }

    pub fn special_ready(&self) -> bool {
        self.archetype == Archetype::Queen && self.special_cooldown == 0
    }

    /// Applies `amount` of raw damage after reduction and returns what was dealt.
    pub fn take_hit(&mut self, amount: i32) -> i32 {
        let real = (amount - self.damage_reduction).max(0);
        self.hp -= real;
        real
    }

    /// Heals up to max hp and returns the hp actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn symbol(&self) -> char {
        let ch = self.archetype.letter();
        match self.side {
            Side::First => ch,
            Side::Second => ch.to_ascii_lowercase(),
        }
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod unit_tests;
