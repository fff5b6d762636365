use thiserror::Error;

use crate::{types::*, unit::Unit};

const BACK_RANK: [Archetype; 8] = [
    Archetype::Rook,
    Archetype::Knight,
    Archetype::Bishop,
    Archetype::Queen,
    Archetype::King,
    Archetype::Bishop,
    Archetype::Knight,
    Archetype::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 8")]
    RowWidth { row: usize, len: usize },
    #[error("invalid unit character {ch:?} in row {row}")]
    BadChar { row: usize, ch: char },
}

/// 8x8 grid of units. Cloning produces a fully independent copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Unit>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// A full set per side; Second on rows 0-1, First on rows 6-7.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        for side in [Side::Second, Side::First] {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                b.place(Archetype::Pawn, side, Square::at(side.pawn_row(), col as u8));
                b.place(kind, side, Square::at(side.back_row(), col as u8));
            }
        }
        b
    }

    /// Parses a diagram of 8 rows (row 0 first) separated by `/` or newlines.
    /// `.` is empty, uppercase letters are First, lowercase are Second.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardParseError> {
        let rows: Vec<&str> = diagram
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut b = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(BoardParseError::RowWidth {
                    row,
                    len: cells.len(),
                });
            }
            for (col, ch) in cells.into_iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind =
                    Archetype::from_letter(ch).ok_or(BoardParseError::BadChar { row, ch })?;
                let side = if ch.is_ascii_uppercase() {
                    Side::First
                } else {
                    Side::Second
                };
                b.place(kind, side, Square::at(row as u8, col as u8));
            }
        }
        Ok(b)
    }

    /// Renders the board in the format accepted by `from_diagram`, one row per line.
    pub fn diagram(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8u8 {
            for col in 0..8u8 {
                out.push(match self.unit_at(Square::at(row, col)) {
                    Some(u) => u.symbol(),
                    None => '.',
                });
            }
            out.push('\n');
        }
        out
    }

    pub fn unit_at(&self, sq: Square) -> Option<&Unit> {
        self.cells[sq.index()].as_ref()
    }

    pub fn unit_at_mut(&mut self, sq: Square) -> Option<&mut Unit> {
        self.cells[sq.index()].as_mut()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Puts a fresh unit on `sq`, replacing whatever was there.
    pub fn place(&mut self, archetype: Archetype, side: Side, sq: Square) -> &mut Unit {
        self.cells[sq.index()].insert(Unit::new(archetype, side, sq))
    }

    pub fn remove(&mut self, sq: Square) -> Option<Unit> {
        self.cells[sq.index()].take()
    }

    /// Moves the unit on `from` to `to`, keeping its stored square in sync and
    /// clearing its damage reduction. Whatever stood on `to` is dropped.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<&mut Unit> {
        let mut unit = self.cells[from.index()].take()?;
        unit.square = to;
        unit.damage_reduction = 0;
        Some(self.cells[to.index()].insert(unit))
    }

    /// All units in row-major order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.cells.iter().flatten()
    }

    pub fn units_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.cells.iter_mut().flatten()
    }

    pub fn units_of(&self, side: Side) -> impl Iterator<Item = &Unit> {
        self.units().filter(move |u| u.side == side)
    }

    pub fn count(&self) -> usize {
        self.units().count()
    }

    pub fn king(&self, side: Side) -> Option<&Unit> {
        self.units_of(side).find(|u| u.archetype == Archetype::King)
    }

    /// Every queen on the board with its remaining cooldown.
    pub fn queen_cooldowns(&self) -> Vec<(Side, Square, u8)> {
        self.units()
            .filter(|u| u.archetype == Archetype::Queen)
            .map(|u| (u.side, u.square, u.special_cooldown))
            .collect()
    }

    /// True when every occupied cell's unit agrees with its cell and is alive.
    pub fn is_consistent(&self) -> bool {
        self.cells.iter().enumerate().all(|(i, cell)| match cell {
            Some(u) => u.square.index() == i && u.hp > 0 && u.hp <= u.max_hp,
            None => true,
        })
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
