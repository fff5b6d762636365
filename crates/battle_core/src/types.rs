use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// White. Moves first and starts on rows 6 and 7.
    First,
    /// Black. Starts on rows 0 and 1.
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Row delta of a forward pawn step.
    pub fn forward(self) -> i8 {
        match self {
            Side::First => -1,
            Side::Second => 1,
        }
    }

    pub fn pawn_row(self) -> u8 {
        match self {
            Side::First => 6,
            Side::Second => 1,
        }
    }

    pub fn back_row(self) -> u8 {
        match self {
            Side::First => 7,
            Side::Second => 0,
        }
    }

    pub fn color_name(self) -> &'static str {
        match self {
            Side::First => "white",
            Side::Second => "black",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// Fixed per-archetype numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub max_hp: i32,
    pub base_attack: i32,
    pub special_cooldown_max: u8,
}

impl Archetype {
    pub const fn stats(self) -> Stats {
        match self {
            Archetype::King => Stats {
                max_hp: 20,
                base_attack: 5,
                special_cooldown_max: 0,
            },
            Archetype::Queen => Stats {
                max_hp: 15,
                base_attack: 9,
                special_cooldown_max: 3,
            },
            Archetype::Rook => Stats {
                max_hp: 12,
                base_attack: 7,
                special_cooldown_max: 0,
            },
            Archetype::Bishop => Stats {
                max_hp: 10,
                base_attack: 6,
                special_cooldown_max: 0,
            },
            Archetype::Knight => Stats {
                max_hp: 9,
                base_attack: 6,
                special_cooldown_max: 0,
            },
            Archetype::Pawn => Stats {
                max_hp: 5,
                base_attack: 3,
                special_cooldown_max: 0,
            },
        }
    }

    pub fn letter(self) -> char {
        match self {
            Archetype::King => 'K',
            Archetype::Queen => 'Q',
            Archetype::Rook => 'R',
            Archetype::Bishop => 'B',
            Archetype::Knight => 'N',
            Archetype::Pawn => 'P',
        }
    }

    pub fn from_letter(ch: char) -> Option<Archetype> {
        match ch.to_ascii_uppercase() {
            'K' => Some(Archetype::King),
            'Q' => Some(Archetype::Queen),
            'R' => Some(Archetype::Rook),
            'B' => Some(Archetype::Bishop),
            'N' => Some(Archetype::Knight),
            'P' => Some(Archetype::Pawn),
            _ => None,
        }
    }
}

/// A board coordinate. Always in range; construct through `new` or `at`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Panics on out-of-range coordinates; meant for literals in tests and tables.
    pub fn at(row: u8, col: u8) -> Square {
        assert!(row < 8 && col < 8, "square ({row}, {col}) off the board");
        Square { row, col }
    }

    pub fn from_index(idx: usize) -> Square {
        Square::at((idx / 8) as u8, (idx % 8) as u8)
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::new(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// Algebraic name: file a..h is the column, rank 1 is row 7.
    pub fn name(self) -> String {
        let f = (b'a' + self.col) as char;
        let r = (b'8' - self.row) as char;
        format!("{f}{r}")
    }

    pub fn parse(s: &str) -> Result<Square, SquareParseError> {
        let b = s.trim().as_bytes();
        if b.len() != 2 {
            return Err(SquareParseError(s.to_string()));
        }
        let (f, r) = (b[0].to_ascii_lowercase(), b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(SquareParseError(s.to_string()));
        }
        Ok(Square::at(b'8' - r, f - b'a'))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid square name: {0:?}")]
pub struct SquareParseError(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
