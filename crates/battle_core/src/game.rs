//! Turn engine: owns the authoritative board, enforces turn order and
//! decides when the game is over.

use thiserror::Error;
use tracing::info;

use crate::{
    Engine,
    board::Board,
    combat::{CombatOutcome, Resolution, resolve},
    movegen::legal_moves,
    types::*,
    unit::Unit,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    GameOver,
    EmptySquare,
    NotYourUnit,
    IllegalDestination,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RejectReason::GameOver => "the game is already over",
            RejectReason::EmptySquare => "no unit on the source square",
            RejectReason::NotYourUnit => "unit belongs to the other side",
            RejectReason::IllegalDestination => "destination is not a legal move",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move {from}->{to}: {reason}")]
    InvalidMove {
        from: Square,
        to: Square,
        reason: RejectReason,
    },
    #[error("game is over, {winner:?} won")]
    GameOver { winner: Side },
}

/// Read-only copy of a unit for drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitView {
    pub archetype: Archetype,
    pub side: Side,
    pub hp: i32,
    pub max_hp: i32,
    pub attack_power: i32,
    pub square: Square,
    pub damage_reduction: i32,
    pub special_cooldown: u8,
}

impl From<&Unit> for UnitView {
    fn from(u: &Unit) -> Self {
        Self {
            archetype: u.archetype,
            side: u.side,
            hp: u.hp,
            max_hp: u.max_hp,
            attack_power: u.attack_power(),
            square: u.square,
            damage_reduction: u.damage_reduction,
            special_cooldown: u.special_cooldown,
        }
    }
}

/// 8x8 grid of unit views, indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub cells: [[Option<UnitView>; 8]; 8],
}

impl BoardSnapshot {
    pub fn get(&self, sq: Square) -> Option<&UnitView> {
        self.cells[sq.row() as usize][sq.col() as usize].as_ref()
    }
}

/// A computer-chosen move together with what it did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiTurn {
    pub chosen: Move,
    pub outcome: CombatOutcome,
}

/// Result of one click on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickResult {
    Selected { square: Square, moves: Vec<Square> },
    Deselected,
    Moved(CombatOutcome),
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    winner: Option<Side>,
    turn: u32,
    selected: Option<Square>,
    selected_moves: Vec<Square>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Side::First)
    }

    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            winner: None,
            turn: 0,
            selected: None,
            selected_moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Completed turns, forfeits included.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut cells = [[None; 8]; 8];
        for unit in self.board.units() {
            cells[unit.square.row() as usize][unit.square.col() as usize] = Some(UnitView::from(unit));
        }
        BoardSnapshot { cells }
    }

    pub fn legal_moves_at(&self, sq: Square) -> Vec<Square> {
        crate::movegen::legal_moves_at(&self.board, sq)
    }

    /// Applies a player's move to the live board.
    ///
    /// The move must be legal for the side to move; anything else is rejected
    /// and leaves the game untouched.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<CombatOutcome, GameError> {
        self.check_move(from, to)?;

        let outcome = resolve(&mut self.board, from, to, Resolution::Live).ok_or(
            GameError::InvalidMove {
                from,
                to,
                reason: RejectReason::EmptySquare,
            },
        )?;
        info!(
            side = outcome.side.color_name(),
            unit = ?outcome.archetype,
            from = %from,
            to = %to,
            damage = outcome.total_damage(),
            "move"
        );
        self.clear_selection();

        match outcome.winner {
            Some(winner) => {
                self.winner = Some(winner);
                info!(winner = winner.color_name(), turn = self.turn, "game over");
            }
            None => self.change_turn(),
        }
        Ok(outcome)
    }

    /// Lets `engine` play for the side to move.
    ///
    /// Returns `Ok(None)` when that side had nothing to play and forfeited.
    pub fn request_ai_move(&mut self, engine: &mut dyn Engine) -> Result<Option<AiTurn>, GameError> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameOver { winner });
        }

        let result = engine.search(&self.board, self.side_to_move);
        match result.best_move {
            Some(chosen) => {
                let outcome = self.submit_move(chosen.from, chosen.to)?;
                Ok(Some(AiTurn { chosen, outcome }))
            }
            None => {
                info!(side = self.side_to_move.color_name(), "no legal moves, turn forfeited");
                self.change_turn();
                Ok(None)
            }
        }
    }

    /// Passes the turn and ticks every special cooldown down by one.
    pub fn change_turn(&mut self) {
        self.side_to_move = self.side_to_move.other();
        for unit in self.board.units_mut() {
            unit.special_cooldown = unit.special_cooldown.saturating_sub(1);
        }
        self.turn += 1;
        info!(side = self.side_to_move.color_name(), turn = self.turn, "turn");
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn selected_moves(&self) -> &[Square] {
        &self.selected_moves
    }

    /// Selects the unit on `sq` if it belongs to the side to move, caching its
    /// destinations. Otherwise clears the selection and returns `None`.
    pub fn select(&mut self, sq: Square) -> Option<&[Square]> {
        match self.board.unit_at(sq) {
            Some(u) if u.side == self.side_to_move && self.winner.is_none() => {
                self.selected_moves = legal_moves(u, &self.board);
                self.selected = Some(sq);
                Some(&self.selected_moves)
            }
            _ => {
                self.selected = None;
                self.selected_moves.clear();
                None
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.selected_moves.clear();
    }

    /// Handles a click the way a board UI does: commit a highlighted
    /// destination, switch to another own unit, or drop the selection.
    pub fn click(&mut self, sq: Square) -> Result<ClickResult, GameError> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameOver { winner });
        }
        if let Some(from) = self.selected
            && self.selected_moves.contains(&sq)
        {
            return self.submit_move(from, sq).map(ClickResult::Moved);
        }
        match self.select(sq) {
            Some(moves) => Ok(ClickResult::Selected {
                square: sq,
                moves: moves.to_vec(),
            }),
            None => Ok(ClickResult::Deselected),
        }
    }

    fn check_move(&self, from: Square, to: Square) -> Result<(), GameError> {
        let reject = |reason| Err(GameError::InvalidMove { from, to, reason });
        if self.winner.is_some() {
            return reject(RejectReason::GameOver);
        }
        let Some(unit) = self.board.unit_at(from) else {
            return reject(RejectReason::EmptySquare);
        };
        if unit.side != self.side_to_move {
            return reject(RejectReason::NotYourUnit);
        }
        if !legal_moves(unit, &self.board).contains(&to) {
            return reject(RejectReason::IllegalDestination);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
