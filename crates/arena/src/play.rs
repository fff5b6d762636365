//! Terminal driver: a human plays white against an engine.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use battle_core::{
    all_moves, Board, CombatOutcome, Engine, Game, Move, Side, Square, SquareParseError,
};

/// Parses `e2 e4`, `e2-e4` or `e2e4`.
pub fn parse_move(input: &str) -> Result<Move, SquareParseError> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(SquareParseError(input.trim().to_string()));
    }
    let from = Square::parse(&compact[..2])?;
    let to = Square::parse(&compact[2..])?;
    Ok(Move::new(from, to))
}

/// Board diagram with rank and file labels, then hp and queen cooldowns.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for (i, line) in board.diagram().lines().enumerate() {
        out.push_str(&format!("{} {}\n", 8 - i, line));
    }
    out.push_str("  abcdefgh\n");

    for side in [Side::First, Side::Second] {
        let units: Vec<String> = board
            .units_of(side)
            .map(|u| format!("{}{}:{}", u.symbol(), u.square, u.hp))
            .collect();
        out.push_str(&format!("{}: {}\n", side.color_name(), units.join(" ")));
    }
    for (side, square, cooldown) in board.queen_cooldowns() {
        out.push_str(&format!(
            "{} queen {}: cooldown {}\n",
            side.color_name(),
            square,
            cooldown
        ));
    }
    out
}

fn describe(outcome: &CombatOutcome) -> String {
    let mut line = format!("{:?} {} -> {}", outcome.archetype, outcome.from, outcome.to);
    for strike in &outcome.strikes {
        line.push_str(&format!(
            ", hits {:?} on {} for {}",
            strike.archetype, strike.square, strike.damage
        ));
        if strike.destroyed {
            line.push_str(" (destroyed)");
        }
        if strike.pierced {
            line.push_str(" (pierce)");
        }
    }
    for heal in &outcome.heals {
        line.push_str(&format!(", heals {} by {}", heal.square, heal.amount));
    }
    line
}

/// Runs an interactive game until someone wins or input ends.
///
/// The human always plays white; `quit` or end of input stops early.
/// Returns the winner, if any.
pub fn play_session<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    engine: &mut dyn Engine,
) -> anyhow::Result<Option<Side>> {
    let mut game = Game::new();
    engine.new_game();
    writeln!(out, "You are white. Enter moves like `e2 e4`, or `quit`.")?;

    let mut line = String::new();
    while !game.is_over() {
        if game.side_to_move() == Side::Second {
            match game
                .request_ai_move(engine)
                .context("engine move failed")?
            {
                Some(turn) => writeln!(out, "{} plays {}", engine.name(), describe(&turn.outcome))?,
                None => writeln!(out, "{} has no moves and passes", engine.name())?,
            }
            continue;
        }

        write!(out, "\n{}", render(game.board()))?;
        if all_moves(game.board(), Side::First).is_empty() {
            writeln!(out, "You have no moves and pass.")?;
            game.change_turn();
            continue;
        }

        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let text = line.trim();
        if text.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        if text.is_empty() {
            continue;
        }

        let mv = match parse_move(text) {
            Ok(mv) => mv,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        match game.submit_move(mv.from, mv.to) {
            Ok(outcome) => writeln!(out, "You play {}", describe(&outcome))?,
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    let Some(winner) = game.winner() else {
        bail!("game ended without a winner");
    };
    write!(out, "\n{}", render(game.board()))?;
    match winner {
        Side::First => writeln!(out, "You win!")?,
        Side::Second => writeln!(out, "{} wins.", engine.name())?,
    }
    Ok(Some(winner))
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod play_tests;
