//! Match report storage and printing

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;
use crate::match_runner::{GameRecord, MatchResult};

/// Everything a finished match produced
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
    /// Configuration used
    pub config: ArenaConfig,
}

impl MatchReport {
    /// Save report to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Load report from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "=== Match: {} vs {} ===", self.engine1, self.engine2);
        let _ = writeln!(
            report,
            "Config: {} games, max {} turns, seed {}",
            self.config.games, self.config.max_turns, self.config.seed
        );
        let _ = writeln!(report);
        let _ = writeln!(report, "{:>4}  {:<6} {:<8} {:>6}", "Game", "Side", "Result", "Turns");
        report.push_str(&"-".repeat(28));
        report.push('\n');

        for game in &self.games {
            let side = if game.engine1_first { "white" } else { "black" };
            let _ = writeln!(
                report,
                "{:>4}  {:<6} {:<8} {:>6}",
                game.index + 1,
                side,
                format!("{:?}", game.result),
                game.turns
            );
        }

        let _ = writeln!(report);
        let _ = writeln!(
            report,
            "{}: {} wins, {} losses, {} draws (score {:.1}%)",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        );
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
