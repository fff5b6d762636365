//! Arena configuration, read from TOML

use std::path::{Path, PathBuf};

use anyhow::Context;
use battle_core::Engine;
use clap::ValueEnum;
use greedy_engine::GreedyEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

/// Engines the arena knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// One-ply greedy search
    Greedy,
    /// Uniformly random legal moves
    Random,
}

impl EngineKind {
    pub fn build(self, seed: u64, parallel: bool) -> Box<dyn Engine> {
        match self {
            EngineKind::Greedy => Box::new(GreedyEngine::with_seed(seed).parallel(parallel)),
            EngineKind::Random => Box::new(RandomEngine::with_seed(seed)),
        }
    }
}

/// Settings for `arena match` and `arena play`.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games in a match
    pub games: u32,
    /// Turn count at which a game is scored as a draw
    pub max_turns: u32,
    /// Base seed; each engine derives its own from it
    pub seed: u64,
    /// Swap sides every other game
    pub alternate_sides: bool,
    /// Score greedy candidates on the rayon pool
    pub parallel_search: bool,
    pub first_engine: EngineKind,
    pub second_engine: EngineKind,
    /// Where to write the JSON match report (None = don't save)
    pub results_path: Option<PathBuf>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_turns: 200,
            seed: 0,
            alternate_sides: true,
            parallel_search: false,
            first_engine: EngineKind::Greedy,
            second_engine: EngineKind::Random,
            results_path: None,
        }
    }
}

impl ArenaConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("invalid arena config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("in {}", path.display()))
    }

    /// Seed handed to the engine in `slot` (0 = engine one, 1 = engine two).
    pub fn engine_seed(&self, slot: u64) -> u64 {
        self.seed.wrapping_add(slot.wrapping_mul(0x9e37_79b9_7f4a_7c15))
    }

    /// The engine playing black in `arena play`.
    pub fn build_opponent(&self) -> Box<dyn Engine> {
        self.second_engine
            .build(self.engine_seed(1), self.parallel_search)
    }

    pub fn build_engines(&self) -> (Box<dyn Engine>, Box<dyn Engine>) {
        (
            self.first_engine
                .build(self.engine_seed(0), self.parallel_search),
            self.build_opponent(),
        )
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
