//! Arena for battle chess engines
//!
//! This crate provides:
//! - Engine-vs-engine matches with alternating sides and a turn cap
//! - JSON match reports
//! - A terminal driver for a human playing white against an engine
//!
//! # Usage
//!
//! ```bash
//! # Greedy vs random, 20 games, results saved as JSON
//! cargo run -p arena -- match --games 20 --first greedy --second random --out results.json
//!
//! # Play white against the greedy engine
//! cargo run -p arena -- play
//! ```

mod config;
mod match_runner;
mod play;
mod results;

pub use config::*;
pub use match_runner::*;
pub use play::*;
pub use results::*;
