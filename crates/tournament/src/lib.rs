//! Tournament Runner for Bagh Chal engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines, alternating who plays the tigers
//! - Loading match settings from TOML
//! - Saving results as JSON and printing reports
//!
//! # Usage
//!
//! ```bash
//! # MCTS against the random baseline
//! cargo run -p tournament -- match mcts random --games 20
//!
//! # Stronger MCTS against a weaker one, settings from a file
//! cargo run -p tournament -- match mcts:2000 mcts:200 --config match.toml --out results.json
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
