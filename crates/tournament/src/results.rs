//! Match results, storage and reporting

use std::path::Path;

use baghchal_core::{Outcome, Player};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::MatchConfig;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("Failed to access results file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a single game from engine1's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Translate a game outcome for the engine that played `side`.
    pub fn for_side(outcome: Outcome, side: Player) -> Self {
        match outcome.winner() {
            Some(winner) if winner == side => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }
}

/// How one game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: Outcome,
    pub plies: u32,
    /// Stopped at the ply cap rather than by the rules
    pub adjudicated: bool,
}

/// Result of a match (multiple games), seen from engine1
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Games won by whichever engine had the tigers
    pub tiger_wins: u32,
    /// Games won by whichever engine had the goats
    pub goat_wins: u32,
    /// Draws declared at the ply cap
    pub adjudicated: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Count one finished game in which engine1 played `engine1_side`.
    pub fn record(&mut self, game: &GameRecord, engine1_side: Player) -> GameResult {
        let result = GameResult::for_side(game.outcome, engine1_side);
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        match game.outcome.winner() {
            Some(Player::Tiger) => self.tiger_wins += 1,
            Some(Player::Goat) => self.goat_wins += 1,
            None => {}
        }
        if game.adjudicated {
            self.adjudicated += 1;
        }
        result
    }
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: MatchConfig,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: MatchConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, {} iterations/move, max {} plies\n\n",
            self.config.num_games, self.config.mcts.iterations, self.config.max_plies
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5} {:>6} {:>6}\n",
            "Engine 1", "Engine 2", "W", "L", "D", "Tiger", "Goat"
        ));
        report.push_str(&"-".repeat(76));
        report.push('\n');

        for entry in &self.matches {
            let r = &entry.result;
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5} {:>6} {:>6}\n",
                entry.engine1, entry.engine2, r.wins, r.losses, r.draws, r.tiger_wins, r.goat_wins
            ));
        }

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
