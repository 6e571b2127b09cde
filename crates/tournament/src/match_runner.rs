//! Match runner for playing games between engines

use baghchal_core::{Engine, GameError, GameState, Outcome, Player, SearchLimits};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::MatchConfig;
use crate::results::{GameRecord, GameResult, MatchResult};

#[derive(Debug, Error)]
pub enum MatchError {
    /// The side to move has nothing to play but the game is not over.
    #[error("{player} has no legal move at ply {ply} in an undecided position")]
    NoLegalMoves { player: Player, ply: u32 },

    #[error("{engine} returned no move at ply {ply}")]
    NoMoveReturned { engine: String, ply: u32 },

    #[error("{engine} played an illegal move: {source}")]
    IllegalMove {
        engine: String,
        #[source]
        source: GameError,
    },
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchResult, MatchError> {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_tigers = !self.config.alternate_sides || game_num % 2 == 0;

            let (record, engine1_side) = if engine1_tigers {
                (self.play_game(engine1, engine2)?, Player::Tiger)
            } else {
                (self.play_game(engine2, engine1)?, Player::Goat)
            };

            let game_result = result.record(&record, engine1_side);

            if self.config.verbose {
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    side = %engine1_side,
                    outcome,
                    plies = record.plies,
                    adjudicated = record.adjudicated,
                    "Game {}/{}: {} - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        Ok(result)
    }

    /// Play a single game from the opening position.
    pub fn play_game(
        &self,
        tigers: &mut dyn Engine,
        goats: &mut dyn Engine,
    ) -> Result<GameRecord, MatchError> {
        let mut state = GameState::with_rules(self.config.rules);
        tigers.new_game();
        goats.new_game();

        let limits = SearchLimits::iterations(self.config.mcts.iterations);

        for ply in 0..self.config.max_plies {
            if let Some(outcome) = state.outcome() {
                return Ok(GameRecord {
                    outcome,
                    plies: ply,
                    adjudicated: false,
                });
            }

            let player = state.current_player();
            let engine: &mut dyn Engine = match player {
                Player::Tiger => &mut *tigers,
                Player::Goat => &mut *goats,
            };

            let result = engine.search(&state, limits);
            let Some(mv) = result.best_move else {
                if state.get_possible_moves().is_empty() {
                    warn!(%player, ply, layout = %state.to_layout(), "Stalemate");
                    return Err(MatchError::NoLegalMoves { player, ply });
                }
                return Err(MatchError::NoMoveReturned {
                    engine: engine.name().to_string(),
                    ply,
                });
            };

            debug!(ply, %player, mv = %mv, score = result.score, "Move");
            state
                .apply_move(mv)
                .map_err(|source| MatchError::IllegalMove {
                    engine: engine.name().to_string(),
                    source,
                })?;
        }

        // The last move may have ended the game
        if let Some(outcome) = state.outcome() {
            return Ok(GameRecord {
                outcome,
                plies: self.config.max_plies,
                adjudicated: false,
            });
        }

        Ok(GameRecord {
            outcome: Outcome::Draw,
            plies: self.config.max_plies,
            adjudicated: true,
        })
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    iterations: u32,
) -> Result<MatchResult, MatchError> {
    let mut config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    config.mcts.iterations = iterations;
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
