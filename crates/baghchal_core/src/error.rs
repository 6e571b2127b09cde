use thiserror::Error;

use crate::types::{Move, Player};

/// Errors raised by the rule engine.
///
/// Every variant is a contract violation by the caller (an illegal move, a
/// malformed position); none of them are recoverable by retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move {mv} for {player}")]
    IllegalMove { mv: Move, player: Player },

    #[error("board invariant violated: {0}")]
    InvariantViolation(String),

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
}
