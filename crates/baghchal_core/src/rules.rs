use serde::{Deserialize, Serialize};

/// Thresholds for the win and draw conditions.
///
/// The defaults are the standard rules: five captures win for the tigers,
/// a board recurring five times or fifty moves without progress is a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Captured goats needed for a tiger win
    pub capture_win: u8,
    /// Occurrences of one board configuration that force a draw
    pub repetition_limit: u32,
    /// Consecutive moves without capture or blockade that force a draw
    pub no_progress_limit: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            capture_win: 5,
            repetition_limit: 5,
            no_progress_limit: 50,
        }
    }
}
