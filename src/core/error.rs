//! Error types.
//!
//! The rules themselves are total and never fail. Errors only arise at the
//! boundary: converting host integers into ball numbers, and validating a
//! configuration.

use thiserror::Error;

/// Errors raised when host input does not fit the engine's types.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RulesError {
    /// Ball number outside `[0, 15]`.
    #[error("ball number {0} is out of range (expected 0-15)")]
    InvalidBallNumber(i64),

    /// Configuration value rejected by `MatchConfig::validate`.
    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),
}
