//! Error types for the guessing game

use std::num::ParseIntError;
use thiserror::Error;

/// Result alias for session operations
pub type GameResult<T> = Result<T, GameError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess could not be parsed as an integer; no attempt is consumed
    #[error("'{input}' is not a whole number")]
    InvalidInput {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Guess submitted after the session reached a terminal state
    #[error("the session is already finished")]
    SessionFinished,

    /// Explicit secret outside the allowed range
    #[error("secret {secret} is outside {min}..={max}")]
    SecretOutOfRange { secret: i64, min: i64, max: i64 },
}

impl GameError {
    /// Whether the caller should simply prompt again
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = GameError::InvalidInput {
            input: "abc".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "'abc' is not a whole number");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_session_finished_not_recoverable() {
        assert!(!GameError::SessionFinished.is_recoverable());
    }
}
