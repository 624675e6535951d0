//! Caller-visible failures.
//!
//! Every variant is an expected outcome of bad input (or of a failing
//! store), never a defect. Each carries a stable error code that front ends
//! can key translations on, and a human-readable message via `Display`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GameId;

/// Errors returned by validation and the game service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KalahError {
    /// No game is stored under the given identifier.
    #[error("The game was not found.")]
    GameNotFound(GameId),

    /// Move attempted on a finished game.
    #[error("The game is over.")]
    GameOver,

    /// Pit is not one of the mover's six sowing pits (includes stores and
    /// numbers off the board).
    #[error("The selected movement is not valid.")]
    InvalidMovement,

    /// Pit holds no stones.
    #[error("The selected pit is empty.")]
    EmptyPit,

    /// The game store failed to read or write.
    #[error("The game store failed: {0}")]
    Storage(String),
}

impl KalahError {
    /// Stable machine-readable code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            KalahError::GameNotFound(_) => "game.notfound",
            KalahError::GameOver => "game.over",
            KalahError::InvalidMovement => "game.invalid.movement",
            KalahError::EmptyPit => "game.empty.pit",
            KalahError::Storage(_) => "game.storage",
        }
    }

    /// Did the caller send something wrong (as opposed to the store failing)?
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, KalahError::Storage(_))
    }

    /// Caller-facing body for this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody::from(self)
    }
}

/// Serialized error shape: `{"message": ..., "errorCode": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub message: String,
    pub error_code: String,
}

impl From<&KalahError> for ErrorBody {
    fn from(err: &KalahError) -> Self {
        Self {
            message: err.to_string(),
            error_code: err.code().to_string(),
        }
    }
}

pub type Result<T, E = KalahError> = std::result::Result<T, E>;
