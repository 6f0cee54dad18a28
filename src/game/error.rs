//! Error taxonomy for game operations.
//!
//! Every error is local and recoverable: operations validate before they
//! mutate, so a returned error means the session is unchanged.

use std::fmt;

use thiserror::Error;

/// Why a player name was refused by the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRejection {
    /// Empty after trimming.
    Blank,
    /// Exact (case-sensitive) match of an existing player.
    Duplicate,
}

impl fmt::Display for NameRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameRejection::Blank => f.write_str("Please enter a player name."),
            NameRejection::Duplicate => f.write_str("This player is already added."),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("{0}")]
    InvalidName(NameRejection),

    #[error("no player at index {index} (roster has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The turn index is past the end of the roster, or no game is running.
    #[error("no player is taking a turn")]
    NoCurrentPlayer,

    #[error("axis catalog is empty")]
    EmptyAxisCatalog,

    #[error("at least {required} players are needed to start (have {actual})")]
    NotEnoughPlayers { required: usize, actual: usize },

    #[error("invalid placements: {0}")]
    InvalidPlacements(String),
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::InvalidPlacements(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_errors_read_as_user_notifications() {
        assert_eq!(
            GameError::InvalidName(NameRejection::Blank).to_string(),
            "Please enter a player name."
        );
        assert_eq!(
            GameError::InvalidName(NameRejection::Duplicate).to_string(),
            "This player is already added."
        );
    }

    #[test]
    fn json_errors_convert_to_invalid_placements() {
        let err: GameError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, GameError::InvalidPlacements(_)));
    }
}
