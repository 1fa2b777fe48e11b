//! Error types for round scoring.

use alloc::string::String;

use thiserror::Error;

use crate::hand_type::SupportedHandTypes;
use crate::player::SupportedStatuses;

/// Errors that can occur while scoring a round.
///
/// Every variant is an input validation failure. A failed call never yields a
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Hand type is not one of the supported keys.
    #[error("invalid hand type: {hand_type}. supported types are: {}", SupportedHandTypes)]
    InvalidHandType {
        /// The rejected hand type text.
        hand_type: String,
    },
    /// Players are missing, empty, or not a list.
    #[error("players must be provided as a non-empty list")]
    InvalidPlayers,
    /// A player record has no usable name.
    #[error("player at position {index} must have a valid name (non-empty string)")]
    InvalidPlayerName {
        /// Zero-based position of the record in the input.
        index: usize,
    },
    /// A player who went down has no valid card value sum, or the sum is too
    /// large to score.
    #[error(
        "player {player} with status 'went_down' must have a valid non-negative cardValueSum (number)"
    )]
    InvalidCardValueSum {
        /// Name of the offending player.
        player: String,
    },
    /// A player carries a status that is not recognized.
    #[error(
        "invalid status '{status}' for player {player}. valid statuses are: {}",
        SupportedStatuses
    )]
    InvalidStatus {
        /// Name of the offending player.
        player: String,
        /// The rejected status text.
        status: String,
    },
    /// The round does not have exactly one winner.
    #[error("exactly one player must have the status 'winner', found {count}")]
    InvalidWinnerCount {
        /// Number of players marked as winner.
        count: usize,
    },
    /// A player name occurs more than once while duplicates are rejected.
    #[error("player name {player} appears more than once")]
    DuplicatePlayerName {
        /// The repeated name.
        player: String,
    },
}

impl ScoreError {
    /// Returns a stable identifier for the error kind.
    ///
    /// # Example
    ///
    /// ```
    /// use handscore::ScoreError;
    ///
    /// assert_eq!(ScoreError::InvalidPlayers.kind(), "invalid_players");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidHandType { .. } => "invalid_hand_type",
            Self::InvalidPlayers => "invalid_players",
            Self::InvalidPlayerName { .. } => "invalid_player_name",
            Self::InvalidCardValueSum { .. } => "invalid_card_value_sum",
            Self::InvalidStatus { .. } => "invalid_status",
            Self::InvalidWinnerCount { .. } => "invalid_winner_count",
            Self::DuplicatePlayerName { .. } => "duplicate_player_name",
        }
    }
}
