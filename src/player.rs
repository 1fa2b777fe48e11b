//! Player outcomes for a single round.

use core::fmt;
use core::str::FromStr;

use alloc::string::String;

/// How a player finished the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlayerStatus {
    /// Won the round.
    Winner,
    /// Never laid down any melds.
    #[default]
    DidNotGoDown,
    /// Laid down melds but still held cards when the round ended.
    WentDown,
    /// Penalized for a rule mistake.
    MadeMistake,
}

impl PlayerStatus {
    /// Every status, in the order they are listed in messages.
    pub const ALL: [Self; 4] = [
        Self::Winner,
        Self::DidNotGoDown,
        Self::WentDown,
        Self::MadeMistake,
    ];

    /// Returns the wire key of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Winner => "winner",
            Self::DidNotGoDown => "did_not_go_down",
            Self::WentDown => "went_down",
            Self::MadeMistake => "made_mistake",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status key is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatus;

impl FromStr for PlayerStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(UnknownStatus)
    }
}

/// Displays the valid status keys as a comma separated list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupportedStatuses;

impl fmt::Display for SupportedStatuses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, status) in PlayerStatus::ALL.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(status.as_str())?;
        }
        Ok(())
    }
}

/// One player's outcome for a round, as reported by the caller.
///
/// Fields are kept as received so that validation happens in the scorer, in
/// input order. Use the constructors for well-formed records:
///
/// ```
/// use handscore::PlayerOutcome;
///
/// let player = PlayerOutcome::went_down("Player C", 50.0);
/// assert_eq!(player.name.as_deref(), Some("Player C"));
/// assert_eq!(player.card_value_sum, Some(50.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerOutcome {
    /// Player name, unique within a round.
    pub name: Option<String>,
    /// Raw status key. Absent or empty means [`PlayerStatus::DidNotGoDown`].
    pub status: Option<String>,
    /// Sum of the card values still held, jokers included.
    ///
    /// Only read when the status is [`PlayerStatus::WentDown`].
    pub card_value_sum: Option<f64>,
}

impl PlayerOutcome {
    /// Creates a record with the given name and no status.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates a winner record.
    #[must_use]
    pub fn winner(name: impl Into<String>) -> Self {
        Self::new(name).with_status(PlayerStatus::Winner.as_str())
    }

    /// Creates a record for a player who did not go down.
    #[must_use]
    pub fn did_not_go_down(name: impl Into<String>) -> Self {
        Self::new(name).with_status(PlayerStatus::DidNotGoDown.as_str())
    }

    /// Creates a record for a player who went down holding `card_value_sum` points.
    #[must_use]
    pub fn went_down(name: impl Into<String>, card_value_sum: f64) -> Self {
        Self::new(name)
            .with_status(PlayerStatus::WentDown.as_str())
            .with_card_value_sum(card_value_sum)
    }

    /// Creates a record for a player who made a mistake.
    #[must_use]
    pub fn made_mistake(name: impl Into<String>) -> Self {
        Self::new(name).with_status(PlayerStatus::MadeMistake.as_str())
    }

    /// Sets the raw status key.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the card value sum.
    #[must_use]
    pub fn with_card_value_sum(mut self, card_value_sum: f64) -> Self {
        self.card_value_sum = Some(card_value_sum);
        self
    }

    /// Returns the name if it is present and non-empty.
    #[must_use]
    pub fn valid_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Resolves the raw status key.
    ///
    /// An absent or empty key resolves to [`PlayerStatus::DidNotGoDown`].
    /// Any other key must name one of the four statuses.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStatus`] if the key is present but not recognized.
    pub fn resolved_status(&self) -> Result<PlayerStatus, UnknownStatus> {
        match self.status.as_deref() {
            None | Some("") => Ok(PlayerStatus::default()),
            Some(key) => key.parse(),
        }
    }

    /// Returns the card value sum if it is a finite, non-negative number.
    #[must_use]
    pub fn valid_card_value_sum(&self) -> Option<f64> {
        self.card_value_sum
            .filter(|sum| sum.is_finite() && *sum >= 0.0)
    }
}
