//! Hand types and their fixed scoring rules.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::ScoreError;

/// Points awarded for each outcome under one hand type.
///
/// Negative values are favorable: the winner's delta is the only negative
/// entry in every rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreRules {
    /// Fixed delta for the round winner.
    pub winner: i64,
    /// Fixed delta for a player who never went down.
    pub did_not_go_down: i64,
    /// Multiplier applied to the card value sum of a player who went down.
    pub went_down_multiplier: i64,
    /// Fixed penalty for a player who made a mistake.
    pub made_mistake: i64,
}

impl ScoreRules {
    const fn new(
        winner: i64,
        did_not_go_down: i64,
        went_down_multiplier: i64,
        made_mistake: i64,
    ) -> Self {
        Self {
            winner,
            did_not_go_down,
            went_down_multiplier,
            made_mistake,
        }
    }
}

const NORMAL: ScoreRules = ScoreRules::new(-60, 200, 2, 250);
const DOUBLED: ScoreRules = ScoreRules::new(-120, 400, 4, 450);
const QUADRUPLED: ScoreRules = ScoreRules::new(-240, 800, 8, 850);
const TOP: ScoreRules = ScoreRules::new(-400, 1200, 12, 1250);

/// The game variant played in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HandType {
    /// Plain hand.
    Normal,
    /// Finished in a single suit.
    Colored,
    /// Finished with a joker.
    Jokery,
    /// Joker and single suit.
    JokeryColored,
    /// Zaat.
    Zaat,
    /// Finished with both jokers.
    DoubleJokery,
    /// Both jokers and single suit.
    DoubleJokeryColored,
}

impl HandType {
    /// Every hand type, in rule table order.
    pub const ALL: [Self; 7] = [
        Self::Normal,
        Self::Colored,
        Self::Jokery,
        Self::JokeryColored,
        Self::Zaat,
        Self::DoubleJokery,
        Self::DoubleJokeryColored,
    ];

    /// Returns the scoring rules for this hand type.
    ///
    /// # Example
    ///
    /// ```
    /// use handscore::HandType;
    ///
    /// let rules = HandType::Colored.rules();
    /// assert_eq!(rules.winner, -120);
    /// assert_eq!(rules.went_down_multiplier, 4);
    /// ```
    #[must_use]
    pub const fn rules(self) -> ScoreRules {
        match self {
            Self::Normal => NORMAL,
            Self::Colored | Self::Jokery => DOUBLED,
            Self::JokeryColored | Self::DoubleJokery => QUADRUPLED,
            Self::Zaat | Self::DoubleJokeryColored => TOP,
        }
    }

    /// Returns the wire key of this hand type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Colored => "colored",
            Self::Jokery => "jokery",
            Self::JokeryColored => "jokery_colored",
            Self::Zaat => "zaat",
            Self::DoubleJokery => "double_jokery",
            Self::DoubleJokeryColored => "double_jokery_colored",
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandType {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|hand| hand.as_str() == s)
            .ok_or_else(|| ScoreError::InvalidHandType {
                hand_type: s.to_string(),
            })
    }
}

/// Displays the supported hand type keys as a comma separated list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupportedHandTypes;

impl fmt::Display for SupportedHandTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, hand) in HandType::ALL.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(hand.as_str())?;
        }
        Ok(())
    }
}
