//! Round scoring.

use alloc::string::ToString;

use crate::error::ScoreError;
use crate::hand_type::{HandType, ScoreRules};
use crate::options::{DuplicateNames, ScoringOptions};
use crate::player::{PlayerOutcome, PlayerStatus};
use crate::result::RoundResult;

/// Computes per-player score deltas for a round.
///
/// A scorer holds no mutable state. The same instance can score any number of
/// rounds, from any number of threads.
///
/// # Example
///
/// ```
/// use handscore::{HandType, PlayerOutcome, Scorer};
///
/// let scorer = Scorer::default();
/// let players = [
///     PlayerOutcome::winner("A"),
///     PlayerOutcome::went_down("B", 35.0),
/// ];
/// let result = scorer.score(HandType::Normal, &players).unwrap();
/// assert_eq!(result.get("A"), Some(-60.0));
/// assert_eq!(result.get("B"), Some(70.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scorer {
    options: ScoringOptions,
}

impl Scorer {
    /// Creates a scorer with the given options.
    #[must_use]
    pub const fn new(options: ScoringOptions) -> Self {
        Self { options }
    }

    /// Returns the scorer options.
    #[must_use]
    pub const fn options(&self) -> ScoringOptions {
        self.options
    }

    /// Scores a round given the hand type's wire key.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidHandType`] if `hand_type` is not a
    /// supported key, otherwise any error of [`Scorer::score`].
    pub fn score_round(
        &self,
        hand_type: &str,
        players: &[PlayerOutcome],
    ) -> Result<RoundResult, ScoreError> {
        let hand_type: HandType = hand_type.parse()?;
        self.score(hand_type, players)
    }

    /// Scores a round.
    ///
    /// Players are validated in input order and the first invalid record
    /// fails the whole round. The winner count is checked last.
    ///
    /// # Errors
    ///
    /// Returns an error if `players` is empty, a player has no name, a status
    /// is not recognized, a player who went down has no valid card value sum,
    /// a name repeats while duplicates are rejected, or the round does not
    /// have exactly one winner.
    pub fn score(
        &self,
        hand_type: HandType,
        players: &[PlayerOutcome],
    ) -> Result<RoundResult, ScoreError> {
        if players.is_empty() {
            return Err(ScoreError::InvalidPlayers);
        }

        let rules = hand_type.rules();
        let mut result = RoundResult::with_capacity(players.len());
        let mut winners = 0;

        for (index, player) in players.iter().enumerate() {
            let name = player
                .valid_name()
                .ok_or(ScoreError::InvalidPlayerName { index })?;

            let status = player
                .resolved_status()
                .map_err(|_| ScoreError::InvalidStatus {
                    player: name.to_string(),
                    status: player.status.clone().unwrap_or_default(),
                })?;

            if status == PlayerStatus::Winner {
                winners += 1;
            }

            let score = player_score(&rules, status, player, name)?;

            if self.options.duplicate_names == DuplicateNames::Reject && result.contains(name) {
                return Err(ScoreError::DuplicatePlayerName {
                    player: name.to_string(),
                });
            }
            result.insert(name, score);
        }

        if winners != 1 {
            return Err(ScoreError::InvalidWinnerCount { count: winners });
        }

        Ok(result)
    }
}

fn player_score(
    rules: &ScoreRules,
    status: PlayerStatus,
    player: &PlayerOutcome,
    name: &str,
) -> Result<f64, ScoreError> {
    let score = match status {
        PlayerStatus::Winner => rules.winner as f64,
        PlayerStatus::DidNotGoDown => rules.did_not_go_down as f64,
        PlayerStatus::WentDown => player
            .valid_card_value_sum()
            .map(|sum| sum * rules.went_down_multiplier as f64)
            .filter(|score| score.is_finite())
            .ok_or_else(|| ScoreError::InvalidCardValueSum {
                player: name.to_string(),
            })?,
        PlayerStatus::MadeMistake => rules.made_mistake as f64,
    };
    Ok(score)
}

/// Scores a round with default options.
///
/// # Errors
///
/// See [`Scorer::score_round`].
///
/// # Example
///
/// ```
/// use handscore::{PlayerOutcome, ScoreError, compute_round_scores};
///
/// let players = [PlayerOutcome::winner("E"), PlayerOutcome::winner("F")];
/// assert_eq!(
///     compute_round_scores("normal", &players),
///     Err(ScoreError::InvalidWinnerCount { count: 2 })
/// );
/// ```
pub fn compute_round_scores(
    hand_type: &str,
    players: &[PlayerOutcome],
) -> Result<RoundResult, ScoreError> {
    Scorer::default().score_round(hand_type, players)
}
