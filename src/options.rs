//! Scoring configuration options.

/// How repeated player names within a round are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DuplicateNames {
    /// The later record's score replaces the earlier one.
    ///
    /// A later record can replace the winner's score, leaving no player at
    /// the winner delta. Use [`DuplicateNames::Reject`] to fail such rounds.
    #[default]
    Overwrite,
    /// A repeated name fails the round.
    Reject,
}

/// Configuration options for a [`Scorer`](crate::Scorer).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use handscore::{DuplicateNames, ScoringOptions};
///
/// let options = ScoringOptions::default().with_duplicate_names(DuplicateNames::Reject);
/// assert_eq!(options.duplicate_names, DuplicateNames::Reject);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoringOptions {
    /// Policy for repeated player names.
    pub duplicate_names: DuplicateNames,
}

impl ScoringOptions {
    /// Sets the policy for repeated player names.
    ///
    /// # Example
    ///
    /// ```
    /// use handscore::{DuplicateNames, ScoringOptions};
    ///
    /// let options = ScoringOptions::default().with_duplicate_names(DuplicateNames::Overwrite);
    /// assert_eq!(options.duplicate_names, DuplicateNames::Overwrite);
    /// ```
    #[must_use]
    pub const fn with_duplicate_names(mut self, policy: DuplicateNames) -> Self {
        self.duplicate_names = policy;
        self
    }
}
