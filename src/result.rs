//! Round result types.

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Score deltas for every player in a round, keyed by name.
///
/// Entries keep the order in which names were first seen. Inserting a name
/// that is already present replaces its score in place.
#[derive(Debug, Clone, Default)]
pub struct RoundResult {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl RoundResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty result with room for `capacity` players.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Sets the score for `name`, returning the previous score if there was one.
    pub fn insert(&mut self, name: &str, score: f64) -> Option<f64> {
        if let Some(&position) = self.index.get(name) {
            let previous = core::mem::replace(&mut self.entries[position].1, score);
            return Some(previous);
        }

        self.index.insert(String::from(name), self.entries.len());
        self.entries.push((String::from(name), score));
        None
    }

    /// Returns the score for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&position| self.entries[position].1)
    }

    /// Returns whether `name` has a score.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of distinct players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the result has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, score)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(name, score)| (name.as_str(), *score))
    }

    /// Returns the sum of all scores.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, score)| score).sum()
    }
}

impl PartialEq for RoundResult {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Returns the score as an `i64` if it is a whole number that fits.
#[cfg(feature = "std")]
#[must_use]
pub fn integral_score(score: f64) -> Option<i64> {
    let whole = score.trunc();
    (whole == score && whole.abs() < 9.0e15).then_some(whole as i64)
}

/// Returns the score as an `i64` if it is a whole number that fits.
#[cfg(all(not(feature = "std"), feature = "alloc"))]
#[must_use]
pub fn integral_score(score: f64) -> Option<i64> {
    let whole = libm::trunc(score);
    (whole == score && libm::fabs(whole) < 9.0e15).then_some(whole as i64)
}
