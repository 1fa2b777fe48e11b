//! Round scoring for the Hand card game with optional `no_std` support.
//!
//! The crate provides a [`Scorer`] that turns a [`HandType`] and one
//! [`PlayerOutcome`] per player into a [`RoundResult`] of score deltas,
//! enforcing the round invariants (one winner, known statuses, non-negative
//! card sums).
//!
//! # Example
//!
//! ```
//! use handscore::{PlayerOutcome, compute_round_scores};
//!
//! let players = [
//!     PlayerOutcome::winner("Player A"),
//!     PlayerOutcome::did_not_go_down("Player B"),
//!     PlayerOutcome::went_down("Player C", 50.0),
//!     PlayerOutcome::made_mistake("Player D"),
//! ];
//! let scores = compute_round_scores("normal", &players).unwrap();
//! assert_eq!(scores.get("Player C"), Some(100.0));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod error;
pub mod hand_type;
pub mod options;
pub mod player;
pub mod result;
pub mod scorer;
#[cfg(feature = "serde")]
mod serde_impls;

// Re-export main types
pub use error::ScoreError;
pub use hand_type::{HandType, ScoreRules, SupportedHandTypes};
pub use options::{DuplicateNames, ScoringOptions};
pub use player::{PlayerOutcome, PlayerStatus, SupportedStatuses, UnknownStatus};
pub use result::RoundResult;
pub use scorer::{Scorer, compute_round_scores};
