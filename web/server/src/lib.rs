//! HTTP front end for the Hand round scorer.

pub mod config;
pub mod logging;
pub mod routes;

pub use routes::{ApiError, AppState, ScoreRequest, router};
