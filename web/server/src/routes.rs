//! Request handlers.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use handscore::{HandType, PlayerOutcome, RoundResult, ScoreError, Scorer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const MISSING_FIELDS: &str = "missing handType or players in request body";

/// Shared, immutable request state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    scorer: Scorer,
}

impl AppState {
    pub const fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }
}

/// Body of `POST /api/calculate-scores`.
///
/// Both fields stay untyped until the handler validates them, so malformed
/// values are reported through the scorer's errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(rename = "handType", default)]
    pub hand_type: Option<Value>,
    #[serde(default)]
    pub players: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    kind: &'static str,
}

/// A client-facing failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    fn missing_fields() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: "missing_fields",
            message: MISSING_FIELDS.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // An untyped body carries no fields, same as an empty object.
        if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
            return Self::missing_fields();
        }
        Self {
            status: rejection.status(),
            kind: "invalid_body",
            message: rejection.body_text(),
        }
    }
}

impl From<ScoreError> for ApiError {
    fn from(err: ScoreError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: &self.message,
            kind: self.kind,
        };
        (self.status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/calculate-scores", post(calculate_scores))
        .with_state(state)
}

/// GET /
pub async fn index() -> &'static str {
    "Hand Game Score Calculator Backend is running!"
}

/// POST /api/calculate-scores
///
/// Scores one round. Every validation failure becomes a 400 carrying the
/// error message. Unreadable bodies keep the same `{error, kind}` shape.
pub async fn calculate_scores(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<RoundResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("rejected unreadable body: {rejection}");
        ApiError::from(rejection)
    })?;

    let (Some(hand_type), Some(players)) = (
        request.hand_type.filter(is_truthy),
        request.players.filter(is_truthy),
    ) else {
        tracing::warn!("rejected request without handType or players");
        return Err(ApiError::missing_fields());
    };

    let hand_type = hand_type_text(&hand_type);
    tracing::info!(
        hand_type = %hand_type,
        players = players.as_array().map_or(0, Vec::len),
        "received score request"
    );

    score(&state.scorer, &hand_type, players).map(Json).map_err(|err| {
        tracing::warn!(kind = err.kind(), "calculation error: {err}");
        ApiError::from(err)
    })
}

fn score(scorer: &Scorer, hand_type: &str, players: Value) -> Result<RoundResult, ScoreError> {
    let hand_type: HandType = hand_type.parse()?;
    let players = decode_players(players)?;
    scorer.score(hand_type, &players)
}

fn decode_players(players: Value) -> Result<Vec<PlayerOutcome>, ScoreError> {
    let Value::Array(items) = players else {
        return Err(ScoreError::InvalidPlayers);
    };

    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

fn hand_type_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Mirrors how loosely typed clients treat missing values: `null`, `false`,
/// `0` and `""` all count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
