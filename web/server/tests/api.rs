//! Handler tests.

use axum::Json;
use axum::body::Body;
use axum::extract::{FromRequest, State};
use axum::http::{Request, StatusCode, header};
use axum::response::IntoResponse;
use clap::Parser;
use handscore::{DuplicateNames, ScoringOptions, Scorer};
use handscore_server::config::Cli;
use handscore_server::routes::{calculate_scores, index};
use handscore_server::{ApiError, AppState, ScoreRequest};
use serde_json::{Value, json};

fn request(body: Value) -> Json<ScoreRequest> {
    Json(serde_json::from_value(body).unwrap())
}

async fn post(state: AppState, body: Value) -> Result<Value, ApiError> {
    let Json(result) = calculate_scores(State(state), Ok(request(body))).await?;
    Ok(serde_json::to_value(&result).unwrap())
}

/// Runs a raw body through the JSON extractor and then the handler.
async fn post_raw(content_type: Option<&str>, body: &'static str) -> Result<Value, ApiError> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/calculate-scores");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();
    let payload = Json::<ScoreRequest>::from_request(request, &()).await;

    let Json(result) = calculate_scores(State(AppState::default()), payload).await?;
    Ok(serde_json::to_value(&result).unwrap())
}

#[tokio::test]
async fn index_reports_liveness() {
    assert_eq!(index().await, "Hand Game Score Calculator Backend is running!");
}

#[tokio::test]
async fn scores_a_normal_round() {
    let body = json!({
        "handType": "normal",
        "players": [
            { "name": "Player A", "status": "winner" },
            { "name": "Player B", "status": "did_not_go_down" },
            { "name": "Player C", "status": "went_down", "cardValueSum": 50 },
            { "name": "Player D", "status": "made_mistake" },
        ],
    });

    assert_eq!(
        post(AppState::default(), body).await.unwrap(),
        json!({ "Player A": -60, "Player B": 200, "Player C": 100, "Player D": 250 })
    );
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    for body in [
        json!({ "players": [] }),
        json!({ "handType": "normal" }),
        json!({ "handType": "", "players": [] }),
        json!({ "handType": "normal", "players": null }),
    ] {
        let err = post(AppState::default(), body).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.kind, "missing_fields");
        assert_eq!(err.message, "missing handType or players in request body");
    }
}

#[tokio::test]
async fn scorer_failures_become_bad_requests() {
    let cases = [
        (
            json!({ "handType": "invalid_hand", "players": [{ "name": "Test", "status": "winner" }] }),
            "invalid_hand_type",
        ),
        (
            json!({ "handType": 7, "players": "nope" }),
            "invalid_hand_type",
        ),
        (json!({ "handType": "normal", "players": "nope" }), "invalid_players"),
        (json!({ "handType": "normal", "players": [] }), "invalid_players"),
        (
            json!({ "handType": "normal", "players": [{ "status": "winner" }] }),
            "invalid_player_name",
        ),
        (
            json!({ "handType": "normal", "players": [
                { "name": "Player E", "status": "winner" },
                { "name": "Player F", "status": "went_down" },
            ] }),
            "invalid_card_value_sum",
        ),
        (
            json!({ "handType": "normal", "players": [
                { "name": "Player K", "status": "winner" },
                { "name": "Player L", "status": "winner" },
            ] }),
            "invalid_winner_count",
        ),
        (
            json!({ "handType": "normal", "players": [
                { "name": "A", "status": "winner" },
                { "name": "B", "status": "lost" },
            ] }),
            "invalid_status",
        ),
    ];

    for (body, kind) in cases {
        let err = post(AppState::default(), body).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.kind, kind, "{}", err.message);
    }
}

#[tokio::test]
async fn error_responses_carry_the_message() {
    let err = post(
        AppState::default(),
        json!({ "handType": "normal", "players": [{ "name": "A", "status": "went_down" }] }),
    )
    .await
    .unwrap_err();
    assert!(err.message.contains("player A"));

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_policy_comes_from_state() {
    let body = json!({ "handType": "colored", "players": [
        { "name": "A", "status": "winner" },
        { "name": "B", "status": "went_down", "cardValueSum": 10 },
        { "name": "B", "status": "made_mistake" },
    ] });

    assert_eq!(
        post(AppState::default(), body.clone()).await.unwrap(),
        json!({ "A": -120, "B": 450 })
    );

    let rejecting = AppState::new(Scorer::new(
        ScoringOptions::default().with_duplicate_names(DuplicateNames::Reject),
    ));
    let err = post(rejecting, body).await.unwrap_err();
    assert_eq!(err.kind, "duplicate_player_name");
}

#[tokio::test]
async fn falsy_fields_count_as_missing() {
    for falsy in [json!(false), json!(0), json!(0.0), json!("")] {
        let err = post(
            AppState::default(),
            json!({ "handType": falsy.clone(), "players": [{ "name": "A", "status": "winner" }] }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, "missing_fields", "{falsy}");

        let err = post(AppState::default(), json!({ "handType": "normal", "players": falsy }))
            .await
            .unwrap_err();
        assert_eq!(err.kind, "missing_fields");
    }
}

#[tokio::test]
async fn non_string_hand_type_is_reported_as_text() {
    let err = post(
        AppState::default(),
        json!({ "handType": 5, "players": [{ "name": "A", "status": "winner" }] }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind, "invalid_hand_type");
    assert!(err.message.starts_with("invalid hand type: 5."));
}

#[tokio::test]
async fn players_object_is_not_a_list() {
    let err = post(
        AppState::default(),
        json!({ "handType": "normal", "players": { "name": "A", "status": "winner" } }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.kind, "invalid_players");
}

#[tokio::test]
async fn oversized_card_value_sum_is_rejected() {
    let err = post(
        AppState::default(),
        json!({ "handType": "normal", "players": [
            { "name": "A", "status": "winner" },
            { "name": "B", "status": "went_down", "cardValueSum": 1e308 },
        ] }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.kind, "invalid_card_value_sum");
}

#[tokio::test]
async fn body_without_json_content_type_is_missing_fields() {
    let body = r#"{"handType":"normal","players":[{"name":"A","status":"winner"}]}"#;

    let err = post_raw(None, body).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.kind, "missing_fields");
    assert_eq!(err.message, "missing handType or players in request body");

    let err = post_raw(Some("text/plain"), body).await.unwrap_err();
    assert_eq!(err.kind, "missing_fields");

    assert_eq!(
        post_raw(Some("application/json"), body).await.unwrap(),
        json!({ "A": -60 })
    );
}

#[tokio::test]
async fn malformed_json_keeps_error_shape() {
    let err = post_raw(Some("application/json"), "{\"handType\": ")
        .await
        .unwrap_err();
    assert_eq!(err.kind, "invalid_body");
    assert!(err.status.is_client_error());

    let response = err.into_response();
    assert!(response.status().is_client_error());
}

#[test]
fn cli_flags_override_defaults() {
    let cli = Cli::try_parse_from([
        "handscore-server",
        "--host",
        "127.0.0.1",
        "--port",
        "8080",
        "--reject-duplicate-names",
        "--log-level",
        "debug",
    ])
    .unwrap();

    assert_eq!(cli.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cli.scoring_options().duplicate_names, DuplicateNames::Reject);
    assert_eq!(cli.log_level, tracing::Level::DEBUG);
}
