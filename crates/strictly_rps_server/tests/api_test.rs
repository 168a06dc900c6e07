//! Tests for the HTTP session API.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use strictly_rps_server::{PlayResponse, SessionManager, SessionSnapshot, router};
use tower::ServiceExt;

fn app() -> Router {
    router(SessionManager::new(5, Some(3)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn create(app: &Router, id: &str) -> SessionSnapshot {
    let (status, body) = send(app, "POST", "/sessions", Some(json!({ "session_id": id }))).await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_create_session_starts_empty() {
    let app = app();
    let snapshot = create(&app, "alpha").await;
    assert_eq!(snapshot.session_id, "alpha");
    assert_eq!(snapshot.total_games, 0);
    assert_eq!(snapshot.win_rate, 0.0);
    assert!(snapshot.last_round.is_none());
    assert!(snapshot.recent_history.is_empty());
}

#[tokio::test]
async fn test_duplicate_session_conflicts() {
    let app = app();
    create(&app, "alpha").await;
    let (status, body) = send(&app, "POST", "/sessions", Some(json!({ "session_id": "alpha" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_unaddressable_session_ids_rejected() {
    let app = app();
    for id in ["", "a/b"] {
        let (status, body) = send(&app, "POST", "/sessions", Some(json!({ "session_id": id }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {id:?}");
        let error: Value = serde_json::from_slice(&body).unwrap();
        assert!(error["error"].as_str().unwrap().contains("Invalid session id"));
    }

    let (_, body) = send(&app, "GET", "/sessions", None).await;
    let ids: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_unknown_session_not_found() {
    let app = app();
    let (status, _) = send(&app, "GET", "/sessions/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "POST", "/sessions/ghost/play", Some(json!({ "move": "rock" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "POST", "/sessions/ghost/reset", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_play_updates_scores() {
    let app = app();
    create(&app, "alpha").await;

    let mut last = None;
    for mv in ["rock", "paper", "scissors", "rock"] {
        let (status, body) =
            send(&app, "POST", "/sessions/alpha/play", Some(json!({ "move": mv }))).await;
        assert_eq!(status, StatusCode::OK);
        let response: PlayResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.message, response.round.message());
        last = Some(response);
    }

    let response = last.unwrap();
    let session = response.session;
    assert_eq!(session.total_games, 4);
    assert_eq!(
        session.player_score + session.computer_score + session.tie_count,
        4
    );
    assert_eq!(session.last_round.as_ref(), Some(&response.round));
    assert_eq!(session.recent_history.first(), Some(&response.round));
    let expected_rate = session.player_score as f64 / 4.0 * 100.0;
    assert_eq!(session.win_rate, expected_rate);
}

#[tokio::test]
async fn test_unknown_move_rejected() {
    let app = app();
    create(&app, "alpha").await;
    let (status, _) =
        send(&app, "POST", "/sessions/alpha/play", Some(json!({ "move": "lizard" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = send(&app, "GET", "/sessions/alpha", None).await;
    let snapshot: SessionSnapshot = serde_json::from_slice(&body).unwrap();
    assert_eq!(snapshot.total_games, 0);
}

#[tokio::test]
async fn test_reset_clears_session() {
    let app = app();
    create(&app, "alpha").await;
    send(&app, "POST", "/sessions/alpha/play", Some(json!({ "move": "paper" }))).await;

    let (status, body) = send(&app, "POST", "/sessions/alpha/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    let snapshot: SessionSnapshot = serde_json::from_slice(&body).unwrap();
    assert_eq!(snapshot.total_games, 0);
    assert_eq!(snapshot.player_score, 0);
    assert!(snapshot.last_round.is_none());
}

#[tokio::test]
async fn test_list_and_delete_sessions() {
    let app = app();
    create(&app, "beta").await;
    create(&app, "alpha").await;

    let (_, body) = send(&app, "GET", "/sessions", None).await;
    let ids: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(ids, vec!["alpha", "beta"]);

    let (status, _) = send(&app, "DELETE", "/sessions/alpha", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "DELETE", "/sessions/alpha", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/sessions", None).await;
    let ids: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(ids, vec!["beta"]);
}
