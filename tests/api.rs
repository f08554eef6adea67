//! Integration tests for the REST API, driven through actix-web's test harness.

use actix_web::{http::StatusCode, test, App};
use player_scores::{api, ExistsResponse, PlayerScoreResponse};
use serde_json::{json, Value};

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(api::new_state())
                .configure(api::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ok"], true);
}

#[actix_web::test]
async fn upsert_then_get_score() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/players/score")
        .set_json(json!({ "nickname": "Alice", "score": 10 }))
        .to_request();
    let created: PlayerScoreResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.message.as_deref(), Some("Player created successfully"));

    let req = test::TestRequest::post()
        .uri("/api/players/score")
        .set_json(json!({ "nickname": "ALICE", "score": 20 }))
        .to_request();
    let updated: PlayerScoreResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.nickname, "Alice");
    assert_eq!(updated.message.as_deref(), Some("Score updated successfully"));

    let req = test::TestRequest::get()
        .uri("/api/players/alice/score")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "nickname": "Alice", "score": 20 }));
}

#[actix_web::test]
async fn unknown_player_is_404() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/players/ghost/score")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Player with nickname 'ghost' not found");

    let req = test::TestRequest::delete()
        .uri("/api/players/ghost/score")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_then_exists() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/players/score")
        .set_json(json!({ "nickname": "carol", "score": 5 }))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/players/CAROL/exists")
        .to_request();
    let exists: ExistsResponse = test::call_and_read_body_json(&app, req).await;
    assert!(exists.exists);

    let req = test::TestRequest::delete()
        .uri("/api/players/Carol/score")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Player 'Carol' deleted successfully");

    let req = test::TestRequest::get()
        .uri("/api/players/carol/exists")
        .to_request();
    let exists: ExistsResponse = test::call_and_read_body_json(&app, req).await;
    assert!(!exists.exists);
}

#[actix_web::test]
async fn invalid_requests_are_400() {
    let app = app!();

    for body in [
        json!({ "nickname": "ab", "score": 1 }),
        json!({ "nickname": "   ", "score": 1 }),
        json!({ "nickname": "player" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/players/score")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
    }

    let req = test::TestRequest::post()
        .uri("/api/players/score")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/players").to_request();
    let players: Vec<PlayerScoreResponse> = test::call_and_read_body_json(&app, req).await;
    assert!(players.is_empty());
}

#[actix_web::test]
async fn list_players_best_first() {
    let app = app!();
    for (nickname, score) in [("low", 1), ("high", 90), ("mid", 40)] {
        let req = test::TestRequest::post()
            .uri("/api/players/score")
            .set_json(json!({ "nickname": nickname, "score": score }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/players").to_request();
    let players: Vec<PlayerScoreResponse> = test::call_and_read_body_json(&app, req).await;
    let names: Vec<_> = players.iter().map(|p| p.nickname.as_str()).collect();
    assert_eq!(names, ["high", "mid", "low"]);
    assert!(players.iter().all(|p| p.message.is_none()));
}
