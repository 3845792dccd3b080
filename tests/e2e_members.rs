// tests/e2e_members.rs
use axum::http::StatusCode;
use serde_json::json;

mod support;

use support::{assert_error_response, body_json, get, spawn_app};

#[tokio::test]
async fn member_api_is_public() {
    let app = spawn_app().await;
    app.seed_member("Alice").await;

    let resp = app.send(get("/api/member", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([{"id": 1, "name": "Alice"}]));
}

#[tokio::test]
async fn get_member_by_id() {
    let app = spawn_app().await;
    app.seed_member("Alice").await;
    let bob = app.seed_member("Bob").await;

    let resp = app
        .send(get(&format!("/api/member/{}", i64::from(bob.id)), None))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"id": 2, "name": "Bob"}));

    let resp = app.send(get("/api/member/99", None)).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn search_by_name_is_exact_and_case_sensitive() {
    let app = spawn_app().await;
    app.seed_member("Alice").await;
    app.seed_member("Bob").await;
    app.seed_member("Alice").await;

    let resp = app.send(get("/api/member/searchByName/Alice", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([{"id": 1, "name": "Alice"}, {"id": 3, "name": "Alice"}])
    );

    let resp = app.send(get("/api/member/searchByName/alice", None)).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn impossible_ids_and_names_are_simply_not_found() {
    let app = spawn_app().await;
    app.seed_member("Alice").await;

    let resp = app
        .send(get("/api/member/searchByName/abcdefghijklmnopqrstu", None))
        .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    for uri in ["/api/member/0", "/api/member/-3"] {
        let resp = app.send(get(uri, None)).await;
        assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    }
}

#[tokio::test]
async fn a_corrupt_stored_row_is_a_server_error() {
    let app = spawn_app().await;
    app.seed_member("Alice").await;
    sqlx::query("INSERT INTO member (id, name) VALUES (0, 'Ghost')")
        .execute(&app.pool)
        .await
        .unwrap();

    let resp = app.send(get("/api/member", None)).await;
    assert_error_response(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
    )
    .await;
}
