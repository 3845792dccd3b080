// tests/e2e_auth_gate.rs
use axum::http::StatusCode;
use serde_json::json;

mod support;

use support::{
    TEST_PASSWORD, TEST_USERNAME, body_json, body_string, form_request, get, location,
    session_cookie, spawn_app, spawn_app_with_static_dir,
};

#[tokio::test]
async fn protected_routes_redirect_to_login_without_a_session() {
    let app = spawn_app().await;

    for uri in ["/api/articles", "/api/articles/1", "/api-docs/openapi.json"] {
        let resp = app.send(get(uri, None)).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&resp), Some("/login"), "{uri}");
    }
}

#[tokio::test]
async fn login_grants_access_to_protected_routes() {
    let app = spawn_app().await;
    let cookie = app.log_in().await;

    let resp = app.send(get("/api/articles", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));

    let resp = app.send(get("/api-docs/openapi.json", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_json(resp).await["paths"]["/api/articles"].is_object());
}

#[tokio::test]
async fn login_and_signup_forms_are_public() {
    let app = spawn_app().await;

    for uri in ["/login", "/signup"] {
        let resp = app.send(get(uri, None)).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let page = body_string(resp).await;
        assert!(page.contains("<form"), "{uri}");
    }

    let resp = app.send(get("/health", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn wrong_password_re_renders_the_form_with_401() {
    let app = spawn_app().await;
    app.log_in().await;

    let resp = app
        .send(form_request("/login", TEST_USERNAME, "wrongpass1", None))
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&resp).is_none());
    assert!(body_string(resp).await.contains("Invalid username or password."));

    let resp = app
        .send(form_request("/login", "nobody", TEST_PASSWORD, None))
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn signup_rejects_taken_usernames_and_weak_passwords() {
    let app = spawn_app().await;
    app.log_in().await;

    let resp = app
        .send(form_request("/signup", TEST_USERNAME, "another123", None))
        .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert!(body_string(resp).await.contains("username already exists"));

    let resp = app
        .send(form_request("/signup", "bob", "short", None))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .send(form_request("/signup", "bo", "longenough1", None))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let app = spawn_app().await;
    let cookie = app.log_in().await;

    let resp = app
        .send(support::json_request("POST", "/logout", Some(&cookie), None))
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login"));

    let resp = app.send(get("/api/articles", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login"));
}

#[tokio::test]
async fn static_assets_are_served_without_a_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css/site.css"), "body { margin: 0; }").unwrap();

    let app = spawn_app_with_static_dir(dir.path()).await;

    let resp = app.send(get("/css/site.css", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "body { margin: 0; }");

    let resp = app.send(get("/js/missing.js", None)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn session_of_a_deleted_user_no_longer_authenticates() {
    let app = spawn_app().await;
    let cookie = app.log_in().await;

    let resp = app.send(get("/api/articles", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    sqlx::query("DELETE FROM users WHERE username = ?")
        .bind(TEST_USERNAME)
        .execute(&app.pool)
        .await
        .unwrap();

    let resp = app.send(get("/api/articles", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/login"));

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tower_sessions")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
