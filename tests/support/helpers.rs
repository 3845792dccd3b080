// tests/support/helpers.rs
use super::mocks::{FixedClock, PlaintextPasswordHasher};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header};
use blog_api::application::services::ApplicationServices;
use blog_api::domain::member::{Member, MemberName, MemberWriteRepository, NewMember};
use blog_api::infrastructure::{
    database,
    sessions,
    repositories::{SqliteArticleRepository, SqliteMemberRepository, SqliteUserRepository},
};
use blog_api::presentation::http::{
    routes::build_router,
    state::{HttpSettings, HttpState},
};
use serde_json::Value;
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_USERNAME: &str = "alice";
pub const TEST_PASSWORD: &str = "secret123";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

/// Full router over a fresh in-memory database, with sessions stored in the
/// same database and a plaintext password hasher.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_settings(HttpSettings::default()).await
}

pub async fn spawn_app_with_static_dir(static_dir: &Path) -> TestApp {
    spawn_app_with_settings(HttpSettings {
        static_dir: static_dir.to_path_buf(),
        ..HttpSettings::default()
    })
    .await
}

async fn spawn_app_with_settings(settings: HttpSettings) -> TestApp {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    database::run_migrations(&pool).await.expect("migrations");

    let session_store = sessions::init_session_store(pool.clone())
        .await
        .expect("session table");

    let article_repo = Arc::new(SqliteArticleRepository::new(pool.clone()));
    let services = Arc::new(ApplicationServices::new(
        article_repo.clone(),
        article_repo,
        Arc::new(SqliteMemberRepository::new(pool.clone())),
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(PlaintextPasswordHasher),
        Arc::new(FixedClock),
    ));

    let router = build_router(HttpState { services }, session_store, &settings);
    TestApp { router, pool }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn seed_member(&self, name: &str) -> Member {
        SqliteMemberRepository::new(self.pool.clone())
            .insert(NewMember::new(MemberName::new(name).expect("valid name")))
            .await
            .expect("insert member")
    }

    /// Register the default test account and return its session cookie.
    pub async fn log_in(&self) -> String {
        let signup = self
            .send(form_request("/signup", TEST_USERNAME, TEST_PASSWORD, None))
            .await;
        assert_eq!(signup.status(), StatusCode::SEE_OTHER);

        let login = self
            .send(form_request("/login", TEST_USERNAME, TEST_PASSWORD, None))
            .await;
        assert_eq!(login.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&login), Some("/api/articles"));
        session_cookie(&login).expect("login sets a session cookie")
    }
}

pub fn form_request(
    uri: &str,
    username: &str,
    password: &str,
    cookie: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(format!("username={username}&password={password}")))
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    json_request("GET", uri, cookie, None)
}

/// The `name=value` pair of the first `Set-Cookie` header.
pub fn session_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub fn location(resp: &Response<Body>) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let text = body_string(resp).await;
    serde_json::from_str(&text).unwrap_or_else(|err| panic!("invalid json ({err}): {text}"))
}

/// Assert that a response is an `ErrorResponse` JSON body with the expected
/// status and reason phrase.
pub async fn assert_error_response(resp: Response<Body>, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message: {json}"
    );
}
