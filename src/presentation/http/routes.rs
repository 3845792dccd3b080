// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, auth, members, system};
use crate::presentation::http::middleware::auth_gate::{self, LOGIN_PATH, SIGNUP_PATH};
use crate::presentation::http::state::{HttpSettings, HttpState};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Build the full application router. Requests pass trace and CORS first,
/// then the session layer, then the login gate, then the handler.
pub fn build_router<S>(state: HttpState, session_store: S, settings: &HttpSettings) -> Router
where
    S: SessionStore + Clone,
{
    let inactivity = time::Duration::seconds(
        i64::try_from(settings.session_ttl.as_secs()).unwrap_or(i64::MAX),
    );
    let sessions = SessionManagerLayer::new(session_store)
        .with_secure(settings.secure_cookies)
        .with_expiry(Expiry::OnInactivity(inactivity));

    Router::new()
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/api/member", get(members::list_members))
        .route("/api/member/{id}", get(members::get_member))
        .route(
            "/api/member/searchByName/{name}",
            get(members::search_members_by_name),
        )
        .route(LOGIN_PATH, get(auth::login_form).post(auth::login))
        .route(SIGNUP_PATH, get(auth::signup_form).post(auth::signup))
        .route("/logout", post(auth::logout))
        .route("/health", get(system::health))
        .route("/api-docs/openapi.json", get(system::openapi_json))
        .nest_service("/js", ServeDir::new(settings.static_dir.join("js")))
        .nest_service("/css", ServeDir::new(settings.static_dir.join("css")))
        .layer(middleware::from_fn(auth_gate::require_login))
        .layer(sessions)
        .layer(Extension(state))
        .layer(cors_layer(&settings.allowed_origins))
        .layer(TraceLayer::new_for_http())
}
