// src/presentation/http/middleware/auth_gate.rs
use crate::application::queries::users::FindUserByIdQuery;
use crate::presentation::http::{error::HttpError, session::AuthSession, state::HttpState};
use axum::{
    Extension,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";

/// Paths reachable without a session, matched exactly.
const PUBLIC_PATHS: &[&str] = &[LOGIN_PATH, SIGNUP_PATH, "/health", "/api/member"];

/// Path prefixes reachable without a session.
const PUBLIC_PREFIXES: &[&str] = &["/api/member/", "/js/", "/css/"];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path) || PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Request gate: allow-listed paths pass straight through, everything else
/// needs a session bound to an existing user or gets redirected to the login
/// form.
pub async fn require_login(
    Extension(state): Extension<HttpState>,
    session: Session,
    req: Request,
    next: Next,
) -> Response {
    if is_public_path(req.uri().path()) {
        return next.run(req).await;
    }

    match session_user_exists(&state, &session).await {
        Ok(true) => next.run(req).await,
        Ok(false) => {
            tracing::debug!(path = req.uri().path(), "unauthenticated request redirected to login");
            Redirect::to(LOGIN_PATH).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// A session whose user has since been deleted is flushed and treated as
/// logged out.
async fn session_user_exists(state: &HttpState, session: &Session) -> Result<bool, HttpError> {
    let auth = AuthSession::new(session);
    let Some(user_id) = auth.user_id().await? else {
        return Ok(false);
    };

    let user = state
        .services
        .user_queries
        .find_user_by_id(FindUserByIdQuery { id: user_id })
        .await?;
    if user.is_some() {
        return Ok(true);
    }

    tracing::info!(user_id, "session refers to a missing user; logging out");
    auth.log_out().await?;
    Ok(false)
}
