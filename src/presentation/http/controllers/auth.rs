// src/presentation/http/controllers/auth.rs
//! Form login, sign-up and logout. These handlers answer with HTML pages and
//! redirects rather than JSON, since they are driven by a browser form.
use crate::application::{
    commands::users::{LoginCommand, SignUpCommand},
    error::ApplicationError,
};
use crate::domain::errors::DomainError;
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::extractors::ApiForm;
use crate::presentation::http::middleware::auth_gate::{LOGIN_PATH, SIGNUP_PATH};
use crate::presentation::http::session::AuthSession;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

/// Where a successful login lands.
pub const LOGIN_SUCCESS_PATH: &str = "/api/articles";

#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_form(title: &str, action: &str, error: Option<&str>, footer: &str) -> Html<String> {
    let error = error
        .map(|msg| format!(r#"<p class="error">{}</p>"#, escape_html(msg)))
        .unwrap_or_default();
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="/css/style.css">
<script src="/js/app.js" defer></script>
</head>
<body>
<h1>{title}</h1>
{error}
<form method="post" action="{action}">
<label>Username <input type="text" name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">{title}</button>
</form>
{footer}
</body>
</html>"#
    ))
}

fn login_page(error: Option<&str>) -> Html<String> {
    render_form(
        "Login",
        LOGIN_PATH,
        error,
        &format!(r#"<p><a href="{SIGNUP_PATH}">Create an account</a></p>"#),
    )
}

fn signup_page(error: Option<&str>) -> Html<String> {
    render_form(
        "Sign up",
        SIGNUP_PATH,
        error,
        &format!(r#"<p><a href="{LOGIN_PATH}">Back to login</a></p>"#),
    )
}

pub async fn login_form() -> Html<String> {
    login_page(None)
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    session: Session,
    ApiForm(form): ApiForm<CredentialsForm>,
) -> HttpResult<Response> {
    let command = LoginCommand {
        username: form.username,
        password: form.password,
    };

    let user = match state.services.user_commands.login(command).await {
        Ok(user) => user,
        Err(ApplicationError::Unauthorized(_)) => {
            tracing::info!("login rejected");
            return Ok((
                StatusCode::UNAUTHORIZED,
                login_page(Some("Invalid username or password.")),
            )
                .into_response());
        }
        Err(err) => return Err(err.into()),
    };

    AuthSession::new(&session).log_in(user.id).await?;
    tracing::info!(user_id = user.id, "user logged in");
    Ok(Redirect::to(LOGIN_SUCCESS_PATH).into_response())
}

pub async fn signup_form() -> Html<String> {
    signup_page(None)
}

/// Create an account and send the browser to the login form. Invalid input
/// and taken usernames re-render the form with the matching status.
pub async fn signup(
    Extension(state): Extension<HttpState>,
    ApiForm(form): ApiForm<CredentialsForm>,
) -> HttpResult<Response> {
    let command = SignUpCommand {
        username: form.username,
        password: form.password,
    };

    match state.services.user_commands.sign_up(command).await {
        Ok(_) => Ok(Redirect::to(LOGIN_PATH).into_response()),
        Err(
            err @ (ApplicationError::Validation(_)
            | ApplicationError::Conflict(_)
            | ApplicationError::Domain(DomainError::Validation(_) | DomainError::Conflict(_))),
        ) => {
            let err = HttpError::from(err);
            Ok((err.status(), signup_page(Some(err.message()))).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn logout(session: Session) -> HttpResult<Redirect> {
    AuthSession::new(&session).log_out().await?;
    Ok(Redirect::to(LOGIN_PATH))
}
