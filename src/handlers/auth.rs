use crate::AppState;
use crate::error::AppError;
use crate::middleware::auth::{login_session, logout_session};
use crate::templates::LoginTemplate;
use crate::utils::flash::take_flash;
use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn login_form(jar: SignedCookieJar) -> Result<Response, AppError> {
    let (jar, flash) = take_flash(jar);
    let page = LoginTemplate { flash };
    Ok((jar, Html(page.render()?)).into_response())
}

/// Credential check: exact string comparison against the configured admin
/// username and password. On success the session cookie is set and the
/// admin lands on the upload form; on failure the login form re-renders
/// with a notice and nothing changes.
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if form.username == state.config.admin_username
        && form.password == state.config.admin_password
    {
        tracing::info!("Admin logged in");
        let jar = login_session(jar);
        return Ok((jar, Redirect::to("/upload")).into_response());
    }

    tracing::warn!("Rejected login attempt for username '{}'", form.username);
    let page = LoginTemplate {
        flash: Some("Invalid credentials.".to_string()),
    };
    Ok(Html(page.render()?).into_response())
}

pub async fn logout(jar: SignedCookieJar) -> impl IntoResponse {
    (logout_session(jar), Redirect::to("/"))
}
