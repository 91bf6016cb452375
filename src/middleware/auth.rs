//! Session guard for the admin-only routes.
//!
//! The session is a single signed, HTTP-only cookie marking the browser as
//! logged in. There is no user identity behind it: this is single-tenant
//! admin access with one shared credential pair.

use crate::utils::flash::set_flash;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

const SESSION_COOKIE: &str = "session";

pub fn is_logged_in(jar: &SignedCookieJar) -> bool {
    jar.get(SESSION_COOKIE)
        .is_some_and(|c| c.value() == "logged_in")
}

/// Marks the session as authenticated.
pub fn login_session(jar: SignedCookieJar) -> SignedCookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, "logged_in"))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

/// Clears the authenticated flag.
pub fn logout_session(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/").build())
}

/// Gate for every state-mutating route (upload, delete, edit): without a
/// valid session cookie the request is redirected to the login form and no
/// handler runs. Gallery routes stay public and never pass through here.
pub async fn require_login(jar: SignedCookieJar, request: Request, next: Next) -> Response {
    if is_logged_in(&jar) {
        return next.run(request).await;
    }

    tracing::debug!(
        "Unauthenticated request to {} redirected to login",
        request.uri().path()
    );
    let jar = set_flash(jar, "Please log in first.");
    (jar, Redirect::to("/login")).into_response()
}
