//! One-shot flash notices carried in a signed cookie: set on redirect,
//! consumed by the next page render.

use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::Cookie;

const FLASH_COOKIE: &str = "flash";

/// Queues a notice for the next rendered page.
pub fn set_flash(jar: SignedCookieJar, message: &str) -> SignedCookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, message.to_string()))
            .path("/")
            .http_only(true)
            .build(),
    )
}

/// Takes the pending notice, if any, removing it from the jar.
pub fn take_flash(jar: SignedCookieJar) -> (SignedCookieJar, Option<String>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let message = cookie.value().to_string();
            let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/").build());
            (jar, Some(message))
        }
        None => (jar, None),
    }
}
