//! Auth routes: the server half of sign-out.
//!
//! The client clears local storage and resets its provider, then navigates
//! here so the JWT cookie is removed in the same step.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::util::credentials::COOKIE_NAME_JWT_TOKEN;
use time::Duration;

use crate::state::AppState;

/// Expired replacement for the JWT cookie.
pub(crate) fn removal_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME_JWT_TOKEN, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// `GET /auth/signout`: drop the JWT cookie, redirect to `/`.
pub async fn signout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let had_cookie = jar.get(COOKIE_NAME_JWT_TOKEN).is_some();
    tracing::info!(had_cookie, "sign-out");
    let jar = jar.add(removal_cookie(state.config.cookie_secure));
    (jar, Redirect::to("/"))
}
