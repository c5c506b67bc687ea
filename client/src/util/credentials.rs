//! Credential channel access: the JWT cookie and the local-storage token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page decides its "Visit app" target from the cookie, while the
//! auth provider decides `is_authenticated` from local storage. Both channels
//! are read here so the rest of the crate never touches `web-sys` directly.
//!
//! TRADE-OFFS
//! ==========
//! The two channels are written by different parts of the frontend and can
//! drift apart. Readers keep their own channel, [`reconcile`] classifies any
//! divergence for logging, and sign-out clears both together.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::cell::RefCell;

use cookie::Cookie;

/// Cookie holding the backend-issued JWT.
///
/// Must stay readable from script (not `HttpOnly`): the hydrated landing page
/// re-reads it from `document.cookie`, and an unreadable cookie would flip the
/// "Visit app" link back to sign-in after hydration.
pub const COOKIE_NAME_JWT_TOKEN: &str = "jwt_token";

/// Local-storage key holding the same JWT on the client.
pub const LOCAL_STORAGE_AUTH_TOKEN: &str = "boards_auth_token";

/// Extract a non-empty cookie value for `name` from a raw `Cookie` header
/// (`"a=1; b=2"`). Also accepts the `document.cookie` format, which is the
/// same shape.
#[must_use]
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value_trimmed().to_owned())
        .filter(|value| !value.is_empty())
}

/// Read the JWT cookie for the current render.
///
/// Under SSR this inspects the incoming request headers; after hydration it
/// reads `document.cookie` so both passes compute the same value.
pub fn request_cookie_token() -> Option<String> {
    #[cfg(feature = "ssr")]
    {
        use leptos::prelude::use_context;

        let parts = use_context::<http::request::Parts>()?;
        let header = parts
            .headers
            .get_all(http::header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");
        cookie_value(&header, COOKIE_NAME_JWT_TOKEN)
    }
    #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
    {
        browser_cookie_header().and_then(|header| cookie_value(&header, COOKIE_NAME_JWT_TOKEN))
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
fn browser_cookie_header() -> Option<String> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()
}

/// Persistent token storage consulted by the auth provider.
pub trait CredentialStorage {
    /// Return the stored token, or `None` when absent or storage is unavailable.
    fn read_token(&self) -> Option<String>;

    /// Remove the stored token. Unavailable storage is a no-op.
    fn clear_token(&self);
}

/// `window.localStorage`, keyed by [`LOCAL_STORAGE_AUTH_TOKEN`].
///
/// Outside the browser every read is `None`, which the provider treats as
/// "not authenticated".
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl CredentialStorage for BrowserStorage {
    fn read_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage
                .get_item(LOCAL_STORAGE_AUTH_TOKEN)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(LOCAL_STORAGE_AUTH_TOKEN);
            }
        }
    }
}

/// In-process storage used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    token: RefCell<Option<String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl CredentialStorage for MemoryStorage {
    fn read_token(&self) -> Option<String> {
        self.token.borrow().clone().filter(|token| !token.is_empty())
    }

    fn clear_token(&self) {
        self.token.borrow_mut().take();
    }
}

/// How the cookie and local-storage channels relate at a given moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelAgreement {
    /// Both channels hold a token.
    Both,
    /// Neither channel holds a token.
    Neither,
    /// Only the cookie holds a token: the landing page links to the
    /// dashboard while the provider stays unauthenticated.
    CookieOnly,
    /// Only local storage holds a token: the provider authenticates while the
    /// landing page links to sign-in.
    StorageOnly,
}

impl ChannelAgreement {
    #[must_use]
    pub fn is_divergent(self) -> bool {
        matches!(self, Self::CookieOnly | Self::StorageOnly)
    }
}

/// Classify the two credential channels. Token values are not compared;
/// only presence matters.
#[must_use]
pub fn reconcile(cookie: Option<&str>, stored: Option<&str>) -> ChannelAgreement {
    let cookie = cookie.is_some_and(|t| !t.is_empty());
    let stored = stored.is_some_and(|t| !t.is_empty());
    match (cookie, stored) {
        (true, true) => ChannelAgreement::Both,
        (false, false) => ChannelAgreement::Neither,
        (true, false) => ChannelAgreement::CookieOnly,
        (false, true) => ChannelAgreement::StorageOnly,
    }
}
