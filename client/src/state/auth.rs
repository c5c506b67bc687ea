//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds `{ user, is_authenticated }` plus the only channel allowed to mutate
//! it. `App` builds one [`AuthContext`] and hands it down the view chain as a
//! prop; framework-free callers (and tests) drive the same reducer through
//! [`AuthStore`], which adds an explicit subscribe/notify contract.
//!
//! DESIGN
//! ======
//! Actions are a closed enum, so typed dispatch cannot name an unknown kind.
//! Actions that arrive as JSON go through [`AuthAction::from_json`], which
//! rejects unknown kinds before any state is touched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::net::types::User;
use crate::util::credentials::{CredentialStorage, reconcile, request_cookie_token};

/// Where sign-out sends the browser so the server can drop the JWT cookie.
pub const SIGN_OUT_PATH: &str = "/auth/signout";

/// In-memory record of who is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

/// State transitions accepted by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum AuthAction {
    /// Replace `user`; never touches `is_authenticated`.
    SetUser(Option<User>),
    /// Set `is_authenticated`; never touches `user`.
    SetIsAuthenticated(bool),
}

const KNOWN_KINDS: [&str; 2] = ["set_user", "set_is_authenticated"];

impl AuthAction {
    /// Wire name of the action, as used in the JSON `type` field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetUser(_) => "set_user",
            Self::SetIsAuthenticated(_) => "set_is_authenticated",
        }
    }

    /// Parse an untyped `{ "type": ..., "payload": ... }` action.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingKind`] without a string `type`,
    /// [`AuthError::UnknownAction`] for any kind outside the enum, and
    /// [`AuthError::InvalidPayload`] when a known kind carries the wrong payload.
    pub fn from_json(raw: &serde_json::Value) -> Result<Self, AuthError> {
        let kind = raw.get("type").and_then(serde_json::Value::as_str).ok_or(AuthError::MissingKind)?;
        if !KNOWN_KINDS.contains(&kind) {
            return Err(AuthError::UnknownAction(kind.to_owned()));
        }
        serde_json::from_value(raw.clone())
            .map_err(|e| AuthError::InvalidPayload { kind: kind.to_owned(), message: e.to_string() })
    }
}

/// Faults raised by untyped dispatch. These are programming errors, not
/// runtime conditions to recover from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("unhandled action type: {0}")]
    UnknownAction(String),
    #[error("action is missing a string `type` field")]
    MissingKind,
    #[error("invalid payload for `{kind}`: {message}")]
    InvalidPayload { kind: String, message: String },
}

/// Apply one action to a state snapshot.
#[must_use]
pub fn reduce(state: &AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::SetUser(user) => AuthState { user, ..state.clone() },
        AuthAction::SetIsAuthenticated(is_authenticated) => AuthState { is_authenticated, ..state.clone() },
    }
}

/// The action to dispatch after mount, if persistent storage holds a token.
///
/// Unavailable storage reads as `None`, the same as "no token".
pub fn check_stored_credential(storage: &impl CredentialStorage) -> Option<AuthAction> {
    storage.read_token().map(|_| AuthAction::SetIsAuthenticated(true))
}

/// Actions that return the state to its initial shape.
#[must_use]
pub fn sign_out_actions() -> [AuthAction; 2] {
    [AuthAction::SetUser(None), AuthAction::SetIsAuthenticated(false)]
}

// =============================================================================
// FRAMEWORK-FREE STORE
// =============================================================================

/// Handle returned by [`AuthStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&AuthState)>;

/// Single-threaded auth store with explicit subscribe/notify.
///
/// Listeners run synchronously, in subscription order, after every applied
/// action.
pub struct AuthStore {
    state: AuthState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: AuthState::default(), listeners: Vec::new(), next_id: 0 }
    }

    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn dispatch(&mut self, action: AuthAction) {
        self.state = reduce(&self.state, action);
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    /// Dispatch an untyped action. On error nothing changes and nobody is
    /// notified.
    ///
    /// # Errors
    ///
    /// See [`AuthAction::from_json`].
    pub fn dispatch_raw(&mut self, raw: &serde_json::Value) -> Result<(), AuthError> {
        let action = AuthAction::from_json(raw)?;
        self.dispatch(action);
        Ok(())
    }

    pub fn subscribe(&mut self, listener: impl Fn(&AuthState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Run the post-mount credential check. Returns whether a token was found.
    pub fn initialize(&mut self, storage: &impl CredentialStorage) -> bool {
        match check_stored_credential(storage) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Clear the stored token and reset state.
    pub fn sign_out(&mut self, storage: &impl CredentialStorage) {
        storage.clear_token();
        for action in sign_out_actions() {
            self.dispatch(action);
        }
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// LEPTOS BINDING
// =============================================================================

/// Reactive state-and-dispatch pair passed explicitly to views.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: ReadSignal<AuthState>,
    dispatch: Callback<AuthAction>,
}

impl AuthContext {
    /// Create the provider in its initial, unauthenticated state.
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        let dispatch = Callback::new(move |action: AuthAction| {
            log::debug!("auth dispatch: {}", action.kind());
            set_state.update(|s| *s = reduce(s, action));
        });
        Self { state, dispatch }
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state
    }

    /// Tracked read of `is_authenticated`.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated)
    }

    pub fn dispatch(&self, action: AuthAction) {
        self.dispatch.run(action);
    }

    /// Schedule the one-shot storage check. Effects only run in the browser,
    /// after hydration, so the server render always sees the initial state.
    pub fn authenticate_on_mount<S>(self, storage: S)
    where
        S: CredentialStorage + 'static,
    {
        Effect::new(move |_| {
            self.authenticate(&storage);
        });
    }

    /// The post-mount credential check itself. Returns whether a stored token
    /// was found and `SetIsAuthenticated(true)` dispatched.
    pub fn authenticate(self, storage: &impl CredentialStorage) -> bool {
        let cookie = request_cookie_token();
        let agreement = reconcile(cookie.as_deref(), storage.read_token().as_deref());
        if agreement.is_divergent() {
            log::warn!("credential channels disagree: {agreement:?}");
        }
        match check_stored_credential(storage) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Clear the stored token, reset state, and hand off to the server to
    /// drop the cookie.
    pub fn sign_out(self, storage: &impl CredentialStorage) {
        storage.clear_token();
        for action in sign_out_actions() {
            self.dispatch(action);
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(SIGN_OUT_PATH);
            }
        }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}
