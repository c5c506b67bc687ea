use std::cell::RefCell;
use std::rc::Rc;

use leptos::reactive::owner::Owner;
use uuid::Uuid;

use super::*;
use crate::util::credentials::MemoryStorage;

fn make_user(name: &str) -> User {
    User {
        id: Uuid::nil(),
        name: name.to_owned(),
        email: None,
        is_guest: true,
        is_verified: false,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_authenticated() {
    let state = AuthState::default();
    assert!(!state.is_authenticated);
}

#[test]
fn store_starts_in_initial_state() {
    let store = AuthStore::new();
    assert_eq!(store.state(), &AuthState::default());
}

// =============================================================
// reduce
// =============================================================

#[test]
fn set_is_authenticated_leaves_user_unchanged() {
    let before = AuthState { user: Some(make_user("alice")), is_authenticated: false };
    let after = reduce(&before, AuthAction::SetIsAuthenticated(true));
    assert!(after.is_authenticated);
    assert_eq!(after.user, before.user);
}

#[test]
fn set_user_leaves_is_authenticated_unchanged() {
    for is_authenticated in [false, true] {
        let before = AuthState { user: None, is_authenticated };
        let after = reduce(&before, AuthAction::SetUser(Some(make_user("bob"))));
        assert_eq!(after.is_authenticated, is_authenticated);
        assert_eq!(after.user.as_ref().map(|u| u.name.as_str()), Some("bob"));
    }
}

#[test]
fn set_user_none_clears_user() {
    let before = AuthState { user: Some(make_user("alice")), is_authenticated: true };
    let after = reduce(&before, AuthAction::SetUser(None));
    assert!(after.user.is_none());
    assert!(after.is_authenticated);
}

#[test]
fn set_is_authenticated_false_returns_to_unauthenticated() {
    let before = AuthState { user: None, is_authenticated: true };
    assert!(!reduce(&before, AuthAction::SetIsAuthenticated(false)).is_authenticated);
}

// =============================================================
// Raw actions
// =============================================================

#[test]
fn from_json_parses_known_kinds() {
    let raw = serde_json::json!({ "type": "set_is_authenticated", "payload": true });
    assert_eq!(AuthAction::from_json(&raw), Ok(AuthAction::SetIsAuthenticated(true)));

    let raw = serde_json::json!({ "type": "set_user", "payload": null });
    assert_eq!(AuthAction::from_json(&raw), Ok(AuthAction::SetUser(None)));
}

#[test]
fn from_json_rejects_unknown_kind() {
    let raw = serde_json::json!({ "type": "set_usr", "payload": null });
    assert_eq!(AuthAction::from_json(&raw), Err(AuthError::UnknownAction("set_usr".to_owned())));
}

#[test]
fn from_json_rejects_missing_kind() {
    let raw = serde_json::json!({ "payload": true });
    assert_eq!(AuthAction::from_json(&raw), Err(AuthError::MissingKind));
}

#[test]
fn from_json_rejects_mistyped_payload() {
    let raw = serde_json::json!({ "type": "set_is_authenticated", "payload": "yes" });
    assert!(matches!(
        AuthAction::from_json(&raw),
        Err(AuthError::InvalidPayload { kind, .. }) if kind == "set_is_authenticated"
    ));
}

#[test]
fn unknown_action_error_names_the_kind() {
    let err = AuthError::UnknownAction("frobnicate".to_owned());
    assert_eq!(err.to_string(), "unhandled action type: frobnicate");
}

#[test]
fn action_kind_matches_serialized_type() {
    for action in [AuthAction::SetUser(None), AuthAction::SetIsAuthenticated(true)] {
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], action.kind());
    }
}

#[test]
fn dispatch_raw_unknown_kind_leaves_state_and_listeners_untouched() {
    let mut store = AuthStore::new();
    store.dispatch(AuthAction::SetUser(Some(make_user("alice"))));
    let before = store.state().clone();

    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    store.subscribe(move |_| *counter.borrow_mut() += 1);

    let raw = serde_json::json!({ "type": "logout", "payload": true });
    assert!(store.dispatch_raw(&raw).is_err());
    assert_eq!(store.state(), &before);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn dispatch_raw_applies_known_kind() {
    let mut store = AuthStore::new();
    let raw = serde_json::json!({ "type": "set_is_authenticated", "payload": true });
    store.dispatch_raw(&raw).unwrap();
    assert!(store.state().is_authenticated);
}

// =============================================================
// Subscribe / notify
// =============================================================

#[test]
fn subscribers_see_new_state_in_order() {
    let mut store = AuthStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&seen);
    store.subscribe(move |s| first.borrow_mut().push(("first", s.is_authenticated)));
    let second = Rc::clone(&seen);
    store.subscribe(move |s| second.borrow_mut().push(("second", s.is_authenticated)));

    store.dispatch(AuthAction::SetIsAuthenticated(true));
    assert_eq!(*seen.borrow(), vec![("first", true), ("second", true)]);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let mut store = AuthStore::new();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

    store.dispatch(AuthAction::SetIsAuthenticated(true));
    assert!(store.unsubscribe(id));
    store.dispatch(AuthAction::SetIsAuthenticated(false));

    assert_eq!(*calls.borrow(), 1);
    assert!(!store.unsubscribe(id));
}

// =============================================================
// Initialization and sign-out
// =============================================================

#[test]
fn stored_credential_authenticates_after_initialize() {
    let mut store = AuthStore::new();
    let storage = MemoryStorage::with_token("jwt");
    assert!(!store.state().is_authenticated);
    assert!(store.initialize(&storage));
    assert!(store.state().is_authenticated);
    assert!(store.state().user.is_none());
}

#[test]
fn missing_credential_stays_unauthenticated() {
    let mut store = AuthStore::new();
    let storage = MemoryStorage::default();
    assert!(!store.initialize(&storage));
    assert_eq!(store.state(), &AuthState::default());
}

#[test]
fn check_stored_credential_ignores_empty_token() {
    assert_eq!(check_stored_credential(&MemoryStorage::with_token("")), None);
    assert_eq!(
        check_stored_credential(&MemoryStorage::with_token("jwt")),
        Some(AuthAction::SetIsAuthenticated(true))
    );
}

#[test]
fn sign_out_clears_storage_and_resets_state() {
    let mut store = AuthStore::new();
    let storage = MemoryStorage::with_token("jwt");
    store.initialize(&storage);
    store.dispatch(AuthAction::SetUser(Some(make_user("alice"))));

    store.sign_out(&storage);

    assert_eq!(store.state(), &AuthState::default());
    assert_eq!(storage.read_token(), None);
}

// =============================================================
// AuthContext (the provider App mounts)
// =============================================================

fn in_owner(test: impl FnOnce()) {
    let owner = Owner::new();
    owner.with(test);
}

#[test]
fn context_starts_in_initial_state() {
    in_owner(|| {
        let auth = AuthContext::new();
        assert_eq!(auth.state().get_untracked(), AuthState::default());
    });
}

#[test]
fn context_authenticate_with_stored_credential_sets_flag() {
    in_owner(|| {
        let auth = AuthContext::new();
        let storage = MemoryStorage::with_token("jwt");
        assert!(auth.authenticate(&storage));
        let state = auth.state().get_untracked();
        assert!(state.is_authenticated);
        assert!(state.user.is_none());
    });
}

#[test]
fn context_authenticate_without_credential_stays_unauthenticated() {
    in_owner(|| {
        let auth = AuthContext::new();
        assert!(!auth.authenticate(&MemoryStorage::default()));
        assert_eq!(auth.state().get_untracked(), AuthState::default());
    });
}

#[test]
fn context_dispatch_applies_reducer() {
    in_owner(|| {
        let auth = AuthContext::new();
        auth.dispatch(AuthAction::SetUser(Some(make_user("alice"))));
        let state = auth.state().get_untracked();
        assert_eq!(state.user.map(|u| u.name), Some("alice".to_owned()));
        assert!(!state.is_authenticated);
    });
}

#[test]
fn context_sign_out_clears_storage_and_resets_state() {
    in_owner(|| {
        let auth = AuthContext::new();
        let storage = MemoryStorage::with_token("jwt");
        auth.authenticate(&storage);
        auth.dispatch(AuthAction::SetUser(Some(make_user("alice"))));

        auth.sign_out(&storage);

        assert_eq!(auth.state().get_untracked(), AuthState::default());
        assert_eq!(storage.read_token(), None);
    });
}
