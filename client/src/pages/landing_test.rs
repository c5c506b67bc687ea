use super::*;

#[test]
fn link_target_without_token_is_sign_in() {
    assert_eq!(link_target(None), SIGN_IN_PATH);
}

#[test]
fn link_target_with_empty_token_is_sign_in() {
    assert_eq!(link_target(Some("")), SIGN_IN_PATH);
}

#[test]
fn link_target_with_any_token_is_dashboard() {
    for token in ["a", "eyJhbGciOiJIUzI1NiJ9.e30.sig", "not-even-a-jwt", " "] {
        assert_eq!(link_target(Some(token)), DASHBOARD_PATH, "token {token:?}");
    }
}

#[test]
fn navigation_paths_are_distinct() {
    assert_eq!(DASHBOARD_PATH, "/dashboard");
    assert_eq!(SIGN_IN_PATH, "/auth/signin");
    assert_eq!(SIGN_UP_PATH, "/auth/signup");
}

#[test]
fn features_are_invite_organize_automate() {
    let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
    assert_eq!(titles, ["Invite", "Organize", "Automate"]);
    assert!(FEATURES.iter().all(|f| !f.blurb.is_empty()));
}

#[test]
fn tech_stack_fills_two_rows() {
    assert_eq!(TECH_STACK.chunks(TECH_STACK_ROW).count(), 2);
    assert!(TECH_STACK.contains(&"rabbitmq"));
}
