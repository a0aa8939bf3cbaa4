use super::*;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        username: "jane".to_owned(),
        email: "jane@lab.edu".to_owned(),
        role,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn hydrating_state_is_loading_without_user() {
    let state = AuthState::hydrating();
    assert!(state.loading);
    assert!(state.user.is_none());
}

// =============================================================
// from_session
// =============================================================

#[test]
fn from_signed_out_session() {
    assert_eq!(AuthState::from_session(&Session::signed_out()), AuthState::default());
}

#[test]
fn from_admin_session_sets_admin_flag() {
    let state = AuthState::from_session(&Session::signed_in(user(Role::Admin), "t"));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert!(state.is_admin());
    assert!(!state.is_member());
}

#[test]
fn from_member_session_sets_member_flag() {
    let state = AuthState::from_session(&Session::signed_in(user(Role::Member), "t"));
    assert!(state.is_member());
    assert!(!state.is_admin());
    assert_eq!(state.role(), Some(Role::Member));
}
