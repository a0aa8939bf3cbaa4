use super::*;
use crate::net::types::User;

fn signed_in(role: Role) -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            username: "jane".to_owned(),
            email: "jane@lab.edu".to_owned(),
            role,
        }),
        loading: false,
    }
}

fn anonymous() -> AuthState {
    AuthState { user: None, loading: false }
}

const ALL_REQUIRED: [RequiredRole; 3] = [RequiredRole::Any, RequiredRole::Admin, RequiredRole::Member];

// =============================================================
// decide: loading
// =============================================================

#[test]
fn loading_admits_nothing() {
    for required in ALL_REQUIRED {
        assert_eq!(decide(&AuthState::hydrating(), required, "/admin/dashboard"), GuardDecision::Loading);
    }
}

#[test]
fn loading_wins_even_with_user_present() {
    let mut state = signed_in(Role::Admin);
    state.loading = true;
    assert_eq!(decide(&state, RequiredRole::Admin, "/admin/dashboard"), GuardDecision::Loading);
}

// =============================================================
// decide: anonymous
// =============================================================

#[test]
fn anonymous_on_admin_route_goes_to_admin_login_with_return_path() {
    assert_eq!(
        decide(&anonymous(), RequiredRole::Admin, "/admin/dashboard"),
        GuardDecision::Redirect(Redirect { path: "/admin", from: Some("/admin/dashboard".to_owned()) })
    );
}

#[test]
fn anonymous_on_member_route_goes_to_member_login() {
    assert_eq!(
        decide(&anonymous(), RequiredRole::Member, "/member/dashboard"),
        GuardDecision::Redirect(Redirect { path: "/teamlogin", from: Some("/member/dashboard".to_owned()) })
    );
}

#[test]
fn anonymous_on_any_route_goes_to_member_login() {
    let GuardDecision::Redirect(redirect) = decide(&anonymous(), RequiredRole::Any, "/x") else {
        panic!("expected redirect");
    };
    assert_eq!(redirect.path, MEMBER_LOGIN_PATH);
}

// =============================================================
// decide: wrong role
// =============================================================

#[test]
fn member_on_admin_route_goes_home_not_login() {
    assert_eq!(
        decide(&signed_in(Role::Member), RequiredRole::Admin, "/admin/dashboard"),
        GuardDecision::Redirect(Redirect { path: "/", from: None })
    );
}

#[test]
fn admin_on_member_route_goes_home() {
    assert_eq!(
        decide(&signed_in(Role::Admin), RequiredRole::Member, "/member/dashboard"),
        GuardDecision::Redirect(Redirect { path: "/", from: None })
    );
}

// =============================================================
// decide: admitted
// =============================================================

#[test]
fn matching_role_is_admitted() {
    assert_eq!(decide(&signed_in(Role::Admin), RequiredRole::Admin, "/admin/dashboard"), GuardDecision::Admit);
    assert_eq!(decide(&signed_in(Role::Member), RequiredRole::Member, "/member/dashboard"), GuardDecision::Admit);
}

#[test]
fn any_role_admits_both() {
    assert_eq!(decide(&signed_in(Role::Admin), RequiredRole::Any, "/x"), GuardDecision::Admit);
    assert_eq!(decide(&signed_in(Role::Member), RequiredRole::Any, "/x"), GuardDecision::Admit);
}

#[test]
fn decision_table_is_exhaustive() {
    let sessions = [None, Some(Role::Admin), Some(Role::Member)];
    for required in ALL_REQUIRED {
        for role in sessions {
            let state = role.map_or_else(anonymous, signed_in);
            let decision = decide(&state, required, "/here");
            let expected = match role {
                None => GuardDecision::Redirect(Redirect {
                    path: if required == RequiredRole::Admin { "/admin" } else { "/teamlogin" },
                    from: Some("/here".to_owned()),
                }),
                Some(r) if required.admits(r) => GuardDecision::Admit,
                Some(_) => GuardDecision::Redirect(Redirect { path: "/", from: None }),
            };
            assert_eq!(decision, expected, "required={required:?} role={role:?}");
        }
    }
}

// =============================================================
// Redirect::href
// =============================================================

#[test]
fn href_encodes_return_path() {
    let redirect = Redirect { path: "/admin", from: Some("/admin/dashboard".to_owned()) };
    assert_eq!(redirect.href(), "/admin?from=%2Fadmin%2Fdashboard");
}

#[test]
fn href_without_return_path_is_bare() {
    assert_eq!(Redirect { path: "/", from: None }.href(), "/");
}

// =============================================================
// Post-login destination
// =============================================================

#[test]
fn destination_defaults_to_role_dashboard() {
    assert_eq!(post_login_destination(Role::Admin, None), "/admin/dashboard");
    assert_eq!(post_login_destination(Role::Member, None), "/member/dashboard");
}

#[test]
fn destination_honors_same_origin_return_path() {
    assert_eq!(post_login_destination(Role::Admin, Some("/admin/dashboard?tab=news")), "/admin/dashboard?tab=news");
}

#[test]
fn destination_rejects_foreign_return_paths() {
    assert_eq!(post_login_destination(Role::Member, Some("https://evil.example")), "/member/dashboard");
    assert_eq!(post_login_destination(Role::Member, Some("//evil.example")), "/member/dashboard");
    assert_eq!(post_login_destination(Role::Member, Some("/\\evil.example")), "/member/dashboard");
    assert_eq!(post_login_destination(Role::Member, Some("")), "/member/dashboard");
}
