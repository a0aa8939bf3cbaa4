use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::net::types::{Role, User};
use crate::util::auth::Redirect as RedirectTo;

#[test]
fn requested_location_without_query_is_path() {
    assert_eq!(requested_location("/admin/dashboard", ""), "/admin/dashboard");
}

#[test]
fn requested_location_keeps_query_with_or_without_question_mark() {
    assert_eq!(requested_location("/member/dashboard", "?tab=profile"), "/member/dashboard?tab=profile");
    assert_eq!(requested_location("/member/dashboard", "tab=profile"), "/member/dashboard?tab=profile");
}

#[test]
fn requested_location_ignores_bare_question_mark() {
    assert_eq!(requested_location("/admin/dashboard", "?"), "/admin/dashboard");
}

// =============================================================
// admission memo
// =============================================================

fn signed_in(username: &str, role: Role) -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            username: username.to_owned(),
            email: format!("{username}@lab.edu"),
            role,
        }),
        loading: false,
    }
}

#[test]
fn admitted_page_is_built_once_across_user_refresh() {
    let owner = Owner::new();
    owner.set();

    let auth = RwSignal::new(signed_in("jane", Role::Member));
    let decision = admission(auth, RequiredRole::Member, || "/member/dashboard".to_owned());
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = builds.clone();
    let page = Memo::new(move |_| {
        let _ = decision.get();
        counter.fetch_add(1, Ordering::SeqCst)
    });

    page.get();
    assert_eq!(builds.load(Ordering::SeqCst), 1);

    auth.set(signed_in("jane.doe", Role::Member));
    page.get();
    assert_eq!(builds.load(Ordering::SeqCst), 1);
    assert_eq!(decision.get_untracked(), GuardDecision::Admit);

    auth.set(AuthState { user: None, loading: false });
    page.get();
    assert_eq!(builds.load(Ordering::SeqCst), 2);
    assert_eq!(
        decision.get_untracked(),
        GuardDecision::Redirect(RedirectTo { path: "/teamlogin", from: Some("/member/dashboard".to_owned()) })
    );
}

#[test]
fn hydration_finishing_admits_signed_in_user() {
    let owner = Owner::new();
    owner.set();

    let auth = RwSignal::new(AuthState::hydrating());
    let decision = admission(auth, RequiredRole::Admin, || "/admin/dashboard".to_owned());
    assert_eq!(decision.get(), GuardDecision::Loading);

    auth.set(signed_in("root", Role::Admin));
    assert_eq!(decision.get(), GuardDecision::Admit);
}
