//! Route wrapper that admits, defers, or redirects based on the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admission decision itself is `util::auth::decide`; this component
//! only renders its outcome. Navigation uses `replace` so the back button
//! does not bounce the visitor into the guard again.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, RequiredRole, decide};

/// Path plus query string, with or without the leading `?` on `search`.
fn requested_location(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() { pathname.to_owned() } else { format!("{pathname}?{query}") }
}

/// The guard decision as a memo.
///
/// Session changes that leave the decision as it was (a refreshed user
/// descriptor, say) do not notify readers, so an admitted page is built
/// once and keeps its own state.
fn admission(
    auth: RwSignal<AuthState>,
    required: RequiredRole,
    here: impl Fn() -> String + Send + Sync + 'static,
) -> Memo<GuardDecision> {
    Memo::new(move |_| decide(&auth.get(), required, &here()))
}

/// Render `children` only for a hydrated session whose role satisfies `required`.
#[component]
pub fn ProtectedRoute(required: RequiredRole, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);
    let decision = admission(auth, required, move || requested_location(&pathname.get(), &search.get()));

    move || match decision.get() {
        GuardDecision::Loading => view! {
            <div class="route-loading" aria-busy="true">
                <span class="route-loading__spinner"></span>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect(target) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=target.href() options=options/> }.into_any()
        }
        GuardDecision::Admit => children().into_any(),
    }
}
