//! Protected dashboards for admins and team members.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both pages render inside `ProtectedRoute`, so a user is always present
//! when they mount. Logout leaves the guarded route before clearing the
//! session so the guard never bounces the visitor to a login page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::team::{load_member_with_scholar, scholar_section};
use crate::net::api::{ContentApi, DashboardStats};
use crate::net::types::{ScholarRecord, TeamMember, User};
use crate::state::auth::AuthState;
use crate::state::content::Loadable;
use crate::state::manager::SessionManager;
use crate::util::auth::HOME_PATH;

/// Label/value rows shown on the admin statistics panel.
pub(crate) fn stat_rows(stats: &DashboardStats) -> [(&'static str, usize); 4] {
    [
        ("Projects", stats.total_projects),
        ("Ongoing projects", stats.ongoing_projects),
        ("Publications", stats.total_publications),
        ("Team members", stats.total_members),
    ]
}

fn greeting(user: Option<&User>) -> String {
    user.map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.username))
}

/// Button that navigates home, then signs out.
#[component]
fn LogoutButton() -> impl IntoView {
    let manager = expect_context::<SessionManager>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        navigate(HOME_PATH, NavigateOptions::default());
        #[cfg(feature = "hydrate")]
        {
            let manager = manager.clone();
            leptos::task::spawn_local(async move { manager.logout().await });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &manager;
        }
    };

    view! {
        <button class="dashboard__logout" on:click=on_logout>
            "Log out"
        </button>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let content = expect_context::<ContentApi>();
    let stats = RwSignal::new(None::<DashboardStats>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        stats.set(Some(content.dashboard_stats().await));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = content;

    view! {
        <div class="dashboard dashboard--admin">
            <header class="dashboard__header">
                <h1>"Admin Dashboard"</h1>
                <p>{move || greeting(auth.get().user.as_ref())}</p>
                <LogoutButton/>
            </header>
            {move || match stats.get() {
                None => view! { <p class="dashboard__loading">"Loading statistics..."</p> }.into_any(),
                Some(stats) => view! {
                    <dl class="dashboard__stats">
                        {stat_rows(&stats)
                            .into_iter()
                            .map(|(label, value)| view! {
                                <div class="dashboard__stat">
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
pub fn MemberDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let manager = expect_context::<SessionManager>();
    let profile = RwSignal::new(Loadable::<TeamMember>::default());
    let scholar = RwSignal::new(Loadable::<Option<ScholarRecord>>::default());
    let status = RwSignal::new(String::new());

    if let Some(user) = auth.get_untracked().user {
        load_member_with_scholar(manager.content(), user.username, profile, scholar);
    }

    let on_refresh = move |_| {
        status.set("Refreshing...".to_owned());
        #[cfg(feature = "hydrate")]
        {
            let manager = manager.clone();
            leptos::task::spawn_local(async move {
                match manager.refresh().await {
                    Ok(user) => status.set(format!("Account details refreshed for {}.", user.username)),
                    Err(e) => status.set(e.to_string()),
                }
            });
        }
    };

    view! {
        <div class="dashboard dashboard--member">
            <header class="dashboard__header">
                <h1>"Member Dashboard"</h1>
                <p>{move || greeting(auth.get().user.as_ref())}</p>
                <button class="dashboard__refresh" on:click=on_refresh>
                    "Refresh account"
                </button>
                <LogoutButton/>
            </header>
            <Show when=move || !status.get().is_empty()>
                <p class="dashboard__status">{move || status.get()}</p>
            </Show>
            {move || match profile.get() {
                Loadable::Loading => view! { <p class="dashboard__loading">"Loading profile..."</p> }.into_any(),
                Loadable::Failed(message) => view! { <p class="dashboard__error">{message}</p> }.into_any(),
                Loadable::Ready(member) => view! {
                    <section class="dashboard__profile">
                        <h2>{member.name}</h2>
                        <p>{member.position.label()}</p>
                        <p>{member.email}</p>
                        <p>{member.research_area}</p>
                    </section>
                }
                .into_any(),
            }}
            <section class="dashboard__scholar">
                <h2>"My Google Scholar"</h2>
                {move || scholar_section(scholar.get())}
            </section>
        </div>
    }
}
