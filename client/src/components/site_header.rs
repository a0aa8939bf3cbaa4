//! Top navigation bar shared by the public pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::util::auth::dashboard_path;

const NAV_LINKS: [(&str, &str); 6] = [
    ("/", "Home"),
    ("/projects", "Projects"),
    ("/publications", "Publications"),
    ("/team", "Team"),
    ("/news", "News"),
    ("/notices", "Notices"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Login pages are unlisted; only signed-in users get a shortcut.
    let dashboard_link = move || {
        auth.get().role().map(|role| {
            view! { <A href=dashboard_path(role) attr:class="site-header__dashboard">"Dashboard"</A> }
        })
    };

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">"Research Lab"</A>
            <nav class="site-header__nav">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| view! { <A href=href>{label}</A> })
                    .collect_view()}
            </nav>
            {dashboard_link}
        </header>
    }
}
