//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::components::site_header::SiteHeader;
use crate::config::ClientConfig;
use crate::pages::dashboard::{AdminDashboardPage, MemberDashboardPage};
use crate::pages::home::HomePage;
use crate::pages::login::{AdminLoginPage, TeamLoginPage};
use crate::pages::news::NewsPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::notices::NoticesPage;
use crate::pages::projects::ProjectsPage;
use crate::pages::publications::PublicationsPage;
use crate::pages::team::{MemberProfilePage, TeamPage};
use crate::state::auth::AuthState;
use crate::state::manager::SessionManager;
use crate::util::auth::RequiredRole;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single [`SessionManager`] and mirrors every session change into
/// the `RwSignal<AuthState>` that guards and pages read.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let manager = SessionManager::browser(ClientConfig::from_env());
    let auth = RwSignal::new(AuthState::hydrating());
    manager.subscribe(move |session| auth.set(AuthState::from_session(session)));

    // Storage exists only in the browser; effects never run during SSR.
    let hydrating = manager.clone();
    Effect::new(move || {
        hydrating.hydrate();
    });

    provide_context(manager.content());
    provide_context(manager);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/labsite.css"/>
        <Title text="Research Lab"/>

        <Router>
            <SiteHeader/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("publications") view=PublicationsPage/>
                    <Route path=StaticSegment("team") view=TeamPage/>
                    <Route path=(StaticSegment("team"), ParamSegment("username")) view=MemberProfilePage/>
                    <Route path=StaticSegment("news") view=NewsPage/>
                    <Route path=StaticSegment("notices") view=NoticesPage/>
                    <Route path=StaticSegment("admin") view=AdminLoginPage/>
                    <Route path=StaticSegment("teamlogin") view=TeamLoginPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| view! {
                            <ProtectedRoute required=RequiredRole::Admin>
                                <AdminDashboardPage/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=(StaticSegment("member"), StaticSegment("dashboard"))
                        view=|| view! {
                            <ProtectedRoute required=RequiredRole::Member>
                                <MemberDashboardPage/>
                            </ProtectedRoute>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
