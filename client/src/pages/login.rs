//! Admin and team-member login pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both pages share one form. A submit exchanges credentials through the
//! session manager, then adopts them with `login`; navigation happens in an
//! effect that fires once the published session carries the page's role.
//! The same effect sends a visitor who already holds that role straight on.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::manager::SessionManager;
use crate::util::auth::{RETURN_PARAM, post_login_destination};

/// Trim and require both fields; the password is passed through as typed.
fn validate_login(role: Role, identity: &str, password: &str) -> Result<(String, String), &'static str> {
    let identity = identity.trim();
    if identity.is_empty() || password.trim().is_empty() {
        return Err(match role {
            Role::Admin => "Please enter both email and password.",
            Role::Member => "Please enter both username and password.",
        });
    }
    Ok((identity.to_owned(), password.to_owned()))
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <LoginForm role=Role::Admin/> }
}

#[component]
pub fn TeamLoginPage() -> impl IntoView {
    view! { <LoginForm role=Role::Member/> }
}

#[component]
fn LoginForm(role: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let manager = expect_context::<SessionManager>();
    let query = use_query_map();
    let navigate = use_navigate();

    let identity = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if auth.get().role() != Some(role) {
            return;
        }
        let from = query.get_untracked().get(RETURN_PARAM);
        let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
        navigate(&post_login_destination(role, from.as_deref()), options);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (identity_value, password_value) = match validate_login(role, &identity.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let manager = manager.clone();
            leptos::task::spawn_local(async move {
                let result = match role {
                    Role::Admin => manager.authenticate_admin(&identity_value, &password_value).await,
                    Role::Member => manager.authenticate_member(&identity_value, &password_value).await,
                };
                match result {
                    Ok(payload) => manager.login(payload.user, payload.token),
                    Err(e) => {
                        log::warn!("login rejected: {e}");
                        error.set(e.to_string());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&manager, identity_value, password_value);
        }
    };

    let (title, identity_label, identity_type) = match role {
        Role::Admin => ("Admin Login", "Email", "email"),
        Role::Member => ("Team Member Login", "Username", "text"),
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{title}</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        {identity_label}
                        <input
                            class="login-input"
                            type=identity_type
                            prop:value=move || identity.get()
                            on:input=move |ev| identity.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message login-message--error" role="alert">{move || error.get()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
