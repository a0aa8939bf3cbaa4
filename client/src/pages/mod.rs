//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and delegates shared chrome to
//! `components`. Public pages render what the back end returns and
//! nothing more.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod news;
pub mod not_found;
pub mod notices;
pub mod projects;
pub mod publications;
pub mod team;

use leptos::prelude::*;

use crate::state::content::Loadable;

/// Loading and failure placeholders around a page's ready view.
pub(crate) fn loadable_view<T, V>(state: Loadable<T>, ready: impl FnOnce(T) -> V) -> AnyView
where
    V: IntoView + 'static,
{
    match state {
        Loadable::Loading => view! { <p class="page__loading">"Loading..."</p> }.into_any(),
        Loadable::Failed(message) => view! { <p class="page__error" role="alert">{message}</p> }.into_any(),
        Loadable::Ready(value) => ready(value).into_any(),
    }
}
