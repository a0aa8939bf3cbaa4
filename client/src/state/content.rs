//! Fetch state for pages that render a back-end collection.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::gateway::ApiResult;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    #[must_use]
    pub fn from_result(result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Resolve `request` into `target` once the browser runtime is up.
///
/// Server renders leave `target` at [`Loadable::Loading`]; the request is
/// never polled there.
pub fn spawn_load<T, F>(target: RwSignal<Loadable<T>>, request: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = ApiResult<T>> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let loaded = Loadable::from_result(request.await);
        if let Some(message) = loaded.error() {
            log::warn!("content load failed: {message}");
        }
        target.set(loaded);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, request);
    }
}
