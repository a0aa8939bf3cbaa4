//! Group news feed.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use leptos::prelude::*;

use super::loadable_view;
use crate::net::api::ContentApi;
use crate::net::types::News;
use crate::state::content::{Loadable, spawn_load};

const TEASER_CHARS: usize = 160;

/// The explicit summary, or the opening of the body cut at a char boundary.
pub(crate) fn teaser(item: &News) -> String {
    if let Some(summary) = item.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        return summary.to_owned();
    }
    let mut chars = item.content.chars();
    let head: String = chars.by_ref().take(TEASER_CHARS).collect();
    if chars.next().is_some() { format!("{}...", head.trim_end()) } else { head }
}

#[component]
pub(crate) fn NewsItem(item: News) -> impl IntoView {
    let summary = teaser(&item);
    view! {
        <article class="news-item">
            {item.image_url.map(|src| view! { <img class="news-item__image" src=src alt=""/> })}
            <h3>{item.title}</h3>
            <p class="news-item__meta">
                {item.date}
                {item.author.map(|author| format!(" by {author}"))}
            </p>
            <p>{summary}</p>
        </article>
    }
}

#[component]
pub fn NewsPage() -> impl IntoView {
    let content = expect_context::<ContentApi>();
    let news = RwSignal::new(Loadable::<Vec<News>>::default());
    spawn_load(news, async move { content.news().await });

    view! {
        <div class="page page--news">
            <h1>"News"</h1>
            {move || loadable_view(news.get(), |items| {
                items.into_iter().map(|item| view! { <NewsItem item=item/> }).collect_view()
            })}
        </div>
    }
}
