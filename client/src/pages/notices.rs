//! Notice board.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use leptos::prelude::*;

use super::loadable_view;
use crate::net::api::ContentApi;
use crate::net::types::{Notice, NoticePriority};
use crate::state::content::{Loadable, spawn_load};

/// Important notices first; otherwise back-end order.
pub(crate) fn order_notices(mut notices: Vec<Notice>) -> Vec<Notice> {
    notices.sort_by_key(|n| n.priority != NoticePriority::Important);
    notices
}

#[component]
pub(crate) fn NoticeItem(notice: Notice) -> impl IntoView {
    let class = match notice.priority {
        NoticePriority::Important => "notice notice--important",
        NoticePriority::Normal => "notice",
    };
    view! {
        <article class=class>
            <h3>{notice.title}</h3>
            <p class="notice__date">{notice.date}</p>
            <p>{notice.content}</p>
        </article>
    }
}

#[component]
pub fn NoticesPage() -> impl IntoView {
    let content = expect_context::<ContentApi>();
    let notices = RwSignal::new(Loadable::<Vec<Notice>>::default());
    spawn_load(notices, async move { content.notices().await });

    view! {
        <div class="page page--notices">
            <h1>"Notices"</h1>
            {move || loadable_view(notices.get(), |items| {
                order_notices(items).into_iter().map(|notice| view! { <NoticeItem notice=notice/> }).collect_view()
            })}
        </div>
    }
}
