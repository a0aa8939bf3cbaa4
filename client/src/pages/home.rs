//! Landing page: group introduction, headline counts, and the latest news
//! and notices.

use leptos::prelude::*;
use leptos_router::components::A;

use super::dashboard::stat_rows;
use super::loadable_view;
use super::news::NewsItem;
use super::notices::{NoticeItem, order_notices};
use crate::net::api::{ContentApi, DEFAULT_RECENT_LIMIT, DashboardStats};
use crate::net::types::{News, Notice, SiteSettings};
use crate::state::content::{Loadable, spawn_load};

#[component]
pub fn HomePage() -> impl IntoView {
    let content = expect_context::<ContentApi>();
    let settings = RwSignal::new(Loadable::<SiteSettings>::default());
    let news = RwSignal::new(Loadable::<Vec<News>>::default());
    let notices = RwSignal::new(Loadable::<Vec<Notice>>::default());

    let stats = RwSignal::new(Loadable::<DashboardStats>::default());

    let (news_content, notices_content, stats_content) = (content.clone(), content.clone(), content.clone());
    spawn_load(settings, async move { Ok(content.settings().await) });
    spawn_load(stats, async move { Ok(stats_content.dashboard_stats().await) });
    spawn_load(news, async move { news_content.recent_news(DEFAULT_RECENT_LIMIT).await });
    spawn_load(notices, async move { notices_content.recent_notices(DEFAULT_RECENT_LIMIT).await });

    view! {
        <div class="page page--home">
            <section class="home__about">
                <h1>"About Us"</h1>
                {move || loadable_view(settings.get(), |s| s.about_us.map(|about| view! { <p>{about}</p> }))}
            </section>
            <section class="home__stats">
                {move || loadable_view(stats.get(), |stats| view! {
                    <dl class="home__stat-list">
                        {stat_rows(&stats)
                            .into_iter()
                            .map(|(label, value)| view! {
                                <div class="home__stat">
                                    <dd>{value}</dd>
                                    <dt>{label}</dt>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                })}
            </section>
            <section class="home__news">
                <h2>"Latest News"</h2>
                {move || loadable_view(news.get(), |items| {
                    items.into_iter().map(|item| view! { <NewsItem item=item/> }).collect_view()
                })}
                <A href="/news">"All news"</A>
            </section>
            <section class="home__notices">
                <h2>"Notices"</h2>
                {move || loadable_view(notices.get(), |items| {
                    order_notices(items).into_iter().map(|notice| view! { <NoticeItem notice=notice/> }).collect_view()
                })}
                <A href="/notices">"All notices"</A>
            </section>
        </div>
    }
}
