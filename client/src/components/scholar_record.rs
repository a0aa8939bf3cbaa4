//! Google Scholar citation totals and publication list.

#[cfg(test)]
#[path = "scholar_record_test.rs"]
mod scholar_record_test;

use leptos::prelude::*;

use crate::net::types::{ScholarProfile, ScholarPublication, ScholarRecord};

/// Citation counters; a missing profile reads as zeros.
fn citation_stats(profile: Option<&ScholarProfile>) -> [(&'static str, u32); 3] {
    let (citations, h_index, i10_index) = profile.map_or((0, 0, 0), |p| (p.total_citations, p.h_index, p.i10_index));
    [("Citations", citations), ("h-index", h_index), ("i10-index", i10_index)]
}

#[component]
fn ScholarPublicationItem(publication: ScholarPublication) -> impl IntoView {
    let ScholarPublication { title, authors, year, journal, cited_by, article_url, .. } = publication;
    let title_view = if article_url.is_empty() {
        view! { <strong>{title}</strong> }.into_any()
    } else {
        view! { <a href=article_url target="_blank" rel="noopener">{title}</a> }.into_any()
    };
    view! {
        <li class="publication">
            {title_view}
            <span class="publication__authors">{authors.join(", ")}</span>
            <em>{journal}</em>
            <span>{year}</span>
            {(!cited_by.is_empty()).then(|| view! { <span class="publication__cited">"Cited by "{cited_by}</span> })}
        </li>
    }
}

/// `show_stats` is off for the group feed, which has no single profile.
#[component]
pub fn ScholarRecordView(record: ScholarRecord, #[prop(optional)] show_stats: bool) -> impl IntoView {
    let ScholarRecord { profile, publications } = record;
    let stats = show_stats.then(|| {
        view! {
            <dl class="scholar__stats">
                {citation_stats(profile.as_ref())
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="scholar__stat">
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
        }
    });
    let list = if publications.is_empty() {
        view! { <p class="scholar__empty">"No publications found."</p> }.into_any()
    } else {
        view! {
            <ul class="scholar__publications">
                {publications
                    .into_iter()
                    .map(|publication| view! { <ScholarPublicationItem publication=publication/> })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };
    view! {
        <div class="scholar">
            {stats}
            {list}
        </div>
    }
}
