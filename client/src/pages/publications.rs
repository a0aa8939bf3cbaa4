//! Publications listing with the group's Google Scholar record.
//!
//! The back-end catalogue and the scraped Scholar feed load independently;
//! either may fail without hiding the other.

#[cfg(test)]
#[path = "publications_test.rs"]
mod publications_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use super::loadable_view;
use crate::net::api::ContentApi;
use crate::components::scholar_record::ScholarRecordView;
use crate::net::types::{Publication, ScholarRecord};
use crate::state::content::{Loadable, spawn_load};

/// Newest year first; publications keep back-end order within a year.
fn group_by_year(publications: Vec<Publication>) -> Vec<(i32, Vec<Publication>)> {
    let mut years: BTreeMap<i32, Vec<Publication>> = BTreeMap::new();
    for publication in publications {
        years.entry(publication.year).or_default().push(publication);
    }
    years.into_iter().rev().collect()
}

fn author_line(authors: &[String]) -> String {
    authors.join(", ")
}

#[component]
pub fn PublicationsPage() -> impl IntoView {
    let content = expect_context::<ContentApi>();
    let catalogue = RwSignal::new(Loadable::<Vec<Publication>>::default());
    let scholar = RwSignal::new(Loadable::<ScholarRecord>::default());

    let scholar_content = content.clone();
    spawn_load(catalogue, async move { content.publications().await });
    spawn_load(scholar, async move { scholar_content.scholar_publications().await });

    view! {
        <div class="page page--publications">
            <h1>"Publications"</h1>
            {move || loadable_view(catalogue.get(), |all| {
                group_by_year(all)
                    .into_iter()
                    .map(|(year, items)| view! {
                        <section class="publications__year">
                            <h2>{year}</h2>
                            <ul>
                                {items
                                    .into_iter()
                                    .map(|p| view! {
                                        <li class="publication">
                                            <strong>{p.title}</strong>
                                            <span class="publication__authors">{author_line(&p.authors)}</span>
                                            <em>{p.journal}</em>
                                            {p.pdf_link.map(|href| view! { <a href=href>"PDF"</a> })}
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    })
                    .collect_view()
            })}
            <section class="publications__scholar">
                <h2>"Google Scholar"</h2>
                {move || loadable_view(scholar.get(), |record| view! { <ScholarRecordView record=record/> })}
            </section>
        </div>
    }
}
