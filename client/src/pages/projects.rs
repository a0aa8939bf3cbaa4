//! Research projects listing.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use super::loadable_view;
use crate::net::api::ContentApi;
use crate::net::types::{Project, ProjectStatus};
use crate::state::content::{Loadable, spawn_load};

/// Ongoing projects first, then completed, each in back-end order.
fn split_by_status(projects: Vec<Project>) -> (Vec<Project>, Vec<Project>) {
    projects.into_iter().partition(|p| p.status == ProjectStatus::Ongoing)
}

#[component]
fn ProjectList(heading: &'static str, projects: Vec<Project>) -> impl IntoView {
    (!projects.is_empty()).then(|| {
        view! {
            <section class="projects__group">
                <h2>{heading}</h2>
                <ul>
                    {projects
                        .into_iter()
                        .map(|p| {
                            let period = match p.end_date {
                                Some(end) => format!("{} to {end}", p.start_date),
                                None => format!("Since {}", p.start_date),
                            };
                            view! {
                                <li class="project">
                                    <h3>{p.title}</h3>
                                    <p class="project__period">{period}</p>
                                    <p>{p.description}</p>
                                    {(!p.research_link.is_empty()).then(|| view! {
                                        <a href=p.research_link target="_blank" rel="noopener">"Learn more"</a>
                                    })}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        }
    })
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let content = expect_context::<ContentApi>();
    let projects = RwSignal::new(Loadable::<Vec<Project>>::default());
    spawn_load(projects, async move { content.projects().await });

    view! {
        <div class="page page--projects">
            <h1>"Research Projects"</h1>
            {move || loadable_view(projects.get(), |all| {
                let (ongoing, completed) = split_by_status(all);
                view! {
                    <ProjectList heading="Ongoing" projects=ongoing/>
                    <ProjectList heading="Completed" projects=completed/>
                }
            })}
        </div>
    }
}
