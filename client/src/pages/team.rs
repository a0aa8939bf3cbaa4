//! Team listing and individual member profiles.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::loadable_view;
use crate::components::scholar_record::ScholarRecordView;
use crate::net::api::ContentApi;
use crate::net::types::{Position, ScholarRecord, TeamMember};
use crate::state::content::{Loadable, spawn_load};
use crate::util::url::encode_component;

const POSITION_ORDER: [Position; 5] =
    [Position::TeamLeader, Position::Faculty, Position::Researcher, Position::Student, Position::Staff];

/// Members grouped by position in seniority order; empty groups are dropped.
fn group_by_position(members: Vec<TeamMember>) -> Vec<(Position, Vec<TeamMember>)> {
    let mut groups: Vec<(Position, Vec<TeamMember>)> = POSITION_ORDER.iter().map(|&p| (p, Vec::new())).collect();
    for member in members {
        if let Some((_, bucket)) = groups.iter_mut().find(|(p, _)| *p == member.position) {
            bucket.push(member);
        }
    }
    groups.retain(|(_, bucket)| !bucket.is_empty());
    groups
}

fn profile_href(username: &str) -> String {
    format!("/team/{}", encode_component(username))
}

#[component]
pub fn TeamPage() -> impl IntoView {
    let content = expect_context::<ContentApi>();
    let members = RwSignal::new(Loadable::<Vec<TeamMember>>::default());
    spawn_load(members, async move { content.members().await });

    view! {
        <div class="page page--team">
            <h1>"Our Team"</h1>
            {move || loadable_view(members.get(), |all| {
                group_by_position(all)
                    .into_iter()
                    .map(|(position, bucket)| view! {
                        <section class="team__group">
                            <h2>{position.label()}</h2>
                            <ul>
                                {bucket
                                    .into_iter()
                                    .map(|m| view! {
                                        <li class="team-member">
                                            <A href=profile_href(&m.username)>{m.name}</A>
                                            <span>{m.title}</span>
                                            <span>{m.research_area}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    })
                    .collect_view()
            })}
        </div>
    }
}

/// Load a member, then their Scholar record once the member is known.
///
/// The two land in separate signals so a Scholar failure never hides the
/// profile itself.
pub(crate) fn load_member_with_scholar(
    content: ContentApi,
    username: String,
    profile: RwSignal<Loadable<TeamMember>>,
    scholar: RwSignal<Loadable<Option<ScholarRecord>>>,
) {
    profile.set(Loadable::Loading);
    scholar.set(Loadable::Loading);
    spawn_load(profile, async move {
        let member = content.member_by_username(&username).await?;
        let linked = member.clone();
        spawn_load(scholar, async move { content.member_scholar(&linked).await });
        Ok(member)
    });
}

/// Citation totals and publications, or a note when nothing is linked.
pub(crate) fn scholar_section(state: Loadable<Option<ScholarRecord>>) -> AnyView {
    loadable_view(state, |record| match record {
        Some(record) => view! { <ScholarRecordView record=record show_stats=true/> }.into_any(),
        None => view! { <p class="scholar__empty">"No Google Scholar profile linked."</p> }.into_any(),
    })
}

#[component]
pub fn MemberProfilePage() -> impl IntoView {
    let content = expect_context::<ContentApi>();
    let params = use_params_map();
    let profile = RwSignal::new(Loadable::<TeamMember>::default());
    let scholar = RwSignal::new(Loadable::<Option<ScholarRecord>>::default());

    // Re-runs when navigating between profiles without leaving the route.
    Effect::new(move || {
        let Some(username) = params.with(|p| p.get("username")) else {
            return;
        };
        load_member_with_scholar(content.clone(), username, profile, scholar);
    });

    view! {
        <div class="page page--member">
            {move || loadable_view(profile.get(), |member| view! {
                <article class="member-profile">
                    <h1>{member.name}</h1>
                    <p class="member-profile__position">{member.position.label()}</p>
                    <p>{member.title}</p>
                    <p>{member.email}</p>
                    {member.phone.map(|phone| view! { <p>{phone}</p> })}
                    <p>{member.bio}</p>
                    <ul class="member-profile__expertise">
                        {member.expertise.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                    {(!member.google_scholar_link.is_empty()).then(|| view! {
                        <a href=member.google_scholar_link target="_blank" rel="noopener">"Google Scholar"</a>
                    })}
                    <h2>"Publications"</h2>
                    {move || scholar_section(scholar.get())}
                    <A href="/team">"Back to team"</A>
                </article>
            })}
        </div>
    }
}
