//! Mentor finder with search, skill filter and result grid.

#[cfg(test)]
#[path = "finder_test.rs"]
mod finder_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::components::mentor_card::MentorCard;
use crate::net::api::AppClient;
use crate::net::types::Skill;
use crate::routing::Route;
use crate::state::mentors::{FilterPatch, MentorsAction};
use crate::state::store::{Dispatch, Store};
use crate::util::auth::install_route_guard;

/// Filter update for a submitted search box. Starts again from page one.
pub fn search_patch(input: &str) -> FilterPatch {
    FilterPatch {
        search: Some(input.trim().to_owned()),
        page: Some(1),
        ..FilterPatch::default()
    }
}

/// Filter update for the skill select; the empty value means all skills.
pub fn skill_patch(value: &str) -> FilterPatch {
    FilterPatch {
        skill: Some(value.to_owned()),
        page: Some(1),
        ..FilterPatch::default()
    }
}

#[component]
pub fn FinderPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let client = expect_context::<AppClient>();
    install_route_guard(Route::Finder, store, use_navigate());

    let search_input = RwSignal::new(String::new());
    let skills = RwSignal::new(Vec::<Skill>::new());

    // Refetch whenever the filters change.
    let ready = store.select(|s| s.auth.restored && s.auth.has_token);
    let filters = store.select(|s| s.mentors.filters.clone());
    {
        let client = client.clone();
        Effect::new(move || {
            let filters = filters.get();
            if !ready.get() {
                return;
            }
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let _ = actions::mentors::fetch_mentors(&client, &store, &filters).await;
            });
        });
    }

    let skills_requested = RwSignal::new(false);
    Effect::new(move || {
        if !ready.get() || skills_requested.get_untracked() {
            return;
        }
        skills_requested.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            skills.set(actions::mentors::load_skills(&client).await);
        });
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        store.dispatch(MentorsAction::SetFilters(search_patch(&search_input.get_untracked())).into());
    };
    let on_clear = move |_| {
        search_input.set(String::new());
        store.dispatch(MentorsAction::ClearFilters.into());
    };

    view! {
        <div class="container finder-page">
            <h1 class="mb-4">"Find Mentors"</h1>
            <div class="finder-page__filters mb-4">
                <form class="input-group" on:submit=on_search>
                    <input
                        class="form-control"
                        type="text"
                        placeholder="Search by name..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <button class="btn btn-outline-dark" type="submit">
                        "Search"
                    </button>
                </form>
                <select
                    class="form-select"
                    prop:value=move || store.with(|s| s.mentors.filters.skill.clone())
                    on:change=move |ev| store.dispatch(MentorsAction::SetFilters(skill_patch(&event_target_value(&ev))).into())
                >
                    <option value="">"All Skills"</option>
                    <For
                        each=move || skills.get()
                        key=|skill| skill.id
                        children=|skill| { let value = skill.name.clone(); view! { <option value=value>{skill.name}</option> } }
                    />
                </select>
                <button class="btn btn-outline-secondary" on:click=on_clear>
                    "Clear Filters"
                </button>
            </div>
            <Show
                when=move || !store.with(|s| s.mentors.loading)
                fallback=|| view! { <p class="text-center py-5">"Loading mentors..."</p> }
            >
                {move || {
                    let list = store.with(|s| s.mentors.list.clone());
                    if list.is_empty() {
                        view! { <p class="text-muted text-center py-5">"No mentors found. Try adjusting your filters."</p> }
                            .into_any()
                    } else {
                        view! {
                            <div class="finder-page__grid">
                                {list.into_iter().map(|mentor| view! { <MentorCard mentor=mentor /> }).collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
