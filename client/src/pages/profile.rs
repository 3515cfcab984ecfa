//! Own-profile editor.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::net::api::AppClient;
use crate::net::types::{ProfileUpdate, Skill};
use crate::routing::Route;
use crate::state::store::Store;
use crate::util::auth::install_route_guard;

const SAVED_MESSAGE: &str = "Profile updated successfully!";
#[cfg(feature = "hydrate")]
const SAVED_MESSAGE_MS: u64 = 3000;

/// Add `id` when absent, remove it when present.
pub fn toggle_skill(ids: &mut Vec<i64>, id: i64) {
    if let Some(pos) = ids.iter().position(|existing| *existing == id) {
        ids.remove(pos);
    } else {
        ids.push(id);
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = expect_context::<Store>();
    let client = expect_context::<AppClient>();
    install_route_guard(Route::Profile, store, use_navigate());

    let form = RwSignal::new(ProfileUpdate::default());
    let skills = RwSignal::new(Vec::<Skill>::new());
    let saved = RwSignal::new(false);

    // Prefill whenever the loaded user changes.
    let user = store.select(|s| s.auth.user.clone());
    Effect::new(move || {
        if let Some(u) = user.get() {
            form.set(ProfileUpdate::from_user(&u));
        }
    });

    let ready = store.select(|s| s.auth.has_token);
    let skills_requested = RwSignal::new(false);
    {
        let client = client.clone();
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
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        saved.set(false);
        let body = form.get_untracked();
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if actions::auth::update_profile(&client, &store, &body).await.is_ok() {
                saved.set(true);
                #[cfg(feature = "hydrate")]
                {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(SAVED_MESSAGE_MS)).await;
                    saved.set(false);
                }
            }
        });
    };

    let saving = move || store.with(|s| s.auth.is_loading());

    view! {
        <div class="container profile-page">
            <Show
                when=move || user.with(Option::is_some)
                fallback=|| view! { <p class="text-center text-muted py-5">"Loading..."</p> }
            >
                <div class="card">
                    <div class="card-body p-4">
                        <h2 class="mb-4">"Edit Profile"</h2>
                        <Show when=move || saved.get()>
                            <div class="alert alert-success">{SAVED_MESSAGE}</div>
                        </Show>
                        {move || {
                            store
                                .with(|s| s.auth.error.as_ref().map(ToString::to_string))
                                .map(|msg| view! { <div class="alert alert-danger">{msg}</div> })
                        }}
                        <form on:submit=on_submit.clone()>
                            <div class="profile-page__names">
                                <label class="form-label">
                                    "First Name"
                                    <input
                                        class="form-control"
                                        type="text"
                                        prop:value=move || form.with(|f| f.first_name.clone())
                                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                                    />
                                </label>
                                <label class="form-label">
                                    "Last Name"
                                    <input
                                        class="form-control"
                                        type="text"
                                        prop:value=move || form.with(|f| f.last_name.clone())
                                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                                    />
                                </label>
                            </div>
                            <label class="form-label">
                                "Email"
                                <input
                                    class="form-control"
                                    type="email"
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                />
                            </label>
                            <label class="form-label">
                                "Bio"
                                <textarea
                                    class="form-control"
                                    rows="4"
                                    placeholder="Tell others about yourself..."
                                    prop:value=move || form.with(|f| f.bio.clone())
                                    on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
                                ></textarea>
                            </label>
                            <label class="form-check">
                                <input
                                    class="form-check-input"
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.is_mentor)
                                    on:change=move |ev| form.update(|f| f.is_mentor = event_target_checked(&ev))
                                />
                                "I want to be a mentor"
                            </label>
                            <p class="text-muted small">"Check this if you want to offer mentorship sessions"</p>
                            <div class="form-label">"Skills"</div>
                            <div class="profile-page__skills border rounded p-3">
                                <For
                                    each=move || skills.get()
                                    key=|skill| skill.id
                                    children=move |skill| {
                                        let id = skill.id;
                                        view! {
                                            <label class="form-check mb-2">
                                                <input
                                                    class="form-check-input"
                                                    type="checkbox"
                                                    prop:checked=move || form.with(|f| f.skill_ids.contains(&id))
                                                    on:change=move |_| form.update(|f| toggle_skill(&mut f.skill_ids, id))
                                                />
                                                {skill.name}
                                            </label>
                                        }
                                    }
                                />
                            </div>
                            <p class="text-muted small">"Select skills you can teach or want to learn"</p>
                            <button class="btn btn-dark" type="submit" disabled=saving>
                                {move || if saving() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
