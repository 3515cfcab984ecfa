//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Links depend on whether a credential is stored;
//! the username and role badge appear once the current user has loaded.

use leptos::prelude::*;

use crate::actions;
use crate::net::api::AppClient;
use crate::routing::{DASHBOARD, FINDER, HOME, LOGIN, PROFILE, REGISTER};
use crate::state::store::Store;

#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<Store>();
    let client = expect_context::<AppClient>();

    let signed_in = move || store.with(|s| s.auth.has_token);
    let is_mentor = move || store.with(|s| s.auth.user.as_ref().is_some_and(|u| u.profile.is_mentor));
    let username = move || store.with(|s| s.auth.user.as_ref().map(|u| u.username.clone()));

    let on_logout = move |_| actions::auth::logout(&client, &store);

    view! {
        <nav class="navbar navbar-dark bg-dark mb-4">
            <div class="container">
                <a class="navbar-brand" href=HOME>"SkillSync"</a>
                <div class="navbar-nav me-auto">
                    <Show when=signed_in>
                        <a class="nav-link" href=DASHBOARD>
                            {move || if is_mentor() { "Mentor Dashboard" } else { "Dashboard" }}
                        </a>
                        <a class="nav-link" href=FINDER>"Find Mentors"</a>
                    </Show>
                </div>
                <div class="navbar-nav">
                    <Show
                        when=move || signed_in() && username().is_some()
                        fallback=|| {
                            view! {
                                <a class="nav-link" href=LOGIN>"Login"</a>
                                <a class="nav-link" href=REGISTER>"Register"</a>
                            }
                        }
                    >
                        <a class="nav-link" href=PROFILE>
                            {move || username().unwrap_or_default()}
                            <span class="ms-2 badge bg-secondary">
                                {move || if is_mentor() { "Mentor" } else { "Learner" }}
                            </span>
                        </a>
                        <a class="btn btn-outline-light btn-sm" href=LOGIN on:click=on_logout.clone()>
                            "Logout"
                        </a>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
