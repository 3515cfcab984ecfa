//! Username/password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::actions;
use crate::net::api::AppClient;
use crate::net::types::LoginRequest;
use crate::routing::{Route, DASHBOARD, REGISTER};
use crate::state::auth::AuthAction;
use crate::state::store::{Dispatch, Store};
use crate::util::auth::install_route_guard;

/// Trimmed credentials, or the message to show when either is blank.
pub fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginRequest {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let client = expect_context::<AppClient>();
    let navigate = use_navigate();
    install_route_guard(Route::Login, store, navigate.clone());
    on_cleanup(move || store.dispatch(AuthAction::ClearError.into()));

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let hint = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if store.with_untracked(|s| s.auth.is_loading()) {
            return;
        }
        let credentials = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(c) => c,
            Err(msg) => {
                hint.set(Some(msg));
                return;
            }
        };
        hint.set(None);
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if actions::auth::login(&client, &store, &credentials).await.is_ok() {
                navigate(DASHBOARD, NavigateOptions::default());
            }
        });
    };

    let error = move || {
        store.with(|s| {
            s.auth
                .error
                .as_ref()
                .map(|e| e.detail().unwrap_or_else(|| "Login failed. Please check your credentials.".to_owned()))
        })
    };

    view! {
        <div class="container">
            <div class="card auth-card">
                <div class="card-body p-4">
                    <h2 class="text-center mb-4">"Sign In to SkillSync"</h2>
                    {move || {
                        hint.get()
                            .map(str::to_owned)
                            .or_else(error)
                            .map(|msg| view! { <div class="alert alert-danger">{msg}</div> })
                    }}
                    <form on:submit=on_submit>
                        <label class="form-label">
                            "Username"
                            <input
                                class="form-control"
                                type="text"
                                placeholder="Enter username"
                                required
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-label">
                            "Password"
                            <input
                                class="form-control"
                                type="password"
                                placeholder="Enter password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <button
                            class="btn btn-dark w-100"
                            type="submit"
                            disabled=move || store.with(|s| s.auth.is_loading())
                        >
                            {move || if store.with(|s| s.auth.is_loading()) { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                    <p class="text-center mt-3">
                        "Don't have an account? "
                        <a href=REGISTER>"Register here"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
