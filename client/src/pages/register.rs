//! Account registration page.
//!
//! Validation errors come back keyed by field and render under the matching
//! input; keys with no input (e.g. `non_field_errors`) render in the banner.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::actions;
use crate::error::ErrorPayload;
use crate::net::api::AppClient;
use crate::net::types::RegisterRequest;
use crate::routing::{Route, LOGIN};
use crate::state::auth::AuthAction;
use crate::state::store::{Dispatch, Store};
use crate::util::auth::install_route_guard;

pub const FORM_FIELDS: [&str; 6] = ["username", "email", "first_name", "last_name", "password", "password2"];

/// Message for one form field, if the server flagged it.
pub fn field_error(error: Option<&ErrorPayload>, field: &str) -> Option<String> {
    error?
        .field_lines()
        .into_iter()
        .find_map(|(key, msg)| (key == field).then_some(msg))
}

/// Banner text: a plain message, or entries for keys with no form input.
pub fn banner_error(error: Option<&ErrorPayload>) -> Option<String> {
    match error? {
        ErrorPayload::Message(msg) => Some(msg.clone()),
        fields @ ErrorPayload::Fields(_) => {
            let rest: Vec<String> = fields
                .field_lines()
                .into_iter()
                .filter(|(key, _)| !FORM_FIELDS.contains(&key.as_str()))
                .map(|(key, msg)| format!("{key}: {msg}"))
                .collect();
            (!rest.is_empty()).then(|| rest.join(" | "))
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let client = expect_context::<AppClient>();
    let navigate = use_navigate();
    install_route_guard(Route::Register, store, navigate.clone());
    on_cleanup(move || store.dispatch(AuthAction::ClearError.into()));

    let form = RwSignal::new(RegisterRequest::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if store.with_untracked(|s| s.auth.is_loading()) {
            return;
        }
        let body = form.get_untracked();
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if actions::auth::register(&client, &store, &body).await.is_ok() {
                navigate(LOGIN, NavigateOptions::default());
            }
        });
    };

    let input = move |label: &'static str, field: &'static str, kind: &'static str| {
        view! {
            <label class="form-label">
                {label}
                <input
                    class="form-control"
                    type=kind
                    name=field
                    required=matches!(field, "username" | "email" | "password" | "password2")
                    prop:value=move || form.with(|f| read_field(f, field).to_owned())
                    on:input=move |ev| form.update(|f| write_field(f, field, event_target_value(&ev)))
                />
                {move || {
                    store
                        .with(|s| field_error(s.auth.error.as_ref(), field))
                        .map(|msg| view! { <div class="invalid-feedback d-block">{msg}</div> })
                }}
            </label>
        }
    };

    view! {
        <div class="container">
            <div class="card auth-card">
                <div class="card-body p-4">
                    <h2 class="text-center mb-4">"Create Your Account"</h2>
                    {move || {
                        store
                            .with(|s| banner_error(s.auth.error.as_ref()))
                            .map(|msg| view! { <div class="alert alert-danger">{msg}</div> })
                    }}
                    <form on:submit=on_submit>
                        {input("Username", "username", "text")}
                        {input("Email", "email", "email")}
                        {input("First Name", "first_name", "text")}
                        {input("Last Name", "last_name", "text")}
                        {input("Password", "password", "password")}
                        {input("Confirm Password", "password2", "password")}
                        <button
                            class="btn btn-dark w-100"
                            type="submit"
                            disabled=move || store.with(|s| s.auth.is_loading())
                        >
                            {move || if store.with(|s| s.auth.is_loading()) { "Creating Account..." } else { "Register" }}
                        </button>
                    </form>
                    <p class="text-center mt-3">
                        "Already have an account? "
                        <a href=LOGIN>"Login here"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}

fn read_field<'a>(form: &'a RegisterRequest, field: &str) -> &'a str {
    match field {
        "username" => &form.username,
        "email" => &form.email,
        "first_name" => &form.first_name,
        "last_name" => &form.last_name,
        "password" => &form.password,
        "password2" => &form.password2,
        _ => "",
    }
}

fn write_field(form: &mut RegisterRequest, field: &str, value: String) {
    match field {
        "username" => form.username = value,
        "email" => form.email = value,
        "first_name" => form.first_name = value,
        "last_name" => form.last_name = value,
        "password" => form.password = value,
        "password2" => form.password2 = value,
        _ => {}
    }
}
