//! Sign-in, registration and profile handlers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::logging::{log, warn};

use crate::error::ErrorPayload;
use crate::net::api;
use crate::net::http::{ApiClient, Transport};
use crate::net::types::{LoginRequest, ProfileUpdate, RegisterRequest, User};
use crate::state::auth::AuthAction;
use crate::state::notifications::NotificationDraft;
use crate::state::store::Dispatch;

/// Record whether credentials survived a reload, then load the user if so.
pub async fn restore_session<T: Transport, D: Dispatch>(client: &ApiClient<T>, store: &D) {
    let has_token = client.credentials().is_authenticated();
    store.dispatch(AuthAction::Restored { has_token }.into());
    if has_token {
        let _ = fetch_current_user(client, store).await;
    }
}

/// Exchange credentials for tokens, then load the signed-in user.
pub async fn login<T: Transport, D: Dispatch>(
    client: &ApiClient<T>,
    store: &D,
    credentials: &LoginRequest,
) -> Result<(), ErrorPayload> {
    store.dispatch(AuthAction::LoginPending.into());
    match api::login(client, credentials).await {
        Ok(_) => {
            log!("signed in as {}", credentials.username);
            store.dispatch(AuthAction::LoginFulfilled.into());
        }
        Err(e) => {
            let payload = e.into_payload("Login failed");
            store.dispatch(AuthAction::LoginRejected(payload.clone()).into());
            return Err(payload);
        }
    }
    // Tokens are stored even if the profile fetch fails; the guard only
    // checks for a credential.
    let _ = fetch_current_user(client, store).await;
    Ok(())
}

/// Create an account. Passwords must match before anything is sent.
pub async fn register<T: Transport, D: Dispatch>(
    client: &ApiClient<T>,
    store: &D,
    form: &RegisterRequest,
) -> Result<String, ErrorPayload> {
    if form.password != form.password2 {
        let payload = ErrorPayload::from("Passwords do not match");
        store.dispatch(AuthAction::RegisterRejected(payload.clone()).into());
        return Err(payload);
    }

    store.dispatch(AuthAction::RegisterPending.into());
    match api::register(client, form).await {
        Ok(username) => {
            store.dispatch(AuthAction::RegisterFulfilled.into());
            store.notify(NotificationDraft::success("Registration Successful", "Please login to continue."));
            Ok(username)
        }
        Err(e) => {
            let payload = e.into_payload("Registration failed");
            store.dispatch(AuthAction::RegisterRejected(payload.clone()).into());
            Err(payload)
        }
    }
}

pub async fn fetch_current_user<T: Transport, D: Dispatch>(client: &ApiClient<T>, store: &D) -> Result<User, ErrorPayload> {
    store.dispatch(AuthAction::CurrentUserPending.into());
    match api::fetch_current_user(client).await {
        Ok(user) => {
            store.dispatch(AuthAction::CurrentUserFulfilled(user.clone()).into());
            Ok(user)
        }
        Err(e) => {
            warn!("current user fetch failed: {e}");
            let payload = e.into_payload("Failed to fetch user");
            store.dispatch(AuthAction::CurrentUserRejected(payload.clone()).into());
            Err(payload)
        }
    }
}

pub async fn update_profile<T: Transport, D: Dispatch>(
    client: &ApiClient<T>,
    store: &D,
    update: &ProfileUpdate,
) -> Result<User, ErrorPayload> {
    store.dispatch(AuthAction::UpdateProfilePending.into());
    match api::update_profile(client, update).await {
        Ok(user) => {
            store.dispatch(AuthAction::UpdateProfileFulfilled(user.clone()).into());
            Ok(user)
        }
        Err(e) => {
            let payload = e.into_payload("Failed to update profile");
            store.dispatch(AuthAction::UpdateProfileRejected(payload.clone()).into());
            Err(payload)
        }
    }
}

/// Drop stored credentials and reset the auth slice.
pub fn logout<T: Transport, D: Dispatch>(client: &ApiClient<T>, store: &D) {
    api::logout(client);
    store.dispatch(AuthAction::Logout.into());
}
