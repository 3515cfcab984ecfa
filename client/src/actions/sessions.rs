//! Session lifecycle handlers.
//!
//! Mutating handlers surface a toast on success and failure. Failure toasts
//! show the server's `detail`/`error` entry when present.

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use leptos::logging::warn;

use crate::error::{ApiError, ErrorPayload};
use crate::net::api;
use crate::net::http::{ApiClient, Transport};
use crate::net::types::{CreateSessionRequest, Rating, RatingRequest, Session};
use crate::state::notifications::NotificationDraft;
use crate::state::sessions::SessionsAction;
use crate::state::store::Dispatch;

fn failure<D: Dispatch>(store: &D, error: ApiError, fallback: &str, title: &str) -> ErrorPayload {
    warn!("{fallback}: {error}");
    let payload = error.into_payload(fallback);
    let message = payload.detail().unwrap_or_else(|| payload.display_message());
    store.notify(NotificationDraft::danger(title, message));
    payload
}

pub async fn fetch_sessions<T: Transport, D: Dispatch>(
    client: &ApiClient<T>,
    store: &D,
    kind: Option<&str>,
) -> Result<(), ErrorPayload> {
    store.dispatch(SessionsAction::FetchPending.into());
    match api::fetch_sessions(client, kind).await {
        Ok(sessions) => {
            store.dispatch(SessionsAction::FetchFulfilled(sessions).into());
            Ok(())
        }
        Err(e) => {
            let payload = e.into_payload("Failed to fetch sessions");
            store.dispatch(SessionsAction::FetchRejected(payload.clone()).into());
            Err(payload)
        }
    }
}

pub async fn create_session<T: Transport, D: Dispatch>(
    client: &ApiClient<T>,
    store: &D,
    body: &CreateSessionRequest,
) -> Result<Session, ErrorPayload> {
    store.dispatch(SessionsAction::CreatePending.into());
    match api::create_session(client, body).await {
        Ok(session) => {
            store.dispatch(SessionsAction::CreateFulfilled(session.clone()).into());
            store.notify(NotificationDraft::success(
                "Session Requested",
                "Your session request has been sent to the mentor.",
            ));
            Ok(session)
        }
        Err(e) => {
            let payload = failure(store, e, "Failed to create session", "Request Failed");
            store.dispatch(SessionsAction::CreateRejected(payload.clone()).into());
            Err(payload)
        }
    }
}

pub async fn accept_session<T: Transport, D: Dispatch>(client: &ApiClient<T>, store: &D, id: i64) -> Result<Session, ErrorPayload> {
    match api::accept_session(client, id).await {
        Ok(session) => {
            store.dispatch(SessionsAction::AcceptFulfilled(session.clone()).into());
            store.notify(NotificationDraft::success(
                "Session Accepted",
                "Meeting link is ready. You can join from your dashboard.",
            ));
            Ok(session)
        }
        Err(e) => Err(failure(store, e, "Failed to accept session", "Accept Failed")),
    }
}

pub async fn complete_session<T: Transport, D: Dispatch>(client: &ApiClient<T>, store: &D, id: i64) -> Result<Session, ErrorPayload> {
    match api::complete_session(client, id).await {
        Ok(session) => {
            store.dispatch(SessionsAction::CompleteFulfilled(session.clone()).into());
            store.notify(NotificationDraft::success("Session Completed", "Session marked as completed."));
            Ok(session)
        }
        Err(e) => Err(failure(store, e, "Failed to complete session", "Completion Failed")),
    }
}

pub async fn rate_session<T: Transport, D: Dispatch>(
    client: &ApiClient<T>,
    store: &D,
    body: &RatingRequest,
) -> Result<Rating, ErrorPayload> {
    match api::rate_session(client, body).await {
        Ok(rating) => {
            store.dispatch(SessionsAction::RateFulfilled.into());
            store.notify(NotificationDraft::success(
                "Thanks for the Review",
                "Your feedback has been submitted successfully.",
            ));
            Ok(rating)
        }
        Err(e) => Err(failure(store, e, "Failed to rate session", "Review Failed")),
    }
}

/// Set or replace the join link. No toast; the card shows the new link.
pub async fn update_meeting_url<T: Transport, D: Dispatch>(
    client: &ApiClient<T>,
    store: &D,
    id: i64,
    meeting_url: &str,
) -> Result<Session, ErrorPayload> {
    match api::update_meeting_url(client, id, meeting_url).await {
        Ok(session) => {
            store.dispatch(SessionsAction::MeetingUrlFulfilled(session.clone()).into());
            Ok(session)
        }
        Err(e) => {
            warn!("meeting link update for session {id} failed: {e}");
            Err(e.into_payload("Failed to update meeting link"))
        }
    }
}
