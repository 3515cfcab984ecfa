//! Mentor search and lookup handlers.

#[cfg(test)]
#[path = "mentors_test.rs"]
mod mentors_test;

use leptos::logging::warn;

use crate::error::ErrorPayload;
use crate::net::api;
use crate::net::http::{ApiClient, Transport};
use crate::net::types::{MentorFilters, Rating, Skill, User};
use crate::state::mentors::MentorsAction;
use crate::state::store::Dispatch;

pub async fn fetch_mentors<T: Transport, D: Dispatch>(
    client: &ApiClient<T>,
    store: &D,
    filters: &MentorFilters,
) -> Result<Vec<User>, ErrorPayload> {
    store.dispatch(MentorsAction::FetchPending.into());
    match api::fetch_mentors(client, filters).await {
        Ok(list) => {
            store.dispatch(MentorsAction::FetchFulfilled(list.clone()).into());
            Ok(list)
        }
        Err(e) => {
            let payload = e.into_payload("Failed to fetch mentors");
            store.dispatch(MentorsAction::FetchRejected(payload.clone()).into());
            Err(payload)
        }
    }
}

pub async fn fetch_mentor<T: Transport, D: Dispatch>(client: &ApiClient<T>, store: &D, id: i64) -> Result<User, ErrorPayload> {
    store.dispatch(MentorsAction::FetchOnePending.into());
    match api::fetch_mentor(client, id).await {
        Ok(mentor) => {
            store.dispatch(MentorsAction::FetchOneFulfilled(mentor.clone()).into());
            Ok(mentor)
        }
        Err(e) => {
            let payload = e.into_payload("Failed to fetch mentor");
            store.dispatch(MentorsAction::FetchOneRejected(payload.clone()).into());
            Err(payload)
        }
    }
}

/// Skill catalogue for pickers. Empty on failure.
pub async fn load_skills<T: Transport>(client: &ApiClient<T>) -> Vec<Skill> {
    api::fetch_skills(client).await.unwrap_or_else(|e| {
        warn!("skills fetch failed: {e}");
        Vec::new()
    })
}

/// Reviews for a mentor. Empty on failure.
pub async fn load_mentor_ratings<T: Transport>(client: &ApiClient<T>, mentor_id: i64) -> Vec<Rating> {
    api::fetch_mentor_ratings(client, mentor_id).await.unwrap_or_else(|e| {
        warn!("ratings fetch for mentor {mentor_id} failed: {e}");
        Vec::new()
    })
}
