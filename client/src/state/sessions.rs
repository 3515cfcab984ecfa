//! Session lists for the dashboard.
//!
//! DESIGN
//! ======
//! Fetched sessions are split into `upcoming` (requested, accepted) and `past`
//! (completed, cancelled). Accept, complete and meeting-link updates patch
//! the affected entry in place; callers refetch afterwards to converge on the
//! server's view.

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use crate::error::ErrorPayload;
use crate::net::types::Session;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionsState {
    pub upcoming: Vec<Session>,
    pub past: Vec<Session>,
    pub loading: bool,
    pub creating: bool,
    pub error: Option<ErrorPayload>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionsAction {
    FetchPending,
    FetchFulfilled(Vec<Session>),
    FetchRejected(ErrorPayload),
    CreatePending,
    CreateFulfilled(Session),
    CreateRejected(ErrorPayload),
    AcceptFulfilled(Session),
    CompleteFulfilled(Session),
    RateFulfilled,
    MeetingUrlFulfilled(Session),
    ClearError,
}

/// Split sessions into `(upcoming, past)` preserving order.
pub fn partition_sessions(sessions: Vec<Session>) -> (Vec<Session>, Vec<Session>) {
    sessions.into_iter().partition(|s| s.status.is_upcoming())
}

fn replace_by_id(list: &mut [Session], updated: &Session) -> bool {
    match list.iter_mut().find(|s| s.id == updated.id) {
        Some(slot) => {
            *slot = updated.clone();
            true
        }
        None => false,
    }
}

pub fn reduce(state: &mut SessionsState, action: SessionsAction) {
    match action {
        SessionsAction::FetchPending => {
            state.loading = true;
            state.error = None;
        }
        SessionsAction::FetchFulfilled(sessions) => {
            state.loading = false;
            let (upcoming, past) = partition_sessions(sessions);
            state.upcoming = upcoming;
            state.past = past;
        }
        SessionsAction::FetchRejected(error) => {
            state.loading = false;
            state.error = Some(error);
        }
        SessionsAction::CreatePending => {
            state.creating = true;
            state.error = None;
        }
        SessionsAction::CreateFulfilled(_) => {
            state.creating = false;
        }
        SessionsAction::CreateRejected(error) => {
            state.creating = false;
            state.error = Some(error);
        }
        SessionsAction::AcceptFulfilled(updated) => {
            replace_by_id(&mut state.upcoming, &updated);
        }
        SessionsAction::CompleteFulfilled(updated) => {
            state.upcoming.retain(|s| s.id != updated.id);
            if !replace_by_id(&mut state.past, &updated) {
                state.past.insert(0, updated);
            }
        }
        SessionsAction::RateFulfilled | SessionsAction::ClearError => {
            state.error = None;
        }
        SessionsAction::MeetingUrlFulfilled(updated) => {
            replace_by_id(&mut state.upcoming, &updated);
            replace_by_id(&mut state.past, &updated);
        }
    }
}
