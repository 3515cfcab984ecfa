//! Mentor search state for the finder and mentor-profile pages.

#[cfg(test)]
#[path = "mentors_test.rs"]
mod mentors_test;

use crate::error::ErrorPayload;
use crate::net::types::{MentorFilters, User};

/// Partial filter update; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub skill: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
}

/// Mentor list, the mentor being viewed, and the active filters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MentorsState {
    pub list: Vec<User>,
    pub current_mentor: Option<User>,
    pub loading: bool,
    pub error: Option<ErrorPayload>,
    pub filters: MentorFilters,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MentorsAction {
    SetFilters(FilterPatch),
    ClearFilters,
    FetchPending,
    FetchFulfilled(Vec<User>),
    FetchRejected(ErrorPayload),
    FetchOnePending,
    FetchOneFulfilled(User),
    FetchOneRejected(ErrorPayload),
}

pub fn reduce(state: &mut MentorsState, action: MentorsAction) {
    match action {
        MentorsAction::SetFilters(patch) => {
            if let Some(skill) = patch.skill {
                state.filters.skill = skill;
            }
            if let Some(search) = patch.search {
                state.filters.search = search;
            }
            if let Some(page) = patch.page {
                state.filters.page = page;
            }
        }
        MentorsAction::ClearFilters => {
            state.filters = MentorFilters::default();
        }
        MentorsAction::FetchPending => {
            state.loading = true;
            state.error = None;
        }
        MentorsAction::FetchFulfilled(list) => {
            state.loading = false;
            state.list = list;
        }
        MentorsAction::FetchOnePending => {
            state.loading = true;
        }
        MentorsAction::FetchOneFulfilled(mentor) => {
            state.loading = false;
            state.current_mentor = Some(mentor);
        }
        MentorsAction::FetchRejected(error) | MentorsAction::FetchOneRejected(error) => {
            state.loading = false;
            state.error = Some(error);
        }
    }
}
