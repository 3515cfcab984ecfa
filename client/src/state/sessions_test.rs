use super::*;
use crate::net::types::SessionStatus;

// =============================================================
// Helpers
// =============================================================

fn session(id: i64, status: SessionStatus) -> Session {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "status": status,
        "mentor": { "id": 1, "username": "mia" },
        "requester": { "id": 2, "username": "leo" }
    }))
    .unwrap()
}

fn ids(list: &[Session]) -> Vec<i64> {
    list.iter().map(|s| s.id).collect()
}

// =============================================================
// Partition
// =============================================================

#[test]
fn partition_splits_by_status() {
    let all = vec![
        session(1, SessionStatus::Requested),
        session(2, SessionStatus::Accepted),
        session(3, SessionStatus::Completed),
        session(4, SessionStatus::Cancelled),
    ];
    let (upcoming, past) = partition_sessions(all);
    assert_eq!(ids(&upcoming), vec![1, 2]);
    assert_eq!(ids(&past), vec![3, 4]);
}

#[test]
fn partition_is_total_and_disjoint() {
    let statuses = [
        SessionStatus::Completed,
        SessionStatus::Requested,
        SessionStatus::Cancelled,
        SessionStatus::Accepted,
        SessionStatus::Requested,
        SessionStatus::Completed,
    ];
    let all: Vec<Session> = statuses
        .iter()
        .enumerate()
        .map(|(i, status)| session(i64::try_from(i).unwrap(), *status))
        .collect();
    let (upcoming, past) = partition_sessions(all.clone());

    assert_eq!(upcoming.len() + past.len(), all.len());
    for s in &upcoming {
        assert!(!past.iter().any(|p| p.id == s.id));
        assert!(matches!(s.status, SessionStatus::Requested | SessionStatus::Accepted));
    }
    for s in &past {
        assert!(matches!(s.status, SessionStatus::Completed | SessionStatus::Cancelled));
    }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn fetch_fulfilled_partitions_into_lists() {
    let mut state = SessionsState::default();
    reduce(&mut state, SessionsAction::FetchPending);
    assert!(state.loading);
    reduce(
        &mut state,
        SessionsAction::FetchFulfilled(vec![
            session(1, SessionStatus::Completed),
            session(2, SessionStatus::Accepted),
        ]),
    );
    assert!(!state.loading);
    assert_eq!(ids(&state.upcoming), vec![2]);
    assert_eq!(ids(&state.past), vec![1]);
}

#[test]
fn fetch_rejected_stores_error() {
    let mut state = SessionsState::default();
    reduce(&mut state, SessionsAction::FetchPending);
    reduce(&mut state, SessionsAction::FetchRejected("Failed to fetch sessions".into()));
    assert!(!state.loading);
    assert_eq!(state.error, Some("Failed to fetch sessions".into()));
}

#[test]
fn create_lifecycle_toggles_creating() {
    let mut state = SessionsState::default();
    reduce(&mut state, SessionsAction::CreatePending);
    assert!(state.creating);
    reduce(&mut state, SessionsAction::CreateRejected("nope".into()));
    assert!(!state.creating);
    assert!(state.error.is_some());

    reduce(&mut state, SessionsAction::CreatePending);
    assert_eq!(state.error, None);
    reduce(&mut state, SessionsAction::CreateFulfilled(session(9, SessionStatus::Requested)));
    assert!(!state.creating);
}

#[test]
fn accept_patches_only_matching_upcoming_entry() {
    let mut state = SessionsState {
        upcoming: vec![session(1, SessionStatus::Requested), session(2, SessionStatus::Requested)],
        ..SessionsState::default()
    };
    reduce(&mut state, SessionsAction::AcceptFulfilled(session(2, SessionStatus::Accepted)));
    assert_eq!(state.upcoming[0].status, SessionStatus::Requested);
    assert_eq!(state.upcoming[1].status, SessionStatus::Accepted);
}

#[test]
fn accept_of_unknown_session_changes_nothing() {
    let mut state = SessionsState {
        upcoming: vec![session(1, SessionStatus::Requested)],
        ..SessionsState::default()
    };
    let before = state.clone();
    reduce(&mut state, SessionsAction::AcceptFulfilled(session(7, SessionStatus::Accepted)));
    assert_eq!(state, before);
}

#[test]
fn complete_moves_session_from_upcoming_to_front_of_past() {
    let mut state = SessionsState {
        upcoming: vec![session(1, SessionStatus::Accepted), session(2, SessionStatus::Accepted)],
        past: vec![session(3, SessionStatus::Completed)],
        ..SessionsState::default()
    };
    reduce(&mut state, SessionsAction::CompleteFulfilled(session(1, SessionStatus::Completed)));
    assert_eq!(ids(&state.upcoming), vec![2]);
    assert_eq!(ids(&state.past), vec![1, 3]);
    assert_eq!(state.past[0].status, SessionStatus::Completed);
}

#[test]
fn complete_updates_existing_past_entry_in_place() {
    let mut state = SessionsState {
        past: vec![session(3, SessionStatus::Cancelled), session(1, SessionStatus::Cancelled)],
        ..SessionsState::default()
    };
    reduce(&mut state, SessionsAction::CompleteFulfilled(session(1, SessionStatus::Completed)));
    assert_eq!(ids(&state.past), vec![3, 1]);
    assert_eq!(state.past[1].status, SessionStatus::Completed);
}

#[test]
fn meeting_url_update_patches_both_lists() {
    let mut with_link = session(1, SessionStatus::Accepted);
    with_link.meeting_url = "https://zoom.us/j/1".to_owned();
    let mut state = SessionsState {
        upcoming: vec![session(1, SessionStatus::Accepted)],
        past: vec![session(2, SessionStatus::Completed)],
        ..SessionsState::default()
    };
    reduce(&mut state, SessionsAction::MeetingUrlFulfilled(with_link));
    assert!(state.upcoming[0].has_meeting_link());
    assert!(!state.past[0].has_meeting_link());
}

#[test]
fn rate_fulfilled_clears_error() {
    let mut state = SessionsState {
        error: Some("x".into()),
        ..SessionsState::default()
    };
    reduce(&mut state, SessionsAction::RateFulfilled);
    assert_eq!(state.error, None);
}
