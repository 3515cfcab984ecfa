use futures::executor::block_on;

use super::*;
use crate::actions::recorder::Recorder;
use crate::net::api::IDEMPOTENCY_HEADER;
use crate::net::testing::scripted_client;
use crate::net::types::SessionStatus;
use crate::state::notifications::NotificationVariant;

fn session_body(id: i64, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "status": status,
        "mentor": { "id": 1, "username": "mia" },
        "requester": { "id": 2, "username": "leo" },
        "duration_minutes": 30
    })
}

fn create_request() -> CreateSessionRequest {
    CreateSessionRequest {
        mentor_id: 1,
        skill_id: Some(3),
        duration_minutes: 30,
        description: "borrow checker".to_owned(),
        scheduled_time: "2030-05-01T09:30".to_owned(),
    }
}

// =============================================================
// Fetch
// =============================================================

#[test]
fn fetch_partitions_into_upcoming_and_past() {
    let (client, transport, session) = scripted_client();
    session.store_tokens("a1", "r1");
    transport.respond_json(
        200,
        &serde_json::json!([
            session_body(1, "requested"),
            session_body(2, "completed"),
            session_body(3, "accepted"),
            session_body(4, "cancelled")
        ]),
    );
    let store = Recorder::new();

    block_on(fetch_sessions(&client, &store, None)).unwrap();

    let state = store.state().sessions;
    let upcoming: Vec<i64> = state.upcoming.iter().map(|s| s.id).collect();
    let past: Vec<i64> = state.past.iter().map(|s| s.id).collect();
    assert_eq!(upcoming, vec![1, 3]);
    assert_eq!(past, vec![2, 4]);
    assert!(!transport.requests()[0].url.contains("type="));
}

#[test]
fn fetch_passes_type_filter() {
    let (client, transport, _) = scripted_client();
    transport.respond_json(200, &serde_json::json!({ "results": [] }));
    let store = Recorder::new();

    block_on(fetch_sessions(&client, &store, Some("upcoming"))).unwrap();
    assert!(transport.requests()[0].url.ends_with("sessions/?type=upcoming"));
}

#[test]
fn fetch_failure_uses_fallback_for_empty_body() {
    let (client, transport, _) = scripted_client();
    transport.respond(500, "");
    let store = Recorder::new();

    let err = block_on(fetch_sessions(&client, &store, None)).unwrap_err();
    assert_eq!(err, ErrorPayload::from("Failed to fetch sessions"));
    assert!(!store.state().sessions.loading);
}

// =============================================================
// Create
// =============================================================

#[test]
fn create_sends_idempotency_key_and_notifies() {
    let (client, transport, _) = scripted_client();
    transport.respond_json(201, &session_body(10, "requested"));
    let store = Recorder::new();

    block_on(create_session(&client, &store, &create_request())).unwrap();

    let key = transport.requests()[0].header(IDEMPOTENCY_HEADER).map(str::to_owned);
    assert_eq!(key, Some(api::session_idempotency_key(&create_request())));
    assert!(!store.state().sessions.creating);
    let notes = store.notifications();
    assert_eq!(notes[0].title, "Session Requested");
    assert_eq!(notes[0].variant, NotificationVariant::Success);
}

#[test]
fn resubmitted_create_reuses_key() {
    let (client, transport, _) = scripted_client();
    transport
        .respond_json(201, &session_body(10, "requested"))
        .respond_json(200, &session_body(10, "requested"));
    let store = Recorder::new();

    block_on(create_session(&client, &store, &create_request())).unwrap();
    block_on(create_session(&client, &store, &create_request())).unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].header(IDEMPOTENCY_HEADER), requests[1].header(IDEMPOTENCY_HEADER));
}

#[test]
fn create_failure_shows_detail_in_toast() {
    let (client, transport, _) = scripted_client();
    transport.respond_json(400, &serde_json::json!({ "detail": "Mentor unavailable" }));
    let store = Recorder::new();

    block_on(create_session(&client, &store, &create_request())).unwrap_err();

    let notes = store.notifications();
    assert_eq!(notes[0].title, "Request Failed");
    assert_eq!(notes[0].message, "Mentor unavailable");
    assert_eq!(notes[0].variant, NotificationVariant::Danger);
    let state = store.state().sessions;
    assert!(!state.creating);
    assert!(state.error.is_some());
}

// =============================================================
// Accept / complete / rate
// =============================================================

#[test]
fn accept_patches_upcoming_entry() {
    let (client, transport, _) = scripted_client();
    transport
        .respond_json(200, &serde_json::json!([session_body(5, "requested")]))
        .respond_json(200, &session_body(5, "accepted"));
    let store = Recorder::new();

    block_on(fetch_sessions(&client, &store, None)).unwrap();
    block_on(accept_session(&client, &store, 5)).unwrap();

    assert!(transport.requests()[1].url.ends_with("sessions/5/accept/"));
    assert_eq!(store.state().sessions.upcoming[0].status, SessionStatus::Accepted);
    assert_eq!(store.notifications()[0].title, "Session Accepted");
}

#[test]
fn accept_forbidden_uses_error_key() {
    let (client, transport, _) = scripted_client();
    transport.respond_json(403, &serde_json::json!({ "error": "Only the mentor can accept." }));
    let store = Recorder::new();

    block_on(accept_session(&client, &store, 5)).unwrap_err();

    let notes = store.notifications();
    assert_eq!(notes[0].title, "Accept Failed");
    assert_eq!(notes[0].message, "Only the mentor can accept.");
}

#[test]
fn complete_moves_session_to_past() {
    let (client, transport, _) = scripted_client();
    transport
        .respond_json(200, &serde_json::json!([session_body(5, "accepted"), session_body(6, "accepted")]))
        .respond_json(200, &session_body(5, "completed"));
    let store = Recorder::new();

    block_on(fetch_sessions(&client, &store, None)).unwrap();
    block_on(complete_session(&client, &store, 5)).unwrap();

    let state = store.state().sessions;
    assert_eq!(state.upcoming.iter().map(|s| s.id).collect::<Vec<_>>(), vec![6]);
    assert_eq!(state.past[0].id, 5);
    assert_eq!(store.notifications()[0].title, "Session Completed");
}

#[test]
fn complete_failure_notifies_without_touching_lists() {
    let (client, transport, _) = scripted_client();
    transport.respond_json(400, &serde_json::json!({ "error": "Session is not accepted." }));
    let store = Recorder::new();

    block_on(complete_session(&client, &store, 5)).unwrap_err();

    assert_eq!(store.notifications()[0].title, "Completion Failed");
    assert!(store.state().sessions.past.is_empty());
}

#[test]
fn rate_success_and_failure_notify() {
    let (client, transport, _) = scripted_client();
    transport
        .respond_json(201, &serde_json::json!({ "id": 1, "score": 5 }))
        .respond_json(400, &serde_json::json!({ "session_id": ["Already rated."] }));
    let store = Recorder::new();
    let body = RatingRequest {
        session_id: 5,
        score: 5,
        comment: "great".to_owned(),
    };

    block_on(rate_session(&client, &store, &body)).unwrap();
    let err = block_on(rate_session(&client, &store, &body)).unwrap_err();

    let notes = store.notifications();
    assert_eq!(notes[0].title, "Thanks for the Review");
    assert_eq!(notes[1].title, "Review Failed");
    assert_eq!(notes[1].message, "session_id: Already rated.");
    assert_eq!(err.display_message(), "session_id: Already rated.");
}

#[test]
fn mutations_stay_silent_when_notifications_disabled() {
    let (client, transport, _) = scripted_client();
    transport
        .respond_json(200, &session_body(5, "accepted"))
        .respond(500, "");
    let store = Recorder::silent();

    block_on(accept_session(&client, &store, 5)).unwrap();
    block_on(complete_session(&client, &store, 5)).unwrap_err();
    assert!(store.notifications().is_empty());
}

// =============================================================
// Meeting link
// =============================================================

#[test]
fn meeting_url_update_patches_session() {
    let (client, transport, _) = scripted_client();
    let mut updated = session_body(5, "accepted");
    updated["meeting_url"] = serde_json::json!("https://meet.example.com/abc");
    transport
        .respond_json(200, &serde_json::json!([session_body(5, "accepted")]))
        .respond_json(200, &updated);
    let store = Recorder::new();

    block_on(fetch_sessions(&client, &store, None)).unwrap();
    block_on(update_meeting_url(&client, &store, 5, "https://meet.example.com/abc")).unwrap();

    let request = &transport.requests()[1];
    assert!(request.url.ends_with("sessions/5/"));
    let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["meeting_url"], "https://meet.example.com/abc");
    assert!(store.state().sessions.upcoming[0].has_meeting_link());
    assert!(store.notifications().is_empty());
}
