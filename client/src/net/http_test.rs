use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;
use crate::net::testing::{ScriptedTransport, scripted_client};

// =============================================================
// URL + header shaping
// =============================================================

#[test]
fn join_url_inserts_single_slash() {
    assert_eq!(join_url("/api/", "mentors/"), "/api/mentors/");
    assert_eq!(join_url("/api", "/mentors/"), "/api/mentors/");
    assert_eq!(join_url("https://x.test/api/", "auth/token/refresh/"), "https://x.test/api/auth/token/refresh/");
}

#[test]
fn request_with_stored_token_carries_bearer_header() {
    let (client, transport, session) = scripted_client();
    session.store_tokens("acc-1", "ref-1");
    transport.respond(200, "[]");

    block_on(client.send(ApiRequest::get("skills/"))).unwrap();

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].header("Authorization"), Some("Bearer acc-1"));
    assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
}

#[test]
fn request_without_stored_token_has_no_authorization_header() {
    let (client, transport, _session) = scripted_client();
    transport.respond(200, "[]");

    block_on(client.send(ApiRequest::get("skills/"))).unwrap();

    assert_eq!(transport.requests()[0].header("Authorization"), None);
}

#[test]
fn query_pairs_are_encoded_and_empty_values_skipped() {
    let (client, transport, _session) = scripted_client();
    transport.respond(200, "[]");

    let request = ApiRequest::get("mentors/")
        .query("skill", "")
        .query("search", "ada lovelace&co")
        .query("page", "2");
    block_on(client.send(request)).unwrap();

    assert_eq!(transport.requests()[0].url, "/api/mentors/?search=ada+lovelace%26co&page=2");
}

#[test]
fn json_body_is_serialized() {
    let request = ApiRequest::post("ratings/")
        .json(&serde_json::json!({ "score": 5 }))
        .unwrap();
    assert_eq!(request.body.as_deref(), Some(r#"{"score":5}"#));
    assert!(!request.retried);
}

// =============================================================
// Refresh-and-retry policy
// =============================================================

#[test]
fn unauthorized_request_is_refreshed_and_retried_once() {
    let (client, transport, session) = scripted_client();
    session.store_tokens("stale", "ref-1");
    transport
        .respond(401, r#"{"detail": "Token expired"}"#)
        .respond_json(200, &serde_json::json!({ "access": "fresh" }))
        .respond(200, "[]");

    let resp = block_on(client.send(ApiRequest::get("sessions/"))).unwrap();
    assert_eq!(resp.status, 200);

    let sent = transport.requests();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0].header("Authorization"), Some("Bearer stale"));
    assert_eq!(sent[1].url, "/api/auth/token/refresh/");
    assert_eq!(sent[1].method, Method::Post);
    assert_eq!(sent[1].body.as_deref(), Some(r#"{"refresh":"ref-1"}"#));
    assert_eq!(sent[1].header("Authorization"), None);
    assert_eq!(sent[2].url, "/api/sessions/");
    assert_eq!(sent[2].header("Authorization"), Some("Bearer fresh"));
    assert_eq!(session.access_token().as_deref(), Some("fresh"));
    assert_eq!(session.refresh_token().as_deref(), Some("ref-1"));
}

#[test]
fn second_unauthorized_on_retried_request_is_not_refreshed_again() {
    let (client, transport, session) = scripted_client();
    session.store_tokens("stale", "ref-1");
    transport
        .respond(401, "")
        .respond_json(200, &serde_json::json!({ "access": "fresh" }))
        .respond(401, r#"{"detail": "still no"}"#);

    let err = block_on(client.send(ApiRequest::get("sessions/"))).unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(transport.request_count(), 3);
    let refreshes = transport
        .requests()
        .iter()
        .filter(|r| r.url.ends_with(REFRESH_PATH))
        .count();
    assert_eq!(refreshes, 1);
    assert_eq!(session.access_token().as_deref(), Some("fresh"));
}

#[test]
fn rotated_refresh_token_is_stored() {
    let (client, transport, session) = scripted_client();
    session.store_tokens("stale", "ref-1");
    transport
        .respond(401, "")
        .respond_json(200, &serde_json::json!({ "access": "fresh", "refresh": "ref-2" }))
        .respond(200, "{}");

    block_on(client.send(ApiRequest::get("auth/me/"))).unwrap();

    assert_eq!(session.refresh_token().as_deref(), Some("ref-2"));
}

#[test]
fn missing_refresh_token_clears_credentials_and_expires_session() {
    let transport = ScriptedTransport::new();
    let session = SessionContext::in_memory();
    session.set_access_token("stale");
    let expired = Arc::new(AtomicUsize::new(0));
    let hook_count = expired.clone();
    let client = ApiClient::new("/api/", session.clone(), transport.clone())
        .with_session_expired_hook(move || {
            hook_count.fetch_add(1, Ordering::SeqCst);
        });
    transport.respond(401, "");

    let err = block_on(client.send(ApiRequest::get("sessions/"))).unwrap_err();

    assert_eq!(err, ApiError::SessionExpired);
    assert_eq!(transport.request_count(), 1);
    assert!(!session.is_authenticated());
    assert_eq!(expired.load(Ordering::SeqCst), 1);
}

#[test]
fn failed_refresh_clears_both_credentials() {
    let transport = ScriptedTransport::new();
    let session = SessionContext::in_memory();
    session.store_tokens("stale", "revoked");
    let expired = Arc::new(AtomicUsize::new(0));
    let hook_count = expired.clone();
    let client = ApiClient::new("/api/", session.clone(), transport.clone())
        .with_session_expired_hook(move || {
            hook_count.fetch_add(1, Ordering::SeqCst);
        });
    transport
        .respond(401, "")
        .respond(401, r#"{"detail": "Token is blacklisted"}"#);

    let err = block_on(client.send(ApiRequest::get("sessions/"))).unwrap_err();

    assert_eq!(err, ApiError::SessionExpired);
    assert_eq!(transport.request_count(), 2);
    assert_eq!(session.access_token(), None);
    assert_eq!(session.refresh_token(), None);
    assert_eq!(expired.load(Ordering::SeqCst), 1);
}

#[test]
fn refresh_transport_failure_also_expires_session() {
    let (client, transport, session) = scripted_client();
    session.store_tokens("stale", "ref");
    transport.respond(401, "").fail(ApiError::Network("offline".to_owned()));

    let err = block_on(client.send(ApiRequest::get("sessions/"))).unwrap_err();

    assert_eq!(err, ApiError::SessionExpired);
    assert!(!session.is_authenticated());
}

// =============================================================
// Status propagation
// =============================================================

#[test]
fn validation_errors_propagate_with_field_payload() {
    let (client, transport, _session) = scripted_client();
    transport.respond(400, r#"{"scheduled_time": ["Scheduled time must be in the future."]}"#);

    let err = block_on(client.send(ApiRequest::post("sessions/"))).unwrap_err();

    match err {
        ApiError::Status { status, payload } => {
            assert_eq!(status, 400);
            assert_eq!(payload.display_message(), "scheduled_time: Scheduled time must be in the future.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn forbidden_is_not_retried() {
    let (client, transport, session) = scripted_client();
    session.store_tokens("acc", "ref");
    transport.respond(403, r#"{"detail": "Only the mentor can accept."}"#);

    let err = block_on(client.send(ApiRequest::post("sessions/1/accept/"))).unwrap_err();

    assert!(matches!(err, ApiError::Forbidden(_)));
    assert_eq!(transport.request_count(), 1);
    assert!(session.is_authenticated());
}

#[test]
fn transport_errors_surface_as_network_errors() {
    let (client, transport, _session) = scripted_client();
    transport.fail(ApiError::Network("offline".to_owned()));

    let err = block_on(client.send(ApiRequest::get("skills/"))).unwrap_err();
    assert_eq!(err, ApiError::Network("offline".to_owned()));
}

#[test]
fn json_reports_decode_errors() {
    let (client, transport, _session) = scripted_client();
    transport.respond(200, "not json");

    let err = block_on(client.json::<Vec<i64>>(ApiRequest::get("skills/"))).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn anonymous_requests_skip_bearer_and_refresh() {
    let (client, transport, session) = scripted_client();
    session.store_tokens("acc", "ref");
    transport.respond(401, r#"{"detail": "No active account found with the given credentials"}"#);

    let err = block_on(client.send_anonymous::<serde_json::Value>(ApiRequest::post("auth/token/"))).unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized(_)));
    assert_eq!(transport.request_count(), 1);
    assert_eq!(transport.requests()[0].header("Authorization"), None);
    assert!(session.is_authenticated());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_transport_is_unavailable_outside_the_browser() {
    let client = ApiClient::new("/api/", SessionContext::in_memory(), BrowserTransport);
    let err = block_on(client.send(ApiRequest::get("skills/"))).unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
}
