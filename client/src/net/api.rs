//! REST operations of the SkillSync API.
//!
//! Each function shapes one request (path, query, body, headers) and decodes
//! the reply. Credentials and the refresh policy are handled by
//! [`ApiClient`]; the only credential writes here are sign-in and sign-out.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::http::{ApiClient, ApiRequest, BrowserTransport, Transport};
use super::types::{
    CreateSessionRequest, ListPayload, LoginRequest, MentorFilters, ProfileUpdate, Rating, RatingRequest,
    RegisterRequest, Session, Skill, TokenPair, User,
};
use crate::error::ApiError;

/// Client type used by the application: browser transport, browser storage.
pub type AppClient = ApiClient<BrowserTransport>;

/// Header carrying the session-creation dedupe key.
pub const IDEMPOTENCY_HEADER: &str = "X-Idempotency-Key";

#[derive(Serialize)]
struct IdempotencyMaterial<'a> {
    mentor_id: i64,
    skill_id: Option<i64>,
    duration_minutes: u32,
    scheduled_time: &'a str,
}

/// Deterministic dedupe key for a session request.
///
/// Pure function of mentor, skill, duration and scheduled time; the
/// description does not participate. Hex SHA-256, 64 characters.
pub fn session_idempotency_key(request: &CreateSessionRequest) -> String {
    let material = IdempotencyMaterial {
        mentor_id: request.mentor_id,
        skill_id: request.skill_id,
        duration_minutes: request.duration_minutes,
        scheduled_time: &request.scheduled_time,
    };
    // Field order is fixed by the struct, so the encoding is stable.
    let encoded = serde_json::to_string(&material).unwrap_or_default();
    let digest = Sha256::digest(format!("createSession:{encoded}").as_bytes());
    format!("{digest:x}")
}

fn mentor_path(id: i64) -> String {
    format!("mentors/{id}/")
}

fn session_path(id: i64) -> String {
    format!("sessions/{id}/")
}

fn session_action_path(id: i64, action: &str) -> String {
    format!("sessions/{id}/{action}/")
}

/// Exchange username/password for a token pair and persist it.
///
/// # Errors
///
/// Returns the server's rejection (typically `401` with a `detail`).
pub async fn login<T: Transport>(client: &ApiClient<T>, credentials: &LoginRequest) -> Result<TokenPair, ApiError> {
    let request = ApiRequest::post("auth/token/").json(credentials)?;
    let tokens: TokenPair = client.send_anonymous(request).await?;
    client.credentials().store_tokens(&tokens.access, &tokens.refresh);
    Ok(tokens)
}

/// Forget the stored credentials. The API keeps no server-side session.
pub fn logout<T: Transport>(client: &ApiClient<T>) {
    client.credentials().clear();
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    #[serde(default)]
    username: String,
}

/// Create an account via `POST auth/register/`; returns the new username.
///
/// # Errors
///
/// Returns field-keyed validation errors on `400`.
pub async fn register<T: Transport>(client: &ApiClient<T>, form: &RegisterRequest) -> Result<String, ApiError> {
    let request = ApiRequest::post("auth/register/").json(form)?;
    let created: RegisterResponse = client.send_anonymous(request).await?;
    Ok(created.username)
}

/// # Errors
///
/// Returns an error if the user is not signed in or the request fails.
pub async fn fetch_current_user<T: Transport>(client: &ApiClient<T>) -> Result<User, ApiError> {
    client.json(ApiRequest::get("auth/me/")).await
}

/// # Errors
///
/// Returns field-keyed validation errors on `400`.
pub async fn update_profile<T: Transport>(client: &ApiClient<T>, update: &ProfileUpdate) -> Result<User, ApiError> {
    client.json(ApiRequest::patch("auth/me/").json(update)?).await
}

/// `GET mentors/?skill=&search=&page=`; blank filters are omitted.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a mentor list.
pub async fn fetch_mentors<T: Transport>(client: &ApiClient<T>, filters: &MentorFilters) -> Result<Vec<User>, ApiError> {
    let request = ApiRequest::get("mentors/")
        .query("skill", filters.skill.trim())
        .query("search", filters.search.trim())
        .query("page", filters.page.to_string());
    let list: ListPayload<User> = client.json(request).await?;
    Ok(list.into_vec())
}

/// # Errors
///
/// Returns an error if the mentor does not exist or the request fails.
pub async fn fetch_mentor<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<User, ApiError> {
    client.json(ApiRequest::get(mentor_path(id))).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_skills<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Skill>, ApiError> {
    let list: ListPayload<Skill> = client.json(ApiRequest::get("skills/")).await?;
    Ok(list.into_vec())
}

/// Reviews left for one mentor.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_mentor_ratings<T: Transport>(client: &ApiClient<T>, mentor_id: i64) -> Result<Vec<Rating>, ApiError> {
    let request = ApiRequest::get("ratings/").query("mentor_id", mentor_id.to_string());
    let list: ListPayload<Rating> = client.json(request).await?;
    Ok(list.into_vec())
}

/// Sessions the user takes part in, optionally narrowed by the server-side `type` filter.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_sessions<T: Transport>(client: &ApiClient<T>, kind: Option<&str>) -> Result<Vec<Session>, ApiError> {
    let request = ApiRequest::get("sessions/").query("type", kind.unwrap_or_default());
    let list: ListPayload<Session> = client.json(request).await?;
    Ok(list.into_vec())
}

/// Request a session; carries [`session_idempotency_key`] so a resubmission
/// returns the existing session instead of creating another.
///
/// # Errors
///
/// Returns field-keyed validation errors on `400`.
pub async fn create_session<T: Transport>(
    client: &ApiClient<T>,
    body: &CreateSessionRequest,
) -> Result<Session, ApiError> {
    let request = ApiRequest::post("sessions/")
        .header(IDEMPOTENCY_HEADER, session_idempotency_key(body))
        .json(body)?;
    client.json(request).await
}

/// # Errors
///
/// Returns an error if the caller is not the mentor or the session is not `requested`.
pub async fn accept_session<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<Session, ApiError> {
    client.json(ApiRequest::post(session_action_path(id, "accept"))).await
}

/// # Errors
///
/// Returns an error if the caller is not a participant or the session is not `accepted`.
pub async fn complete_session<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<Session, ApiError> {
    client.json(ApiRequest::post(session_action_path(id, "complete"))).await
}

/// # Errors
///
/// Returns field-keyed validation errors (not completed, already rated, not the requester).
pub async fn rate_session<T: Transport>(client: &ApiClient<T>, body: &RatingRequest) -> Result<Rating, ApiError> {
    client.json(ApiRequest::post("ratings/").json(body)?).await
}

/// # Errors
///
/// Returns field-keyed validation errors for a malformed URL.
pub async fn update_meeting_url<T: Transport>(client: &ApiClient<T>, id: i64, meeting_url: &str) -> Result<Session, ApiError> {
    let request = ApiRequest::patch(session_path(id)).json(&serde_json::json!({ "meeting_url": meeting_url }))?;
    client.json(request).await
}
