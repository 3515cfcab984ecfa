//! REST DTOs for the SkillSync API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON shapes so responses pass through the
//! store unchanged. Optional server fields default instead of failing so an
//! older or newer API does not break deserialization of whole lists.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a mentoring session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Requested,
    Accepted,
    Completed,
    Cancelled,
}

impl SessionStatus {
    /// Wire spelling, also used as the badge label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Accepted => "accepted",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// `requested` and `accepted` sessions are upcoming; the rest are past.
    pub fn is_upcoming(self) -> bool {
        matches!(self, Self::Requested | Self::Accepted)
    }
}

/// A skill tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// Compact user reference embedded in sessions and ratings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub rating_avg: f64,
    #[serde(default)]
    pub rating_count: i64,
    #[serde(default)]
    pub is_mentor: bool,
}

/// A 1–5 star review of a completed session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    #[serde(default)]
    pub session: Option<i64>,
    #[serde(default)]
    pub rater: Option<UserSummary>,
    pub score: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A scheduled mentoring engagement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub status: SessionStatus,
    pub mentor: UserSummary,
    pub requester: UserSummary,
    #[serde(default)]
    pub skill: Option<Skill>,
    #[serde(default)]
    pub duration_minutes: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub meeting_url: String,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Session {
    pub fn has_meeting_link(&self) -> bool {
        !self.meeting_url.trim().is_empty()
    }
}

/// One weekly availability slot, e.g. `{"day": 1, "start": "09:00", "end": "17:00"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    #[serde(default)]
    pub day: u8,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// Mentor-facing profile attached to every user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub is_mentor: bool,
    #[serde(default)]
    pub rating_avg: f64,
    #[serde(default)]
    pub rating_count: i64,
    #[serde(default)]
    pub availability: Vec<AvailabilitySlot>,
}

/// A full user record (`auth/me/`, `mentors/`, `mentors/{id}/`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub profile: Profile,
}

impl User {
    /// First and last name, or the username when both are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }
}

/// List endpoints answer with either a bare array or a paginated envelope.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Page { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListPayload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Page { results } => results,
            Self::Bare(items) => items,
        }
    }
}

/// Access + refresh credentials returned by `auth/token/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Body of `auth/token/refresh/`; `refresh` is present when rotation is enabled.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Sign-in form body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration form body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
}

/// Partial update of the signed-in user (`PATCH auth/me/`).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
    pub is_mentor: bool,
    pub skill_ids: Vec<i64>,
}

impl ProfileUpdate {
    /// Form values prefilled from the current user.
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            bio: user.profile.bio.clone(),
            is_mentor: user.profile.is_mentor,
            skill_ids: user.profile.skills.iter().map(|s| s.id).collect(),
        }
    }
}

/// Body of `POST sessions/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateSessionRequest {
    pub mentor_id: i64,
    pub skill_id: Option<i64>,
    pub duration_minutes: u32,
    pub description: String,
    pub scheduled_time: String,
}

/// Body of `POST ratings/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RatingRequest {
    pub session_id: i64,
    pub score: u8,
    pub comment: String,
}

/// Query filters for `GET mentors/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MentorFilters {
    pub skill: String,
    pub search: String,
    pub page: u32,
}

impl Default for MentorFilters {
    fn default() -> Self {
        Self {
            skill: String::new(),
            search: String::new(),
            page: 1,
        }
    }
}
