//! Card for one mentoring session on the dashboard.
//!
//! DESIGN
//! ======
//! Which buttons appear depends on the viewer's role in the session and the
//! session status. That decision lives in `SessionCapabilities::for_viewer`
//! so it can be tested without rendering.

#[cfg(test)]
#[path = "session_card_test.rs"]
mod session_card_test;

use leptos::prelude::*;

use crate::net::types::{Session, SessionStatus};
use crate::util::format::{schedule_label, stars};

/// External page where mentors can create a meeting before pasting its link.
pub const ZOOM_SCHEDULE_URL: &str = "https://zoom.us/meeting/schedule";

/// Actions offered to the current user for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionCapabilities {
    pub accept: bool,
    pub join: bool,
    pub add_link: bool,
    pub update_link: bool,
    pub complete: bool,
    pub rate: bool,
}

impl SessionCapabilities {
    pub fn for_viewer(session: &Session, viewer_id: Option<i64>) -> Self {
        let is_mentor = viewer_id == Some(session.mentor.id);
        let is_requester = viewer_id == Some(session.requester.id);
        let has_link = session.has_meeting_link();
        let accepted = session.status == SessionStatus::Accepted;

        Self {
            accept: is_mentor && session.status == SessionStatus::Requested,
            join: accepted && has_link,
            add_link: is_mentor && accepted && !has_link,
            update_link: is_mentor && accepted && has_link,
            complete: accepted && (is_mentor || is_requester),
            rate: is_requester && session.status == SessionStatus::Completed && session.rating.is_none(),
        }
    }
}

/// Badge color for a status.
pub fn status_variant(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Requested => "warning",
        SessionStatus::Accepted => "info",
        SessionStatus::Completed => "success",
        SessionStatus::Cancelled => "danger",
    }
}

/// `With <other participant>` from the viewer's side, if they take part.
pub fn counterpart_label(session: &Session, viewer_id: Option<i64>) -> Option<String> {
    if viewer_id == Some(session.mentor.id) {
        Some(format!("With {}", session.requester.username))
    } else if viewer_id == Some(session.requester.id) {
        Some(format!("With {}", session.mentor.username))
    } else {
        None
    }
}

#[component]
pub fn SessionCard(
    session: Session,
    viewer_id: Option<i64>,
    #[prop(optional)] on_accept: Option<Callback<i64>>,
    #[prop(optional)] on_complete: Option<Callback<Session>>,
    #[prop(optional)] on_rate: Option<Callback<Session>>,
    #[prop(optional)] on_edit_link: Option<Callback<Session>>,
) -> impl IntoView {
    let caps = SessionCapabilities::for_viewer(&session, viewer_id);
    let title = session
        .skill
        .as_ref()
        .map_or_else(|| "General Session".to_owned(), |s| s.name.clone());
    let subtitle = counterpart_label(&session, viewer_id).unwrap_or_default();
    let status = session.status;
    let description = session.description.clone();
    let meeting_url = session.meeting_url.clone();
    let rating = session.rating.clone();
    let id = session.id;

    let accept_btn = on_accept.filter(|_| caps.accept).map(|cb| {
        view! {
            <button class="btn btn-success btn-sm" on:click=move |_| cb.run(id)>
                "Accept Session"
            </button>
        }
    });
    let complete_btn = on_complete.filter(|_| caps.complete).map(|cb| {
        let session = session.clone();
        view! {
            <button class="btn btn-outline-success btn-sm" on:click=move |_| cb.run(session.clone())>
                "Mark as Completed"
            </button>
        }
    });
    let rate_btn = on_rate.filter(|_| caps.rate).map(|cb| {
        let session = session.clone();
        view! {
            <button class="btn btn-warning btn-sm" on:click=move |_| cb.run(session.clone())>
                "Rate Session"
            </button>
        }
    });
    let link_btn = on_edit_link.filter(|_| caps.add_link || caps.update_link).map(|cb| {
        let session = session.clone();
        let label = if caps.update_link { "Update Link" } else { "Paste Link" };
        view! {
            <button class="btn btn-outline-primary btn-sm" on:click=move |_| cb.run(session.clone())>
                {label}
            </button>
        }
    });

    view! {
        <div class="card session-card mb-3">
            <div class="card-body">
                <div class="session-card__header">
                    <div>
                        <h5 class="card-title mb-1">{title}</h5>
                        <h6 class="card-subtitle text-muted">{subtitle}</h6>
                    </div>
                    <span class=format!("badge bg-{}", status_variant(status))>{status.as_str()}</span>
                </div>
                {(!description.is_empty()).then(|| view! { <p class="card-text mb-2">{description}</p> })}
                <div class="small text-muted mb-2">
                    <div>{format!("Duration: {} minutes", session.duration_minutes)}</div>
                    <div>{format!("Scheduled: {}", schedule_label(session.scheduled_time.as_deref()))}</div>
                </div>
                {rating.map(|r| {
                    view! {
                        <div class="mb-2">
                            <strong>"Rating: "</strong>
                            <span class="rating-stars">{stars(r.score)}</span>
                            {(!r.comment.is_empty())
                                .then(|| view! { <div class="small text-muted mt-1">{format!("\"{}\"", r.comment)}</div> })}
                        </div>
                    }
                })}
                <div class="session-card__actions">
                    {accept_btn}
                    {caps.join.then(|| {
                        view! {
                            <a class="btn btn-primary btn-sm" href=meeting_url.clone() target="_blank" rel="noopener noreferrer">
                                "Join Session"
                            </a>
                        }
                    })}
                    {caps.add_link.then(|| {
                        view! {
                            <a class="btn btn-outline-primary btn-sm" href=ZOOM_SCHEDULE_URL target="_blank" rel="noopener noreferrer">
                                "Generate Zoom Link"
                            </a>
                        }
                    })}
                    {link_btn}
                    {complete_btn}
                    {rate_btn}
                </div>
            </div>
        </div>
    }
}
