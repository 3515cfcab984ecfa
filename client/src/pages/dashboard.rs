//! Dashboard listing the user's upcoming and past sessions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Sessions are fetched on mount and again after
//! every mutation so the lists converge on the server's view. Completing a
//! session as its requester opens the rating dialog straight away.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::components::session_card::SessionCard;
use crate::net::api::AppClient;
use crate::net::types::{RatingRequest, Session, SessionStatus};
use crate::routing::Route;
use crate::state::store::Store;
use crate::util::auth::install_route_guard;

/// Score choices offered in the rating dialog, best first.
pub const SCORE_OPTIONS: [(u8, &str); 5] = [
    (5, "5 - Excellent"),
    (4, "4 - Very Good"),
    (3, "3 - Good"),
    (2, "2 - Fair"),
    (1, "1 - Poor"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Upcoming,
    Past,
}

pub fn tab_title(tab: DashboardTab, count: usize) -> String {
    match tab {
        DashboardTab::Upcoming => format!("Upcoming ({count})"),
        DashboardTab::Past => format!("Past ({count})"),
    }
}

/// Whether finishing `completed` should immediately ask `viewer_id` for a review.
pub fn should_prompt_rating(completed: &Session, viewer_id: Option<i64>) -> bool {
    completed.status == SessionStatus::Completed
        && viewer_id == Some(completed.requester.id)
        && completed.rating.is_none()
}

/// Trimmed meeting link, or `None` when blank.
pub fn normalize_meeting_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let client = expect_context::<AppClient>();
    install_route_guard(Route::Dashboard, store, use_navigate());

    let tab = RwSignal::new(DashboardTab::Upcoming);
    let rating_target = RwSignal::new(None::<Session>);
    let link_target = RwSignal::new(None::<Session>);

    let refresh = {
        let client = client.clone();
        move || {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let _ = actions::sessions::fetch_sessions(&client, &store, None).await;
            });
        }
    };

    // Load once credentials have been restored.
    let requested = RwSignal::new(false);
    let ready = store.select(|s| s.auth.restored && s.auth.has_token);
    {
        let refresh = refresh.clone();
        Effect::new(move || {
            if ready.get() && !requested.get_untracked() {
                requested.set(true);
                refresh();
            }
        });
    }

    let viewer_id = move || store.with(|s| s.auth.user.as_ref().map(|u| u.id));

    let on_accept = Callback::new({
        let client = client.clone();
        let refresh = refresh.clone();
        move |id: i64| {
            let client = client.clone();
            let refresh = refresh.clone();
            leptos::task::spawn_local(async move {
                let _ = actions::sessions::accept_session(&client, &store, id).await;
                refresh();
            });
        }
    });

    let on_complete = Callback::new({
        let client = client.clone();
        let refresh = refresh.clone();
        move |session: Session| {
            let client = client.clone();
            let refresh = refresh.clone();
            let viewer = viewer_id();
            leptos::task::spawn_local(async move {
                if let Ok(updated) = actions::sessions::complete_session(&client, &store, session.id).await {
                    if should_prompt_rating(&updated, viewer) {
                        rating_target.set(Some(updated));
                    }
                }
                refresh();
            });
        }
    });

    let on_rate = Callback::new(move |session: Session| rating_target.set(Some(session)));
    let on_edit_link = Callback::new(move |session: Session| link_target.set(Some(session)));

    let on_rating_submit = Callback::new({
        let client = client.clone();
        let refresh = refresh.clone();
        move |body: RatingRequest| {
            let client = client.clone();
            let refresh = refresh.clone();
            leptos::task::spawn_local(async move {
                let _ = actions::sessions::rate_session(&client, &store, &body).await;
                rating_target.set(None);
                refresh();
            });
        }
    });

    let on_link_submit = Callback::new({
        let client = client.clone();
        let refresh = refresh.clone();
        move |(id, url): (i64, String)| {
            let client = client.clone();
            let refresh = refresh.clone();
            leptos::task::spawn_local(async move {
                if actions::sessions::update_meeting_url(&client, &store, id, &url).await.is_ok() {
                    link_target.set(None);
                }
                refresh();
            });
        }
    });

    let heading = move || {
        if store.with(|s| s.auth.user.as_ref().is_some_and(|u| u.profile.is_mentor)) {
            "Mentor Dashboard"
        } else {
            "My Dashboard"
        }
    };
    let greeting = move || {
        store.with(|s| {
            s.auth.user.as_ref().map(|u| {
                let name = if u.first_name.is_empty() { &u.username } else { &u.first_name };
                format!("Welcome back, {name}!")
            })
        })
    };

    let visible = move || {
        store.with(|s| match tab.get() {
            DashboardTab::Upcoming => s.sessions.upcoming.clone(),
            DashboardTab::Past => s.sessions.past.clone(),
        })
    };

    view! {
        <div class="container dashboard-page">
            <h1 class="mb-4">{heading}</h1>
            {move || greeting().map(|g| view! { <p class="text-muted mb-4">{g}</p> })}
            <Show when=move || store.with(|s| s.sessions.error.is_some())>
                <div class="alert alert-danger">
                    {move || store.with(|s| s.sessions.error.as_ref().map(ToString::to_string).unwrap_or_default())}
                </div>
            </Show>
            <ul class="nav nav-tabs mb-4">
                <li class="nav-item">
                    <button
                        class="nav-link"
                        class:active=move || tab.get() == DashboardTab::Upcoming
                        on:click=move |_| tab.set(DashboardTab::Upcoming)
                    >
                        {move || tab_title(DashboardTab::Upcoming, store.with(|s| s.sessions.upcoming.len()))}
                    </button>
                </li>
                <li class="nav-item">
                    <button
                        class="nav-link"
                        class:active=move || tab.get() == DashboardTab::Past
                        on:click=move |_| tab.set(DashboardTab::Past)
                    >
                        {move || tab_title(DashboardTab::Past, store.with(|s| s.sessions.past.len()))}
                    </button>
                </li>
            </ul>
            <Show
                when=move || !store.with(|s| s.sessions.loading)
                fallback=|| view! { <p class="text-center py-5">"Loading sessions..."</p> }
            >
                <div class="dashboard-page__cards">
                    {move || {
                        let sessions = visible();
                        if sessions.is_empty() {
                            let empty = match tab.get() {
                                DashboardTab::Upcoming => "No upcoming sessions. Visit the Finder to request a session!",
                                DashboardTab::Past => "No past sessions yet.",
                            };
                            return view! { <p class="text-muted text-center py-5">{empty}</p> }.into_any();
                        }
                        let viewer = viewer_id();
                        sessions
                            .into_iter()
                            .map(|session| {
                                view! {
                                    <SessionCard
                                        session=session
                                        viewer_id=viewer
                                        on_accept=on_accept
                                        on_complete=on_complete
                                        on_rate=on_rate
                                        on_edit_link=on_edit_link
                                    />
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
            <Show when=move || rating_target.get().is_some()>
                <RatingDialog
                    target=rating_target
                    on_cancel=Callback::new(move |()| rating_target.set(None))
                    on_submit=on_rating_submit
                />
            </Show>
            <Show when=move || link_target.get().is_some()>
                <MeetingLinkDialog
                    target=link_target
                    on_cancel=Callback::new(move |()| link_target.set(None))
                    on_submit=on_link_submit
                />
            </Show>
        </div>
    }
}

/// Modal dialog for rating a completed session.
#[component]
fn RatingDialog(
    target: RwSignal<Option<Session>>,
    on_cancel: Callback<()>,
    on_submit: Callback<RatingRequest>,
) -> impl IntoView {
    let score = RwSignal::new(5_u8);
    let comment = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let Some(session) = target.get_untracked() else {
            return;
        };
        on_submit.run(RatingRequest {
            session_id: session.id,
            score: score.get_untracked(),
            comment: comment.get_untracked(),
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Rate Session"</h2>
                <label class="dialog__label">
                    "Rating"
                    <select
                        class="form-select"
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                                score.set(value);
                            }
                        }
                    >
                        {SCORE_OPTIONS
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <option value=value.to_string() selected=move || score.get() == value>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Comment (optional)"
                    <textarea
                        class="form-control"
                        rows="3"
                        placeholder="Share your experience..."
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Submit Rating"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog for pasting or replacing a session's meeting link.
#[component]
fn MeetingLinkDialog(
    target: RwSignal<Option<Session>>,
    on_cancel: Callback<()>,
    on_submit: Callback<(i64, String)>,
) -> impl IntoView {
    let initial = target.get_untracked().map(|s| s.meeting_url).unwrap_or_default();
    let has_existing = !initial.is_empty();
    let url = RwSignal::new(initial);

    let submit = Callback::new(move |()| {
        let Some(session) = target.get_untracked() else {
            return;
        };
        if let Some(link) = normalize_meeting_url(&url.get_untracked()) {
            on_submit.run((session.id, link));
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if has_existing { "Update Meeting Link" } else { "Add Meeting Link" }}</h2>
                <label class="dialog__label">
                    "Zoom Meeting URL"
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://zoom.us/j/..."
                        prop:value=move || url.get()
                        on:input=move |ev| url.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <p class="text-muted small">
                    "Click \"Generate Zoom Link\" to create a meeting, then paste the Join URL here."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save Link"
                    </button>
                </div>
            </div>
        </div>
    }
}
