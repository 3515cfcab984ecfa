//! Mentor detail page with reviews and the session-request dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from finder cards. The mentor record goes through the mentors
//! slice; reviews are a non-critical read kept in page-local state. Requests
//! to oneself are refused before any network call.

#[cfg(test)]
#[path = "mentor_profile_test.rs"]
mod mentor_profile_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::actions;
use crate::net::api::AppClient;
use crate::net::types::{CreateSessionRequest, Rating, User};
use crate::routing::{Route, DASHBOARD};
use crate::state::store::Store;
use crate::util::auth::install_route_guard;
use crate::util::format::{average_stars, date_label, day_name, stars};

pub const DURATION_OPTIONS: [u32; 4] = [15, 30, 45, 60];
pub const SELF_REQUEST_MESSAGE: &str = "You cannot request a session with yourself.";

/// Raw values of the request dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionForm {
    pub skill_id: String,
    pub duration_minutes: u32,
    pub description: String,
    pub scheduled_time: String,
}

impl Default for SessionForm {
    fn default() -> Self {
        Self {
            skill_id: String::new(),
            duration_minutes: 30,
            description: String::new(),
            scheduled_time: String::new(),
        }
    }
}

/// Refuse requests where the viewer is the mentor.
pub fn check_can_request(viewer_id: Option<i64>, mentor_id: i64) -> Result<(), &'static str> {
    if viewer_id == Some(mentor_id) {
        Err(SELF_REQUEST_MESSAGE)
    } else {
        Ok(())
    }
}

/// Turn dialog input into a request body.
pub fn build_session_request(mentor_id: i64, form: &SessionForm) -> Result<CreateSessionRequest, &'static str> {
    if !DURATION_OPTIONS.contains(&form.duration_minutes) {
        return Err("Choose a duration of 15, 30, 45 or 60 minutes.");
    }
    let scheduled_time = form.scheduled_time.trim();
    if scheduled_time.is_empty() {
        return Err("Choose a preferred time.");
    }
    let description = form.description.trim();
    if description.is_empty() {
        return Err("Describe what you would like to learn.");
    }
    Ok(CreateSessionRequest {
        mentor_id,
        skill_id: form.skill_id.trim().parse().ok(),
        duration_minutes: form.duration_minutes,
        description: description.to_owned(),
        scheduled_time: scheduled_time.to_owned(),
    })
}

#[component]
pub fn MentorProfilePage() -> impl IntoView {
    let store = expect_context::<Store>();
    let client = expect_context::<AppClient>();
    let navigate = use_navigate();
    let route = Route::parse(&use_location().pathname.get_untracked());
    install_route_guard(route, store, navigate.clone());

    let params = use_params_map();
    let mentor_id = Memo::new(move |_| params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok())));
    let ratings = RwSignal::new(Vec::<Rating>::new());
    let show_dialog = RwSignal::new(false);
    let page_error = RwSignal::new(None::<String>);

    let ready = store.select(|s| s.auth.restored && s.auth.has_token);
    {
        let client = client.clone();
        Effect::new(move || {
            let (Some(id), true) = (mentor_id.get(), ready.get()) else {
                return;
            };
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let _ = actions::mentors::fetch_mentor(&client, &store, id).await;
                ratings.set(actions::mentors::load_mentor_ratings(&client, id).await);
            });
        });
    }

    let viewer_id = move || store.with(|s| s.auth.user.as_ref().map(|u| u.id));
    let mentor = move || {
        store.with(|s| {
            s.mentors
                .current_mentor
                .clone()
                .filter(|m| Some(m.id) == mentor_id.get())
        })
    };

    let on_request = Callback::new(move |()| {
        let Some(id) = mentor_id.get_untracked() else {
            return;
        };
        match check_can_request(store.with_untracked(|s| s.auth.user.as_ref().map(|u| u.id)), id) {
            Ok(()) => {
                page_error.set(None);
                show_dialog.set(true);
            }
            Err(msg) => {
                page_error.set(Some(msg.to_owned()));
                show_dialog.set(false);
            }
        }
    });

    let requested = RwSignal::new(false);
    let on_submit = Callback::new(move |body: CreateSessionRequest| {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if actions::sessions::create_session(&client, &store, &body).await.is_ok() {
                show_dialog.set(false);
                requested.set(true);
            }
        });
    });

    Effect::new(move || {
        if requested.get() {
            requested.set(false);
            navigate(DASHBOARD, NavigateOptions::default());
        }
    });

    view! {
        <div class="container mentor-profile-page">
            <Show
                when=move || !store.with(|s| s.mentors.loading)
                fallback=|| view! { <p class="text-center py-5">"Loading mentor..."</p> }
            >
                {move || match mentor() {
                    None => view! { <p class="text-center text-muted py-5">"Mentor not found"</p> }.into_any(),
                    Some(m) => {
                        let own_profile = viewer_id() == Some(m.id);
                        let dialog_mentor = m.clone();
                        view! {
                            <MentorDetails
                                mentor=m
                                ratings=ratings
                                own_profile=own_profile
                                page_error=page_error
                                on_request=on_request
                            />
                            <Show when=move || show_dialog.get()>
                                <RequestSessionDialog
                                    mentor=dialog_mentor.clone()
                                    on_cancel=Callback::new(move |()| show_dialog.set(false))
                                    on_submit=on_submit
                                />
                            </Show>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}

#[component]
fn MentorDetails(
    mentor: User,
    ratings: RwSignal<Vec<Rating>>,
    own_profile: bool,
    page_error: RwSignal<Option<String>>,
    on_request: Callback<()>,
) -> impl IntoView {
    let profile = mentor.profile.clone();
    let rating_summary = (profile.rating_avg > 0.0).then(|| {
        view! {
            <div class="mb-3">
                <span class="rating-stars fs-5">{average_stars(profile.rating_avg)}</span>
                <span class="text-muted ms-2">
                    {format!("{:.1} ({} reviews)", profile.rating_avg, profile.rating_count)}
                </span>
            </div>
        }
    });
    let bio = (!profile.bio.is_empty()).then(|| {
        view! {
            <div class="mb-3">
                <strong>"About:"</strong>
                <p class="mt-2">{profile.bio.clone()}</p>
            </div>
        }
    });
    let availability = if profile.availability.is_empty() {
        view! { <p class="text-muted">"No availability set"</p> }.into_any()
    } else {
        view! {
            <ul class="list-unstyled">
                {profile
                    .availability
                    .iter()
                    .map(|slot| {
                        view! {
                            <li class="mb-2">
                                <strong>{format!("{}:", day_name(slot.day))}</strong>
                                {format!(" {} - {}", slot.start, slot.end)}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
            .into_any()
    };

    view! {
        <div class="mentor-profile-page__layout">
            <div>
                <div class="card mb-4">
                    <div class="card-body">
                        <h1 class="mb-2">{format!("{} {}", mentor.first_name, mentor.last_name)}</h1>
                        <p class="text-muted mb-3">{format!("@{}", mentor.username)}</p>
                        {rating_summary}
                        <div class="mb-3">
                            <strong>"Skills:"</strong>
                            <div class="mt-2">
                                {profile
                                    .skills
                                    .iter()
                                    .map(|skill| view! { <span class="badge bg-secondary me-2 mb-2">{skill.name.clone()}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                        {bio}
                        {move || page_error.get().map(|msg| view! { <div class="alert alert-danger">{msg}</div> })}
                        {if own_profile {
                            view! { <div class="alert alert-warning mt-2">"You are viewing your own mentor profile."</div> }
                                .into_any()
                        } else {
                            view! {
                                <button class="btn btn-primary btn-lg" on:click=move |_| on_request.run(())>
                                    "Request Session"
                                </button>
                            }
                                .into_any()
                        }}
                    </div>
                </div>
                <Show when=move || !ratings.with(Vec::is_empty)>
                    <div class="card">
                        <div class="card-body">
                            <h3 class="mb-4">"Reviews"</h3>
                            {move || ratings.get().into_iter().map(|r| view! { <ReviewItem rating=r /> }).collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
            <div class="card">
                <div class="card-body">
                    <h5>"Availability"</h5>
                    {availability}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ReviewItem(rating: Rating) -> impl IntoView {
    let (rater, is_mentor) = rating
        .rater
        .as_ref()
        .map_or((String::new(), false), |u| (u.username.clone(), u.is_mentor));
    view! {
        <div class="mb-3 pb-3 border-bottom">
            <div class="review__header">
                <div>
                    <strong>{rater}</strong>
                    <span class="ms-2 badge bg-secondary">{if is_mentor { "Mentor" } else { "Learner" }}</span>
                    <div class="rating-stars">{stars(rating.score)}</div>
                </div>
                <small class="text-muted">{date_label(rating.created_at.as_deref())}</small>
            </div>
            {(!rating.comment.is_empty()).then(|| view! { <p class="mt-2 mb-0 text-muted">{rating.comment.clone()}</p> })}
        </div>
    }
}

/// Modal dialog for requesting a session with the mentor.
#[component]
fn RequestSessionDialog(mentor: User, on_cancel: Callback<()>, on_submit: Callback<CreateSessionRequest>) -> impl IntoView {
    let store = expect_context::<Store>();
    let form = RwSignal::new(SessionForm::default());
    let local_error = RwSignal::new(None::<String>);
    let mentor_id = mentor.id;

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match build_session_request(mentor_id, &form.get_untracked()) {
            Ok(body) => {
                local_error.set(None);
                on_submit.run(body);
            }
            Err(msg) => local_error.set(Some(msg.to_owned())),
        }
    };

    let error = move || {
        local_error
            .get()
            .or_else(|| store.with(|s| s.sessions.error.as_ref().map(ToString::to_string)))
    };
    let creating = move || store.with(|s| s.sessions.creating);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>{format!("Request Session with {}", mentor.first_name)}</h2>
                {move || error().map(|msg| view! { <div class="alert alert-danger">{msg}</div> })}
                <label class="dialog__label">
                    "Skill"
                    <select
                        class="form-select"
                        on:change=move |ev| form.update(|f| f.skill_id = event_target_value(&ev))
                    >
                        <option value="">"Select a skill"</option>
                        {mentor
                            .profile
                            .skills
                            .iter()
                            .map(|skill| view! { <option value=skill.id.to_string()>{skill.name.clone()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Duration"
                    <select
                        class="form-select"
                        on:change=move |ev| {
                            if let Ok(minutes) = event_target_value(&ev).parse::<u32>() {
                                form.update(|f| f.duration_minutes = minutes);
                            }
                        }
                    >
                        {DURATION_OPTIONS
                            .into_iter()
                            .map(|minutes| {
                                view! {
                                    <option
                                        value=minutes.to_string()
                                        selected=move || form.with(|f| f.duration_minutes == minutes)
                                    >
                                        {format!("{minutes} minutes")}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Preferred Time"
                    <input
                        class="dialog__input"
                        type="datetime-local"
                        required
                        prop:value=move || form.with(|f| f.scheduled_time.clone())
                        on:input=move |ev| form.update(|f| f.scheduled_time = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="form-control"
                        rows="3"
                        required
                        placeholder="What would you like to learn?"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=creating>
                        {move || if creating() { "Sending..." } else { "Send Request" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
