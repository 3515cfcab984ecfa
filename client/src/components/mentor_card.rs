//! Mentor summary card for the finder grid.

use leptos::prelude::*;

use crate::net::types::User;
use crate::routing::mentor_path;
use crate::util::format::{average_stars, truncate};

const BIO_PREVIEW_CHARS: usize = 100;

#[component]
pub fn MentorCard(mentor: User) -> impl IntoView {
    let href = mentor_path(mentor.id);
    let full_name = format!("{} {}", mentor.first_name, mentor.last_name);
    let handle = format!("@{}", mentor.username);
    let profile = mentor.profile;

    let rating = (profile.rating_avg > 0.0).then(|| {
        view! {
            <div class="mb-2">
                <span class="rating-stars">{average_stars(profile.rating_avg)}</span>
                <small class="text-muted ms-2">{format!("({} reviews)", profile.rating_count)}</small>
            </div>
        }
    });
    let bio = (!profile.bio.is_empty())
        .then(|| view! { <p class="card-text text-muted small">{truncate(&profile.bio, BIO_PREVIEW_CHARS)}</p> });

    view! {
        <a class="card mentor-card h-100" href=href>
            <div class="card-body">
                <h5 class="card-title">{full_name}</h5>
                <h6 class="card-subtitle mb-2 text-muted">{handle}</h6>
                <div class="mb-3">
                    {profile
                        .skills
                        .into_iter()
                        .map(|skill| view! { <span class="badge bg-secondary me-1 mb-1">{skill.name}</span> })
                        .collect_view()}
                </div>
                {rating}
                {bio}
                <span class="btn btn-primary btn-sm w-100">"View Profile"</span>
            </div>
        </a>
    }
}
