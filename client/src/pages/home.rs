//! Landing page.

use leptos::prelude::*;

use crate::routing::{DASHBOARD, FINDER, LOGIN, REGISTER};
use crate::state::store::Store;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<Store>();
    let signed_in = move || store.with(|s| s.auth.has_token);

    view! {
        <div class="container py-5">
            <div class="home-page text-center">
                <h1 class="display-4 fw-bold mb-4">"Welcome to SkillSync"</h1>
                <p class="lead text-muted mb-4">
                    "Exchange skills instantly. Offer what you know and learn what you need in short, focused mentorship sessions."
                </p>
                <div class="home-page__actions">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a class="btn btn-dark btn-lg" href=REGISTER>"Get Started"</a>
                                <a class="btn btn-outline-dark btn-lg" href=LOGIN>"Sign In"</a>
                            }
                        }
                    >
                        <a class="btn btn-dark btn-lg" href=DASHBOARD>"Go to Dashboard"</a>
                        <a class="btn btn-outline-dark btn-lg" href=FINDER>"Find Mentors"</a>
                    </Show>
                </div>
                <div class="home-page__features mt-5 pt-5">
                    <div>
                        <h3 class="h5">"Quick Sessions"</h3>
                        <p class="text-muted">"15-60 minute focused mentorship sessions that fit your schedule"</p>
                    </div>
                    <div>
                        <h3 class="h5">"Expert Mentors"</h3>
                        <p class="text-muted">"Connect with experienced professionals in various skills"</p>
                    </div>
                    <div>
                        <h3 class="h5">"Learn & Teach"</h3>
                        <p class="text-muted">"Share your expertise and learn new skills from the community"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
