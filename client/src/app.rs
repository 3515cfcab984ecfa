//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the `Store`, the `AppClient` and the `ClientConfig` to every
//! route. After hydration the stored credentials are inspected once and, if
//! present, the current user is loaded.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Link, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::actions;
use crate::components::{navbar::Navbar, notification_center::NotificationCenter};
use crate::config::ClientConfig;
use crate::net::api::AppClient;
use crate::net::credentials::SessionContext;
use crate::net::http::{ApiClient, BrowserTransport};
use crate::pages::{
    dashboard::DashboardPage, finder::FinderPage, home::HomePage, login::LoginPage,
    mentor_profile::MentorProfilePage, profile::ProfilePage, register::RegisterPage,
};
use crate::routing::HOME;
use crate::state::store::Store;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = Store::new(config.notifications_enabled);
    let client: AppClient = ApiClient::new(&config.api_base, SessionContext::browser(), BrowserTransport);
    let notifications_enabled = config.notifications_enabled;

    provide_context(config);
    provide_context(store);
    provide_context(client.clone());

    // Effects only run in the browser, so the first frame matches the server render.
    Effect::new(move || {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            actions::auth::restore_session(&client, &store).await;
        });
    });

    view! {
        <Link rel="stylesheet" href=BOOTSTRAP_CSS/>
        <Stylesheet id="leptos" href="/pkg/skillsync.css"/>
        <Title text="SkillSync"/>

        <Router>
            <Navbar/>
            <Show when=move || notifications_enabled>
                <NotificationCenter/>
            </Show>
            <main class="container mt-4">
                <Routes fallback=|| view! { <Redirect path=HOME/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("finder") view=FinderPage/>
                    <Route path=(StaticSegment("mentors"), ParamSegment("id")) view=MentorProfilePage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
