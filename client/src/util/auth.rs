//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior. Nothing is decided
//! until stored credentials have been inspected (`restored`), so the server
//! render and the first hydrated frame agree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routing::{guard, Access, Route};
use crate::state::auth::AuthState;
use crate::state::store::Store;

/// Where to send the user for `route`, or `None` to stay.
pub fn redirect_target(route: Route, auth: &AuthState) -> Option<&'static str> {
    if !auth.restored {
        return None;
    }
    match guard(route, auth.has_token) {
        Access::Allow => None,
        Access::Redirect(path) => Some(path),
    }
}

/// Re-check access for `route` whenever the auth slice changes.
pub fn install_route_guard<F>(route: Route, store: Store, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let target = store.select(move |s| redirect_target(route, &s.auth));
    Effect::new(move || {
        if let Some(path) = target.get() {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
