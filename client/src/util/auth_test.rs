use super::*;
use crate::routing::{DASHBOARD, LOGIN};

fn restored(has_token: bool) -> AuthState {
    AuthState {
        has_token,
        restored: true,
        ..AuthState::default()
    }
}

#[test]
fn no_redirect_before_credentials_are_restored() {
    let state = AuthState::default();
    assert_eq!(redirect_target(Route::Dashboard, &state), None);
}

#[test]
fn protected_route_without_token_redirects_to_login() {
    assert_eq!(redirect_target(Route::Finder, &restored(false)), Some(LOGIN));
}

#[test]
fn protected_route_with_token_stays() {
    assert_eq!(redirect_target(Route::Profile, &restored(true)), None);
}

#[test]
fn login_with_token_redirects_to_dashboard() {
    assert_eq!(redirect_target(Route::Login, &restored(true)), Some(DASHBOARD));
}

#[test]
fn token_without_loaded_user_is_still_allowed() {
    let state = AuthState {
        user: None,
        ..restored(true)
    };
    assert_eq!(redirect_target(Route::Dashboard, &state), None);
}
