use super::*;

// =============================================================
// Parse
// =============================================================

#[test]
fn parse_known_paths() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("/login"), Route::Login);
    assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
    assert_eq!(Route::parse("/mentors/12"), Route::MentorProfile(12));
}

#[test]
fn parse_unknown_paths() {
    assert_eq!(Route::parse("/mentors/abc"), Route::NotFound);
    assert_eq!(Route::parse("/mentors/"), Route::NotFound);
    assert_eq!(Route::parse("/admin"), Route::NotFound);
}

#[test]
fn path_round_trips_through_parse() {
    for route in [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::Dashboard,
        Route::Finder,
        Route::MentorProfile(3),
        Route::Profile,
    ] {
        assert_eq!(Route::parse(&route.path()), route);
    }
}

// =============================================================
// Guard
// =============================================================

#[test]
fn protected_routes_redirect_to_login_when_signed_out() {
    for route in [Route::Dashboard, Route::Finder, Route::MentorProfile(1), Route::Profile] {
        assert_eq!(guard(route, false), Access::Redirect(LOGIN));
        assert_eq!(guard(route, true), Access::Allow);
    }
}

#[test]
fn public_routes_are_open() {
    for route in [Route::Home, Route::Register] {
        assert_eq!(guard(route, false), Access::Allow);
        assert_eq!(guard(route, true), Access::Allow);
    }
    assert_eq!(guard(Route::Login, false), Access::Allow);
}

#[test]
fn signed_in_login_visit_goes_to_dashboard() {
    assert_eq!(guard(Route::Login, true), Access::Redirect(DASHBOARD));
}

#[test]
fn unknown_route_goes_home() {
    assert_eq!(guard(Route::NotFound, false), Access::Redirect(HOME));
    assert_eq!(guard(Route::NotFound, true), Access::Redirect(HOME));
}
