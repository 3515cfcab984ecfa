//! Client route table and the access check evaluated on each navigation.
//!
//! DESIGN
//! ======
//! `guard` is a pure function of the route and whether a credential is
//! stored, so the redirect rules are testable without a router. Pages that
//! need a signed-in user call it through `util::auth::install_route_guard`.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const FINDER: &str = "/finder";
pub const PROFILE: &str = "/profile";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    Finder,
    MentorProfile(i64),
    Profile,
    NotFound,
}

impl Route {
    /// Match a pathname (query and fragment already stripped).
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            LOGIN => Self::Login,
            REGISTER => Self::Register,
            DASHBOARD => Self::Dashboard,
            FINDER => Self::Finder,
            PROFILE => Self::Profile,
            other => other
                .strip_prefix("/mentors/")
                .and_then(|id| id.parse().ok())
                .map_or(Self::NotFound, Self::MentorProfile),
        }
    }

    pub fn path(self) -> String {
        match self {
            Self::Home | Self::NotFound => HOME.to_owned(),
            Self::Login => LOGIN.to_owned(),
            Self::Register => REGISTER.to_owned(),
            Self::Dashboard => DASHBOARD.to_owned(),
            Self::Finder => FINDER.to_owned(),
            Self::MentorProfile(id) => mentor_path(id),
            Self::Profile => PROFILE.to_owned(),
        }
    }

    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Finder | Self::MentorProfile(_) | Self::Profile
        )
    }
}

pub fn mentor_path(id: i64) -> String {
    format!("/mentors/{id}")
}

/// Outcome of a navigation check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

pub fn guard(route: Route, authenticated: bool) -> Access {
    match route {
        Route::NotFound => Access::Redirect(HOME),
        Route::Login if authenticated => Access::Redirect(DASHBOARD),
        r if r.requires_auth() && !authenticated => Access::Redirect(LOGIN),
        _ => Access::Allow,
    }
}
