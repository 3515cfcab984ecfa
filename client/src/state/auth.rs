//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. `restored` stays `false` until
//! the stored credentials have been inspected after hydration, so server and
//! client render the same first frame.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ErrorPayload;
use crate::net::types::User;

/// Progress of the last auth request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Authentication state tracking the signed-in user and request progress.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub has_token: bool,
    pub restored: bool,
    pub status: RequestStatus,
    pub error: Option<ErrorPayload>,
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }
}

/// Transitions of the auth slice.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    /// Stored credentials were inspected after mount.
    Restored { has_token: bool },
    LoginPending,
    LoginFulfilled,
    LoginRejected(ErrorPayload),
    RegisterPending,
    RegisterFulfilled,
    RegisterRejected(ErrorPayload),
    CurrentUserPending,
    CurrentUserFulfilled(User),
    CurrentUserRejected(ErrorPayload),
    UpdateProfilePending,
    UpdateProfileFulfilled(User),
    UpdateProfileRejected(ErrorPayload),
    Logout,
    ClearError,
}

/// Apply one transition.
pub fn reduce(state: &mut AuthState, action: AuthAction) {
    match action {
        AuthAction::Restored { has_token } => {
            state.has_token = has_token;
            state.restored = true;
        }
        AuthAction::LoginPending
        | AuthAction::RegisterPending
        | AuthAction::CurrentUserPending
        | AuthAction::UpdateProfilePending => {
            state.status = RequestStatus::Loading;
            state.error = None;
        }
        AuthAction::LoginFulfilled => {
            state.status = RequestStatus::Succeeded;
            state.has_token = true;
            state.restored = true;
        }
        AuthAction::RegisterFulfilled => {
            state.status = RequestStatus::Succeeded;
        }
        AuthAction::CurrentUserFulfilled(user) | AuthAction::UpdateProfileFulfilled(user) => {
            state.status = RequestStatus::Succeeded;
            state.user = Some(user);
        }
        AuthAction::LoginRejected(error)
        | AuthAction::RegisterRejected(error)
        | AuthAction::UpdateProfileRejected(error) => {
            state.status = RequestStatus::Failed;
            state.error = Some(error);
        }
        AuthAction::CurrentUserRejected(error) => {
            state.status = RequestStatus::Failed;
            state.error = Some(error);
            state.user = None;
        }
        AuthAction::Logout => {
            *state = AuthState {
                restored: true,
                ..AuthState::default()
            };
        }
        AuthAction::ClearError => {
            state.error = None;
        }
    }
}
