//! Application state container and the single dispatch point.
//!
//! DESIGN
//! ======
//! `AppState` aggregates the four slices. Every mutation goes through an
//! `Action` and is applied by the owning slice's pure `reduce`, so reducers
//! are testable without a reactive runtime. `Store` wraps the aggregate in one
//! `RwSignal` and is provided through Leptos context.
//!
//! Action handlers depend on the `Dispatch` trait rather than on `Store`, so
//! tests can record the dispatched sequence instead of rendering anything.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use super::auth::{self, AuthAction, AuthState};
use super::mentors::{self, MentorsAction, MentorsState};
use super::notifications::{self, Notification, NotificationDraft, NotificationsAction, NotificationsState};
use super::sessions::{self, SessionsAction, SessionsState};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub auth: AuthState,
    pub mentors: MentorsState,
    pub sessions: SessionsState,
    pub notifications: NotificationsState,
}

impl AppState {
    /// Route the action to the slice that owns it.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Auth(a) => auth::reduce(&mut self.auth, a),
            Action::Mentors(a) => mentors::reduce(&mut self.mentors, a),
            Action::Sessions(a) => sessions::reduce(&mut self.sessions, a),
            Action::Notifications(a) => notifications::reduce(&mut self.notifications, a),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Mentors(MentorsAction),
    Sessions(SessionsAction),
    Notifications(NotificationsAction),
}

impl From<AuthAction> for Action {
    fn from(a: AuthAction) -> Self {
        Self::Auth(a)
    }
}

impl From<MentorsAction> for Action {
    fn from(a: MentorsAction) -> Self {
        Self::Mentors(a)
    }
}

impl From<SessionsAction> for Action {
    fn from(a: SessionsAction) -> Self {
        Self::Sessions(a)
    }
}

impl From<NotificationsAction> for Action {
    fn from(a: NotificationsAction) -> Self {
        Self::Notifications(a)
    }
}

/// Sink for state transitions.
pub trait Dispatch {
    fn dispatch(&self, action: Action);

    /// Whether `notify` should surface toasts at all.
    fn notifications_enabled(&self) -> bool {
        true
    }

    /// Queue a toast unless notifications are switched off.
    fn notify(&self, draft: NotificationDraft) {
        if self.notifications_enabled() {
            self.dispatch(NotificationsAction::Add(Notification::prepare(draft)).into());
        }
    }
}

/// Reactive handle to the application state.
#[derive(Clone, Copy, Debug)]
pub struct Store {
    pub state: RwSignal<AppState>,
    notifications_enabled: bool,
}

impl Store {
    pub fn new(notifications_enabled: bool) -> Self {
        Self {
            state: RwSignal::new(AppState::default()),
            notifications_enabled,
        }
    }

    /// Tracked read of part of the state.
    pub fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with(f)
    }

    /// Memoized projection; subscribers rerun only when the projected value changes.
    pub fn select<T>(&self, f: impl Fn(&AppState) -> T + Send + Sync + 'static) -> Memo<T>
    where
        T: PartialEq + Send + Sync + 'static,
    {
        let state = self.state;
        Memo::new(move |_| state.with(&f))
    }

    /// Untracked read, for event handlers and async tasks.
    pub fn with_untracked<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with_untracked(f)
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        self.state.update(|state| state.apply(action));
    }

    fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }
}
