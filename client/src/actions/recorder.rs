//! Dispatcher that records actions for handler tests.

use std::cell::RefCell;

use crate::state::notifications::{Notification, NotificationsAction};
use crate::state::store::{Action, AppState, Dispatch};

pub struct Recorder {
    pub enabled: bool,
    pub actions: RefCell<Vec<Action>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            enabled: true,
            actions: RefCell::new(Vec::new()),
        }
    }

    pub fn silent() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions.borrow().clone()
    }

    /// State reached by replaying every recorded action.
    pub fn state(&self) -> AppState {
        let mut state = AppState::default();
        for action in self.actions() {
            state.apply(action);
        }
        state
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.actions()
            .into_iter()
            .filter_map(|action| match action {
                Action::Notifications(NotificationsAction::Add(n)) => Some(n),
                _ => None,
            })
            .collect()
    }
}

impl Dispatch for Recorder {
    fn dispatch(&self, action: Action) {
        self.actions.borrow_mut().push(action);
    }

    fn notifications_enabled(&self) -> bool {
        self.enabled
    }
}
