//! Toast stack for transient notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the app shell when notifications are enabled. Each toast
//! removes itself after its timeout or when closed. Timers are scheduled
//! once per notification id and stop touching the store after unmount.
//! The bookkeeping lives in `ExpirySchedule` so it can be tested without a
//! browser.

#[cfg(test)]
#[path = "notification_center_test.rs"]
mod notification_center_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::state::notifications::NotificationsAction;
use crate::state::store::{Dispatch, Store};

/// Notification ids that already have an expiry timer running.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpirySchedule {
    scheduled: HashSet<String>,
}

impl ExpirySchedule {
    /// Claim every pending `(id, timeout_ms)` that has no timer yet.
    ///
    /// Returned entries are marked scheduled, so a later call with the same
    /// ids yields nothing until [`ExpirySchedule::finish`] releases them.
    pub fn claim(&mut self, pending: &[(String, u32)]) -> Vec<(String, u32)> {
        pending
            .iter()
            .filter(|(id, _)| self.scheduled.insert(id.clone()))
            .cloned()
            .collect()
    }

    /// Forget `id` once its timer has fired.
    pub fn finish(&mut self, id: &str) {
        self.scheduled.remove(id);
    }

    pub fn is_scheduled(&self, id: &str) -> bool {
        self.scheduled.contains(id)
    }
}

/// Removal to dispatch when a timer for `id` fires; nothing once unmounted.
pub fn expiry_action(mounted: bool, id: String) -> Option<NotificationsAction> {
    mounted.then_some(NotificationsAction::Remove(id))
}

#[component]
pub fn NotificationCenter() -> impl IntoView {
    let store = expect_context::<Store>();

    #[cfg(feature = "hydrate")]
    {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let alive = Arc::new(AtomicBool::new(true));
        let schedule = StoredValue::new(ExpirySchedule::default());
        let alive_effect = alive.clone();
        let pending = store.select(|s| {
            s.notifications
                .items
                .iter()
                .map(|n| (n.id.clone(), n.timeout_ms))
                .collect::<Vec<_>>()
        });
        Effect::new(move || {
            let fresh = pending.with(|pending| {
                let mut fresh = Vec::new();
                schedule.update_value(|s| fresh = s.claim(pending));
                fresh
            });
            for (id, timeout_ms) in fresh {
                let alive_task = alive_effect.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(timeout_ms))).await;
                    let mounted = alive_task.load(Ordering::Relaxed);
                    if let Some(action) = expiry_action(mounted, id.clone()) {
                        store.dispatch(action.into());
                        schedule.update_value(|s| s.finish(&id));
                    }
                });
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="toast-container position-fixed top-0 end-0 p-3" style="z-index: 2000">
            <For
                each=move || store.with(|s| s.notifications.items.clone())
                key=|n| n.id.clone()
                children=move |n| {
                    let id = n.id.clone();
                    view! {
                        <div class=format!("toast show bg-{}", n.variant.background()) role="alert">
                            <div class="toast-header">
                                <strong class="me-auto">{n.title}</strong>
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| store.dispatch(NotificationsAction::Remove(id.clone()).into())
                                ></button>
                            </div>
                            <div class="toast-body">{n.message}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
