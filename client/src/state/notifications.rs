//! Transient toast notifications.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Milliseconds a toast stays visible when the draft sets no timeout.
pub const DEFAULT_TIMEOUT_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationVariant {
    #[default]
    Success,
    Danger,
    Info,
    Warning,
}

impl NotificationVariant {
    /// Background class suffix used by the toast markup.
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "light",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// Caller-supplied fields of a notification before an id is assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub variant: NotificationVariant,
    pub timeout_ms: Option<u32>,
}

impl NotificationDraft {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn danger(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Danger,
            ..Self::success(title, message)
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub variant: NotificationVariant,
    pub timeout_ms: u32,
}

impl Notification {
    /// Assign a fresh id and fill defaults.
    pub fn prepare(draft: NotificationDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title,
            message: draft.message,
            variant: draft.variant,
            timeout_ms: draft.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationsAction {
    Add(Notification),
    Remove(String),
    Clear,
}

pub fn reduce(state: &mut NotificationsState, action: NotificationsAction) {
    match action {
        NotificationsAction::Add(notification) => state.items.push(notification),
        NotificationsAction::Remove(id) => state.items.retain(|n| n.id != id),
        NotificationsAction::Clear => state.items.clear(),
    }
}
