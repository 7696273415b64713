use {
    crate::{config::NOTIFY, utils::AppInstant},
    std::time::Duration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// Why a toast is being asked to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Click somewhere else on the page. Ignored.
    ClickAway,
    CloseButton,
    Timeout,
}

/// Transient toast. Only one exists at a time; a new one replaces the old.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub visible: bool,
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Option<AppInstant>,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            visible: false,
            message: String::new(),
            kind: NotificationKind::Success,
            shown_at: None,
        }
    }
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            visible: true,
            message: message.into(),
            kind,
            shown_at: Some(AppInstant::now()),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn shown_at(&self) -> Option<AppInstant> {
        self.shown_at
    }

    /// Returns true if the toast was hidden by this call.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if reason == DismissReason::ClickAway || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Time left before auto-hide, `None` once hidden or expired.
    pub fn remaining(&self, now: AppInstant) -> Option<Duration> {
        if !self.visible {
            return None;
        }
        let shown_at = self.shown_at?;
        Duration::from_millis(NOTIFY.auto_hide_ms).checked_sub(now.saturating_duration_since(shown_at))
    }

    /// Auto-hide once the display time has elapsed.
    pub fn tick(&mut self, now: AppInstant) -> bool {
        if self.visible && self.remaining(now).is_none_or(|d| d.is_zero()) {
            return self.dismiss(DismissReason::Timeout);
        }
        false
    }
}
