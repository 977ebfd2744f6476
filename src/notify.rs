//! Status notifications
//!
//! A single-slot, process-local status banner. A new notification replaces
//! the previous one outright; an independently scheduled timer hides it
//! after a fixed delay unless superseded first. Supersession is handled by
//! versioning: an expiry carrying a stale version must not hide the
//! notification that replaced its target.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Fixed auto-hide delay in seconds.
pub const AUTO_HIDE_SECONDS: i64 = 5;

/// Notification severity / phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Loading,
    Success,
    Error,
}

/// One live notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
    pub visible: bool,
    pub expires_at: DateTime<Utc>,
}

/// The single notification slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationSlot {
    current: Option<Notification>,
    version: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live notification and bump the version. Returns the new
    /// version, which the caller uses to schedule the matching expiry.
    pub fn show(&mut self, kind: NotificationKind, text: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.version += 1;
        self.current = Some(Notification {
            text: text.into(),
            kind,
            visible: true,
            expires_at: now + Duration::seconds(AUTO_HIDE_SECONDS),
        });
        self.version
    }

    /// Hide the notification, but only if `version` still identifies the
    /// live one. Stale timers from superseded notifications are rejected.
    /// Returns whether anything was hidden.
    pub fn expire(&mut self, version: u64) -> bool {
        if version != self.version {
            return false;
        }
        match &mut self.current {
            Some(notification) if notification.visible => {
                notification.visible = false;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// The live notification, when still visible.
    pub fn visible(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.visible)
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
