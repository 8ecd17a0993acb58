use crate::errors::DeskError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl FromStr for Severity {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(DeskError::UnknownSeverity(s.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    /// Shown as a toast. Hidden toasts stay in the history.
    pub visible: bool,
    pub read: bool,
}

/// Notification history, newest first.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    #[must_use]
    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn unread(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Toasts currently on screen, newest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| n.visible)
    }

    pub fn notify(&mut self, title: String, message: String, severity: Severity, now: DateTime<Utc>) -> &Notification {
        self.notifications.insert(
            0,
            Notification {
                id: uuid::Uuid::new_v4().simple().to_string(),
                title,
                message,
                severity,
                timestamp: now,
                visible: true,
                read: false,
            },
        );
        &self.notifications[0]
    }

    /// Remove `id` from the history altogether.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.notifications.is_empty();
        self.notifications.clear();
        changed
    }

    pub fn mark_all_read(&mut self) -> bool {
        let mut changed = false;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed = true;
        }
        changed
    }

    /// Hide every toast shown for at least `toast_duration`. Returns the ids
    /// that were hidden.
    pub fn expire(&mut self, now: DateTime<Utc>, toast_duration: Duration) -> Vec<String> {
        self.notifications
            .iter_mut()
            .filter(|n| n.visible && now - n.timestamp >= toast_duration)
            .map(|n| {
                n.visible = false;
                n.id.clone()
            })
            .collect()
    }
}
