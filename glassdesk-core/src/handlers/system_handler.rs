use super::{AppId, ShellAction, State};
use crate::models::{Severity, SystemStatus, WindowRegistry};
use chrono::{DateTime, Utc};

impl State {
    /// Leave the boot screen. Only the first call has an effect.
    pub fn complete_boot(&mut self) -> bool {
        if self.status != SystemStatus::Booting {
            return false;
        }
        self.set_status(SystemStatus::Active);
        true
    }

    pub fn shutdown(&mut self) -> bool {
        if self.status == SystemStatus::Shutdown {
            // Stops a pending reboot from coming back up.
            return std::mem::take(&mut self.rebooting);
        }
        self.drag.end();
        self.set_status(SystemStatus::Shutdown);
        true
    }

    /// Shut down and mark the shell to boot again. The caller decides when
    /// [`State::finish_reboot`] runs.
    pub fn reboot(&mut self) -> bool {
        if self.status == SystemStatus::Shutdown {
            return false;
        }
        self.drag.end();
        self.rebooting = true;
        self.set_status(SystemStatus::Shutdown);
        true
    }

    /// Come back from a reboot with every window closed and no
    /// notifications. The desktop stays as it was persisted.
    pub fn finish_reboot(&mut self) -> bool {
        if !self.rebooting {
            return false;
        }
        self.rebooting = false;
        let open: Vec<AppId> = self
            .windows
            .all()
            .iter()
            .filter(|w| w.is_open)
            .map(|w| w.id)
            .collect();
        for id in open {
            self.close_app(id);
        }
        self.windows = WindowRegistry::default();
        self.clear_notifications();
        self.set_status(SystemStatus::Booting);
        true
    }

    pub fn notify(&mut self, title: String, message: String, severity: Severity, now: DateTime<Utc>) -> bool {
        let notification = self.notifications.notify(title, message, severity, now).clone();
        self.actions.push_back(ShellAction::Notified(notification));
        true
    }

    pub fn dismiss_notification(&mut self, id: &str) -> bool {
        if !self.notifications.dismiss(id) {
            return false;
        }
        self.actions
            .push_back(ShellAction::NotificationDismissed(id.to_owned()));
        true
    }

    pub fn clear_notifications(&mut self) -> bool {
        if !self.notifications.clear() {
            return false;
        }
        self.actions.push_back(ShellAction::NotificationsCleared);
        true
    }

    pub fn mark_notifications_read(&mut self) -> bool {
        if !self.notifications.mark_all_read() {
            return false;
        }
        self.actions.push_back(ShellAction::NotificationsRead);
        true
    }

    /// Hide toasts that have been up for the configured duration.
    pub fn expire_toasts(&mut self, now: DateTime<Utc>) -> bool {
        let hidden = self.notifications.expire(now, self.toast_duration);
        let changed = !hidden.is_empty();
        self.actions
            .extend(hidden.into_iter().map(ShellAction::NotificationHidden));
        changed
    }

    fn set_status(&mut self, status: SystemStatus) {
        tracing::info!("System {:?}", status);
        self.status = status;
        self.actions.push_back(ShellAction::StatusChanged(status));
    }
}
