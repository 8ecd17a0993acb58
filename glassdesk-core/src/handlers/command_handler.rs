use super::{Command, Config, Manager, Renderer, ShellAction};
use crate::models::dto::ShellSnapshot;

impl<C: Config, R: Renderer> Manager<C, R> {
    /* Please also update src/bin/glassdesk-check.rs and utils/command_pipe.rs
     * when a command gains, loses or changes its arguments.
     *  */
    /// Processes a command and invokes the associated function.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        let state = &mut self.state;
        match command {
            Command::LaunchApp(id) => state.launch_app(*id),
            Command::CloseApp(id) => state.close_app(*id),
            Command::MinimizeApp(id) => state.minimize_app(*id),
            Command::FocusApp(id) => state.focus_app(*id),
            Command::MoveWindow { id, position } => state.move_app_window(*id, *position),

            Command::AddWidget(kind) => state.add_widget(*kind),
            Command::RemoveWidget(id) => state.remove_widget(id),
            Command::MoveWidget { id, position, size } => state.drop_widget(id, *position, *size),
            Command::UpdateWidgetData { id, data } => state.update_widget_data(id, data.clone()),
            Command::SetWallpaper(url) => state.set_wallpaper(url.clone()),

            Command::Notify {
                title,
                message,
                severity,
            } => state.notify(title.clone(), message.clone(), *severity, chrono::Utc::now()),
            Command::DismissNotification(id) => state.dismiss_notification(id),
            Command::ClearNotifications => state.clear_notifications(),
            Command::MarkNotificationsRead => state.mark_notifications_read(),

            Command::Input(event) => state.input_handler(event.clone()),

            Command::DumpState => {
                let snapshot = ShellSnapshot::from(&*state);
                state.actions.push_back(ShellAction::StateDump(snapshot));
                false
            }
            Command::Shutdown => state.shutdown(),
            Command::Reboot => state.reboot(),
            Command::Other(raw) => {
                tracing::warn!("Unknown command: {}", raw);
                false
            }
        }
    }
}
