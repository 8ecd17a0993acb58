use super::{
    AppId, DragTarget, Notification, Size, SystemStatus, WidgetDescriptor, WindowDescriptor,
};
use crate::state::State;
use serde::{Deserialize, Serialize};

/// Everything an observer needs to redraw the shell from scratch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShellSnapshot {
    pub status: SystemStatus,
    pub viewport: Size,
    pub focused: Option<AppId>,
    /// Every window in application table order, hidden ones included.
    pub windows: Vec<WindowDescriptor>,
    /// Rendered windows, bottom to top.
    pub stacking: Vec<AppId>,
    pub wallpaper: Option<String>,
    pub widgets: Vec<WidgetDescriptor>,
    pub notifications: Vec<Notification>,
    pub unread: usize,
    pub dragging: Option<DragTarget>,
}

impl From<&State> for ShellSnapshot {
    fn from(state: &State) -> Self {
        Self {
            status: state.status,
            viewport: state.viewport,
            focused: state.windows.focused(),
            windows: state.windows.all().to_vec(),
            stacking: state.windows.visible().iter().map(|w| w.id).collect(),
            wallpaper: state.desktop.wallpaper().map(str::to_owned),
            widgets: state.desktop.widgets().all().to_vec(),
            notifications: state.notifications.all().to_vec(),
            unread: state.notifications.unread(),
            dragging: state.drag.session().map(|s| s.target.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Manager;

    #[test]
    fn snapshot_lists_rendered_windows_bottom_to_top() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.launch_app(AppId::Writer);
        state.launch_app(AppId::Calculator);
        state.launch_app(AppId::Monitor);
        state.minimize_app(AppId::Calculator);
        state.focus_app(AppId::Writer);
        let snapshot = ShellSnapshot::from(&*state);
        assert_eq!(snapshot.stacking, vec![AppId::Monitor, AppId::Writer]);
        assert_eq!(snapshot.focused, Some(AppId::Writer));
    }

    #[test]
    fn snapshot_serializes_with_window_field_names() {
        let manager = Manager::new_test();
        let json = serde_json::to_value(ShellSnapshot::from(&manager.state)).unwrap();
        assert_eq!(json["windows"][0]["id"], "chatbot");
        assert_eq!(json["windows"][0]["isOpen"], false);
        assert_eq!(json["status"], "booting");
    }
}
