use crate::models::{AppId, Position, Severity, Size, WidgetData, WidgetId, WidgetKind};
use crate::InputEvent;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Command {
    LaunchApp(AppId),
    CloseApp(AppId),
    MinimizeApp(AppId),
    FocusApp(AppId),
    MoveWindow {
        id: AppId,
        position: Position,
    },
    AddWidget(WidgetKind),
    RemoveWidget(WidgetId),
    /// Drop a widget at a raw position; it is resolved before being stored.
    MoveWidget {
        id: WidgetId,
        position: Position,
        size: Size,
    },
    UpdateWidgetData {
        id: WidgetId,
        data: WidgetData,
    },
    SetWallpaper(Option<String>),
    Notify {
        title: String,
        message: String,
        severity: Severity,
    },
    DismissNotification(String),
    ClearNotifications,
    MarkNotificationsRead,
    DumpState,
    Shutdown,
    /// Shut down, then boot again with a fresh session.
    Reboot,
    Input(InputEvent),
    Other(String),
}
