use crate::models::dto::ShellSnapshot;
use crate::models::{
    AppId, Notification, Position, SystemStatus, WidgetData, WidgetDescriptor, WidgetId,
    WindowDescriptor,
};
use crate::snap::SnapZone;
use serde::{Deserialize, Serialize};

/// These are the changes the shell made to its state.
/// A renderer should act on these actions.
#[allow(clippy::large_enum_variant)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum ShellAction {
    /// A window became visible, possibly at a freshly assigned position.
    WindowOpened(WindowDescriptor),

    WindowClosed(AppId),

    WindowMinimized(AppId),

    WindowMoved { id: AppId, position: Position },

    /// A window got a new stacking value and is now on top.
    WindowRaised { id: AppId, z_index: i32 },

    FocusChanged(Option<AppId>),

    WidgetAdded(WidgetDescriptor),

    WidgetRemoved(WidgetId),

    /// A widget was committed to a resolved position.
    WidgetMoved {
        id: WidgetId,
        position: Position,
        zone: Option<SnapZone>,
    },

    /// Carries the widget's whole data after the merge.
    WidgetDataChanged { id: WidgetId, data: WidgetData },

    /// Live drag feedback. `ghost` is where the widget would land, present
    /// only when it differs noticeably from `local`.
    WidgetDragPreview {
        id: WidgetId,
        local: Position,
        ghost: Option<Position>,
        zone: Option<SnapZone>,
    },

    /// Drag abandoned; the widget goes back to its committed position.
    WidgetDragCancelled { id: WidgetId, position: Position },

    WallpaperChanged(Option<String>),

    Notified(Notification),

    /// A toast timed out. The notification stays in the history.
    NotificationHidden(String),

    NotificationDismissed(String),

    NotificationsCleared,

    NotificationsRead,

    StatusChanged(SystemStatus),

    StateDump(ShellSnapshot),
}
