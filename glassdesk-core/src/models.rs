//! Objects (such as windows and widgets) the shell keeps track of.
mod app;
mod desktop;
mod drag;
mod focus_manager;
mod geometry;
mod manager;
mod notification;
mod widget;
mod widget_registry;
mod window;
mod window_registry;

pub mod dto;

pub use app::{AppConfig, AppId, APPS};
pub use desktop::Desktop;
pub use drag::{DragGesture, DragSession, DragTarget};
pub use focus_manager::FocusManager;
pub use geometry::{Position, Rect, Size};
pub use manager::Manager;
pub use notification::{Notification, NotificationCenter, Severity};
pub use widget::{WidgetData, WidgetDescriptor, WidgetId, WidgetKind};
pub use widget_registry::{WidgetCascade, WidgetRegistry};
pub use window::WindowDescriptor;
pub use window_registry::{Placement, WindowRegistry};

use serde::{Deserialize, Serialize};

/// Lifecycle of the shell as a whole.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    #[default]
    Booting,
    Active,
    Shutdown,
}
