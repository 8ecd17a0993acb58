//! Window Information
use super::{AppConfig, AppId, Position, Rect, Size};
use serde::{Deserialize, Serialize};

/// Where a freshly built descriptor sits until its first launch.
const UNPLACED: Position = Position::new(100.0, 100.0);

/// State of the single window belonging to an application.
// Mirrors the flags the renderer reads; `is_maximized` is reserved.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowDescriptor {
    pub id: AppId,
    pub title: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: i32,
    pub position: Position,
    pub size: Size,
}

impl WindowDescriptor {
    #[must_use]
    pub fn new(app: &AppConfig) -> Self {
        Self {
            id: app.id,
            title: app.name.to_owned(),
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            z_index: 0,
            position: UNPLACED,
            size: app.default_size,
        }
    }

    /// Open and not minimized: rendered and hit-testable.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    #[must_use]
    pub fn contains_point(&self, point: Position) -> bool {
        self.is_visible() && self.rect().contains_point(point)
    }
}
