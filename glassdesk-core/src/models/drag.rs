//! Pointer drag gestures over windows and widgets.
use super::{AppId, Position, Size, WidgetId};
use crate::snap::Resolved;
use serde::{Deserialize, Serialize};

/// What a gesture is moving.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DragTarget {
    Window(AppId),
    Widget(WidgetId),
}

/// One drag in progress.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DragSession {
    pub target: DragTarget,
    /// Pointer position relative to the element origin when the drag began.
    pub grab_offset: Position,
    /// Element size measured at drag start.
    pub element_size: Size,
    /// Where the element follows the pointer, before any snapping.
    pub local: Position,
    /// Last landing spot computed for the live position.
    pub preview: Option<Resolved>,
}

impl DragSession {
    /// Follow the pointer and return the new raw element position.
    pub fn track(&mut self, pointer: Position) -> Position {
        self.local = pointer - self.grab_offset;
        self.local
    }
}

/// At most one gesture exists at a time.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragGesture {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragGesture::Dragging(session) => Some(session),
            DragGesture::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            DragGesture::Dragging(session) => Some(session),
            DragGesture::Idle => None,
        }
    }

    /// Start dragging `target`, whose element sits at `origin`, grabbed at
    /// `pointer`. Refused while another gesture is running.
    pub fn begin(&mut self, target: DragTarget, origin: Position, element_size: Size, pointer: Position) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = DragGesture::Dragging(DragSession {
            target,
            grab_offset: pointer - origin,
            element_size,
            local: origin,
            preview: None,
        });
        true
    }

    /// Leave the dragging state, handing back the finished session.
    pub fn end(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            DragGesture::Dragging(session) => Some(session),
            DragGesture::Idle => None,
        }
    }
}
