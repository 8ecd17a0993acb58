use crate::models::{DragTarget, Position, Size, WidgetId};
use crate::snap::Direction;
use serde::{Deserialize, Serialize};

/// Part of an element the pointer went down on.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PointerRegion {
    /// Title bar or grip. Only this region starts a drag.
    Handle,
    /// A button or field inside the handle.
    Control,
    #[default]
    Content,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// Raw input forwarded by the surface layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        target: DragTarget,
        #[serde(default)]
        region: PointerRegion,
        #[serde(default)]
        button: PointerButton,
        pointer: Position,
        /// Measured size of the element under the pointer.
        size: Size,
    },
    PointerMove {
        pointer: Position,
    },
    PointerUp {
        pointer: Position,
    },
    PointerCancel,
    /// Arrow key on a focused widget. `fine` is set while shift is held.
    KeyDown {
        widget: WidgetId,
        direction: Direction,
        #[serde(default)]
        fine: bool,
        size: Size,
    },
    ViewportResized {
        size: Size,
    },
}
