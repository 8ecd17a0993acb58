use super::{Position, ShellAction, Size, State, WidgetId};
use crate::models::{DragTarget, WidgetData, WidgetKind};
use crate::snap::{self, Direction};

impl State {
    pub fn add_widget(&mut self, kind: WidgetKind) -> bool {
        let widget = self.desktop.add_widget(kind, &self.widget_cascade);
        tracing::debug!("Added {:?} widget {}", kind, widget.id);
        self.actions.push_back(ShellAction::WidgetAdded(widget));
        true
    }

    pub fn remove_widget(&mut self, id: &WidgetId) -> bool {
        if !self.desktop.remove_widget(id) {
            return false;
        }
        if matches!(self.drag.session(), Some(session) if session.target == DragTarget::Widget(id.clone())) {
            self.drag.end();
        }
        self.actions.push_back(ShellAction::WidgetRemoved(id.clone()));
        true
    }

    /// Resolve `raw` for an element of `size` and commit the result.
    pub fn drop_widget(&mut self, id: &WidgetId, raw: Position, size: Size) -> bool {
        let Some(resolved) = self.resolve(raw, size) else {
            return false;
        };
        if !self
            .desktop
            .set_widget_position(id, resolved.position, resolved.zone)
        {
            return false;
        }
        self.actions.push_back(ShellAction::WidgetMoved {
            id: id.clone(),
            position: resolved.position,
            zone: resolved.zone,
        });
        true
    }

    /// Step a widget with the keyboard. Ignored while a pointer drag runs.
    /// The step is kept inside the desktop but leaves any snap zone.
    pub fn nudge_widget(&mut self, id: &WidgetId, direction: Direction, fine: bool, size: Size) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        let Some(current) = self.desktop.widgets().get(id).map(|w| w.position) else {
            return false;
        };
        let raw = snap::nudge(current, direction, fine, &self.snap);
        let Some(resolved) = self.resolve(raw, size) else {
            return false;
        };
        if !self.desktop.set_widget_position(id, resolved.position, None) {
            return false;
        }
        self.actions.push_back(ShellAction::WidgetMoved {
            id: id.clone(),
            position: resolved.position,
            zone: None,
        });
        true
    }

    /// Resolve against the current viewport, refusing NaN and infinite input
    /// that would slip past the clamp.
    pub(crate) fn resolve(&self, raw: Position, size: Size) -> Option<snap::Resolved> {
        if !(raw.is_finite() && size.is_finite() && self.viewport.is_finite()) {
            tracing::warn!("Ignoring non-finite placement {:?} for size {:?}", raw, size);
            return None;
        }
        Some(snap::resolve_position(raw, size, self.viewport, &self.snap))
    }

    pub fn update_widget_data(&mut self, id: &WidgetId, partial: WidgetData) -> bool {
        if !self.desktop.merge_widget_data(id, partial) {
            return false;
        }
        if let Some(widget) = self.desktop.widgets().get(id) {
            self.actions.push_back(ShellAction::WidgetDataChanged {
                id: id.clone(),
                data: widget.data.clone(),
            });
        }
        true
    }

    pub fn set_wallpaper(&mut self, url: Option<String>) -> bool {
        if !self.desktop.set_wallpaper(url) {
            return false;
        }
        let wallpaper = self.desktop.wallpaper().map(str::to_owned);
        self.actions.push_back(ShellAction::WallpaperChanged(wallpaper));
        true
    }
}
