use super::{AppId, Position, ShellAction, State};
use crate::models::DragTarget;

impl State {
    /// Open `id` (placing it when it was closed) and bring it to the front.
    pub fn launch_app(&mut self, id: AppId) -> bool {
        let before = self.windows.focused();
        if !self
            .windows
            .open(id, self.viewport, &self.placement, &mut self.rng)
        {
            return false;
        }
        let Some(window) = self.windows.get(id) else {
            return false;
        };
        tracing::debug!("Launched {} at {:?}", id, window.position);
        self.actions.push_back(ShellAction::WindowOpened(window.clone()));
        self.actions.push_back(ShellAction::WindowRaised {
            id,
            z_index: window.z_index,
        });
        self.push_focus_change(before);
        true
    }

    pub fn close_app(&mut self, id: AppId) -> bool {
        let before = self.windows.focused();
        if !self.windows.close(id) {
            return false;
        }
        self.drop_window_drag(id);
        self.actions.push_back(ShellAction::WindowClosed(id));
        self.push_focus_change(before);
        true
    }

    pub fn minimize_app(&mut self, id: AppId) -> bool {
        let before = self.windows.focused();
        if !self.windows.minimize(id) {
            return false;
        }
        self.drop_window_drag(id);
        self.actions.push_back(ShellAction::WindowMinimized(id));
        self.push_focus_change(before);
        true
    }

    /// Raise `id` above every other window and focus it.
    pub fn focus_app(&mut self, id: AppId) -> bool {
        let before = self.windows.focused();
        if !self.windows.focus(id) {
            return false;
        }
        if let Some(window) = self.windows.get(id) {
            self.actions.push_back(ShellAction::WindowRaised {
                id,
                z_index: window.z_index,
            });
        }
        self.push_focus_change(before);
        true
    }

    /// Place a window anywhere, on screen or not.
    pub fn move_app_window(&mut self, id: AppId, position: Position) -> bool {
        if !position.is_finite() {
            tracing::warn!("Ignoring non-finite position {:?} for {}", position, id);
            return false;
        }
        if !self.windows.move_window(id, position) {
            return false;
        }
        self.actions
            .push_back(ShellAction::WindowMoved { id, position });
        true
    }

    fn push_focus_change(&mut self, before: Option<AppId>) {
        let after = self.windows.focused();
        if after != before {
            self.actions.push_back(ShellAction::FocusChanged(after));
        }
    }

    /// A window that stops being rendered cannot keep being dragged.
    fn drop_window_drag(&mut self, id: AppId) {
        if matches!(self.drag.session(), Some(session) if session.target == DragTarget::Window(id)) {
            self.drag.end();
        }
    }
}
