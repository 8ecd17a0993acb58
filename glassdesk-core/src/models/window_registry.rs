//! The single source of truth for window descriptors.
use super::{AppId, FocusManager, Position, Size, WindowDescriptor, APPS};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How windows are placed the first time they open.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Base point of the launch cascade.
    pub cascade_origin: Position,
    /// Upper bound of the random offset added to each axis of the origin.
    pub cascade_jitter: f64,
    /// Application docked to the bottom right corner instead of cascading.
    pub docked_app: Option<AppId>,
    pub docked_margin: f64,
    pub taskbar_height: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            cascade_origin: Position::new(100.0, 80.0),
            cascade_jitter: 40.0,
            docked_app: Some(AppId::Chatbot),
            docked_margin: 16.0,
            taskbar_height: 48.0,
        }
    }
}

impl Placement {
    /// Initial position of `id`, sized `size`, in `viewport`.
    pub fn initial_position(&self, id: AppId, size: Size, viewport: Size, rng: &mut impl Rng) -> Position {
        if self.docked_app == Some(id) {
            return Position::new(
                (viewport.width - size.width - self.docked_margin).max(0.0),
                (viewport.height - size.height - self.taskbar_height - self.docked_margin).max(0.0),
            );
        }
        let (dx, dy) = if self.cascade_jitter > 0.0 {
            (
                rng.random_range(0.0..self.cascade_jitter),
                rng.random_range(0.0..self.cascade_jitter),
            )
        } else {
            (0.0, 0.0)
        };
        self.cascade_origin + Position::new(dx, dy)
    }
}

/// Window state for every application, created once and only ever toggled.
///
/// Every mutator returns whether anything changed; unknown ids are ignored.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowRegistry {
    windows: Vec<WindowDescriptor>,
    pub focus_manager: FocusManager,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self {
            windows: APPS.iter().map(WindowDescriptor::new).collect(),
            focus_manager: FocusManager::default(),
        }
    }
}

impl WindowRegistry {
    #[must_use]
    pub fn get(&self, id: AppId) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// All windows in application table order.
    #[must_use]
    pub fn all(&self) -> &[WindowDescriptor] {
        &self.windows
    }

    #[must_use]
    pub fn focused(&self) -> Option<AppId> {
        self.focus_manager.focused()
    }

    /// Open and unminimize `id`, placing it if it was closed, then raise it.
    pub fn open(&mut self, id: AppId, viewport: Size, placement: &Placement, rng: &mut impl Rng) -> bool {
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        if !window.is_open {
            window.position = placement.initial_position(id, window.size, viewport, rng);
            tracing::debug!("Placing {} at {:?}", id, window.position);
        }
        window.is_open = true;
        window.is_minimized = false;
        self.focus(id)
    }

    /// Close `id`. Focus is cleared if it was focused and never handed on.
    pub fn close(&mut self, id: AppId) -> bool {
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        window.is_open = false;
        self.focus_manager.release(id);
        true
    }

    /// Hide `id` while keeping its geometry for when it comes back.
    pub fn minimize(&mut self, id: AppId) -> bool {
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        window.is_minimized = true;
        self.focus_manager.release(id);
        true
    }

    /// Overwrite the position of `id`. Windows are free to leave the screen.
    pub fn move_window(&mut self, id: AppId, position: Position) -> bool {
        match self.windows.iter_mut().find(|w| w.id == id) {
            Some(window) => {
                window.position = position;
                true
            }
            None => false,
        }
    }

    /// Raise `id` to the front and focus it.
    pub fn focus(&mut self, id: AppId) -> bool {
        self.focus_manager.raise(&mut self.windows, id).is_some()
    }

    /// Rendered windows, bottom to top.
    #[must_use]
    pub fn visible(&self) -> Vec<&WindowDescriptor> {
        let mut visible: Vec<&WindowDescriptor> =
            self.windows.iter().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    /// The topmost rendered window under `point`.
    #[must_use]
    pub fn hit_test(&self, point: Position) -> Option<AppId> {
        self.windows
            .iter()
            .filter(|w| w.contains_point(point))
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VIEWPORT: Size = Size::new(1024.0, 768.0);

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn docked_app_opens_in_the_bottom_right_corner() {
        let mut subject = WindowRegistry::default();
        subject.open(AppId::Chatbot, VIEWPORT, &Placement::default(), &mut rng());
        let window = subject.get(AppId::Chatbot).unwrap();
        assert_eq!(window.position, Position::new(508.0, 54.0));
        assert!(window.is_open);
        assert_eq!(subject.focused(), Some(AppId::Chatbot));
    }

    #[test]
    fn docked_placement_never_goes_negative() {
        let mut subject = WindowRegistry::default();
        subject.open(AppId::Chatbot, Size::new(320.0, 480.0), &Placement::default(), &mut rng());
        let window = subject.get(AppId::Chatbot).unwrap();
        assert_eq!(window.position, Position::new(0.0, 0.0));
    }

    #[test]
    fn other_apps_cascade_from_the_origin() {
        let placement = Placement::default();
        let mut rng = rng();
        for app in APPS.iter().filter(|app| app.id != AppId::Chatbot) {
            let mut subject = WindowRegistry::default();
            subject.open(app.id, VIEWPORT, &placement, &mut rng);
            let position = subject.get(app.id).unwrap().position;
            assert!((100.0..140.0).contains(&position.x), "{position:?}");
            assert!((80.0..120.0).contains(&position.y), "{position:?}");
        }
    }

    #[test]
    fn reopening_an_open_window_keeps_its_position() {
        let mut subject = WindowRegistry::default();
        let mut rng = rng();
        subject.open(AppId::Writer, VIEWPORT, &Placement::default(), &mut rng);
        subject.move_window(AppId::Writer, Position::new(-300.0, 900.0));
        subject.minimize(AppId::Writer);
        subject.open(AppId::Writer, VIEWPORT, &Placement::default(), &mut rng);
        let window = subject.get(AppId::Writer).unwrap();
        assert_eq!(window.position, Position::new(-300.0, 900.0));
        assert!(!window.is_minimized);
    }

    #[test]
    fn closing_the_focused_window_clears_focus() {
        let mut subject = WindowRegistry::default();
        let mut rng = rng();
        subject.open(AppId::Writer, VIEWPORT, &Placement::default(), &mut rng);
        subject.open(AppId::Browser, VIEWPORT, &Placement::default(), &mut rng);
        subject.close(AppId::Browser);
        assert_eq!(subject.focused(), None);
    }

    #[test]
    fn closing_another_window_keeps_focus() {
        let mut subject = WindowRegistry::default();
        let mut rng = rng();
        subject.open(AppId::Writer, VIEWPORT, &Placement::default(), &mut rng);
        subject.open(AppId::Browser, VIEWPORT, &Placement::default(), &mut rng);
        subject.close(AppId::Writer);
        assert_eq!(subject.focused(), Some(AppId::Browser));
    }

    #[test]
    fn minimizing_hides_the_window_and_drops_its_focus() {
        let mut subject = WindowRegistry::default();
        subject.open(AppId::Monitor, VIEWPORT, &Placement::default(), &mut rng());
        let before = subject.get(AppId::Monitor).unwrap().clone();
        subject.minimize(AppId::Monitor);
        let after = subject.get(AppId::Monitor).unwrap();
        assert_eq!(subject.focused(), None);
        assert!(subject.visible().is_empty());
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
    }

    #[test]
    fn hit_testing_picks_the_topmost_visible_window() {
        let mut subject = WindowRegistry::default();
        let mut rng = rng();
        subject.open(AppId::Writer, VIEWPORT, &Placement::default(), &mut rng);
        subject.open(AppId::Settings, VIEWPORT, &Placement::default(), &mut rng);
        subject.move_window(AppId::Writer, Position::new(0.0, 0.0));
        subject.move_window(AppId::Settings, Position::new(0.0, 0.0));
        let point = Position::new(50.0, 50.0);
        assert_eq!(subject.hit_test(point), Some(AppId::Settings));
        subject.focus(AppId::Writer);
        assert_eq!(subject.hit_test(point), Some(AppId::Writer));
        subject.close(AppId::Writer);
        assert_eq!(subject.hit_test(point), Some(AppId::Settings));
        subject.minimize(AppId::Settings);
        assert_eq!(subject.hit_test(point), None);
    }

    #[test]
    fn visible_windows_are_ordered_bottom_to_top() {
        let mut subject = WindowRegistry::default();
        let mut rng = rng();
        subject.open(AppId::Writer, VIEWPORT, &Placement::default(), &mut rng);
        subject.open(AppId::Browser, VIEWPORT, &Placement::default(), &mut rng);
        subject.focus(AppId::Writer);
        let ids: Vec<AppId> = subject.visible().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![AppId::Browser, AppId::Writer]);
    }
}
