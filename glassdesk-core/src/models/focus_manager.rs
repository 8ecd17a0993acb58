use super::{AppId, WindowDescriptor};
use serde::{Deserialize, Serialize};

/// `FocusManager` owns the stacking order of windows and the single focused window.
///
/// Z-index values only ever grow: every raise hands out `max + 1`. Values are
/// compacted back to `1..=n` only when the maximum would overflow.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusManager {
    focused: Option<AppId>,
}

impl FocusManager {
    /// Return the currently focused window.
    #[must_use]
    pub fn focused(&self) -> Option<AppId> {
        self.focused
    }

    #[must_use]
    pub fn is_focused(&self, id: AppId) -> bool {
        self.focused == Some(id)
    }

    /// Bring `id` to the top of the stack and focus it. Returns the new
    /// z-index, or `None` when `id` has no window.
    pub fn raise(&mut self, windows: &mut [WindowDescriptor], id: AppId) -> Option<i32> {
        windows.iter().position(|w| w.id == id)?;
        let mut top = top_z_index(windows);
        if top == i32::MAX {
            tracing::debug!("Z-index space exhausted, compacting {} windows", windows.len());
            compact(windows);
            top = top_z_index(windows);
        }
        let window = windows.iter_mut().find(|w| w.id == id)?;
        window.z_index = top + 1;
        self.focused = Some(id);
        Some(window.z_index)
    }

    /// Drop focus if `id` holds it. No other window is focused in its place.
    pub fn release(&mut self, id: AppId) -> bool {
        if self.focused == Some(id) {
            self.focused = None;
            return true;
        }
        false
    }
}

/// Highest z-index in use, never below zero.
fn top_z_index(windows: &[WindowDescriptor]) -> i32 {
    windows.iter().map(|w| w.z_index).fold(0, i32::max)
}

/// Renumber z-indexes to `1..=n` keeping their relative order. Windows that
/// were never raised keep zero.
fn compact(windows: &mut [WindowDescriptor]) {
    let mut order: Vec<usize> = (0..windows.len())
        .filter(|&i| windows[i].z_index > 0)
        .collect();
    order.sort_by_key(|&i| windows[i].z_index);
    for (rank, index) in order.into_iter().enumerate() {
        windows[index].z_index = rank as i32 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::APPS;

    fn windows() -> Vec<WindowDescriptor> {
        APPS.iter().map(WindowDescriptor::new).collect()
    }

    fn z(windows: &[WindowDescriptor], id: AppId) -> i32 {
        windows.iter().find(|w| w.id == id).unwrap().z_index
    }

    #[test]
    fn raising_hands_out_max_plus_one() {
        let mut subject = FocusManager::default();
        let mut windows = windows();
        assert_eq!(subject.raise(&mut windows, AppId::Writer), Some(1));
        assert_eq!(subject.raise(&mut windows, AppId::Browser), Some(2));
        assert_eq!(subject.focused(), Some(AppId::Browser));
        assert_eq!(z(&windows, AppId::Writer), 1);
    }

    #[test]
    fn raising_twice_keeps_focus_and_the_top_spot() {
        let mut subject = FocusManager::default();
        let mut windows = windows();
        subject.raise(&mut windows, AppId::Browser);
        let first = subject.raise(&mut windows, AppId::Writer).unwrap();
        let second = subject.raise(&mut windows, AppId::Writer).unwrap();
        assert!(second > first, "z-index should change on every raise");
        assert_eq!(subject.focused(), Some(AppId::Writer));
        let others_max = windows
            .iter()
            .filter(|w| w.id != AppId::Writer)
            .map(|w| w.z_index)
            .max()
            .unwrap();
        assert!(second > others_max);
    }

    #[test]
    fn negative_z_indexes_are_floored_at_zero() {
        let mut subject = FocusManager::default();
        let mut windows = windows();
        windows.iter_mut().for_each(|w| w.z_index = -5);
        assert_eq!(subject.raise(&mut windows, AppId::Memory), Some(1));
    }

    #[test]
    fn exhausted_z_space_is_compacted_in_order() {
        let mut subject = FocusManager::default();
        let mut windows = windows();
        windows[0].z_index = 7;
        windows[1].z_index = i32::MAX;
        windows[2].z_index = 40;
        let (bottom, top, middle) = (windows[0].id, windows[1].id, windows[2].id);
        let raised = subject.raise(&mut windows, AppId::Memory);
        assert_eq!(raised, Some(4));
        assert_eq!(z(&windows, bottom), 1);
        assert_eq!(z(&windows, middle), 2);
        assert_eq!(z(&windows, top), 3);
    }

    #[test]
    fn release_only_clears_the_focused_window() {
        let mut subject = FocusManager::default();
        let mut windows = windows();
        subject.raise(&mut windows, AppId::Writer);
        assert!(!subject.release(AppId::Browser));
        assert_eq!(subject.focused(), Some(AppId::Writer));
        assert!(subject.release(AppId::Writer));
        assert_eq!(subject.focused(), None);
    }
}
