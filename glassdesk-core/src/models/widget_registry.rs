use super::{Position, WidgetData, WidgetDescriptor, WidgetId, WidgetKind};
use crate::snap::SnapZone;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where new widgets appear: `origin + count * step` on both axes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct WidgetCascade {
    pub origin: Position,
    pub step: f64,
}

impl Default for WidgetCascade {
    fn default() -> Self {
        Self {
            origin: Position::new(100.0, 100.0),
            step: 20.0,
        }
    }
}

/// The dynamic list of desktop widgets.
///
/// Mutators return whether anything changed. Positions handed to
/// [`WidgetRegistry::set_position`] are expected to come out of
/// [`crate::snap::resolve_position`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WidgetRegistry {
    widgets: Vec<WidgetDescriptor>,
}

impl WidgetRegistry {
    /// Build a registry from stored widgets, dropping any repeated id.
    #[must_use]
    pub fn from_stored(stored: Vec<WidgetDescriptor>) -> Self {
        let mut seen = HashSet::new();
        let widgets = stored
            .into_iter()
            .filter(|widget| {
                let fresh = seen.insert(widget.id.clone());
                if !fresh {
                    tracing::warn!("Dropping stored widget with repeated id {}", widget.id);
                }
                fresh
            })
            .collect();
        Self { widgets }
    }

    #[must_use]
    pub fn all(&self) -> &[WidgetDescriptor] {
        &self.widgets
    }

    #[must_use]
    pub fn get(&self, id: &WidgetId) -> Option<&WidgetDescriptor> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Create a widget of `kind` with empty data and return it.
    pub fn add(&mut self, kind: WidgetKind, cascade: &WidgetCascade) -> &WidgetDescriptor {
        let mut id = WidgetId::generate();
        while self.get(&id).is_some() {
            id = WidgetId::generate();
        }
        let offset = self.widgets.len() as f64 * cascade.step;
        self.widgets.push(WidgetDescriptor {
            id,
            kind,
            position: cascade.origin + Position::new(offset, offset),
            snap_zone: None,
            data: WidgetData::new(),
        });
        let index = self.widgets.len() - 1;
        &self.widgets[index]
    }

    /// Delete `id` for good.
    pub fn remove(&mut self, id: &WidgetId) -> bool {
        let before = self.widgets.len();
        self.widgets.retain(|w| &w.id != id);
        self.widgets.len() != before
    }

    pub fn set_position(&mut self, id: &WidgetId, position: Position, zone: Option<SnapZone>) -> bool {
        match self.widgets.iter_mut().find(|w| &w.id == id) {
            Some(widget) => {
                widget.position = position;
                widget.snap_zone = zone;
                true
            }
            None => false,
        }
    }

    /// Shallow-merge `partial` into the widget's data. Fields not named in
    /// `partial` keep their value.
    pub fn merge_data(&mut self, id: &WidgetId, partial: WidgetData) -> bool {
        match self.widgets.iter_mut().find(|w| &w.id == id) {
            Some(widget) => {
                widget.data.extend(partial);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: serde_json::Value) -> WidgetData {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn added_widgets_cascade_and_get_distinct_ids() {
        let mut subject = WidgetRegistry::default();
        let cascade = WidgetCascade::default();
        let ids: Vec<WidgetId> = (0..3)
            .map(|_| subject.add(WidgetKind::Notes, &cascade).id.clone())
            .collect();
        let positions: Vec<Position> = subject.all().iter().map(|w| w.position).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(100.0, 100.0),
                Position::new(120.0, 120.0),
                Position::new(140.0, 140.0),
            ]
        );
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
        assert!(subject.all().iter().all(|w| w.data.is_empty()));
    }

    #[test]
    fn rapid_adds_never_repeat_an_id() {
        let mut subject = WidgetRegistry::default();
        let cascade = WidgetCascade::default();
        for _ in 0..500 {
            subject.add(WidgetKind::Time, &cascade);
        }
        let unique: HashSet<&WidgetId> = subject.all().iter().map(|w| &w.id).collect();
        assert_eq!(unique.len(), 500);
    }

    #[test]
    fn merging_data_keeps_unmentioned_fields() {
        let mut subject = WidgetRegistry::default();
        let id = subject.add(WidgetKind::Notes, &WidgetCascade::default()).id.clone();
        subject.merge_data(&id, data(json!({"text": "a", "font": "mono"})));
        subject.merge_data(&id, data(json!({"text": "b"})));
        assert_eq!(
            subject.get(&id).unwrap().data,
            data(json!({"text": "b", "font": "mono"}))
        );
    }

    #[test]
    fn set_position_records_the_zone() {
        let mut subject = WidgetRegistry::default();
        let id = subject.add(WidgetKind::Status, &WidgetCascade::default()).id.clone();
        assert!(subject.set_position(&id, Position::new(12.0, 12.0), Some(SnapZone::TopLeft)));
        let widget = subject.get(&id).unwrap();
        assert_eq!(widget.position, Position::new(12.0, 12.0));
        assert_eq!(widget.snap_zone, Some(SnapZone::TopLeft));
        subject.set_position(&id, Position::new(240.0, 240.0), None);
        assert_eq!(subject.get(&id).unwrap().snap_zone, None);
    }

    #[test]
    fn removing_is_immediate_and_unknown_ids_are_ignored() {
        let mut subject = WidgetRegistry::default();
        let id = subject.add(WidgetKind::Time, &WidgetCascade::default()).id.clone();
        let unknown = WidgetId::from("widget-missing");
        assert!(!subject.remove(&unknown));
        assert!(!subject.set_position(&unknown, Position::default(), None));
        assert!(!subject.merge_data(&unknown, WidgetData::new()));
        assert!(subject.remove(&id));
        assert!(subject.is_empty());
        assert!(!subject.remove(&id));
    }

    #[test]
    fn stored_duplicates_are_dropped() {
        let widget = WidgetDescriptor {
            id: WidgetId::from("widget-1"),
            kind: WidgetKind::Time,
            position: Position::default(),
            snap_zone: None,
            data: WidgetData::new(),
        };
        let subject = WidgetRegistry::from_stored(vec![widget.clone(), widget]);
        assert_eq!(subject.len(), 1);
    }
}
