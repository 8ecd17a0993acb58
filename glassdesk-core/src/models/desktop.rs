//! Wallpaper and widgets, and their round trip through a [`KeyValueStore`].
use super::{Position, WidgetCascade, WidgetData, WidgetDescriptor, WidgetId, WidgetKind, WidgetRegistry};
use crate::snap::SnapZone;
use crate::store::{KeyValueStore, WALLPAPER_KEY, WIDGETS_KEY};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Dirty {
    wallpaper: bool,
    widgets: bool,
}

/// Desktop settings that survive a restart.
///
/// Changes are only tracked for writing once [`Desktop::load`] has run, so
/// whatever was stored is never overwritten by the empty startup state.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Desktop {
    wallpaper: Option<String>,
    widgets: WidgetRegistry,
    #[serde(skip)]
    loaded: bool,
    #[serde(skip)]
    dirty: Dirty,
}

impl Desktop {
    #[must_use]
    pub fn wallpaper(&self) -> Option<&str> {
        self.wallpaper.as_deref()
    }

    #[must_use]
    pub fn widgets(&self) -> &WidgetRegistry {
        &self.widgets
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Read prior state from `store`. Missing or malformed slots fall back to
    /// the defaults; nothing here is fatal.
    pub fn load(&mut self, store: Option<&dyn KeyValueStore>) {
        match store {
            Some(store) => {
                match store.get(WALLPAPER_KEY) {
                    Ok(wallpaper) => self.wallpaper = wallpaper.filter(|url| !url.is_empty()),
                    Err(err) => tracing::warn!("Cannot read stored wallpaper: {}", err),
                }
                match store.get(WIDGETS_KEY) {
                    Ok(Some(raw)) => match serde_json::from_str::<Vec<WidgetDescriptor>>(&raw) {
                        Ok(stored) => self.widgets = WidgetRegistry::from_stored(stored),
                        Err(err) => tracing::error!("Failed to parse stored widgets: {}", err),
                    },
                    Ok(None) => {}
                    Err(err) => tracing::warn!("Cannot read stored widgets: {}", err),
                }
            }
            None => tracing::warn!("No desktop store available, settings will not persist"),
        }
        self.loaded = true;
        self.dirty = Dirty::default();
    }

    /// True when something changed since the last [`Desktop::persist`].
    #[must_use]
    pub fn needs_persist(&self) -> bool {
        self.dirty.wallpaper || self.dirty.widgets
    }

    /// Write every changed slot to `store`. Failures are logged and the
    /// in-memory state is kept as is.
    pub fn persist(&mut self, store: &mut dyn KeyValueStore) {
        let dirty = std::mem::take(&mut self.dirty);
        if dirty.wallpaper {
            let result = match &self.wallpaper {
                Some(url) => store.set(WALLPAPER_KEY, url.clone()),
                None => store.remove(WALLPAPER_KEY),
            };
            if let Err(err) = result {
                tracing::warn!("Cannot save wallpaper: {}", err);
            }
        }
        if dirty.widgets {
            let result = serde_json::to_string(self.widgets.all())
                .map_err(Into::into)
                .and_then(|json| store.set(WIDGETS_KEY, json));
            if let Err(err) = result {
                tracing::warn!("Cannot save widgets: {}", err);
            }
        }
    }

    pub fn set_wallpaper(&mut self, url: Option<String>) -> bool {
        let url = url.filter(|url| !url.is_empty());
        if self.wallpaper == url {
            return false;
        }
        self.wallpaper = url;
        self.dirty.wallpaper = self.loaded;
        true
    }

    pub fn add_widget(&mut self, kind: WidgetKind, cascade: &WidgetCascade) -> WidgetDescriptor {
        let widget = self.widgets.add(kind, cascade).clone();
        self.touch_widgets();
        widget
    }

    pub fn remove_widget(&mut self, id: &WidgetId) -> bool {
        let changed = self.widgets.remove(id);
        if changed {
            self.touch_widgets();
        }
        changed
    }

    pub fn set_widget_position(&mut self, id: &WidgetId, position: Position, zone: Option<SnapZone>) -> bool {
        let changed = self.widgets.set_position(id, position, zone);
        if changed {
            self.touch_widgets();
        }
        changed
    }

    pub fn merge_widget_data(&mut self, id: &WidgetId, partial: WidgetData) -> bool {
        let changed = self.widgets.merge_data(id, partial);
        if changed {
            self.touch_widgets();
        }
        changed
    }

    fn touch_widgets(&mut self) {
        self.dirty.widgets |= self.loaded;
    }
}
