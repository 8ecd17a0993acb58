//! Durable string slots the desktop settings are kept in.
use crate::errors::Result;
use std::collections::HashMap;

/// Slot holding the wallpaper URL. Absent means the default background.
pub const WALLPAPER_KEY: &str = "glassdesk_wallpaper";
/// Slot holding the JSON array of widget descriptors.
pub const WIDGETS_KEY: &str = "glassdesk_widgets";

/// An external key-value store of strings.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Will error if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// # Errors
    ///
    /// Will error if the backing medium cannot be written.
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// # Errors
    ///
    /// Will error if the backing medium cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// A store that forgets everything when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.slots.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}
