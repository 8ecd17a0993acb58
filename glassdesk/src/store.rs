//! Desktop settings kept in a single JSON file.
use glassdesk_core::errors::{DeskError, Result};
use glassdesk_core::KeyValueStore;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A [`KeyValueStore`] backed by one JSON object of slot to string. The file
/// is rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    slots: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Will error if the file exists but cannot be read or is not a JSON
    /// object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let slots = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        tracing::debug!("Opened store {} with {} slots", path.display(), slots.len());
        Ok(Self { path, slots })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.slots)?;
        let tmp_file = self.path.with_extension("json.tmp");
        fs::write(&tmp_file, contents)?;
        fs::rename(&tmp_file, &self.path).map_err(|err| {
            DeskError::Store(format!("cannot replace {}: {}", self.path.display(), err))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.slots.insert(key.to_owned(), value);
        self.write()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.slots.remove(key).is_some() {
            self.write()?;
        }
        Ok(())
    }
}
