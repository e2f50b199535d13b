use anyhow::{Context, Result};
#[cfg(test)]
use std::collections::HashMap;
use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Durable string key-value storage, local to the user.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());

        Ok(())
    }
}

/// A flat JSON object of string pairs kept in a single file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {:?}", self.path))
            }
        };

        serde_json::from_str(&contents).with_context(|| format!("Malformed store {:?}", self.path))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut entries = self.read_entries().unwrap_or_else(|err| {
            log::warn!("Discarding unreadable store: {:#}", err);
            BTreeMap::new()
        });
        entries.insert(key.to_owned(), value.to_owned());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {:?}", self.path))?;

        log::debug!("Stored {} in {:?}", key, self.path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_reads_back_last_write() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("storage.json"));

        assert_eq!(store.get("devToolsTheme").unwrap(), None);
    }

    #[test]
    fn set_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dev-tools").join("storage.json");
        let mut store = FileStore::new(&path);

        store.set("devToolsTheme", "light").unwrap();

        assert!(path.exists());
        assert_eq!(store.get("devToolsTheme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn set_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"other": "value"}"#).unwrap();
        let mut store = FileStore::new(&path);

        store.set("devToolsTheme", "dark").unwrap();

        assert_eq!(store.get("other").unwrap().as_deref(), Some("value"));
        assert_eq!(store.get("devToolsTheme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_is_a_read_error_and_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();
        let mut store = FileStore::new(&path);

        assert!(store.get("devToolsTheme").is_err());

        store.set("devToolsTheme", "light").unwrap();

        assert_eq!(store.get("devToolsTheme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn values_survive_a_new_store_instance() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        FileStore::new(&path).set("devToolsTheme", "light").unwrap();

        assert_eq!(
            FileStore::new(&path).get("devToolsTheme").unwrap().as_deref(),
            Some("light")
        );
    }
}
