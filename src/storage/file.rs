use crate::storage::interface::KeyValueStore;
use serde_json::{Map, Value};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Key-value store persisted as a single JSON object on disk.
///
/// The whole object is kept in memory and rewritten on every change. The file is replaced through
/// a sibling temporary file so a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct JsonFileKeyValueStorage {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonFileKeyValueStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_entries(&path);
        tracing::debug!(
            path = %path.display(),
            keys = entries.len(),
            "Opened key-value store.",
        );
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        if let Err(err) = write_entries(&self.path, &self.entries) {
            tracing::error!(
                path = %self.path.display(),
                error = %err,
                "Failed to write the key-value store, changes are kept in memory only.",
            );
        }
    }
}

impl KeyValueStore for JsonFileKeyValueStorage {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}

fn read_entries(path: &Path) -> Map<String, Value> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Map::new(),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "Failed to read the key-value store, starting empty.",
            );
            return Map::new();
        }
    };
    match serde_json::from_slice::<Value>(&raw) {
        Ok(Value::Object(entries)) => entries,
        Ok(_) => {
            tracing::warn!(
                path = %path.display(),
                "The key-value store is not a JSON object, starting empty.",
            );
            Map::new()
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "The key-value store is not valid JSON, starting empty.",
            );
            Map::new()
        }
    }
}

fn write_entries(path: &Path, entries: &Map<String, Value>) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);
    let body = serde_json::to_vec_pretty(entries)?;
    fs::write(&tmp_path, body)?;
    fs::rename(&tmp_path, path)
}
