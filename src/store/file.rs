//! JSON file store
//!
//! All values are kept in one small JSON object and the whole file is
//! rewritten on every change. A missing file is an empty store; an unreadable
//! or corrupt one is logged and treated as empty so a bad file never blocks
//! play.

use super::{StateStore, StoreError, StoreKey};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, reading whatever is already there
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = read_values(&path);
        tracing::debug!(path = %path.display(), entries = values.len(), "opened state file");
        Self { path, values }
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn read_values(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read state file, starting fresh");
            return BTreeMap::new();
        }
    };

    match serde_json::from_str::<BTreeMap<String, Value>>(&content) {
        Ok(raw) => raw
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "corrupt state file, starting fresh");
            BTreeMap::new()
        }
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: StoreKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.as_str().to_string(), value.to_string());
        self.persist()
    }
}
