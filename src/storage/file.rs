use crate::error::AppError;
use crate::storage::token_store::TokenStore;
use anyhow::Context;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Token storage backed by a single JSON object on disk.
///
/// Every read goes to the file, so a token removed by another process is
/// seen on the next request. Writes within this process are serialised.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    /// Opens (without creating) the store at `path`. A missing file is an
    /// empty store; an existing file must hold a JSON object.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        };
        store
            .load()
            .with_context(|| format!("Failed to open token file {}", store.path.display()))?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(map) => Ok(map),
            other => Err(AppError::Storage(format!(
                "token file {} is not a JSON object: {}",
                self.path.display(),
                other
            ))),
        }
    }

    fn save(&self, entries: &Map<String, Value>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, body)?;
        debug!("Token file {} written", self.path.display());
        Ok(())
    }

    fn update<F>(&self, mutate: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| AppError::Storage(e.to_string()))?;
        let mut entries = self.load()?;
        mutate(&mut entries);
        self.save(&entries)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .load()?
            .get(key)
            .and_then(Value::as_str)
            .map(String::from))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.update(|entries| {
            entries.insert(key.to_string(), Value::String(value.to_string()));
        })
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })
    }
}
