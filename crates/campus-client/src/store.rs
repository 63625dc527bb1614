//! Where the issued token lives between app launches.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};

use crate::error::ClientError;

/// Key the token is stored under.
pub const TOKEN_KEY: &str = "token";

const STORE_FILE: &str = "campus-client.json";

pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, ClientError>;
    fn save(&self, token: &str) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

/// Key/value JSON file inside an application data directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Map<String, Value>, ClientError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, entries: &Map<String, Value>) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(entries)?)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, ClientError> {
        Ok(self
            .read()?
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        let mut entries = self.read()?;
        entries.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write(&entries)
    }

    fn clear(&self) -> Result<(), ClientError> {
        let mut entries = self.read()?;
        if entries.remove(TOKEN_KEY).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}

/// Keeps the token for the life of the process only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, ClientError> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.slot() = None;
        Ok(())
    }
}
