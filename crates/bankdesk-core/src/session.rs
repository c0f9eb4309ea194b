//! Session storage
//!
//! A string key/value store standing in for browser session storage. The
//! logged-in user is kept as JSON under a fixed key so a restart skips the
//! login screen.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};
use crate::models::User;

/// Default key holding the logged-in user
pub const SESSION_USER_KEY: &str = "bankUser";

pub trait SessionStore: Send {
    fn get(&self, key: &str) -> CoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> CoreResult<()>;
    fn remove(&mut self, key: &str) -> CoreResult<()>;
}

/// Volatile store, lost on exit
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Typed access to the persisted user
pub struct UserSession {
    store: Box<dyn SessionStore>,
    key: String,
}

impl UserSession {
    pub fn new(store: Box<dyn SessionStore>, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Stored user, if any
    pub fn load(&self) -> CoreResult<Option<User>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| CoreError::CorruptSession {
                key: self.key.clone(),
                message: e.to_string(),
            })
    }

    pub fn save(&mut self, user: &User) -> CoreResult<()> {
        let raw = serde_json::to_string(user)?;
        self.store.set(&self.key, &raw)
    }

    pub fn clear(&mut self) -> CoreResult<()> {
        self.store.remove(&self.key)
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }
}
