//! Best score persistence
//!
//! Backends:
//! - `MemoryStore`: process-local, used by tests and headless runs
//! - `FileStore`: JSON number in a file (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)
//!
//! Loading never fails: anything unreadable counts as "no stored score".

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::highscores::BestScore;

/// Errors from writing persisted data
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(&'static str),
}

/// Where the best score lives between runs
pub trait ScoreStore {
    /// Stored best score, or `None` if absent or unreadable
    fn load(&self) -> Option<u32>;
    /// Persist a new best score
    fn store(&mut self, best: u32) -> Result<(), PersistenceError>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u32>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            writes: 0,
        }
    }

    /// Number of successful `store` calls
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Option<u32> {
        self.value
    }

    fn store(&mut self, best: u32) -> Result<(), PersistenceError> {
        self.value = Some(best);
        self.writes += 1;
        Ok(())
    }
}

/// File-backed store holding a single JSON number
#[derive(Debug, Clone)]
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
}

impl ScoreStore for FileStore {
    fn load(&self) -> Option<u32> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let parsed = BestScore::parse(&raw);
                if parsed.is_none() {
                    log::warn!("Ignoring unreadable best score in {}", self.path.display());
                }
                parsed
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Failed to read {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn store(&mut self, best: u32) -> Result<(), PersistenceError> {
        // Write to a sibling temp file first so a crash never leaves a torn value
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, BestScore::new(best).encode())?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Browser LocalStorage store
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn load(&self) -> Option<u32> {
        let raw = Self::storage()?.get_item(&self.key).ok()??;
        BestScore::parse(&raw)
    }

    fn store(&mut self, best: u32) -> Result<(), PersistenceError> {
        let storage = Self::storage().ok_or(PersistenceError::Unavailable("no LocalStorage"))?;
        storage
            .set_item(&self.key, &BestScore::new(best).encode())
            .map_err(|_| PersistenceError::Unavailable("LocalStorage rejected write"))
    }
}
