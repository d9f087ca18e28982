//! Store abstraction for the idea list.
//!
//! The whole collection lives in a single pretty-printed JSON document,
//! `<data_dir>/ideas.json`. Every read loads the full sequence and every
//! mutation rewrites the full sequence; there is no partial or append write.

use crate::core::error::IdeasError;
use crate::plugins::ideas::Idea;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub const IDEAS_FILE_NAME: &str = "ideas.json";
pub const DEFAULT_DATA_DIR_NAME: &str = "data";

/// Where the store keeps its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding `ideas.json`; created on first access.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// `<directory of the running executable>/data`.
    pub fn default_location() -> Result<Self, IdeasError> {
        let exe = std::env::current_exe()?;
        let exe_dir = exe.parent().ok_or_else(|| {
            IdeasError::PathError(format!(
                "executable path has no parent directory: {}",
                exe.display()
            ))
        })?;
        Ok(Self::new(exe_dir.join(DEFAULT_DATA_DIR_NAME)))
    }
}

/// Handle on one idea list.
#[derive(Debug, Clone)]
pub struct Store {
    pub config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn root(&self) -> &Path {
        &self.config.data_dir
    }

    pub fn ideas_path(&self) -> PathBuf {
        self.config.data_dir.join(IDEAS_FILE_NAME)
    }

    /// Creates the data directory and an empty `[]` document if either is missing.
    pub fn ensure_store_exists(&self) -> Result<(), IdeasError> {
        fs::create_dir_all(self.root())?;
        let path = self.ideas_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "creating empty ideas file");
            fs::write(&path, "[]")?;
        }
        Ok(())
    }

    /// Loads the full sequence in stored order.
    ///
    /// A document that does not parse as a list of ideas is reported with a
    /// warning and read as an empty store. The file itself is left as-is until
    /// the next mutating command rewrites it.
    pub fn load(&self) -> Result<Vec<Idea>, IdeasError> {
        self.ensure_store_exists()?;
        let path = self.ideas_path();
        let raw = fs::read(&path)?;
        match serde_json::from_slice::<Vec<Idea>>(&raw) {
            Ok(ideas) => Ok(ideas),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "ideas file is not a valid idea list; treating store as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Rewrites the whole document.
    pub fn save(&self, ideas: &[Idea]) -> Result<(), IdeasError> {
        fs::create_dir_all(self.root())?;
        let mut data = to_pretty_json(ideas)?;
        data.push('\n');
        write_atomic(&self.ideas_path(), data.as_bytes())
    }
}

/// 1 for an empty store, otherwise one past the largest id present.
pub fn next_id(ideas: &[Idea]) -> Result<u64, IdeasError> {
    match ideas.iter().map(|idea| idea.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            IdeasError::ValidationError(format!(
                "cannot assign a new id: largest stored id {} is already the maximum",
                max
            ))
        }),
    }
}

/// Two-space indentation; non-ASCII text is written as-is.
fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, IdeasError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<(), IdeasError> {
    let parent = path
        .parent()
        .ok_or_else(|| IdeasError::PathError(format!("invalid store path: {}", path.display())))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| IdeasError::PathError(format!("invalid store filename: {}", path.display())))?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let temp_path = parent.join(format!(".{}.{}.tmp", filename, nanos));

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;
    let written = file.write_all(data).and_then(|_| file.sync_all());
    drop(file);
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }
    tracing::debug!(path = %path.display(), bytes = data.len(), "ideas file rewritten");
    Ok(())
}
