use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::error::{Result, ThemeError};
use super::ini::IniDocument;

/// How a store treats a missing backend file on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Create the file (and its parent directories) when missing.
    CreateMissing,

    /// Leave the backend untouched when the file does not already exist.
    /// Used for the qt5ct bridge, which this engine never creates.
    RequireExisting,
}

/// Read-modify-write adapter for one backend settings file.
///
/// Every write goes through [`SettingsStore::update`], which reparses the
/// file first so sections and keys the update does not touch survive
/// unchanged. The file is treated as exclusively owned for the duration of
/// one read+write pair; there is no cross-process locking, so an external
/// edit landing between the read and the write is lost.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    policy: WritePolicy,
}

impl SettingsStore {
    /// Creates a store for the given file.
    pub fn new(path: impl Into<PathBuf>, policy: WritePolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    /// The backend file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the backend file, or returns an empty document when absent.
    ///
    /// # Errors
    /// Returns [`ThemeError::Parse`] for malformed content and
    /// [`ThemeError::Read`] for I/O failures other than absence.
    pub fn read(&self) -> Result<IniDocument> {
        match fs::read_to_string(&self.path) {
            Ok(content) => IniDocument::parse(&content, &self.path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(IniDocument::default()),
            Err(e) => Err(ThemeError::Read {
                path: self.path.clone(),
                details: e.to_string(),
            }),
        }
    }

    /// Serializes the whole document to the backend file, creating parent
    /// directories as needed.
    ///
    /// # Errors
    /// Returns [`ThemeError::Write`] if the directory or file cannot be
    /// created or written.
    pub fn write(&self, doc: &IniDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ThemeError::Write {
                path: parent.to_path_buf(),
                details: e.to_string(),
            })?;
        }

        fs::write(&self.path, doc.to_string()).map_err(|e| ThemeError::Write {
            path: self.path.clone(),
            details: e.to_string(),
        })
    }

    /// Read-modify-write cycle: parse, mutate, serialize back.
    ///
    /// Returns whether a write happened. A [`WritePolicy::RequireExisting`]
    /// store skips silently when the file is absent.
    ///
    /// # Errors
    /// Propagates read, parse and write errors; a malformed file refuses the
    /// write rather than overwriting it.
    pub fn update(&self, mutate: impl FnOnce(&mut IniDocument)) -> Result<bool> {
        if self.policy == WritePolicy::RequireExisting && !self.path.exists() {
            debug!(path = %self.path.display(), "backend file absent, leaving untouched");
            return Ok(false);
        }

        let mut doc = self.read()?;
        mutate(&mut doc);
        self.write(&doc)?;
        Ok(true)
    }
}
