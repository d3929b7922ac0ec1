use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing backend settings stores.
///
/// A missing file is never an error anywhere in this module tree: absent
/// inventories are empty and absent settings files read as empty documents.
/// Refresh-signal failures are swallowed at the signal seam and never reach
/// this type.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A settings file exists but is not valid INI content.
    ///
    /// The write for the affected backend is refused so malformed state is
    /// never overwritten blindly.
    #[error("failed to parse '{path}' at line {line}: {details}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// 1-based line number of the offending line
        line: usize,
        /// Parse error details
        details: String,
    },

    /// A settings file could not be read for a reason other than absence.
    #[error("failed to read '{path}': {details}")]
    Read {
        /// File that failed to read
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// A settings file or its parent directory could not be written.
    #[error("failed to write '{path}': {details}")]
    Write {
        /// File that failed to write
        path: PathBuf,
        /// I/O error details
        details: String,
    },
}

/// A specialized `Result` type for theme engine operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
