//! Multi-backend desktop theme synchronization.
//!
//! GTK, Qt/Kvantum and KDE each persist appearance settings in their own
//! file with their own section/key layout. This module reads the active
//! theme per category from the authoritative backend, enumerates installed
//! themes, and atomically propagates a new selection to every relevant
//! backend file plus the live desktop session.

/// Error types for backend store operations
pub mod error;
/// Line-preserving INI document model
pub mod ini;
/// Installed-theme inventory scanning
pub mod inventory;
/// Filesystem loci for inventory roots and backend files
pub mod paths;
/// Theme synchronization engine
pub mod service;
/// Best-effort live-session refresh seam
pub mod signal;
/// Backend settings store adapter
pub mod store;
/// Categories, selections and apply reports
pub mod types;

pub use error::{Result, ThemeError};
pub use ini::IniDocument;
pub use inventory::Inventory;
pub use paths::ThemePaths;
pub use service::ThemeService;
pub use signal::{DesktopRefresh, SessionRefresh};
pub use store::{SettingsStore, WritePolicy};
pub use types::{ApplyReport, CategoryStatus, ThemeCategory, ThemeSelection};

#[cfg(test)]
mod tests;
