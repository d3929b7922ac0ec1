//! Themesync - multi-backend desktop theme synchronization engine.
//!
//! Linux desktops persist appearance settings in several independently
//! formatted stores: GTK3/GTK4 `settings.ini` files, the Kvantum config, the
//! qt5ct bridge and KDE's `kdeglobals`. Themesync reads the active theme per
//! category from the authoritative store, enumerates installed themes, and
//! propagates a new selection to every relevant store plus the live desktop
//! session, preserving everything a write does not explicitly touch.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use themesync::services::theme::{ThemePaths, ThemeSelection, ThemeService};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ThemeService::new(ThemePaths::from_env()?);
//!
//! let mut selection = ThemeSelection::default();
//! selection.gtk = Some("Adwaita-dark".to_owned());
//!
//! let report = service.apply(&selection)?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

/// Command-line interface over the theme engine.
pub mod cli;

/// Theme synchronization service.
pub mod services;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use services::theme::{Result, ThemeError};
