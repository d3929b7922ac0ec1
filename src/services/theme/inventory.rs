use std::fs;
use std::path::Path;

use tracing::debug;

use super::paths::ThemePaths;
use super::types::ThemeCategory;

/// Kvantum ships a built-in `Default` style that is not a selectable theme.
const KVANTUM_RESERVED: &str = "Default";

/// Basename of the Kvantum selection file, which lives inside the scanned
/// directory and must not show up as a theme.
const KVANTUM_CONFIG_STEM: &str = "kvantum";

/// Installed theme names per category.
///
/// Rebuilt on demand by scanning the filesystem; never persisted. Lists are
/// sorted so callers that default to the first entry behave deterministically
/// across runs (directory enumeration order is not stable).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    gtk: Vec<String>,
    icon: Vec<String>,
    kvantum: Vec<String>,
}

impl Inventory {
    /// Scans every inventory root.
    ///
    /// A missing root yields an empty list for its category; absence of a
    /// theme family is a normal condition, not an error.
    pub fn scan(paths: &ThemePaths) -> Self {
        Self {
            gtk: list_theme_dirs(&paths.gtk_themes_dir),
            icon: list_theme_dirs(&paths.icon_themes_dir),
            kvantum: list_kvantum_themes(&paths.kvantum_themes_dir),
        }
    }

    /// Returns the sorted theme names installed for a category.
    ///
    /// Cursor themes install under the icon root, so `Cursor` shares the
    /// `Icon` list.
    pub fn themes(&self, category: ThemeCategory) -> &[String] {
        match category {
            ThemeCategory::Gtk => &self.gtk,
            ThemeCategory::Kvantum => &self.kvantum,
            ThemeCategory::Icon | ThemeCategory::Cursor => &self.icon,
        }
    }

    /// Whether `theme` is installed for `category`.
    pub fn contains(&self, category: ThemeCategory, theme: &str) -> bool {
        self.themes(category).iter().any(|t| t == theme)
    }
}

/// Lists non-hidden subdirectory names of `dir`, sorted.
fn list_theme_dirs(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "theme root not readable, empty inventory");
            return Vec::new();
        }
    };

    let mut themes: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| !name.starts_with('.'))
        .collect();
    themes.sort_unstable();
    themes
}

/// Lists installed Kvantum themes: non-hidden subdirectories plus flat
/// `*.kvconfig` files with the suffix stripped, sorted.
fn list_kvantum_themes(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "Kvantum root not readable, empty inventory");
            return Vec::new();
        }
    };

    let mut themes: Vec<String> = entries
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            if name.starts_with('.') {
                return None;
            }
            if entry.path().is_dir() {
                Some(name)
            } else {
                let stem = name.strip_suffix(".kvconfig")?;
                // kvantum.kvconfig is the selection file, not a theme
                if stem == KVANTUM_CONFIG_STEM {
                    return None;
                }
                Some(stem.to_owned())
            }
        })
        .filter(|name| name != KVANTUM_RESERVED)
        .collect();
    themes.sort_unstable();
    themes.dedup();
    themes
}
