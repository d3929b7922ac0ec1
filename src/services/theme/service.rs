use tracing::{info, instrument};

use super::error::Result;
use super::inventory::Inventory;
use super::paths::ThemePaths;
use super::signal::{DesktopRefresh, SessionRefresh};
use super::store::{SettingsStore, WritePolicy};
use super::types::{ApplyReport, CategoryStatus, ThemeCategory, ThemeSelection};

/// Identifier qt5ct uses for the Kvantum style engine.
const KVANTUM_STYLE: &str = "kvantum";

/// The theme synchronization engine.
///
/// Reads the active theme per category from each backend's own settings
/// file, enumerates installed themes, and fans a validated selection out to
/// every relevant backend plus the live desktop session.
///
/// Execution is synchronous and sequential. The engine holds no internal
/// locking; callers must serialize [`ThemeService::apply`] calls, since
/// interleaved writes to the same backend file would break the
/// non-destructive merge guarantee.
pub struct ThemeService {
    paths: ThemePaths,
    refresh: Box<dyn SessionRefresh>,
}

impl ThemeService {
    /// Creates an engine using the gsettings/qt5ct session refresh commands.
    pub fn new(paths: ThemePaths) -> Self {
        Self::with_refresh(paths, Box::new(DesktopRefresh))
    }

    /// Creates an engine with a custom session refresh implementation.
    pub fn with_refresh(paths: ThemePaths, refresh: Box<dyn SessionRefresh>) -> Self {
        Self { paths, refresh }
    }

    /// Rebuilds the installed-theme inventory by scanning the theme roots.
    pub fn inventory(&self) -> Inventory {
        Inventory::scan(&self.paths)
    }

    /// Reads the presently active theme per category.
    ///
    /// Each category has a single authoritative backend: GTK3 for the GTK
    /// theme, the Kvantum config for the Kvantum style, and KDE globals for
    /// icon and cursor themes. GTK4 and the qt5ct bridge are write-only
    /// mirrors and are never read. A missing file or key reads as absent.
    ///
    /// # Errors
    /// Returns a parse error if an authoritative backend file is malformed.
    pub fn current_selection(&self) -> Result<ThemeSelection> {
        let mut selection = ThemeSelection::default();

        let gtk3 = self.gtk3_store().read()?;
        selection.gtk = gtk3.get("Settings", "gtk-theme-name").map(str::to_owned);

        let kvantum = self.kvantum_store().read()?;
        selection.kvantum = kvantum.get("General", "theme").map(str::to_owned);

        let kde = self.kde_globals_store().read()?;
        selection.icon = kde.get("Icons", "Theme").map(str::to_owned);
        selection.cursor = kde.get("Mouse", "cursorTheme").map(str::to_owned);

        Ok(selection)
    }

    /// Validates the selection against a fresh inventory, writes every
    /// surviving category through its backend stores, then issues
    /// best-effort live-session refresh signals.
    ///
    /// A selection naming a theme missing from its category's inventory is
    /// skipped for that category only; one bad category never blocks the
    /// others, and a skipped name is not written into any backend. Write
    /// failures are likewise fatal only for their category. The per-category
    /// outcomes land in the returned [`ApplyReport`].
    ///
    /// # Errors
    /// Reserved for failures before the per-category fan-out begins; every
    /// failure today is per-category and is recorded in the report instead.
    #[instrument(skip(self, selection))]
    pub fn apply(&self, selection: &ThemeSelection) -> Result<ApplyReport> {
        let inventory = self.inventory();
        let mut report = ApplyReport::default();

        let mut effective = ThemeSelection::default();
        for category in ThemeCategory::ALL {
            match selection.get(category) {
                None => {}
                Some(theme) if inventory.contains(category, theme) => {
                    effective.set(category, theme);
                }
                Some(theme) => {
                    info!(%category, theme, "selection not in inventory, skipping category");
                    report.set(category, CategoryStatus::SkippedInvalid(theme.to_owned()));
                }
            }
        }

        if let Some(gtk) = effective.gtk.clone() {
            let status = self.apply_gtk(&gtk, effective.icon.as_deref(), effective.cursor.as_deref());
            report.set(ThemeCategory::Gtk, status);
        }
        if let Some(kvantum) = effective.kvantum.clone() {
            report.set(ThemeCategory::Kvantum, self.apply_kvantum(&kvantum));
        }
        if let Some(icon) = effective.icon.clone() {
            let status = self.apply_icon(&icon, effective.cursor.as_deref());
            report.set(ThemeCategory::Icon, status);
        }
        if let Some(cursor) = effective.cursor.clone() {
            // When an icon selection survived, the KDE globals write above
            // already carried Mouse.cursorTheme; the cursor outcome mirrors
            // it. Otherwise the cursor needs its own KDE globals write.
            let icon_status = report.status(ThemeCategory::Icon).clone();
            let status = match icon_status {
                CategoryStatus::Applied(_) => CategoryStatus::Applied(cursor),
                CategoryStatus::Failed { reason, .. } if effective.icon.is_some() => {
                    CategoryStatus::Failed {
                        theme: cursor,
                        reason,
                    }
                }
                _ => self.apply_cursor(&cursor),
            };
            report.set(ThemeCategory::Cursor, status);
        }

        self.send_refresh_signals(&effective);

        info!(applied = report.any_applied(), "theme selection processed");
        Ok(report)
    }

    /// Writes the GTK theme (and icon/cursor mirror keys) to both the GTK3
    /// and GTK4 settings files.
    fn apply_gtk(&self, theme: &str, icon: Option<&str>, cursor: Option<&str>) -> CategoryStatus {
        for store in [self.gtk3_store(), self.gtk4_store()] {
            let result = store.update(|doc| {
                doc.set("Settings", "gtk-theme-name", theme);
                if let Some(icon) = icon {
                    doc.set("Settings", "gtk-icon-theme-name", icon);
                }
                if let Some(cursor) = cursor {
                    doc.set("Settings", "gtk-cursor-theme-name", cursor);
                }
            });
            if let Err(e) = result {
                return CategoryStatus::Failed {
                    theme: theme.to_owned(),
                    reason: e.to_string(),
                };
            }
        }
        CategoryStatus::Applied(theme.to_owned())
    }

    /// Writes the Kvantum selection and mirrors the style choice into the
    /// qt5ct bridge, which is only touched when its file already exists.
    fn apply_kvantum(&self, theme: &str) -> CategoryStatus {
        if let Err(e) = self.kvantum_store().update(|doc| {
            doc.set("General", "theme", theme);
        }) {
            return CategoryStatus::Failed {
                theme: theme.to_owned(),
                reason: e.to_string(),
            };
        }

        let bridge = self.qt_bridge_store().update(|doc| {
            doc.set("appearance", "style", KVANTUM_STYLE);
            doc.set("appearance", "color_scheme_path", "");
        });
        match bridge {
            Ok(_) => CategoryStatus::Applied(theme.to_owned()),
            Err(e) => CategoryStatus::Failed {
                theme: theme.to_owned(),
                reason: e.to_string(),
            },
        }
    }

    /// Writes the cursor theme to KDE globals when no icon write carried it.
    fn apply_cursor(&self, cursor: &str) -> CategoryStatus {
        let result = self.kde_globals_store().update(|doc| {
            doc.set("Mouse", "cursorTheme", cursor);
        });
        match result {
            Ok(_) => CategoryStatus::Applied(cursor.to_owned()),
            Err(e) => CategoryStatus::Failed {
                theme: cursor.to_owned(),
                reason: e.to_string(),
            },
        }
    }

    /// Writes the icon theme (and cursor theme, when selected) to KDE globals.
    fn apply_icon(&self, icon: &str, cursor: Option<&str>) -> CategoryStatus {
        let result = self.kde_globals_store().update(|doc| {
            doc.set("Icons", "Theme", icon);
            if let Some(cursor) = cursor {
                doc.set("Mouse", "cursorTheme", cursor);
            }
        });
        match result {
            Ok(_) => CategoryStatus::Applied(icon.to_owned()),
            Err(e) => CategoryStatus::Failed {
                theme: icon.to_owned(),
                reason: e.to_string(),
            },
        }
    }

    /// Fires the live-session refresh signals for the surviving selections.
    /// Failures are handled inside the refresh seam and never reach here.
    fn send_refresh_signals(&self, effective: &ThemeSelection) {
        if let Some(gtk) = &effective.gtk {
            self.refresh.set_interface_setting("gtk-theme", gtk);
        }
        if let Some(icon) = &effective.icon {
            self.refresh.set_interface_setting("icon-theme", icon);
        }
        if let Some(cursor) = &effective.cursor {
            self.refresh.set_interface_setting("cursor-theme", cursor);
        }
        if effective.kvantum.is_some() {
            self.refresh.reload_qt_style();
        }
    }

    fn gtk3_store(&self) -> SettingsStore {
        SettingsStore::new(&self.paths.gtk3_settings, WritePolicy::CreateMissing)
    }

    fn gtk4_store(&self) -> SettingsStore {
        SettingsStore::new(&self.paths.gtk4_settings, WritePolicy::CreateMissing)
    }

    fn kvantum_store(&self) -> SettingsStore {
        SettingsStore::new(&self.paths.kvantum_config, WritePolicy::CreateMissing)
    }

    fn qt_bridge_store(&self) -> SettingsStore {
        SettingsStore::new(&self.paths.qt5ct_config, WritePolicy::RequireExisting)
    }

    fn kde_globals_store(&self) -> SettingsStore {
        SettingsStore::new(&self.paths.kde_globals, WritePolicy::CreateMissing)
    }
}
