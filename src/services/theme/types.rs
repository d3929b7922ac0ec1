use std::fmt;
use std::str::FromStr;

/// One desktop appearance category a selection can target.
///
/// The category determines which backend stores an applied selection touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeCategory {
    /// GTK widget theme (GTK3 and GTK4 settings files)
    Gtk,

    /// Qt/Kvantum style (Kvantum config and the qt5ct bridge)
    Kvantum,

    /// Icon theme (KDE globals, mirrored into the GTK files)
    Icon,

    /// Cursor theme (KDE globals `Mouse.cursorTheme`, mirrored into the GTK
    /// files when a GTK selection is applied alongside)
    Cursor,
}

impl ThemeCategory {
    /// Every category, in the order writes fan out during an apply.
    pub const ALL: [ThemeCategory; 4] = [Self::Gtk, Self::Kvantum, Self::Icon, Self::Cursor];
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gtk => "gtk",
            Self::Kvantum => "kvantum",
            Self::Icon => "icon",
            Self::Cursor => "cursor",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ThemeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gtk" => Ok(Self::Gtk),
            "kvantum" => Ok(Self::Kvantum),
            "icon" => Ok(Self::Icon),
            "cursor" => Ok(Self::Cursor),
            other => Err(format!(
                "unknown category '{other}' (expected gtk, kvantum, icon or cursor)"
            )),
        }
    }
}

/// An in-progress theme choice, one optional theme name per category.
///
/// Owned by the caller for the duration of an interactive session; the engine
/// never retains it across calls. Absent categories leave the corresponding
/// on-disk keys untouched when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSelection {
    /// GTK widget theme name
    pub gtk: Option<String>,

    /// Kvantum style name
    pub kvantum: Option<String>,

    /// Icon theme name
    pub icon: Option<String>,

    /// Cursor theme name
    pub cursor: Option<String>,
}

impl ThemeSelection {
    /// Returns the selected theme name for a category, if any.
    pub fn get(&self, category: ThemeCategory) -> Option<&str> {
        match category {
            ThemeCategory::Gtk => self.gtk.as_deref(),
            ThemeCategory::Kvantum => self.kvantum.as_deref(),
            ThemeCategory::Icon => self.icon.as_deref(),
            ThemeCategory::Cursor => self.cursor.as_deref(),
        }
    }

    /// Sets the selected theme name for a category.
    pub fn set(&mut self, category: ThemeCategory, theme: impl Into<String>) {
        let slot = match category {
            ThemeCategory::Gtk => &mut self.gtk,
            ThemeCategory::Kvantum => &mut self.kvantum,
            ThemeCategory::Icon => &mut self.icon,
            ThemeCategory::Cursor => &mut self.cursor,
        };
        *slot = Some(theme.into());
    }

    /// Whether no category has a selection.
    pub fn is_empty(&self) -> bool {
        ThemeCategory::ALL.iter().all(|c| self.get(*c).is_none())
    }
}

/// Outcome of a single category within one apply call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryStatus {
    /// No selection was submitted for this category.
    #[default]
    Unselected,

    /// Selection validated and written to every relevant backend.
    Applied(String),

    /// Selection named a theme missing from the category's inventory;
    /// nothing was written for it.
    SkippedInvalid(String),

    /// Selection validated but a backend write failed.
    Failed {
        /// The theme name that was being applied
        theme: String,
        /// Why the write failed
        reason: String,
    },
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unselected => write!(f, "no selection"),
            Self::Applied(theme) => write!(f, "applied {theme}"),
            Self::SkippedInvalid(theme) => write!(f, "skipped {theme} (not installed)"),
            Self::Failed { theme, reason } => write!(f, "failed {theme}: {reason}"),
        }
    }
}

/// Per-category outcome of one apply call.
///
/// There is deliberately no single overall success flag; callers render the
/// per-category statuses instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    gtk: CategoryStatus,
    kvantum: CategoryStatus,
    icon: CategoryStatus,
    cursor: CategoryStatus,
}

impl ApplyReport {
    /// Returns the outcome recorded for a category.
    pub fn status(&self, category: ThemeCategory) -> &CategoryStatus {
        match category {
            ThemeCategory::Gtk => &self.gtk,
            ThemeCategory::Kvantum => &self.kvantum,
            ThemeCategory::Icon => &self.icon,
            ThemeCategory::Cursor => &self.cursor,
        }
    }

    pub(crate) fn set(&mut self, category: ThemeCategory, status: CategoryStatus) {
        let slot = match category {
            ThemeCategory::Gtk => &mut self.gtk,
            ThemeCategory::Kvantum => &mut self.kvantum,
            ThemeCategory::Icon => &mut self.icon,
            ThemeCategory::Cursor => &mut self.cursor,
        };
        *slot = status;
    }

    /// Whether at least one category was written.
    pub fn any_applied(&self) -> bool {
        ThemeCategory::ALL
            .iter()
            .any(|c| matches!(self.status(*c), CategoryStatus::Applied(_)))
    }

    /// Human-readable summary, one line per category.
    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = ThemeCategory::ALL
            .iter()
            .map(|c| format!("{c}: {}", self.status(*c)))
            .collect();

        if self.any_applied() {
            lines.push(String::new());
            lines.push("Restart applications to pick up the new themes.".to_owned());
        }

        lines.join("\n")
    }
}
