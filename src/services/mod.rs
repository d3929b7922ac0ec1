/// Theme synchronization service
pub mod theme;

pub use theme::{
    ApplyReport, CategoryStatus, DesktopRefresh, Inventory, SessionRefresh, SettingsStore,
    ThemeCategory, ThemeError, ThemePaths, ThemeSelection, ThemeService, WritePolicy,
};
