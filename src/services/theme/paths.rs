use std::{
    env,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

/// Every filesystem locus the theme engine touches.
///
/// All paths are injected at construction rather than resolved from globals
/// so tests can point the whole engine at a temporary directory.
#[derive(Debug, Clone)]
pub struct ThemePaths {
    /// System GTK theme root, normally `/usr/share/themes`.
    pub gtk_themes_dir: PathBuf,

    /// System icon and cursor theme root, normally `/usr/share/icons`.
    pub icon_themes_dir: PathBuf,

    /// User Kvantum directory holding installed `*.kvconfig` themes.
    pub kvantum_themes_dir: PathBuf,

    /// GTK3 `settings.ini`.
    pub gtk3_settings: PathBuf,

    /// GTK4 `settings.ini`.
    pub gtk4_settings: PathBuf,

    /// Kvantum selection file (`kvantum.kvconfig`).
    pub kvantum_config: PathBuf,

    /// qt5ct configuration. Written only when it already exists.
    pub qt5ct_config: PathBuf,

    /// KDE globals file.
    pub kde_globals: PathBuf,
}

impl ThemePaths {
    /// Builds every locus under the given system data and user config roots.
    ///
    /// On a real system these are `/usr/share` and `~/.config`; tests pass
    /// directories inside a `TempDir`.
    pub fn with_roots(system_data_dir: &Path, config_dir: &Path) -> Self {
        let kvantum_dir = config_dir.join("Kvantum");
        Self {
            gtk_themes_dir: system_data_dir.join("themes"),
            icon_themes_dir: system_data_dir.join("icons"),
            kvantum_config: kvantum_dir.join("kvantum.kvconfig"),
            kvantum_themes_dir: kvantum_dir,
            gtk3_settings: config_dir.join("gtk-3.0/settings.ini"),
            gtk4_settings: config_dir.join("gtk-4.0/settings.ini"),
            qt5ct_config: config_dir.join("qt5ct/qt5ct.conf"),
            kde_globals: config_dir.join("kdeglobals"),
        }
    }

    /// Resolves the standard loci for the current user.
    ///
    /// The configuration root follows the XDG Base Directory specification:
    /// `XDG_CONFIG_HOME` first, then `$HOME/.config`.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set.
    pub fn from_env() -> Result<Self, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(Self::with_roots(
            Path::new("/usr/share"),
            Path::new(&config_home),
        ))
    }
}
