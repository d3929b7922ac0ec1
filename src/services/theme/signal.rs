use std::process::{Command, Stdio};

use tracing::warn;

/// gsettings schema carrying the live-session appearance keys.
const INTERFACE_SCHEMA: &str = "org.gnome.desktop.interface";

/// Best-effort live-session refresh seam.
///
/// Implementations must swallow their own failures: a stale live session is
/// recoverable by restarting applications, whereas a lost persisted selection
/// is not, so refresh problems are logged and never surfaced.
pub trait SessionRefresh {
    /// Broadcasts one appearance key change to the running desktop session.
    ///
    /// `key` is a key under the desktop interface settings namespace, such as
    /// `gtk-theme`, `icon-theme` or `cursor-theme`.
    fn set_interface_setting(&self, key: &str, value: &str);

    /// Asks running Qt applications to re-read the Kvantum style.
    fn reload_qt_style(&self);
}

/// Refresh implementation shelling out to `gsettings` and `qt5ct`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopRefresh;

impl SessionRefresh for DesktopRefresh {
    fn set_interface_setting(&self, key: &str, value: &str) {
        run_silent("gsettings", &["set", INTERFACE_SCHEMA, key, value]);
    }

    fn reload_qt_style(&self) {
        run_silent("qt5ct", &["--apply"]);
    }
}

/// Runs a refresh command, logging any failure instead of returning it.
fn run_silent(program: &str, args: &[&str]) {
    let status = Command::new(program)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => {}
        Ok(status) => {
            warn!(%program, %status, "session refresh command exited with failure");
        }
        Err(e) => {
            warn!(%program, error = %e, "session refresh command could not be run");
        }
    }
}
