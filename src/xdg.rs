//! XDG Base Directory support
//!
//! Follows the XDG Base Directory Specification on Linux and the other
//! non-macOS Unix targets:
//! - https://specifications.freedesktop.org/basedir-spec/basedir-spec-latest.html
//!
//! Directory structure for an application `app`:
//! - `$XDG_DATA_HOME/app/` (default: `~/.local/share/app/`)
//! - `$XDG_CONFIG_HOME/app/` (default: `~/.config/app/`)
//! - `$XDG_CACHE_HOME/app/` (default: `~/.cache/app/`)
//! - `$XDG_STATE_HOME/app/` (default: `~/.local/state/app/`)
//! - `$XDG_STATE_HOME/app/log/` for logs
//! - first entry of `$XDG_DATA_DIRS` / `$XDG_CONFIG_DIRS` for site dirs
//!   (defaults: `/usr/local/share`, `/etc/xdg`)
//!
//! macOS uses `~/Library/{Application Support,Caches,Logs}` and Windows uses
//! the known folders reported by `dirs`. The XDG variables are ignored there.

use std::path::PathBuf;

#[cfg(all(unix, not(target_os = "macos")))]
use tracing::warn;

use crate::base::BaseDirs;
use crate::error::{AppDirsError, Result};
use crate::kind::DirKind;
use crate::registry::AppName;

/// Resolves directories in the real platform locations
#[derive(Debug, Clone)]
pub struct PlatformBase {
    // Only read where the XDG variables apply
    #[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
    honor_env: bool,
    #[cfg_attr(not(unix), allow(dead_code))]
    home: Option<PathBuf>,
}

impl Default for PlatformBase {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBase {
    pub fn new() -> Self {
        Self {
            honor_env: true,
            home: dirs::home_dir(),
        }
    }

    /// Use `home` instead of the current user's home directory
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Honor or ignore the `XDG_*` environment variables
    pub fn honor_env(mut self, honor: bool) -> Self {
        self.honor_env = honor;
        self
    }

    /// Absolute override from the kind's XDG variable, if set
    #[cfg(all(unix, not(target_os = "macos")))]
    fn env_override(&self, kind: DirKind) -> Option<PathBuf> {
        if !self.honor_env {
            return None;
        }
        let var = kind.xdg_var()?;
        let value = std::env::var_os(var)?;
        let candidate = if kind.is_site() {
            std::env::split_paths(&value).find(|p| !p.as_os_str().is_empty())?
        } else {
            PathBuf::from(value)
        };

        if candidate.as_os_str().is_empty() {
            return None;
        }
        // Relative values are invalid under the basedir rules
        if !candidate.is_absolute() {
            warn!(
                variable = var,
                value = %candidate.display(),
                "ignoring relative XDG override"
            );
            return None;
        }
        Some(candidate)
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    fn resolve(&self, kind: DirKind, app: &AppName) -> Option<PathBuf> {
        // Logs live below the state directory
        let lookup = match kind {
            DirKind::UserLog => DirKind::UserState,
            other => other,
        };

        let base = match self.env_override(lookup) {
            Some(path) => path,
            None => match lookup {
                DirKind::SiteData => PathBuf::from("/usr/local/share"),
                DirKind::SiteConfig => PathBuf::from("/etc/xdg"),
                DirKind::UserData => self.home.as_ref()?.join(".local").join("share"),
                DirKind::UserConfig => self.home.as_ref()?.join(".config"),
                DirKind::UserCache => self.home.as_ref()?.join(".cache"),
                DirKind::UserState | DirKind::UserLog => {
                    self.home.as_ref()?.join(".local").join("state")
                }
            },
        };

        let dir = base.join(app.as_str());
        if kind == DirKind::UserLog {
            Some(dir.join("log"))
        } else {
            Some(dir)
        }
    }

    #[cfg(target_os = "macos")]
    fn resolve(&self, kind: DirKind, app: &AppName) -> Option<PathBuf> {
        let library = || self.home.as_ref().map(|h| h.join("Library"));
        let path = match kind {
            DirKind::UserData | DirKind::UserConfig | DirKind::UserState => {
                library()?.join("Application Support").join(app.as_str())
            }
            DirKind::UserCache => library()?.join("Caches").join(app.as_str()),
            DirKind::UserLog => library()?.join("Logs").join(app.as_str()),
            DirKind::SiteData | DirKind::SiteConfig => {
                PathBuf::from("/Library/Application Support").join(app.as_str())
            }
        };
        Some(path)
    }

    #[cfg(windows)]
    fn resolve(&self, kind: DirKind, app: &AppName) -> Option<PathBuf> {
        let path = match kind {
            DirKind::UserData | DirKind::UserConfig | DirKind::UserState => {
                dirs::data_local_dir()?.join(app.as_str())
            }
            DirKind::UserCache => dirs::cache_dir()?.join(app.as_str()).join("Cache"),
            DirKind::UserLog => dirs::data_local_dir()?.join(app.as_str()).join("Logs"),
            DirKind::SiteData | DirKind::SiteConfig => {
                PathBuf::from(std::env::var_os("PROGRAMDATA")?).join(app.as_str())
            }
        };
        Some(path)
    }

    #[cfg(not(any(unix, windows)))]
    fn resolve(&self, _kind: DirKind, _app: &AppName) -> Option<PathBuf> {
        None
    }
}

impl BaseDirs for PlatformBase {
    fn app_dir(&self, kind: DirKind, app: &AppName) -> Result<PathBuf> {
        self.resolve(kind, app).ok_or(AppDirsError::NoBaseDir(kind))
    }
}
