//! Directory mocks for tests
//!
//! Two fixtures wrap [`AppDirs`] for use in test code:
//!
//! - [`TmpAppDirs`]: every directory lives below a private temporary directory
//!   that is deleted when the fixture drops.
//! - [`XdgAppDirs`]: the real platform locations, but for a namespaced
//!   application (`<app>-tests` by default) so production directories are
//!   never touched.
//!
//! Both deref to [`AppDirs`], so `fixture.user_cache_dir()` materializes and
//! `fixture.safe().user_cache_dir()` only resolves.
//!
//! `XdgAppDirs` does not clean up on drop. Directories it creates on the real
//! filesystem outlive the test (observed on macOS CI even when the test
//! expected otherwise), so callers that materialize through it must call
//! [`XdgAppDirs::cleanup`] or [`XdgAppDirs::remove_dir`] themselves.

use std::fs;
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, warn};

use crate::base::RootedBase;
use crate::config::AppDirsConfig;
use crate::error::{AppDirsError, Result};
use crate::kind::DirKind;
use crate::logging::{operations, status};
use crate::registry::Registry;
use crate::resolver::AppDirs;
use crate::xdg::PlatformBase;

/// Sandbox fixture: all directories below a fresh temporary root
#[derive(Debug)]
pub struct TmpAppDirs {
    dirs: AppDirs,
    // Dropped after `dirs`; removes the whole sandbox
    root: TempDir,
}

impl TmpAppDirs {
    /// Sandbox in the system temporary directory
    pub fn new(registry: &Registry) -> Result<Self> {
        let root = TempDir::new().map_err(|e| AppDirsError::io(std::env::temp_dir(), e))?;
        Self::with_root(registry, root)
    }

    /// Sandbox below `parent`, which must already exist
    pub fn new_in(registry: &Registry, parent: impl AsRef<Path>) -> Result<Self> {
        let parent = parent.as_ref();
        let root = TempDir::new_in(parent).map_err(|e| AppDirsError::io(parent, e))?;
        Self::with_root(registry, root)
    }

    fn with_root(registry: &Registry, root: TempDir) -> Result<Self> {
        let dirs = AppDirs::with_base(registry, RootedBase::new(root.path()))?;
        debug!(
            operation = operations::MOCK,
            app = %dirs.app_name(),
            root = %root.path().display(),
            "created sandbox app dirs"
        );
        Ok(Self { dirs, root })
    }

    /// The temporary root every directory resolves below
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

impl Deref for TmpAppDirs {
    type Target = AppDirs;

    fn deref(&self) -> &AppDirs {
        &self.dirs
    }
}

/// Real-platform fixture under a disposable application name
#[derive(Debug)]
pub struct XdgAppDirs {
    dirs: AppDirs,
}

impl XdgAppDirs {
    /// Namespace the registry's application with the default `-tests` suffix
    pub fn new(registry: &Registry) -> Result<Self> {
        Self::with_config(registry, &AppDirsConfig::default())
    }

    pub fn with_config(registry: &Registry, config: &AppDirsConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| AppDirsError::InvalidConfig(format!("{e:#}")))?;
        let base = PlatformBase::new().honor_env(config.honor_xdg_env);
        Self::with_base(registry, &config.test_suffix, base)
    }

    /// Namespace the registry's application on an explicit platform base.
    ///
    /// An empty `suffix` is rejected: the mock would resolve to, and
    /// `cleanup` would delete, the real application's directories.
    pub fn with_base(registry: &Registry, suffix: &str, base: PlatformBase) -> Result<Self> {
        let real = registry.active()?;
        if suffix.is_empty() {
            return Err(AppDirsError::UnnamespacedMock(real.to_string()));
        }
        let app = real.with_suffix(suffix)?;
        debug!(operation = operations::MOCK, app = %app, "created xdg app dirs");
        Ok(Self {
            dirs: AppDirs::for_app(app, base),
        })
    }

    /// Forcibly remove the `kind` directory and everything in it.
    ///
    /// Succeeds when the directory is already absent. Only ever touches paths
    /// of the namespaced application.
    pub fn remove_dir(&self, kind: DirKind) -> Result<()> {
        let path = self.dirs.safe().dir(kind)?;
        match fs::remove_dir_all(&path) {
            Ok(()) => {
                debug!(
                    operation = operations::CLEANUP,
                    status = status::REMOVED,
                    kind = %kind,
                    path = %path.display(),
                    "removed directory"
                );
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    operation = operations::CLEANUP,
                    status = status::ABSENT,
                    kind = %kind,
                    path = %path.display(),
                    "nothing to remove"
                );
                Ok(())
            }
            Err(e) => Err(AppDirsError::io(path, e)),
        }
    }

    /// Remove every directory kind of the namespaced application.
    ///
    /// Every kind is attempted even if an earlier one fails; the first
    /// failure is returned.
    pub fn cleanup(&self) -> Result<()> {
        let mut first_error = None;
        for kind in DirKind::ALL {
            if let Err(e) = self.remove_dir(kind) {
                warn!(
                    operation = operations::CLEANUP,
                    kind = %kind,
                    error = %e,
                    "failed to remove directory"
                );
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Paths of the namespaced application that currently exist on disk
    pub fn existing_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut existing = Vec::new();
        for kind in DirKind::ALL {
            let path = self.dirs.safe().dir(kind)?;
            if path.exists() {
                existing.push(path);
            }
        }
        Ok(existing)
    }
}

impl Deref for XdgAppDirs {
    type Target = AppDirs;

    fn deref(&self) -> &AppDirs {
        &self.dirs
    }
}

/// Fixture: sandboxed directories for the registry's application
pub fn tmp_appdirs(registry: &Registry) -> Result<TmpAppDirs> {
    TmpAppDirs::new(registry)
}

/// Fixture: sandbox placed below a caller-chosen parent directory
pub fn tmp_appdirs_in(registry: &Registry, parent: impl AsRef<Path>) -> Result<TmpAppDirs> {
    TmpAppDirs::new_in(registry, parent)
}

/// Fixture: real platform directories for `<app>-tests`
pub fn xdg_appdirs(registry: &Registry) -> Result<XdgAppDirs> {
    XdgAppDirs::new(registry)
}

/// Fixture: real platform directories, suffix and XDG handling from `config`
pub fn xdg_appdirs_with(registry: &Registry, config: &AppDirsConfig) -> Result<XdgAppDirs> {
    XdgAppDirs::with_config(registry, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::with_app("demo-app").unwrap()
    }

    #[test]
    fn test_tmp_requires_registration() {
        let err = tmp_appdirs(&Registry::new()).unwrap_err();
        assert!(matches!(err, AppDirsError::NotRegistered));
    }

    #[test]
    fn test_xdg_requires_registration() {
        let err = xdg_appdirs(&Registry::new()).unwrap_err();
        assert!(matches!(err, AppDirsError::NotRegistered));
    }

    #[test]
    fn test_tmp_sandbox_is_removed_on_drop() {
        let mock = tmp_appdirs(&registry()).unwrap();
        let cache = mock.user_cache_dir().unwrap();
        let root = mock.root().to_path_buf();
        assert!(cache.starts_with(&root));
        assert!(cache.is_dir());

        drop(mock);
        assert!(!root.exists());
    }

    #[test]
    fn test_tmp_sandbox_in_parent() {
        let parent = TempDir::new().unwrap();
        let mock = tmp_appdirs_in(&registry(), parent.path()).unwrap();
        assert!(mock.root().starts_with(parent.path()));
        assert_eq!(
            mock.safe().user_cache_dir().unwrap(),
            mock.root().join("demo-app").join("cache")
        );
    }

    #[test]
    fn test_tmp_sandboxes_are_private() {
        let a = tmp_appdirs(&registry()).unwrap();
        let b = tmp_appdirs(&registry()).unwrap();
        assert_ne!(a.root(), b.root());

        a.user_data_dir().unwrap();
        assert!(!b.safe().user_data_dir().unwrap().exists());
    }

    #[test]
    fn test_xdg_namespaces_app_name() {
        let home = TempDir::new().unwrap();
        let base = PlatformBase::new().with_home(home.path()).honor_env(false);
        let mock = XdgAppDirs::with_base(&registry(), "-tests", base).unwrap();
        assert_eq!(mock.app_name().as_str(), "demo-app-tests");
        assert_eq!(registry().active().unwrap().as_str(), "demo-app");
    }

    #[test]
    fn test_xdg_config_suffix() {
        let config = AppDirsConfig {
            test_suffix: "-ci".to_string(),
            ..AppDirsConfig::default()
        };
        let mock = xdg_appdirs_with(&registry(), &config).unwrap();
        assert_eq!(mock.app_name().as_str(), "demo-app-ci");
    }

    #[test]
    fn test_xdg_rejects_empty_suffix() {
        let home = TempDir::new().unwrap();
        let base = PlatformBase::new().with_home(home.path()).honor_env(false);
        let err = XdgAppDirs::with_base(&registry(), "", base).unwrap_err();
        assert!(matches!(err, AppDirsError::UnnamespacedMock(ref app) if app == "demo-app"));

        let config = AppDirsConfig {
            test_suffix: String::new(),
            ..AppDirsConfig::default()
        };
        let err = xdg_appdirs_with(&registry(), &config).unwrap_err();
        assert!(matches!(err, AppDirsError::InvalidConfig(_)));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn test_xdg_empty_suffix_never_reaches_real_dirs() {
        let home = TempDir::new().unwrap();
        let base = PlatformBase::new().with_home(home.path()).honor_env(false);
        let real = AppDirs::for_app(registry().active().unwrap().clone(), base.clone());
        let settings = real.user_config_dir().unwrap().join("settings.toml");
        fs::write(&settings, b"keep = true").unwrap();

        assert!(XdgAppDirs::with_base(&registry(), "", base).is_err());
        assert!(settings.exists());
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn test_xdg_cleanup_continues_after_failure() {
        let home = TempDir::new().unwrap();
        let base = PlatformBase::new().with_home(home.path()).honor_env(false);
        let mock = XdgAppDirs::with_base(&registry(), "-tests", base).unwrap();

        let cache = mock.user_cache_dir().unwrap();
        let state = mock.user_state_dir().unwrap();
        // A plain file where the data directory belongs cannot be removed
        // as a directory, and data is the first kind cleaned
        let data = mock.safe().user_data_dir().unwrap();
        fs::create_dir_all(data.parent().unwrap()).unwrap();
        fs::write(&data, b"not a directory").unwrap();

        let err = mock.cleanup().unwrap_err();
        match err {
            AppDirsError::Io { path, .. } => assert_eq!(path, data),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!cache.exists());
        assert!(!state.exists());
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn test_xdg_cleanup_removes_materialized_dirs() {
        let home = TempDir::new().unwrap();
        let base = PlatformBase::new().with_home(home.path()).honor_env(false);
        let mock = XdgAppDirs::with_base(&registry(), "-tests", base).unwrap();

        let cache = mock.user_cache_dir().unwrap();
        let state = mock.user_state_dir().unwrap();
        assert_eq!(cache, home.path().join(".cache").join("demo-app-tests"));
        assert_eq!(mock.existing_dirs().unwrap(), vec![cache.clone(), state.clone()]);

        mock.cleanup().unwrap();
        assert!(!cache.exists());
        assert!(!state.exists());
        assert!(mock.existing_dirs().unwrap().is_empty());

        // Second cleanup finds nothing and still succeeds
        mock.cleanup().unwrap();
    }
}
