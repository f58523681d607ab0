//! Directory handles
//!
//! [`AppDirs`] is the materializing handle: reading a directory creates it.
//! [`SafeAppDirs`] is its read-only sibling, returned by [`AppDirs::safe`],
//! which resolves exactly the same paths and never touches the filesystem.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::base::BaseDirs;
use crate::error::{AppDirsError, Result};
use crate::kind::DirKind;
use crate::logging::{operations, status};
use crate::registry::{AppName, Registry};
use crate::xdg::PlatformBase;

/// Materializing directory handle for one application
#[derive(Debug, Clone)]
pub struct AppDirs {
    app: AppName,
    base: Arc<dyn BaseDirs>,
}

impl AppDirs {
    /// Handle for the registry's active application on the real platform.
    ///
    /// Fails with `NotRegistered` if nothing has been registered.
    pub fn from_registry(registry: &Registry) -> Result<Self> {
        Self::with_base(registry, PlatformBase::new())
    }

    /// Handle for the registry's active application on a custom base
    pub fn with_base(registry: &Registry, base: impl BaseDirs + 'static) -> Result<Self> {
        let app = registry.active()?.clone();
        Ok(Self::for_app(app, base))
    }

    pub fn for_app(app: AppName, base: impl BaseDirs + 'static) -> Self {
        Self {
            app,
            base: Arc::new(base),
        }
    }

    /// Effective application name, including any test namespace suffix
    pub fn app_name(&self) -> &AppName {
        &self.app
    }

    /// Non-materializing view over the same paths
    pub fn safe(&self) -> SafeAppDirs<'_> {
        SafeAppDirs { dirs: self }
    }

    fn resolve(&self, kind: DirKind) -> Result<PathBuf> {
        let path = self.base.app_dir(kind, &self.app)?;
        debug!(
            operation = operations::RESOLVE,
            app = %self.app,
            kind = %kind,
            path = %path.display(),
            "resolved directory"
        );
        Ok(path)
    }

    /// Resolve `kind` and make sure the directory exists
    pub fn dir(&self, kind: DirKind) -> Result<PathBuf> {
        let path = self.resolve(kind)?;
        if !path.is_dir() {
            fs::create_dir_all(&path).map_err(|e| AppDirsError::io(&path, e))?;
            debug!(
                operation = operations::MATERIALIZE,
                status = status::CREATED,
                kind = %kind,
                path = %path.display(),
                "created directory"
            );
        }
        Ok(path)
    }

    pub fn user_data_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::UserData)
    }

    pub fn site_data_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::SiteData)
    }

    pub fn user_config_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::UserConfig)
    }

    pub fn site_config_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::SiteConfig)
    }

    pub fn user_cache_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::UserCache)
    }

    pub fn user_state_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::UserState)
    }

    pub fn user_log_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::UserLog)
    }
}

/// Read-only view of an [`AppDirs`]: same paths, no filesystem side effects
#[derive(Debug, Clone, Copy)]
pub struct SafeAppDirs<'a> {
    dirs: &'a AppDirs,
}

impl SafeAppDirs<'_> {
    pub fn app_name(&self) -> &AppName {
        self.dirs.app_name()
    }

    /// Resolve `kind` without creating anything
    pub fn dir(&self, kind: DirKind) -> Result<PathBuf> {
        self.dirs.resolve(kind)
    }

    pub fn user_data_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::UserData)
    }

    pub fn site_data_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::SiteData)
    }

    pub fn user_config_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::UserConfig)
    }

    pub fn site_config_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::SiteConfig)
    }

    pub fn user_cache_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::UserCache)
    }

    pub fn user_state_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::UserState)
    }

    pub fn user_log_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::UserLog)
    }
}
