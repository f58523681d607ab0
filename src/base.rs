//! Base directory providers
//!
//! A [`BaseDirs`] turns a directory kind and an application name into an
//! absolute path. [`PlatformBase`](crate::xdg::PlatformBase) follows the host
//! conventions; [`RootedBase`] keeps everything below a single root, which is
//! what the temporary-sandbox mock uses.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::kind::DirKind;
use crate::registry::AppName;

/// Resolves application directories. Implementations must not touch the
/// filesystem: creating directories is the caller's decision.
pub trait BaseDirs: fmt::Debug + Send + Sync {
    /// Full path of the `kind` directory for `app`
    fn app_dir(&self, kind: DirKind, app: &AppName) -> Result<PathBuf>;
}

/// Resolves every kind to `<root>/<app>/<kind-slug>`
#[derive(Debug, Clone)]
pub struct RootedBase {
    root: PathBuf,
}

impl RootedBase {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BaseDirs for RootedBase {
    fn app_dir(&self, kind: DirKind, app: &AppName) -> Result<PathBuf> {
        Ok(self.root.join(app.as_str()).join(kind.slug()))
    }
}
