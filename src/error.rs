use std::path::PathBuf;
use thiserror::Error;

use crate::kind::DirKind;

/// Errors raised while registering an application or resolving its directories
#[derive(Error, Debug)]
pub enum AppDirsError {
    #[error("No application registered; call Registry::register before resolving directories")]
    NotRegistered,

    #[error("Invalid application name: {0:?}")]
    InvalidAppName(String),

    #[error("Test namespace for {0:?} is the real application itself; use a non-empty suffix")]
    UnnamespacedMock(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not determine base directory for {0}")]
    NoBaseDir(DirKind),

    #[error("Filesystem error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppDirsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppDirsError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppDirsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_keeps_path_and_source() {
        let err = AppDirsError::io(
            "/sandbox/demo-app/cache",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/sandbox/demo-app/cache"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_no_base_dir_names_kind() {
        let err = AppDirsError::NoBaseDir(DirKind::UserCache);
        assert_eq!(err.to_string(), "Could not determine base directory for user cache");
    }
}
