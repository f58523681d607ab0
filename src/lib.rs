// Library interface for appdirs-mock
// Per-application directory resolution plus the sandboxed mocks tests use

pub mod base;
pub mod config;
pub mod error;
pub mod kind;
pub mod logging;
pub mod mock;
pub mod registry;
pub mod resolver;
pub mod xdg;

// Re-export commonly used types
pub use base::{BaseDirs, RootedBase};
pub use config::AppDirsConfig;
pub use error::{AppDirsError, Result};
pub use kind::DirKind;
pub use mock::{tmp_appdirs, tmp_appdirs_in, xdg_appdirs, xdg_appdirs_with, TmpAppDirs, XdgAppDirs};
pub use registry::{AppName, Registry};
pub use resolver::{AppDirs, SafeAppDirs};
pub use xdg::PlatformBase;
