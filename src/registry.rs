//! Application registration
//!
//! A [`Registry`] remembers which application the caller is acting as. It is a
//! plain value owned by whoever resolves directories, so every test can build
//! its own and nothing leaks between them.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{AppDirsError, Result};
use crate::logging::operations;

/// A validated application name, used as the final path component of every
/// resolved directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    /// Validate and wrap an application name.
    ///
    /// Rejects empty names, `.` and `..`, and anything containing a path
    /// separator or NUL byte.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\', '\0']);
        if invalid {
            return Err(AppDirsError::InvalidAppName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a suffix, e.g. `demo-app` + `-tests`.
    pub fn with_suffix(&self, suffix: &str) -> Result<Self> {
        Self::new(format!("{}{}", self.0, suffix))
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AppName {
    type Err = AppDirsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Holds the active application, if any
#[derive(Debug, Clone, Default)]
pub struct Registry {
    active: Option<AppName>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry with `name` already registered
    pub fn with_app(name: &str) -> Result<Self> {
        let mut registry = Self::new();
        registry.register(name)?;
        Ok(registry)
    }

    /// Make `name` the active application, replacing any previous one
    pub fn register(&mut self, name: &str) -> Result<&AppName> {
        let app = AppName::new(name)?;
        debug!(operation = operations::REGISTER, app = %app, "application registered");
        Ok(&*self.active.insert(app))
    }

    /// Forget the active application
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// The active application, or `NotRegistered`
    pub fn active(&self) -> Result<&AppName> {
        self.active.as_ref().ok_or(AppDirsError::NotRegistered)
    }

    pub fn is_registered(&self) -> bool {
        self.active.is_some()
    }
}
