use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::AppDirsError;
use crate::registry::{AppName, Registry};

/// Settings for directory resolution and the test mocks (loaded from TOML)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDirsConfig {
    /// Application to register up front
    #[serde(default)]
    pub app_name: Option<String>,

    /// Suffix appended to the application name by the XDG mock, so tests
    /// never touch the real application's directories
    #[serde(default = "default_test_suffix")]
    pub test_suffix: String,

    /// Honor `XDG_*_HOME` / `XDG_*_DIRS` overrides
    #[serde(default = "default_true")]
    pub honor_xdg_env: bool,
}

fn default_test_suffix() -> String {
    "-tests".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppDirsConfig {
    fn default() -> Self {
        Self {
            app_name: None,
            test_suffix: default_test_suffix(),
            honor_xdg_env: true,
        }
    }
}

impl AppDirsConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppDirsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `APPDIRS_*` environment overrides on top of the current values
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Values are only taken over once the overridden config validates
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let mut updated = self.clone();
        if let Some(name) = lookup("APPDIRS_APP_NAME") {
            updated.app_name = Some(name);
        }
        if let Some(suffix) = lookup("APPDIRS_TEST_SUFFIX") {
            updated.test_suffix = suffix;
        }
        if let Some(honor) = lookup("APPDIRS_HONOR_XDG_ENV") {
            updated.honor_xdg_env = !matches!(
                honor.trim().to_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.test_suffix.is_empty() {
            bail!("test_suffix must not be empty: the XDG mock would share the real application's directories");
        }
        if let Some(name) = &self.app_name {
            AppName::new(name.as_str()).context("Invalid app_name")?;
        }
        // The suffix becomes part of a path component too
        AppName::new(format!("app{}", self.test_suffix)).context("Invalid test_suffix")?;
        Ok(())
    }

    /// Registry with `app_name` registered, if configured
    pub fn registry(&self) -> Result<Registry, AppDirsError> {
        match &self.app_name {
            Some(name) => Registry::with_app(name),
            None => Ok(Registry::new()),
        }
    }
}
