//! Structured logging utilities
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary or test harness that uses it. All events use structured fields.
//!
//! # Log Format Conventions
//!
//! - `operation`: what is being done ("register", "resolve", "materialize", "cleanup")
//! - `status`: the result ("created", "removed", "absent")
//! - `app`: effective application name
//! - `kind`: directory kind ("user cache", "site config", ...)
//! - `path`: absolute path involved
//!
//! # Examples
//!
//! ```rust
//! use tracing::debug;
//!
//! debug!(
//!     operation = "materialize",
//!     status = "created",
//!     kind = "user cache",
//!     path = "/home/me/.cache/demo-app",
//!     "created directory"
//! );
//! ```

use std::{fmt as std_fmt, io};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{
    fmt::{self, format::Writer},
    prelude::*,
    EnvFilter,
};

/// Formatter that tags every line with "(appdirs)" instead of the module path
struct AppDirsFormatter {
    with_ansi: bool,
}

impl<S, N> FormatEvent<S, N> for AppDirsFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std_fmt::Result {
        let meta = event.metadata();

        write!(
            writer,
            "{} ",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.6f")
        )?;

        if self.with_ansi {
            let level_style = match *meta.level() {
                tracing::Level::ERROR => "\x1b[31m",
                tracing::Level::WARN => "\x1b[33m",
                tracing::Level::INFO => "\x1b[32m",
                tracing::Level::DEBUG => "\x1b[34m",
                tracing::Level::TRACE => "\x1b[35m",
            };
            write!(writer, "{}{:5}(appdirs)\x1b[0m: ", level_style, meta.level())?;
        } else {
            write!(writer, "{:5}(appdirs): ", meta.level())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, colored
    Pretty,
    /// Same layout without colors (CI)
    Compact,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Parse a format name; anything unknown falls back to the default
    pub fn parse(value: &str, ci: bool) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            "pretty" => Self::Pretty,
            _ if ci => Self::Compact,
            _ => Self::Pretty,
        }
    }

    /// Read `APPDIRS_LOG_FORMAT`, defaulting to compact when `CI` is set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = lookup("APPDIRS_LOG_FORMAT").unwrap_or_default();
        Self::parse(&value, lookup("CI").is_some())
    }
}

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Build a subscriber for `format` writing to `writer`
pub fn subscriber<W>(format: LogFormat, filter: EnvFilter, writer: W) -> BoxedSubscriber
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => Box::new(
            tracing_subscriber::registry().with(filter).with(
                fmt::layer()
                    .event_format(AppDirsFormatter { with_ansi: true })
                    .with_writer(writer),
            ),
        ),
        LogFormat::Compact => Box::new(
            tracing_subscriber::registry().with(filter).with(
                fmt::layer()
                    .event_format(AppDirsFormatter { with_ansi: false })
                    .with_writer(writer),
            ),
        ),
        LogFormat::Json => Box::new(
            tracing_subscriber::registry().with(filter).with(
                fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_ansi(false)
                    .with_writer(writer)
                    .json(),
            ),
        ),
    }
}

/// Initialize the global tracing subscriber
///
/// # Environment Variables
///
/// - `RUST_LOG`: log level (default "info")
/// - `APPDIRS_LOG_FORMAT`: "pretty", "compact" or "json"
/// - `CI`: if set, defaults to compact format
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    subscriber(LogFormat::from_env(), env_filter("info"), io::stderr).try_init()?;
    Ok(())
}

/// Install a subscriber that writes through the test harness's capture.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_for_tests() {
    let _ = tracing_subscriber::registry()
        .with(env_filter("debug"))
        .with(
            fmt::layer()
                .event_format(AppDirsFormatter { with_ansi: false })
                .with_test_writer(),
        )
        .try_init();
}

/// Standard field names for consistent logging
pub mod fields {
    pub const OPERATION: &str = "operation";
    pub const STATUS: &str = "status";
    pub const APP: &str = "app";
    pub const KIND: &str = "kind";
    pub const PATH: &str = "path";
}

/// Operation names for consistent logging
pub mod operations {
    pub const REGISTER: &str = "register";
    pub const RESOLVE: &str = "resolve";
    pub const MATERIALIZE: &str = "materialize";
    pub const MOCK: &str = "mock";
    pub const CLEANUP: &str = "cleanup";
}

/// Status values for consistent logging
pub mod status {
    pub const CREATED: &str = "created";
    pub const REMOVED: &str = "removed";
    pub const ABSENT: &str = "absent";
}
