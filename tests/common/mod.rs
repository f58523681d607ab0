// Common test utilities shared across integration tests
//
// ## Test Isolation Strategy
//
// Every test calls `setup()` first. It builds a fresh `Registry` with the
// test application registered, so there is NO GLOBAL registration state and
// nothing carries over from one test to the next.
//
// ### What's Isolated:
// - Sandbox mocks: each one owns a unique temp directory
// - Registration: each test owns its own `Registry` value
//
// ### What's Shared:
// - XDG mocks resolve into the real platform directories of
//   `<app>-tests`. Tests using them are marked `#[serial]` and remove what
//   they create with `XdgAppDirs::cleanup()`.
//
// ### Cleanup:
// - `TmpAppDirs` deletes its sandbox on drop
// - `XdgAppDirs` never deletes on drop; the test must clean up explicitly

use appdirs_mock::{logging, Registry};

/// Application name registered by `setup()`
pub const APP_NAME: &str = "appdirs-mock";

/// Per-test setup hook: logging plus a registry with `APP_NAME` registered
pub fn setup() -> Registry {
    setup_with(APP_NAME)
}

/// Same as `setup()` for a specific application name
pub fn setup_with(app_name: &str) -> Registry {
    logging::init_for_tests();
    Registry::with_app(app_name).expect("Failed to register test application")
}

/// Application name that no other test run will use
#[allow(dead_code)]
pub fn unique_app_name(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}
