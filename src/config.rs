//! Compile-time configuration for the portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage key names are the only persisted-state contract shared with the
//! login and onboarding flows, so they live here rather than next to the
//! guards that read them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::Level;

/// Browser storage keys shared with the login and onboarding flows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    /// Restaurant partner onboarding status.
    pub restaurant_status: &'static str,
    /// Shipper onboarding status.
    pub shipper_status: &'static str,
    /// Consumer login flag.
    pub user_session: &'static str,
}

pub const STORAGE_KEYS: StorageKeys = StorageKeys {
    restaurant_status: "restaurant_profile_status",
    shipper_status: "shipper_profile_status",
    user_session: "user_logged_in",
};

const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// Console log level baked in at build time from `FOODHUB_LOG`.
pub fn log_level() -> Level {
    parse_log_level(option_env!("FOODHUB_LOG"))
}

/// Parse a log level name, falling back to `info` for absent or unknown names.
pub fn parse_log_level(raw: Option<&str>) -> Level {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => Level::Error,
        Some("warn" | "warning") => Level::Warn,
        Some("info") => Level::Info,
        Some("debug") => Level::Debug,
        Some("trace") => Level::Trace,
        _ => DEFAULT_LOG_LEVEL,
    }
}
