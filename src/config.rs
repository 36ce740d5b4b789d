use chrono::{DateTime, Datelike};

/// Address the contact form hands off to.
pub const CONTACT_ADDRESS: &str = "clarizjoylolong@gmail.com";

/// RFC 3339 timestamp recorded by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

const NAV_DEBUG: Option<&str> = option_env!("PORTFOLIO_NAV_DEBUG");

/// Whether pointer targets are logged while the menu is open.
///
/// Set `PORTFOLIO_NAV_DEBUG=1` when building to turn it on.
pub fn nav_debug() -> bool {
    is_enabled(NAV_DEBUG)
}

pub fn log_level() -> log::Level {
    if nav_debug() {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.year())
}

fn is_enabled(value: Option<&str>) -> bool {
    match value {
        Some(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => false,
    }
}
