//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at run time, so the API base
//! URL and the notifications switch are baked in with `option_env!` when the
//! crate is compiled. Parsing lives in pure functions so defaults are testable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when `SKILLSYNC_API_BASE` is unset or blank.
pub const DEFAULT_API_BASE: &str = "/api/";

/// Resolved client settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined with every REST path (`mentors/`, `sessions/`, ...).
    pub api_base: String,
    /// Whether mutating actions push toast notifications.
    pub notifications_enabled: bool,
}

impl ClientConfig {
    /// Configuration captured from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SKILLSYNC_API_BASE"),
            option_env!("SKILLSYNC_ENABLE_NOTIFICATIONS"),
        )
    }

    /// Build a configuration from raw optional values.
    pub fn from_values(api_base: Option<&str>, notifications: Option<&str>) -> Self {
        Self {
            api_base: parse_api_base(api_base),
            notifications_enabled: parse_flag(notifications, true),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn parse_api_base(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => DEFAULT_API_BASE.to_owned(),
    }
}

/// Interpret a boolean-ish build flag; anything unrecognized keeps `default`.
pub fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    let Some(value) = raw else {
        return default;
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
