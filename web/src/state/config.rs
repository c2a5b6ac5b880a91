#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use protocol::wire::{DEFAULT_BASE_URL, normalize_base_url};

/// Settings baked in when the WASM bundle is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PadConfig {
    /// Service base URL, no trailing slash.
    pub api_base_url: String,
    /// Show the "was it correct?" panel with Save and Re-Train.
    pub corrections_enabled: bool,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_BASE_URL.to_owned(), corrections_enabled: false }
    }
}

impl PadConfig {
    /// Read `SYMBOLPAD_API_URL` and `SYMBOLPAD_CORRECTIONS` from the build environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SYMBOLPAD_API_URL"), option_env!("SYMBOLPAD_CORRECTIONS"))
    }

    fn from_values(api_url: Option<&str>, corrections: Option<&str>) -> Self {
        Self {
            api_base_url: api_url.map_or_else(|| DEFAULT_BASE_URL.to_owned(), normalize_base_url),
            corrections_enabled: flag_enabled(corrections),
        }
    }
}

fn flag_enabled(raw: Option<&str>) -> bool {
    raw.map(str::trim)
        .is_some_and(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
