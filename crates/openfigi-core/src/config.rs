//! Default endpoints, header names and environment variables.

use std::time::Duration;

/// API origins.
pub mod endpoints {
    pub const PRODUCTION: &str = "https://api.openfigi.com";
}

/// Request paths relative to the origin.
pub mod paths {
    pub const MAPPING: &str = "v3/mapping";
}

/// Header names and values.
pub mod headers {
    pub const API_KEY: &str = "X-OPENFIGI-APIKEY";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ACCEPT: &str = "Accept";
    pub const APPLICATION_JSON: &str = "application/json";
}

/// Environment variable names.
pub mod env_vars {
    pub const API_KEY: &str = "OPENFIGI_API_KEY";
    pub const BASE_URL: &str = "OPENFIGI_BASE_URL";
    pub const LOG_JSON: &str = "OPENFIGI_LOG_JSON";

    /// API key from the environment, if set and non-empty.
    pub fn api_key() -> Option<String> {
        std::env::var(API_KEY).ok().filter(|v| !v.is_empty())
    }

    /// Base URL override from the environment, if set and non-empty.
    pub fn base_url() -> Option<String> {
        std::env::var(BASE_URL).ok().filter(|v| !v.is_empty())
    }

    /// Whether JSON log output was requested.
    pub fn log_json() -> bool {
        std::env::var(LOG_JSON)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false)
    }
}

/// Default timeout applied by the built-in HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Strip trailing slashes so paths can be joined with a single `/`.
pub fn normalize_base_url(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}
