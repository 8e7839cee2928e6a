//! Backend endpoint configuration.

/// Backend address used when `IMOVIA_API_URL` is not set.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Base address for every API call. All gateway paths are joined onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config with an explicit base URL. Trailing slashes are
    /// trimmed so path joining stays predictable.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Load from `IMOVIA_API_URL`, falling back to the local dev backend.
    #[must_use]
    pub fn from_env() -> Self {
        let raw = std::env::var("IMOVIA_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(&raw)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
