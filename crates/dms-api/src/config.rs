//! API configuration.

/// Used when `DMS_API_HOST` is not set at build time.
pub const DEFAULT_API_HOST: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host and port of the service, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// The browser bundle has no process environment, so the host is baked in
    /// when the crate is compiled.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("DMS_API_HOST").unwrap_or(DEFAULT_API_HOST))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://dms.example.org//");
        assert_eq!(config.base_url, "https://dms.example.org");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let config = ApiConfig::new("  http://10.0.0.5:8080/ ");
        assert_eq!(config.base_url, "http://10.0.0.5:8080");
    }
}
