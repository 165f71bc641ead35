//! Backend location from the environment.

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Used when [`BACKEND_URL_VAR`] is unset or blank.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Where the backend lives. Read once at startup, never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl ApiConfig {
    /// Use `base_url` as is, minus one trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read [`BACKEND_URL_VAR`] from the process environment, loading `.env`
    /// first if present.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_value(std::env::var(BACKEND_URL_VAR).ok().as_deref())
    }

    /// Browsers have no process environment, so the value is fixed at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_value(option_env!("BACKEND_URL"))
    }

    /// Build from an optional raw setting. Blank counts as unset.
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a collection: `{base_url}/{path}`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ApiConfig::from_value(None);
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.endpoint("photos"), "http://localhost:8000/photos");
    }

    #[test]
    fn test_blank_value_falls_back_to_default() {
        assert_eq!(ApiConfig::from_value(Some("")), ApiConfig::default());
        assert_eq!(ApiConfig::from_value(Some("   ")), ApiConfig::default());
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ApiConfig::from_value(Some(" https://api.example.com/ "));
        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(config.endpoint("/notes"), "https://api.example.com/notes");
    }

    #[test]
    fn test_from_env_reads_variable() {
        std::env::set_var(BACKEND_URL_VAR, "http://10.0.0.5:9000");
        let config = ApiConfig::from_env();
        std::env::remove_var(BACKEND_URL_VAR);
        assert_eq!(config.endpoint("plans"), "http://10.0.0.5:9000/plans");
    }
}
