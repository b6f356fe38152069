//! Frontend configuration module
//!
//! Values are fixed at build time from environment variables so the compiled
//! bundle needs no runtime configuration file.

/// API address used when `TIKTINY_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Frontend configuration for the API endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Origin of the video API, without the `/api` suffix
    pub api_base: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_build_env(option_env!("TIKTINY_API_BASE"))
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    fn from_build_env(api_base: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Get the API origin
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base.is_empty());
        assert!(config.api_base.starts_with("http"));
    }

    #[test]
    fn test_unset_env_uses_local_address() {
        let config = FrontendConfig::from_build_env(None);
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_blank_env_uses_local_address() {
        let config = FrontendConfig::from_build_env(Some("   "));
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_env_override_drops_trailing_slash() {
        let config = FrontendConfig::from_build_env(Some("https://videos.example.com/"));
        assert_eq!(config.api_base(), "https://videos.example.com");
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1, config2);
    }
}
