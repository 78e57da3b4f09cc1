//! Client configuration resolved once at boot.
//!
//! # Design
//! - The API base URL is fixed per build; `BUNBUSTER_API_URL` overrides it at compile time.
//! - Keep resolution pure so it can be tested without a browser.

/// Production API endpoint used when no override is compiled in.
pub const DEFAULT_API_BASE_URL: &str = "https://nimkus-movies-flix-6973780b155e.herokuapp.com";

/// Movies requested per page on the list view.
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Runtime configuration for the API client and list views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub api_base_url: String,
    /// Movies per page.
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_override(None)
    }
}

impl ClientConfig {
    /// Configuration for this build, honouring the compile-time URL override.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("BUNBUSTER_API_URL"))
    }

    /// Build a configuration from an optional base URL override.
    #[must_use]
    pub fn from_override(base_url: Option<&str>) -> Self {
        Self {
            api_base_url: resolve_base_url(base_url),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }
}

fn resolve_base_url(base_url: Option<&str>) -> String {
    base_url
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_production_url() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn override_is_trimmed_and_blank_is_ignored() {
        assert_eq!(
            ClientConfig::from_override(Some(" http://localhost:8080/ ")).api_base_url,
            "http://localhost:8080"
        );
        assert_eq!(
            ClientConfig::from_override(Some("  ")).api_base_url,
            DEFAULT_API_BASE_URL
        );
    }

    #[test]
    fn url_joins_paths_with_single_slash() {
        let config = ClientConfig::from_override(Some("http://api.test"));
        assert_eq!(config.url("/movies"), "http://api.test/movies");
        assert_eq!(config.url("users/bunny"), "http://api.test/users/bunny");
    }
}
