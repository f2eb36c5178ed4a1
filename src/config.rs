//! Configuration types.

use crate::error::ConfigError;

/// Default crew server address, matching the backend's local dev port.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct CrewConfig {
    /// Base URL of the crew server, without a trailing slash.
    pub base_url: String,
}

impl Default for CrewConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl CrewConfig {
    /// Build configuration from the environment.
    ///
    /// `CREW_CHAT_URL` overrides the default server address; unset means
    /// the default, set-but-invalid is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("CREW_CHAT_URL") {
            Ok(url) => Self::with_base_url(&url),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Build configuration from an explicit base URL.
    ///
    /// Surrounding whitespace and any trailing slash are stripped, so
    /// endpoint paths can be appended directly.
    pub fn with_base_url(url: &str) -> Result<Self, ConfigError> {
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "CREW_CHAT_URL".to_string(),
                message: "base URL is empty".to_string(),
            });
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                key: "CREW_CHAT_URL".to_string(),
                message: format!("expected an http(s) URL, got {trimmed:?}"),
            });
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        assert_eq!(CrewConfig::default().base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = CrewConfig::with_base_url("http://localhost:5000/").unwrap();
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    fn surrounding_whitespace_is_stripped() {
        let config = CrewConfig::with_base_url("  https://crew.example.com  ").unwrap();
        assert_eq!(config.base_url, "https://crew.example.com");
    }

    #[test]
    fn empty_url_is_rejected() {
        assert!(matches!(
            CrewConfig::with_base_url("   "),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn non_http_url_is_rejected() {
        assert!(matches!(
            CrewConfig::with_base_url("ftp://crew.example.com"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
