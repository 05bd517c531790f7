//! Backend configuration.
//!
//! The backend is addressed by a single project URL; tables live under
//! `/rest/v1` and auth under `/auth/v1`.

use url::Url;

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the hosted backend.
///
/// `Debug` redacts the anon key.
#[derive(Clone)]
pub struct BackendConfig {
    /// Project URL, always with a trailing slash.
    pub url: Url,
    /// Public (anon) API key sent as `apikey` on every request.
    pub anon_key: String,
    /// Request timeout in seconds (native targets only).
    pub timeout_secs: u64,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url.as_str())
            .field("anon_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid backend URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            url: parse_base_url(url)?,
            anon_key: anon_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// - `BYTWAVE_BACKEND_URL` (required)
    /// - `BYTWAVE_BACKEND_ANON_KEY` (required)
    /// - `BYTWAVE_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("BYTWAVE_BACKEND_URL")
            .map_err(|_| ConfigError::MissingVar("BYTWAVE_BACKEND_URL"))?;
        let anon_key = std::env::var("BYTWAVE_BACKEND_ANON_KEY")
            .map_err(|_| ConfigError::MissingVar("BYTWAVE_BACKEND_ANON_KEY"))?;

        let mut config = Self::new(&url, anon_key)?;
        if let Ok(raw) = std::env::var("BYTWAVE_TIMEOUT_SECS") {
            config.timeout_secs = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: "BYTWAVE_TIMEOUT_SECS",
                value: raw,
            })?;
        }
        Ok(config)
    }

    /// URL of a table endpoint, e.g. `.../rest/v1/tickets`.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}rest/v1/{}", self.url, table)
    }

    /// URL of an auth endpoint, e.g. `.../auth/v1/token`.
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}auth/v1/{}", self.url, path.trim_start_matches('/'))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: "not a base URL".into(),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_normalised() {
        let a = BackendConfig::new("https://abc.example.co", "k").unwrap();
        let b = BackendConfig::new("https://abc.example.co/", "k").unwrap();
        assert_eq!(a.url, b.url);
        assert_eq!(a.table_url("tickets"), "https://abc.example.co/rest/v1/tickets");
        assert_eq!(a.auth_url("/token"), "https://abc.example.co/auth/v1/token");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = BackendConfig::new("not a url", "k").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = BackendConfig::new("http://localhost:54321", "super-secret").unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("[REDACTED]"));
    }
}
