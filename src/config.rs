//! Build-time configuration.
//!
//! Values are baked in by the bundler from the environment at build time,
//! since a static bundle has no process environment at runtime.

use backend_client::BackendConfig;
use tracing::Level;

/// Local development backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:54321";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub anon_key: String,
    pub log_level: Level,
}

impl AppConfig {
    /// Read `BYTWAVE_BACKEND_URL`, `BYTWAVE_BACKEND_ANON_KEY` and
    /// `BYTWAVE_LOG` as they were when the bundle was built.
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("BYTWAVE_BACKEND_URL"),
            option_env!("BYTWAVE_BACKEND_ANON_KEY"),
            option_env!("BYTWAVE_LOG"),
        )
    }

    fn resolve(url: Option<&str>, anon_key: Option<&str>, log: Option<&str>) -> Self {
        let backend_url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .to_string();

        Self {
            backend_url,
            anon_key: anon_key.unwrap_or_default().to_string(),
            log_level: parse_level(log.unwrap_or("info")),
        }
    }

    /// Backend settings, falling back to the local backend on a bad URL.
    pub fn backend_config(&self) -> BackendConfig {
        match BackendConfig::new(&self.backend_url, self.anon_key.clone()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, fallback = DEFAULT_BACKEND_URL, "invalid backend URL");
                BackendConfig::new(DEFAULT_BACKEND_URL, self.anon_key.clone())
                    .expect("default backend URL is valid")
            }
        }
    }
}

fn parse_level(raw: &str) -> Level {
    raw.trim().parse().unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(None, None, None);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.anon_key, "");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::resolve(Some(" https://abc.example.co "), Some("key"), Some("debug"));
        assert_eq!(config.backend_url, "https://abc.example.co");
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(
            config.backend_config().table_url("devices"),
            "https://abc.example.co/rest/v1/devices"
        );
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::resolve(Some("::nope::"), Some("key"), Some("loud"));
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(
            config.backend_config().table_url("tickets"),
            "http://localhost:54321/rest/v1/tickets"
        );
    }
}
