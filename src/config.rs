//! Configuration for the data client
//!
//! The hosted table backend is reachable through two values: an endpoint URL
//! and an access key. Both present means remote mode; anything else means the
//! client runs entirely on seeded local fixtures. The decision is resolved
//! once at startup and injected, never re-read per call.

use std::env;
use std::time::Duration;

/// Environment variable holding the hosted backend endpoint URL
pub const REMOTE_URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the hosted backend access key
pub const REMOTE_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Environment variable overriding the remote request timeout (milliseconds)
pub const REQUEST_TIMEOUT_VAR: &str = "DATA_REQUEST_TIMEOUT_MS";

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Connection settings for the hosted table backend
///
/// Absence of either credential is not an error: it selects local-fixture
/// mode silently.
#[derive(Debug, Clone, Default)]
pub struct RemoteConfig {
    /// Endpoint URL of the hosted table backend
    pub url: Option<String>,

    /// Access key sent with every request
    pub access_key: Option<String>,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl RemoteConfig {
    /// Resolve configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads `SUPABASE_URL` and
    /// `SUPABASE_ANON_KEY`. Empty values count as absent.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            url: env::var(REMOTE_URL_VAR).ok().filter(|v| !v.is_empty()),
            access_key: env::var(REMOTE_KEY_VAR).ok().filter(|v| !v.is_empty()),
            request_timeout_ms: env::var(REQUEST_TIMEOUT_VAR)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }

    /// Configuration that always selects local-fixture mode
    pub fn disabled() -> Self {
        Self {
            url: None,
            access_key: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }

    /// Whether both remote credentials are present
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.access_key.is_some()
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_not_configured() {
        let config = RemoteConfig::disabled();
        assert!(!config.is_configured());
    }

    #[test]
    fn test_partial_credentials_are_not_configured() {
        let config = RemoteConfig {
            url: Some("https://example.supabase.co".to_string()),
            access_key: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn test_both_credentials_are_configured() {
        let config = RemoteConfig {
            url: Some("https://example.supabase.co".to_string()),
            access_key: Some("anon-key".to_string()),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        };
        assert!(config.is_configured());
        assert_eq!(config.request_timeout(), Duration::from_millis(30_000));
    }
}
