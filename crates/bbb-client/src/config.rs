//! Client configuration.
//!
//! Configuration is immutable once a client is built from it: every request
//! for the client's lifetime is derived from the same endpoint and shared
//! secret. Loading from the environment is supported for deployments that
//! inject credentials that way.

use crate::error::ApiError;
use crate::secret::SecretString;
use std::collections::HashMap;
use std::time::Duration;

/// Default timeout for one request-response cycle.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default TCP connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable naming the server base URL.
pub const ENV_SERVER_URL: &str = "BBB_SERVER_URL";

/// Environment variable holding the shared secret.
pub const ENV_SHARED_SECRET: &str = "BBB_SHARED_SECRET";

/// Environment variable overriding the request timeout, in whole seconds.
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "BBB_REQUEST_TIMEOUT_SECS";

/// Configuration for an [`ApiClient`](crate::ApiClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// Server base URL, normalized to end with `/`
    /// (e.g., `https://bbb.example.org/bigbluebutton/`).
    pub server_url: String,

    /// Shared secret used as checksum input. Never transmitted.
    pub shared_secret: SecretString,

    /// Timeout for one request-response cycle.
    pub request_timeout: Duration,

    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server_url", &self.server_url)
            .field("shared_secret", &"[REDACTED]")
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new configuration with default timeouts.
    ///
    /// A missing trailing `/` on `server_url` is added, so request paths
    /// always concatenate cleanly.
    ///
    /// # Security Warning
    ///
    /// The checksum scheme does not encrypt anything; over plain HTTP the
    /// signed URL and all parameters travel in clear text. Use
    /// [`ClientConfig::new_secure`] to enforce HTTPS.
    #[must_use]
    pub fn new(server_url: String, shared_secret: SecretString) -> Self {
        let server_url = if server_url.ends_with('/') {
            server_url
        } else {
            format!("{server_url}/")
        };
        Self {
            server_url,
            shared_secret,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Create a new configuration requiring HTTPS.
    ///
    /// This is the recommended constructor for production use.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the URL doesn't use HTTPS.
    pub fn new_secure(server_url: String, shared_secret: SecretString) -> Result<Self, ApiError> {
        if !server_url.starts_with("https://") {
            return Err(ApiError::Configuration(
                "server URL must use HTTPS in production".into(),
            ));
        }
        Ok(Self::new(server_url, shared_secret))
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Reads [`ENV_SERVER_URL`] and [`ENV_SHARED_SECRET`], plus the
    /// optional [`ENV_REQUEST_TIMEOUT_SECS`] override.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if a required variable is
    /// missing or the timeout override is not a whole number of seconds.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load configuration from a map of variables (useful for testing).
    ///
    /// # Errors
    ///
    /// Same conditions as [`ClientConfig::from_env`].
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ApiError> {
        let server_url = vars
            .get(ENV_SERVER_URL)
            .ok_or_else(|| {
                ApiError::Configuration(format!("missing environment variable: {ENV_SERVER_URL}"))
            })?
            .clone();

        let shared_secret = vars.get(ENV_SHARED_SECRET).ok_or_else(|| {
            ApiError::Configuration(format!("missing environment variable: {ENV_SHARED_SECRET}"))
        })?;

        let mut config = Self::new(server_url, SecretString::from(shared_secret.clone()));

        if let Some(raw) = vars.get(ENV_REQUEST_TIMEOUT_SECS) {
            let secs: u64 = raw.parse().map_err(|_| {
                ApiError::Configuration(format!("invalid {ENV_REQUEST_TIMEOUT_SECS}: {raw}"))
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn base_vars() -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert(
            ENV_SERVER_URL.to_string(),
            "https://bbb.example.org/bigbluebutton/".to_string(),
        );
        vars.insert(ENV_SHARED_SECRET.to_string(), "s3cr3t".to_string());
        vars
    }

    #[test]
    fn test_new_appends_missing_trailing_slash() {
        let config = ClientConfig::new(
            "https://bbb.example.org/bigbluebutton".to_string(),
            SecretString::from("s3cr3t"),
        );
        assert_eq!(config.server_url, "https://bbb.example.org/bigbluebutton/");
    }

    #[test]
    fn test_new_keeps_existing_trailing_slash() {
        let config = ClientConfig::new(
            "https://bbb.example.org/bigbluebutton/".to_string(),
            SecretString::from("s3cr3t"),
        );
        assert_eq!(config.server_url, "https://bbb.example.org/bigbluebutton/");
    }

    #[test]
    fn test_new_applies_default_timeouts() {
        let config = ClientConfig::new(
            "https://bbb.example.org/".to_string(),
            SecretString::from("s3cr3t"),
        );
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
    }

    #[test]
    fn test_builders_override_timeouts() {
        let config = ClientConfig::new(
            "https://bbb.example.org/".to_string(),
            SecretString::from("s3cr3t"),
        )
        .with_request_timeout(Duration::from_secs(30))
        .with_connect_timeout(Duration::from_secs(2));

        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_new_secure_requires_https() {
        let ok = ClientConfig::new_secure(
            "https://bbb.example.org/bigbluebutton/".to_string(),
            SecretString::from("s3cr3t"),
        );
        assert!(ok.is_ok());

        let err = ClientConfig::new_secure(
            "http://bbb.example.org/bigbluebutton/".to_string(),
            SecretString::from("s3cr3t"),
        );
        assert!(matches!(err, Err(ApiError::Configuration(_))));
    }

    #[test]
    fn test_debug_redacts_shared_secret() {
        let config = ClientConfig::new(
            "https://bbb.example.org/".to_string(),
            SecretString::from("super-secret"),
        );
        let debug = format!("{config:?}");

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("https://bbb.example.org/"));
    }

    #[test]
    fn test_from_vars_reads_required_variables() {
        use crate::secret::ExposeSecret;

        let config = ClientConfig::from_vars(&base_vars()).unwrap();
        assert_eq!(config.server_url, "https://bbb.example.org/bigbluebutton/");
        assert_eq!(config.shared_secret.expose_secret(), "s3cr3t");
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_from_vars_missing_server_url() {
        let mut vars = base_vars();
        vars.remove(ENV_SERVER_URL);

        let err = ClientConfig::from_vars(&vars).unwrap_err();
        assert!(err.to_string().contains(ENV_SERVER_URL));
    }

    #[test]
    fn test_from_vars_missing_shared_secret() {
        let mut vars = base_vars();
        vars.remove(ENV_SHARED_SECRET);

        let err = ClientConfig::from_vars(&vars).unwrap_err();
        assert!(err.to_string().contains(ENV_SHARED_SECRET));
    }

    #[test]
    fn test_from_vars_timeout_override() {
        let mut vars = base_vars();
        vars.insert(ENV_REQUEST_TIMEOUT_SECS.to_string(), "30".to_string());

        let config = ClientConfig::from_vars(&vars).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_vars_rejects_invalid_timeout() {
        let mut vars = base_vars();
        vars.insert(ENV_REQUEST_TIMEOUT_SECS.to_string(), "soon".to_string());

        let err = ClientConfig::from_vars(&vars).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
        assert!(err.to_string().contains(ENV_REQUEST_TIMEOUT_SECS));
    }
}
