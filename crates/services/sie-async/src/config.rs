use secrecy::{ExposeSecret, SecretString};

/// Default SIE API base URL
pub const SIE_DEFAULT_BASE: &str = "https://www.banxico.org.mx/SieAPIRest/service/v1";
/// User-Agent header value sent with every request
pub const USER_AGENT: &str = "banxico-mcp/1.0";
/// Query parameter name carrying the API token
pub const TOKEN_PARAM: &str = "token";

/// Configuration for the SIE client
///
/// Debug output automatically redacts the token via [`SecretString`].
#[derive(Clone, Debug)]
pub struct SieConfig {
    api_base: String,
    token: Option<SecretString>,
}

impl Default for SieConfig {
    fn default() -> Self {
        let token = std::env::var("BANXICO_API_TOKEN")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(SecretString::from);

        let api_base = std::env::var("SIE_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| SIE_DEFAULT_BASE.into());

        Self { api_base, token }
    }
}

impl SieConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `BANXICO_API_TOKEN` for the SIE API token
    /// - `SIE_BASE_URL` for a custom API base URL (defaults to the public SIE endpoint)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the API token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns true when a non-empty token is configured
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().trim().is_empty())
    }
}

/// Configuration trait for the SIE client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Returns query parameters to include in requests
    fn query(&self) -> Vec<(&str, &str)>;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::SieError>;
}

impl Config for SieConfig {
    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn query(&self) -> Vec<(&str, &str)> {
        match &self.token {
            Some(secret) => vec![(TOKEN_PARAM, secret.expose_secret().trim())],
            None => vec![],
        }
    }

    fn validate_auth(&self) -> Result<(), crate::error::SieError> {
        if self.has_token() {
            Ok(())
        } else {
            Err(crate::error::SieError::Config(
                "Missing SIE credentials: set BANXICO_API_TOKEN environment variable".into(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EnvGuard;
    use serial_test::serial;

    #[test]
    #[serial(env)]
    fn config_reads_env_vars() {
        let _token = EnvGuard::set("BANXICO_API_TOKEN", "test-token-123");
        let _base = EnvGuard::set("SIE_BASE_URL", "https://sie.example.test/v1");

        let cfg = SieConfig::new();
        assert_eq!(cfg.api_base(), "https://sie.example.test/v1");
        assert_eq!(cfg.query(), vec![(TOKEN_PARAM, "test-token-123")]);
    }

    #[test]
    #[serial(env)]
    fn config_defaults_base_url() {
        let _token = EnvGuard::set("BANXICO_API_TOKEN", "t");
        let _base = EnvGuard::remove("SIE_BASE_URL");

        let cfg = SieConfig::new();
        assert_eq!(cfg.api_base(), SIE_DEFAULT_BASE);
    }

    #[test]
    #[serial(env)]
    fn validate_auth_missing_token() {
        let _token = EnvGuard::remove("BANXICO_API_TOKEN");

        let cfg = SieConfig::new();
        assert!(!cfg.has_token());
        assert!(cfg.validate_auth().is_err());
    }

    #[test]
    fn builder_methods() {
        let cfg = SieConfig::new()
            .with_api_base("https://sie.test/v1")
            .with_token("my-token");

        assert_eq!(cfg.api_base(), "https://sie.test/v1");
        assert!(cfg.has_token());
        assert!(cfg.validate_auth().is_ok());
    }

    #[test]
    fn url_joins_base_and_path() {
        let cfg = SieConfig::new().with_api_base("https://sie.test/v1/");
        assert_eq!(
            cfg.url("/series/SF63528/datos"),
            "https://sie.test/v1/series/SF63528/datos"
        );
    }

    #[test]
    fn debug_output_redacts_token() {
        let cfg = SieConfig::new().with_token("super-secret-token-12345");
        let debug_str = format!("{cfg:?}");

        assert!(
            !debug_str.contains("super-secret-token-12345"),
            "Debug output should not contain the token"
        );
        assert!(
            debug_str.contains("[REDACTED]"),
            "Debug output should contain '[REDACTED]', got: {debug_str}"
        );
    }

    #[test]
    fn validate_auth_rejects_empty_or_whitespace() {
        let cfg = SieConfig::new().with_token("");
        assert!(cfg.validate_auth().is_err());

        let cfg = SieConfig::new().with_token("   ");
        assert!(cfg.validate_auth().is_err());

        let cfg = SieConfig::new().with_token("  valid-token  ");
        assert!(cfg.validate_auth().is_ok());
    }

    #[test]
    #[serial(env)]
    fn config_trims_whitespace_padded_env_token() {
        let _token = EnvGuard::set("BANXICO_API_TOKEN", "  trimmed-token  \n");
        let _base = EnvGuard::remove("SIE_BASE_URL");

        let cfg = SieConfig::new();
        assert!(cfg.validate_auth().is_ok());
        assert_eq!(cfg.query(), vec![(TOKEN_PARAM, "trimmed-token")]);
    }
}
