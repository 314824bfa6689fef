use serde::de::DeserializeOwned;

use crate::{config::Config, error::SieError};

/// SIE API client
///
/// The client is generic over a [`Config`] implementation that provides
/// authentication and API configuration. Each request is a single GET
/// attempt with a fixed User-Agent and a 30 second timeout; failures are
/// reported once, never retried.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::SieConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables for authentication:
    /// - `BANXICO_API_TOKEN` for the API token
    /// - `SIE_BASE_URL` for a custom API base URL
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::SieConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(crate::config::USER_AGENT)
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    pub(crate) async fn get<O>(&self, path: &str) -> Result<O, SieError>
    where
        O: DeserializeOwned,
    {
        self.request(path)
            .await
            .inspect_err(|e| tracing::error!(error = %e, path, "SIE request failed"))
    }

    async fn request<O>(&self, path: &str) -> Result<O, SieError>
    where
        O: DeserializeOwned,
    {
        // Validate auth before any request
        self.config.validate_auth()?;

        let response = self
            .http
            .get(self.config.url(path))
            .query(&self.config.query())
            .send()
            .await
            .map_err(SieError::Reqwest)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(SieError::Reqwest)?;

        if !status.is_success() {
            return Err(crate::error::deserialize_api_error(status, &bytes));
        }

        serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))
    }
}
