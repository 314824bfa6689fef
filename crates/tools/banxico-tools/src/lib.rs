//! Banxico economic data tools.
//!
//! Every data tool runs the same pipeline: check the credential, issue one
//! SIE request, truncate to the requested window, format for the calling
//! model. All failure classes come back as plain strings so the agent host
//! always receives renderable text.

pub mod inputs;
pub mod render;
pub mod truncate;

use std::future::Future;

use schemars::JsonSchema;
use serde::Serialize;
use sie_async::types::SeriesResponse;
use sie_async::{Client, SieConfig, SieError};

/// USD/MXN FIX exchange rate series
pub const USD_MXN_SERIES: &str = "SF63528";
/// UDIS (investment units) value series
pub const UDIS_SERIES: &str = "SP68257";
/// CETES 28-day interest rate series
pub const CETES_28_SERIES: &str = "SF282";
/// International reserve assets series
pub const RESERVES_SERIES: &str = "SF308843";
/// National unemployment rate series
pub const UNEMPLOYMENT_SERIES: &str = "SL1";

/// Message returned by every data tool when no credential is configured
pub const MISSING_TOKEN_MSG: &str =
    "Error: BANXICO_API_TOKEN environment variable not set. Please configure your API token.";

const CHECK_CONNECTION: &str = "Please check your API token and network connection.";

fn inflation_series_id(inflation_type: &str) -> Option<&'static str> {
    match inflation_type {
        "monthly" => Some("SP30577"),
        "accumulated" => Some("SP30579"),
        "annual" => Some("SP30578"),
        _ => None,
    }
}

/// Constant payload returned by the health-check tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct HealthStatus {
    /// Always `"healthy"` while the process is serving
    pub status: String,
}

/// The tool set, holding the configuration injected at process entry.
///
/// Each invocation builds its own [`Client`]; there is no state shared
/// between calls beyond the immutable configuration.
#[derive(Debug, Clone)]
pub struct BanxicoTools {
    config: SieConfig,
}

impl Default for BanxicoTools {
    fn default() -> Self {
        Self::new()
    }
}

impl BanxicoTools {
    /// Build a tool set from environment-derived configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SieConfig::new())
    }

    /// Build a tool set from an explicit configuration.
    #[must_use]
    pub fn with_config(config: SieConfig) -> Self {
        Self { config }
    }

    fn client(&self) -> Client<SieConfig> {
        Client::with_config(self.config.clone())
    }

    /// Fetch -> truncate -> format, collapsing any client error to the
    /// tool's fixed failure string.
    async fn run<F>(
        &self,
        fetch: F,
        limit: Option<u32>,
        render: fn(&SeriesResponse) -> String,
        failure: String,
    ) -> String
    where
        F: Future<Output = Result<SeriesResponse, SieError>>,
    {
        match fetch.await {
            Ok(mut response) => {
                truncate::keep_recent(&mut response, limit.map(|l| l as usize));
                render(&response)
            }
            // The client already logged the failure with its detail
            Err(_) => failure,
        }
    }

    /// Latest USD/MXN exchange rate.
    pub async fn latest_usd_mxn_rate(&self) -> String {
        if !self.config.has_token() {
            return MISSING_TOKEN_MSG.to_string();
        }
        let client = self.client();
        self.run(
            client.series().latest(USD_MXN_SERIES),
            None,
            render::exchange_rate,
            format!("Failed to retrieve exchange rate data. {CHECK_CONNECTION}"),
        )
        .await
    }

    /// Historical USD/MXN exchange rates, most recent `limit` points.
    pub async fn usd_mxn_historical_data(&self, limit: Option<u32>) -> String {
        if !self.config.has_token() {
            return MISSING_TOKEN_MSG.to_string();
        }
        let client = self.client();
        self.run(
            client.series().data(USD_MXN_SERIES),
            limit,
            render::exchange_rate,
            format!("Failed to retrieve historical exchange rate data. {CHECK_CONNECTION}"),
        )
        .await
    }

    /// Metadata (title, date range, frequency, unit) for any series.
    pub async fn series_metadata(&self, series_id: &str) -> String {
        if !self.config.has_token() {
            return MISSING_TOKEN_MSG.to_string();
        }
        let client = self.client();
        self.run(
            client.series().metadata(series_id),
            None,
            render::metadata,
            format!("Failed to retrieve metadata for series {series_id}. {CHECK_CONNECTION}"),
        )
        .await
    }

    /// Observations for an explicit date range. Dates go to the API as-is.
    pub async fn date_range_data(
        &self,
        start_date: &str,
        end_date: &str,
        series_id: &str,
    ) -> String {
        if !self.config.has_token() {
            return MISSING_TOKEN_MSG.to_string();
        }
        let client = self.client();
        self.run(
            client.series().range(series_id, start_date, end_date),
            None,
            render::exchange_rate,
            format!(
                "Failed to retrieve data for {series_id} from {start_date} to {end_date}. {CHECK_CONNECTION}"
            ),
        )
        .await
    }

    /// Inflation data for one of the three published series.
    pub async fn inflation_data(&self, inflation_type: &str, limit: Option<u32>) -> String {
        if !self.config.has_token() {
            return MISSING_TOKEN_MSG.to_string();
        }
        let Some(series_id) = inflation_series_id(inflation_type) else {
            return format!(
                "Invalid inflation type: {inflation_type}. Available types: monthly, accumulated, annual"
            );
        };
        let client = self.client();
        self.run(
            client.series().data(series_id),
            limit,
            render::inflation,
            format!("Failed to retrieve {inflation_type} inflation data. {CHECK_CONNECTION}"),
        )
        .await
    }

    /// UDIS (investment units) values.
    pub async fn udis_data(&self, limit: Option<u32>) -> String {
        if !self.config.has_token() {
            return MISSING_TOKEN_MSG.to_string();
        }
        let client = self.client();
        self.run(
            client.series().data(UDIS_SERIES),
            limit,
            render::exchange_rate,
            format!("Failed to retrieve UDIS data. {CHECK_CONNECTION}"),
        )
        .await
    }

    /// CETES 28-day interest rates.
    pub async fn cetes_28_data(&self, limit: Option<u32>) -> String {
        if !self.config.has_token() {
            return MISSING_TOKEN_MSG.to_string();
        }
        let client = self.client();
        self.run(
            client.series().data(CETES_28_SERIES),
            limit,
            render::interest_rate,
            format!("Failed to retrieve CETES 28-day data. {CHECK_CONNECTION}"),
        )
        .await
    }

    /// International reserve assets.
    pub async fn reserves_data(&self, limit: Option<u32>) -> String {
        if !self.config.has_token() {
            return MISSING_TOKEN_MSG.to_string();
        }
        let client = self.client();
        self.run(
            client.series().data(RESERVES_SERIES),
            limit,
            render::financial,
            format!("Failed to retrieve Banxico reserve assets data. {CHECK_CONNECTION}"),
        )
        .await
    }

    /// National unemployment rate.
    pub async fn unemployment_data(&self, limit: Option<u32>) -> String {
        if !self.config.has_token() {
            return MISSING_TOKEN_MSG.to_string();
        }
        let client = self.client();
        self.run(
            client.series().data(UNEMPLOYMENT_SERIES),
            limit,
            render::unemployment,
            format!("Failed to retrieve unemployment data. {CHECK_CONNECTION}"),
        )
        .await
    }

    /// Liveness status; never touches the network.
    #[must_use]
    pub fn health_check(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
        }
    }
}
