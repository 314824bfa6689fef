//! Tool input types.
//!
//! Defaults are supplied through serde so an omitted argument behaves the
//! same whether the call comes over MCP or from native code; an explicit
//! `null` limit disables truncation entirely.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::USD_MXN_SERIES;

fn default_series_id() -> String {
    USD_MXN_SERIES.to_string()
}

fn default_limit_30() -> Option<u32> {
    Some(30)
}

fn default_limit_12() -> Option<u32> {
    Some(12)
}

fn default_limit_24() -> Option<u32> {
    Some(24)
}

fn default_inflation_type() -> String {
    "monthly".to_string()
}

/// Input for tools returning a recent window of a fixed series.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecentDataInput {
    /// Maximum number of recent data points to return (default: 30)
    #[serde(default = "default_limit_30")]
    pub limit: Option<u32>,
}

/// Input for the unemployment tool (two years of monthly data by default).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UnemploymentInput {
    /// Maximum number of recent data points to return (default: 24)
    #[serde(default = "default_limit_24")]
    pub limit: Option<u32>,
}

/// Input for the inflation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InflationInput {
    /// Type of inflation data: 'monthly', 'accumulated' or 'annual'
    #[serde(default = "default_inflation_type")]
    pub inflation_type: String,
    /// Maximum number of recent data points to return (default: 12)
    #[serde(default = "default_limit_12")]
    pub limit: Option<u32>,
}

/// Input for the series metadata tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SeriesMetadataInput {
    /// The series ID to get metadata for (default: SF63528 for USD/MXN)
    #[serde(default = "default_series_id")]
    pub series_id: String,
}

/// Input for the date-range tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DateRangeInput {
    /// Start date in YYYY-MM-DD format, passed to the API as-is
    pub start_date: String,
    /// End date in YYYY-MM-DD format, passed to the API as-is
    pub end_date: String,
    /// The series ID (default: SF63528 for USD/MXN)
    #[serde(default = "default_series_id")]
    pub series_id: String,
}
