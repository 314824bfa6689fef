//! Response types shared across SIE series endpoints.
//!
//! Field names follow the Spanish wire format of the SIE API
//! (`idSerie`, `titulo`, `datos`, ...); every field is optional or
//! defaulted because the service omits keys freely.

use serde::{Deserialize, Serialize};

/// Top-level response: every SIE endpoint wraps its payload in a `bmx` envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeriesResponse {
    /// Envelope holding the series list; absent on degenerate responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmx: Option<Envelope>,
}

/// The `bmx` envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope {
    /// Series returned by the request
    #[serde(default)]
    pub series: Vec<Series>,
}

/// One named time series with optional metadata and ordered observations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Series {
    /// Series identifier (e.g. `SF63528`)
    #[serde(rename = "idSerie", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable series title
    #[serde(rename = "titulo", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Measurement unit
    #[serde(rename = "unidad", default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// First available observation date
    #[serde(
        rename = "fechaInicio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<String>,
    /// Last available observation date
    #[serde(rename = "fechaFin", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Publication frequency (daily, monthly, ...)
    #[serde(
        rename = "periodicidad",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub frequency: Option<String>,
    /// Figure type (flows, stocks, index, ...)
    #[serde(rename = "cifra", default, skip_serializing_if = "Option::is_none")]
    pub figure_type: Option<String>,
    /// Observations in chronological ascending order as delivered
    #[serde(rename = "datos", default)]
    pub observations: Vec<Observation>,
}

/// One dated value within a series
///
/// Dates are opaque strings, never parsed as calendar types. Values are
/// strings too; the service uses `"N/A"` for gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date as delivered by the service
    #[serde(rename = "fecha", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Observation value, possibly `"N/A"`
    #[serde(rename = "dato", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
