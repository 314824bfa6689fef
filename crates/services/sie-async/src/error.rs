use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when using the SIE API client
#[derive(Debug, Error)]
pub enum SieError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error returned by the SIE service
    #[error("API error: {0:?}")]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// API error object from the SIE service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// HTTP status code
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Additional detail supplied by the service
    #[serde(default)]
    pub detail: Option<String>,
}

/// SIE error envelope: `{"error": {"mensaje": ..., "detalle": ...}}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    mensaje: Option<String>,
    #[serde(default)]
    detalle: Option<String>,
}

/// Maps a serde deserialization error to a `SieError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> SieError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    SieError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from the response body
///
/// Attempts to parse the SIE error envelope, falling back to a capped
/// text snippet on failure.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> SieError {
    let status_code = Some(status.as_u16());

    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body)
        && let Some(err) = envelope.error
    {
        return SieError::Api(ApiErrorObject {
            status_code,
            message: err.mensaje.unwrap_or_default(),
            detail: err.detalle,
        });
    }

    // Server may return plain text on 5xx; cap body to avoid log/memory bloat
    SieError::Api(ApiErrorObject {
        status_code,
        message: String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned(),
        detail: None,
    })
}
