//! API resources exposed by the client

/// Time-series data and metadata endpoints
pub mod series;

pub use series::SeriesResource;
