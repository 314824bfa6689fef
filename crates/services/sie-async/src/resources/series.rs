use crate::{client::Client, config::Config, error::SieError, types::SeriesResponse};

/// API resource for the `series/{id}` endpoint family
pub struct SeriesResource<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> SeriesResource<'c, C> {
    /// Creates a new series resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Fetch the full observation history for a series
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn data(&self, series_id: &str) -> Result<SeriesResponse, SieError> {
        self.client.get(&format!("series/{series_id}/datos")).await
    }

    /// Fetch the most recent observation for a series
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn latest(&self, series_id: &str) -> Result<SeriesResponse, SieError> {
        self.client
            .get(&format!("series/{series_id}/datos/oportuno"))
            .await
    }

    /// Fetch observations within a date range.
    ///
    /// `start_date` and `end_date` are interpolated into the request path
    /// as-is; the upstream API rejects malformed dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn range(
        &self,
        series_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<SeriesResponse, SieError> {
        self.client
            .get(&format!("series/{series_id}/datos/{start_date}/{end_date}"))
            .await
    }

    /// Fetch series metadata only (no observations)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn metadata(&self, series_id: &str) -> Result<SeriesResponse, SieError> {
        self.client.get(&format!("series/{series_id}")).await
    }
}

// Add accessor to client
impl<C: Config> Client<C> {
    /// Returns the series API resource
    #[must_use]
    pub const fn series(&self) -> SeriesResource<'_, C> {
        SeriesResource::new(self)
    }
}
