//! Post-fetch truncation of series observations.

use sie_async::types::SeriesResponse;

/// Keep only the trailing `limit` observations of every series.
///
/// `None` and `Some(0)` are no-ops. Observations arrive in chronological
/// ascending order, so the suffix is the most recent data.
pub fn keep_recent(response: &mut SeriesResponse, limit: Option<usize>) {
    let Some(limit) = limit.filter(|l| *l > 0) else {
        return;
    };
    let Some(envelope) = response.bmx.as_mut() else {
        return;
    };
    for series in &mut envelope.series {
        let len = series.observations.len();
        if len > limit {
            series.observations.drain(..len - limit);
        }
    }
}
