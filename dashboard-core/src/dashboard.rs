//! Fan-out/fan-in aggregation of the three endpoints into a [`DashboardCity`].

use tracing::{debug, error};

use crate::{
    error::DashboardError,
    model::{DashboardCity, Resource},
    source::TravelSource,
};

/// Fetch all three lists concurrently and combine their first entries.
///
/// Fails as soon as any request fails, or with [`DashboardError::IncompleteData`]
/// if any list comes back empty.
pub async fn try_dashboard(
    source: &dyn TravelSource,
    query: &str,
) -> Result<DashboardCity, DashboardError> {
    let (destinations, weathers, airports) = tokio::try_join!(
        source.destinations(query),
        source.weathers(query),
        source.airports(query),
    )?;
    debug!(?destinations, ?weathers, ?airports, "raw travel data");

    let destination = destinations
        .into_iter()
        .next()
        .ok_or(DashboardError::IncompleteData { missing: Resource::Destinations })?;
    let weather = weathers
        .into_iter()
        .next()
        .ok_or(DashboardError::IncompleteData { missing: Resource::Weathers })?;
    let airport = airports
        .into_iter()
        .next()
        .ok_or(DashboardError::IncompleteData { missing: Resource::Airports })?;

    Ok(DashboardCity::from_parts(destination, weather, airport))
}

/// Like [`try_dashboard`], but every failure is logged and collapsed to `None`.
pub async fn get_dashboard_data(source: &dyn TravelSource, query: &str) -> Option<DashboardCity> {
    match try_dashboard(source, query).await {
        Ok(city) => Some(city),
        Err(err) => {
            error!(query, "Failed to fetch dashboard data: {err}");
            None
        }
    }
}
