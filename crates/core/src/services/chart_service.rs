use log::error;

use crate::errors::CoreError;
use crate::models::chart::ChartSeries;
use crate::models::month::MonthFilter;
use crate::providers::traits::DashboardApi;

/// Generates chart-ready series from the price-range endpoint.
///
/// The server does the binning; this service only reshapes the buckets
/// into labels plus one styled dataset.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    pub async fn fetch(
        &self,
        api: &dyn DashboardApi,
        month: MonthFilter,
    ) -> Result<ChartSeries, CoreError> {
        api.fetch_bar_chart(month)
            .await
            .map(|buckets| ChartSeries::from_buckets(&buckets))
            .inspect_err(|e| error!("Error fetching bar chart data: {e}"))
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
