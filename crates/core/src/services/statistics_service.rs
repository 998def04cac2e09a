use log::error;

use crate::errors::CoreError;
use crate::models::month::MonthFilter;
use crate::models::statistics::StatisticsSummary;
use crate::providers::traits::DashboardApi;

/// Fetches sale totals for the statistics panel.
pub struct StatisticsService;

impl StatisticsService {
    pub fn new() -> Self {
        Self
    }

    pub async fn fetch(
        &self,
        api: &dyn DashboardApi,
        month: MonthFilter,
    ) -> Result<StatisticsSummary, CoreError> {
        api.fetch_statistics(month)
            .await
            .inspect_err(|e| error!("Error fetching statistics: {e}"))
    }
}

impl Default for StatisticsService {
    fn default() -> Self {
        Self::new()
    }
}
