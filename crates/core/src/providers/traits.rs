use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::chart::PriceBucket;
use crate::models::month::MonthFilter;
use crate::models::statistics::StatisticsSummary;
use crate::models::transaction::{TransactionPage, TransactionQuery};

/// Read-only access to the products API.
///
/// The dashboard only ever talks to the server through this trait, so the
/// HTTP client can be swapped for a mock in tests.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Human-readable name of this API backend (for logs).
    fn name(&self) -> &str;

    /// One page of transactions matching the query.
    async fn fetch_transactions(
        &self,
        query: &TransactionQuery,
    ) -> Result<TransactionPage, CoreError>;

    /// Item counts per price range for a month (or all months).
    async fn fetch_bar_chart(&self, month: MonthFilter) -> Result<Vec<PriceBucket>, CoreError>;

    /// Sale totals for a month (or all months).
    async fn fetch_statistics(&self, month: MonthFilter) -> Result<StatisticsSummary, CoreError>;
}
