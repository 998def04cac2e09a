use log::error;

use crate::errors::CoreError;
use crate::models::transaction::{TransactionQuery, TransactionRecord};
use crate::providers::traits::DashboardApi;

/// Fetches one page of transaction records for the table.
pub struct TransactionService;

impl TransactionService {
    pub fn new() -> Self {
        Self
    }

    /// Query the transactions endpoint. A response without a `transactions`
    /// array yields an empty list. Failures are logged and returned.
    pub async fn fetch(
        &self,
        api: &dyn DashboardApi,
        query: &TransactionQuery,
    ) -> Result<Vec<TransactionRecord>, CoreError> {
        api.fetch_transactions(query)
            .await
            .map(|page| page.transactions)
            .inspect_err(|e| error!("Error fetching transactions: {e}"))
    }
}

impl Default for TransactionService {
    fn default() -> Self {
        Self::new()
    }
}
