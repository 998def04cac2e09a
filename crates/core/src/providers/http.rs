use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::{redact_query, CoreError};
use crate::models::chart::PriceBucket;
use crate::models::month::{month_param, MonthFilter};
use crate::models::settings::{Settings, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::models::statistics::StatisticsSummary;
use crate::models::transaction::{TransactionPage, TransactionQuery};
use super::traits::DashboardApi;

pub const TRANSACTIONS_PATH: &str = "transactions";
pub const BAR_CHART_PATH: &str = "barChart";
pub const STATISTICS_PATH: &str = "statistics";

/// reqwest-backed client for the products API.
///
/// - **Endpoints**: `/transactions`, `/barChart`, `/statistics` under one base URL
/// - **Method**: GET only, parameters in the query string
/// - Non-2xx responses are errors; so are bodies that do not match the expected shape.
pub struct HttpDashboardApi {
    client: Client,
    base_url: String,
}

impl HttpDashboardApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_timeout(settings.api_base_url.clone(), settings.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint, without query string.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CoreError> {
        let url = self.endpoint_url(path);
        debug!("{}", request_summary(&url, params));

        let resp = self.client.get(&url).query(params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::HttpStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        resp.json::<T>().await.map_err(|e| CoreError::Api {
            endpoint: path.to_string(),
            message: format!("Failed to parse response: {}", redact_query(&e.to_string())),
        })
    }
}

/// `GET <url> [page, search]`: parameter names only, values may hold search text.
fn request_summary(url: &str, params: &[(&str, String)]) -> String {
    let names: Vec<&str> = params.iter().map(|(name, _)| *name).collect();
    format!("GET {url} [{}]", names.join(", "))
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn fetch_transactions(
        &self,
        query: &TransactionQuery,
    ) -> Result<TransactionPage, CoreError> {
        self.get_json(TRANSACTIONS_PATH, &query.query_pairs()).await
    }

    async fn fetch_bar_chart(&self, month: MonthFilter) -> Result<Vec<PriceBucket>, CoreError> {
        self.get_json(BAR_CHART_PATH, &[("month", month_param(month))])
            .await
    }

    async fn fetch_statistics(&self, month: MonthFilter) -> Result<StatisticsSummary, CoreError> {
        self.get_json(STATISTICS_PATH, &[("month", month_param(month))])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_summary_omits_parameter_values() {
        let query = TransactionQuery {
            page: 1,
            per_page: 10,
            month: None,
            search: "private term".into(),
        };
        let summary = request_summary(
            "http://localhost:5000/api/products/transactions",
            &query.query_pairs(),
        );
        assert_eq!(
            summary,
            "GET http://localhost:5000/api/products/transactions [page, perPage, month, search]"
        );
        assert!(!summary.contains("private"));
    }
}
