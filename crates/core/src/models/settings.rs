use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::filter::{FilterState, DEFAULT_PER_PAGE, DEFAULT_TRANSACTIONS_MONTH};
use crate::models::month::parse_month_filter;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/products";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User-configurable settings, read from an optional TOML file.
///
/// Every key may be omitted; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL the three endpoints hang off (e.g., "http://localhost:5000/api/products").
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Initial page size of the transactions table.
    pub per_page: u32,

    /// Initial month filters. Empty string means all months.
    pub month_transactions: String,
    pub month_statistics: String,
    pub month_bar_chart: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            per_page: DEFAULT_PER_PAGE,
            month_transactions: DEFAULT_TRANSACTIONS_MONTH.name().to_string(),
            month_statistics: String::new(),
            month_bar_chart: String::new(),
        }
    }
}

impl Settings {
    /// Read and validate settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("Cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CoreError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(CoreError::Config("api_base_url must not be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "api_base_url must start with http:// or https://, got {url}"
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::Config("request_timeout_secs must be at least 1".into()));
        }
        if self.per_page == 0 {
            return Err(CoreError::Config("per_page must be at least 1".into()));
        }
        self.initial_filters().map(|_| ())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Starting filter state: page 1, empty search, months and page size from settings.
    pub fn initial_filters(&self) -> Result<FilterState, CoreError> {
        let month = |field: &str, value: &str| {
            parse_month_filter(value).map_err(|e| CoreError::Config(format!("{field}: {e}")))
        };
        Ok(FilterState {
            month_transactions: month("month_transactions", &self.month_transactions)?,
            month_statistics: month("month_statistics", &self.month_statistics)?,
            month_bar_chart: month("month_bar_chart", &self.month_bar_chart)?,
            per_page: self.per_page.max(1),
            ..FilterState::default()
        })
    }
}
