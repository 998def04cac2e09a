use serde::{Deserialize, Serialize};

use super::month::{month_param, MonthFilter};

/// A single product transaction as returned by the transactions endpoint.
///
/// Snapshot from the server; never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    pub sold: bool,
    /// Product image URL
    #[serde(default)]
    pub image: String,
}

impl TransactionRecord {
    /// Label for the sold column.
    pub fn sold_label(&self) -> &'static str {
        if self.sold {
            "Sold"
        } else {
            "Not Sold"
        }
    }
}

/// Envelope of the transactions endpoint. A missing `transactions` key is
/// treated as an empty page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

/// Parameters of one transactions query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    pub page: u32,
    pub per_page: u32,
    pub month: MonthFilter,
    pub search: String,
}

impl TransactionQuery {
    /// Query-string pairs in the order the endpoint documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
            ("month", month_param(self.month)),
            ("search", self.search.clone()),
        ]
    }
}
