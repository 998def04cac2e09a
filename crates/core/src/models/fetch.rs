use crate::errors::CoreError;

use super::chart::ChartSeries;
use super::month::MonthFilter;
use super::statistics::StatisticsSummary;
use super::transaction::{TransactionQuery, TransactionRecord};

/// A request paired with the generation it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamped<T> {
    pub generation: u64,
    pub request: T,
}

/// The three requests of one fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    pub transactions: Stamped<TransactionQuery>,
    pub statistics: Stamped<MonthFilter>,
    pub bar_chart: Stamped<MonthFilter>,
}

/// Result of one fetcher, tagged with its generation.
#[derive(Debug)]
pub enum FetchOutcome {
    Transactions {
        generation: u64,
        result: Result<Vec<TransactionRecord>, CoreError>,
    },
    Statistics {
        generation: u64,
        result: Result<StatisticsSummary, CoreError>,
    },
    BarChart {
        generation: u64,
        result: Result<ChartSeries, CoreError>,
    },
}

impl FetchOutcome {
    pub fn generation(&self) -> u64 {
        match self {
            FetchOutcome::Transactions { generation, .. }
            | FetchOutcome::Statistics { generation, .. }
            | FetchOutcome::BarChart { generation, .. } => *generation,
        }
    }

    /// Short name of the endpoint this outcome came from.
    pub fn endpoint(&self) -> &'static str {
        match self {
            FetchOutcome::Transactions { .. } => "transactions",
            FetchOutcome::Statistics { .. } => "statistics",
            FetchOutcome::BarChart { .. } => "barChart",
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            FetchOutcome::Transactions { result, .. } => result.is_ok(),
            FetchOutcome::Statistics { result, .. } => result.is_ok(),
            FetchOutcome::BarChart { result, .. } => result.is_ok(),
        }
    }
}
