use log::{debug, info};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

use crate::models::fetch::{FetchOutcome, FetchPlan, Stamped};
use crate::models::month::MonthFilter;
use crate::models::transaction::TransactionQuery;
use crate::providers::traits::DashboardApi;
use crate::services::chart_service::ChartService;
use crate::services::statistics_service::StatisticsService;
use crate::services::transaction_service::TransactionService;

/// Runs the three fetchers of a fetch cycle against one API.
///
/// The fetchers are independent: they run concurrently, none waits on
/// another, and each produces its own `FetchOutcome`.
pub struct DashboardFetcher {
    api: Arc<dyn DashboardApi>,
    transaction_service: TransactionService,
    statistics_service: StatisticsService,
    chart_service: ChartService,
}

impl DashboardFetcher {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            transaction_service: TransactionService::new(),
            statistics_service: StatisticsService::new(),
            chart_service: ChartService::new(),
        }
    }

    pub fn api_name(&self) -> &str {
        self.api.name()
    }

    pub async fn fetch_transactions(&self, stamped: Stamped<TransactionQuery>) -> FetchOutcome {
        let result = self
            .transaction_service
            .fetch(self.api.as_ref(), &stamped.request)
            .await;
        FetchOutcome::Transactions {
            generation: stamped.generation,
            result,
        }
    }

    pub async fn fetch_statistics(&self, stamped: Stamped<MonthFilter>) -> FetchOutcome {
        let result = self
            .statistics_service
            .fetch(self.api.as_ref(), stamped.request)
            .await;
        FetchOutcome::Statistics {
            generation: stamped.generation,
            result,
        }
    }

    pub async fn fetch_bar_chart(&self, stamped: Stamped<MonthFilter>) -> FetchOutcome {
        let result = self
            .chart_service
            .fetch(self.api.as_ref(), stamped.request)
            .await;
        FetchOutcome::BarChart {
            generation: stamped.generation,
            result,
        }
    }

    /// Run a cycle, sending each outcome to `sink` as soon as it resolves.
    pub async fn run_cycle(&self, plan: FetchPlan, sink: &UnboundedSender<FetchOutcome>) {
        info!(
            "Fetch cycle via {} (transactions #{}, statistics #{}, bar chart #{})",
            self.api_name(),
            plan.transactions.generation,
            plan.statistics.generation,
            plan.bar_chart.generation
        );
        let FetchPlan {
            transactions,
            statistics,
            bar_chart,
        } = plan;
        let send = |outcome: FetchOutcome| {
            if sink.send(outcome).is_err() {
                debug!("Outcome receiver closed; dropping result");
            }
        };
        tokio::join!(
            async { send(self.fetch_transactions(transactions).await) },
            async { send(self.fetch_statistics(statistics).await) },
            async { send(self.fetch_bar_chart(bar_chart).await) },
        );
    }

    /// Run a cycle and return all three outcomes once every fetcher is done.
    pub async fn fetch_cycle(&self, plan: FetchPlan) -> [FetchOutcome; 3] {
        let (transactions, statistics, bar_chart) = tokio::join!(
            self.fetch_transactions(plan.transactions),
            self.fetch_statistics(plan.statistics),
            self.fetch_bar_chart(plan.bar_chart),
        );
        [transactions, statistics, bar_chart]
    }
}
