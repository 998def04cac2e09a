pub mod errors;
pub mod models;
pub mod providers;
pub mod render;
pub mod services;

use log::debug;

use errors::CoreError;
use models::{
    chart::ChartSeries,
    fetch::{FetchOutcome, FetchPlan, Stamped},
    filter::{FilterAction, FilterState},
    settings::Settings,
    slot::{FetchSlot, SlotUpdate},
    statistics::StatisticsSummary,
    transaction::TransactionRecord,
};

/// Main entry point for the Sales Dashboard core library.
/// Holds the filter state and the three pieces of fetched display state.
///
/// The owner dispatches filter actions, starts a fetch cycle whenever the
/// filters change, and feeds outcomes back in as they resolve. Rendering
/// is a pure function of this struct.
#[must_use]
pub struct Dashboard {
    filters: FilterState,
    transactions: FetchSlot<Vec<TransactionRecord>>,
    statistics: FetchSlot<StatisticsSummary>,
    bar_chart: FetchSlot<ChartSeries>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("filters", &self.filters)
            .field("transactions", &self.transactions.status())
            .field("statistics", &self.statistics.status())
            .field("bar_chart", &self.bar_chart.status())
            .finish()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}

impl Dashboard {
    /// Create a dashboard with nothing fetched yet.
    pub fn new(filters: FilterState) -> Self {
        Self {
            filters,
            transactions: FetchSlot::new(),
            statistics: FetchSlot::new(),
            bar_chart: FetchSlot::new(),
        }
    }

    /// Create a dashboard starting from the filters in `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, CoreError> {
        Ok(Self::new(settings.initial_filters()?))
    }

    // ── Filters ─────────────────────────────────────────────────────

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Apply a filter edit. Returns `true` when the filters actually changed,
    /// i.e. when a new fetch cycle is due.
    pub fn dispatch(&mut self, action: FilterAction) -> bool {
        let next = self.filters.apply(action);
        if next == self.filters {
            return false;
        }
        self.filters = next;
        true
    }

    // ── Fetch cycle ─────────────────────────────────────────────────

    /// Stamp a new generation on each slot and return the requests to issue.
    pub fn begin_cycle(&mut self) -> FetchPlan {
        FetchPlan {
            transactions: Stamped {
                generation: self.transactions.issue(),
                request: self.filters.transaction_query(),
            },
            statistics: Stamped {
                generation: self.statistics.issue(),
                request: self.filters.month_statistics,
            },
            bar_chart: Stamped {
                generation: self.bar_chart.issue(),
                request: self.filters.month_bar_chart,
            },
        }
    }

    /// Store a fetcher's outcome in its own slot. Other slots are untouched.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> SlotUpdate {
        let endpoint = outcome.endpoint();
        let generation = outcome.generation();
        let succeeded = outcome.is_ok();
        let update = match outcome {
            FetchOutcome::Transactions { generation, result } => {
                self.transactions.accept(generation, result)
            }
            FetchOutcome::Statistics { generation, result } => {
                self.statistics.accept(generation, result)
            }
            FetchOutcome::BarChart { generation, result } => {
                self.bar_chart.accept(generation, result)
            }
        };
        match update {
            SlotUpdate::Discarded => debug!(
                "Discarded superseded {endpoint} response #{generation} (latest #{})",
                self.latest_generation(endpoint)
            ),
            _ => debug!("Applied {endpoint} response #{generation} (ok: {succeeded})"),
        }
        update
    }

    fn latest_generation(&self, endpoint: &str) -> u64 {
        match endpoint {
            "transactions" => self.transactions.latest_generation(),
            "statistics" => self.statistics.latest_generation(),
            _ => self.bar_chart.latest_generation(),
        }
    }

    // ── Display state ───────────────────────────────────────────────

    /// Records currently shown in the table (empty before the first fetch).
    #[must_use]
    pub fn transactions(&self) -> &[TransactionRecord] {
        self.transactions
            .value()
            .map(|v| v.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn transactions_slot(&self) -> &FetchSlot<Vec<TransactionRecord>> {
        &self.transactions
    }

    #[must_use]
    pub fn statistics(&self) -> Option<&StatisticsSummary> {
        self.statistics.value()
    }

    #[must_use]
    pub fn statistics_slot(&self) -> &FetchSlot<StatisticsSummary> {
        &self.statistics
    }

    #[must_use]
    pub fn bar_chart(&self) -> Option<&ChartSeries> {
        self.bar_chart.value()
    }

    #[must_use]
    pub fn bar_chart_slot(&self) -> &FetchSlot<ChartSeries> {
        &self.bar_chart
    }

    /// Draw the current state as text.
    #[must_use]
    pub fn render(&self) -> String {
        render::render_dashboard(self)
    }
}
