use chrono::Month;

use super::month::MonthFilter;
use super::transaction::TransactionQuery;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_TRANSACTIONS_MONTH: Month = Month::March;

/// Snapshot of every user-controlled query parameter.
///
/// The three month selectors are independent of each other. Nothing ties
/// `page` to the size of the result set: the total record count is never
/// known locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub month_transactions: MonthFilter,
    pub month_bar_chart: MonthFilter,
    pub month_statistics: MonthFilter,
    pub search: String,
    /// Always >= 1
    pub page: u32,
    /// Always >= 1
    pub per_page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            month_transactions: Some(DEFAULT_TRANSACTIONS_MONTH),
            month_bar_chart: None,
            month_statistics: None,
            search: String::new(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// A single user edit to the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetMonthTransactions(MonthFilter),
    SetMonthBarChart(MonthFilter),
    SetMonthStatistics(MonthFilter),
    SetSearch(String),
    SetPage(u32),
    SetPerPage(u32),
    PreviousPage,
    NextPage,
}

impl FilterState {
    /// Return the state after `action`. Exactly one field may differ from `self`.
    ///
    /// Month and search edits keep the current page.
    #[must_use]
    pub fn apply(&self, action: FilterAction) -> FilterState {
        let mut next = self.clone();
        match action {
            FilterAction::SetMonthTransactions(month) => next.month_transactions = month,
            FilterAction::SetMonthBarChart(month) => next.month_bar_chart = month,
            FilterAction::SetMonthStatistics(month) => next.month_statistics = month,
            FilterAction::SetSearch(search) => next.search = search,
            FilterAction::SetPage(page) => next.page = page.max(1),
            FilterAction::SetPerPage(per_page) => next.per_page = per_page.max(1),
            FilterAction::PreviousPage => next.page = self.page.saturating_sub(1).max(1),
            FilterAction::NextPage => next.page = self.page.saturating_add(1),
        }
        next
    }

    /// Parameters for the transactions endpoint.
    pub fn transaction_query(&self) -> TransactionQuery {
        TransactionQuery {
            page: self.page,
            per_page: self.per_page,
            month: self.month_transactions,
            search: self.search.clone(),
        }
    }
}
