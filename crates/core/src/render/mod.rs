//! Pure rendering of dashboard state to text.

pub mod chart;
pub mod month;
pub mod pagination;
pub mod statistics;
pub mod table;

use crate::models::month::month_label;
use month::Section;
use crate::Dashboard;

/// Draw the whole dashboard: transactions, statistics, price-range chart.
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let filters = dashboard.filters();
    let sections = [
        "Dashboard".to_string(),
        "── Transactions ──".to_string(),
        format!(
            "{}: {}   Search by Title: {}",
            Section::Transactions.title(),
            month_label(filters.month_transactions),
            filters.search
        ),
        table::render_table(dashboard.transactions()),
        pagination::render_pagination(filters),
        "── Statistics ──".to_string(),
        format!(
            "{}: {}",
            Section::Statistics.title(),
            month_label(filters.month_statistics)
        ),
        statistics::render_statistics(dashboard.statistics()),
        "── Price Range Bar Chart ──".to_string(),
        format!(
            "{}: {}",
            Section::BarChart.title(),
            month_label(filters.month_bar_chart)
        ),
        chart::render_chart(dashboard.bar_chart(), chart::DEFAULT_BAR_WIDTH),
    ];
    sections.join("\n")
}
