use crate::models::filter::FilterState;
use crate::models::month::{month_options, MonthFilter};

/// The three dashboard sections that carry their own month selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Transactions,
    Statistics,
    BarChart,
}

impl Section {
    /// Label shown in front of the section's selector.
    pub fn title(self) -> &'static str {
        match self {
            Section::Transactions => "Filter Transactions by Month",
            Section::Statistics => "Filter Statistics by Month",
            Section::BarChart => "Filter Bar Chart by Month",
        }
    }

    /// The month currently selected for this section.
    pub fn current(self, filters: &FilterState) -> MonthFilter {
        match self {
            Section::Transactions => filters.month_transactions,
            Section::Statistics => filters.month_statistics,
            Section::BarChart => filters.month_bar_chart,
        }
    }
}

/// Every option of a section's month selector, one per line, with the
/// current selection marked `*`.
pub fn render_month_selector(section: Section, filters: &FilterState) -> String {
    let current = section.current(filters);
    let mut out = format!("{}:", section.title());
    for option in month_options() {
        let marker = if option.value == current { '*' } else { ' ' };
        out.push_str(&format!("\n  {marker} {}", option.label));
    }
    out
}
