use chrono::Month;

use crate::errors::CoreError;

/// A month selector value. `None` means "All Months".
pub type MonthFilter = Option<Month>;

/// Label shown for the unset month filter.
pub const ALL_MONTHS_LABEL: &str = "All Months";

/// Calendar order, January first.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// One entry of a month drop-down: the value sent to the API and the
/// label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthOption {
    pub value: MonthFilter,
    pub label: &'static str,
}

/// The options every month selector offers: "All Months" followed by the
/// twelve calendar months.
pub fn month_options() -> Vec<MonthOption> {
    std::iter::once(MonthOption {
        value: None,
        label: ALL_MONTHS_LABEL,
    })
    .chain(MONTHS.iter().map(|m| MonthOption {
        value: Some(*m),
        label: m.name(),
    }))
    .collect()
}

/// Parse a user-supplied month filter.
///
/// Accepts full English names and three-letter abbreviations in any case.
/// The empty string, `all` and `All Months` clear the filter.
pub fn parse_month_filter(input: &str) -> Result<MonthFilter, CoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("all")
        || trimmed.eq_ignore_ascii_case(ALL_MONTHS_LABEL)
    {
        return Ok(None);
    }
    trimmed
        .parse::<Month>()
        .map(Some)
        .map_err(|_| CoreError::InvalidInput(format!("Unknown month: {trimmed}")))
}

/// Value of the `month` query parameter: the month name, or empty for all months.
pub fn month_param(filter: MonthFilter) -> String {
    filter.map(|m| m.name().to_string()).unwrap_or_default()
}

/// Display label for a month filter.
pub fn month_label(filter: MonthFilter) -> &'static str {
    filter.map(|m| m.name()).unwrap_or(ALL_MONTHS_LABEL)
}
