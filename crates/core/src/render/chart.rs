use crate::models::chart::ChartSeries;

pub const LOADING_MESSAGE: &str = "Loading...";
/// Width in characters of the longest bar.
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Horizontal bar chart of the first dataset, or the loading message when
/// no series has arrived yet.
pub fn render_chart(series: Option<&ChartSeries>, bar_width: usize) -> String {
    let Some(series) = series else {
        return LOADING_MESSAGE.to_string();
    };

    let data = series.primary_data();
    let max = series.max_value();
    let label_width = series.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    if let Some(dataset) = series.datasets.first() {
        out.push_str(&dataset.label);
        out.push('\n');
    }
    for (label, value) in series.labels.iter().zip(data.iter().copied()) {
        out.push_str(&format!(
            "{label:>label_width$} │{} {value}\n",
            "█".repeat(bar_length(value, max, bar_width))
        ));
    }
    out.trim_end().to_string()
}

/// Bar length for `value` scaled so that `max` fills `width`.
pub fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 || !value.is_finite() {
        return 0;
    }
    ((value / max) * width as f64).round() as usize
}
