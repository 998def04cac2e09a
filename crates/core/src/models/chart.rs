use serde::{Deserialize, Serialize};

/// Label of the single dataset in a price-range chart.
pub const DATASET_LABEL: &str = "Number of Items";
pub const DATASET_BACKGROUND: &str = "rgba(75, 192, 192, 0.6)";
pub const DATASET_BORDER: &str = "rgba(75, 192, 192, 1)";
pub const DATASET_BORDER_WIDTH: u32 = 1;

/// One price range and the number of items whose price falls in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBucket {
    /// Range label as the server names it (e.g., "0-100", "901-above")
    pub range: String,
    pub count: u64,
}

/// A series of values plus the styling a bar chart needs to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

/// Chart-ready representation of price-bucket data.
///
/// `labels[i]` names the bar whose height is `datasets[k].data[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartSeries {
    /// Build a one-dataset series from server buckets, preserving their order.
    pub fn from_buckets(buckets: &[PriceBucket]) -> Self {
        Self {
            labels: buckets.iter().map(|b| b.range.clone()).collect(),
            datasets: vec![ChartDataset {
                label: DATASET_LABEL.to_string(),
                data: buckets.iter().map(|b| b.count as f64).collect(),
                background_color: DATASET_BACKGROUND.to_string(),
                border_color: DATASET_BORDER.to_string(),
                border_width: DATASET_BORDER_WIDTH,
            }],
        }
    }

    /// The first dataset's values, or an empty slice.
    pub fn primary_data(&self) -> &[f64] {
        self.datasets
            .first()
            .map(|d| d.data.as_slice())
            .unwrap_or_default()
    }

    /// Largest value across all datasets (0.0 when empty).
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .fold(0.0, f64::max)
    }
}
