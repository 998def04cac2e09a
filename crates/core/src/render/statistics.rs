use crate::models::statistics::StatisticsSummary;

/// The three statistics lines. Values are blank until the first successful fetch.
pub fn render_statistics(summary: Option<&StatisticsSummary>) -> String {
    let (sale, sold, not_sold) = match summary {
        Some(s) => (
            s.total_sale_amount.to_string(),
            s.total_sold_items.to_string(),
            s.total_not_sold_items.to_string(),
        ),
        None => Default::default(),
    };
    format!("Total Sale: {sale}\nTotal Sold Item: {sold}\nTotal Not Sold Item: {not_sold}")
}
