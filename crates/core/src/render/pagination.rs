use crate::models::filter::FilterState;

/// `Page 3  [Previous] [Next]  Per Page 10`
pub fn render_pagination(filters: &FilterState) -> String {
    format!(
        "Page {}  [Previous] [Next]  Per Page {}",
        filters.page, filters.per_page
    )
}
