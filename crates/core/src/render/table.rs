use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::models::transaction::TransactionRecord;

pub const COLUMNS: [&str; 7] = ["ID", "Title", "Description", "Price", "Category", "Sold", "Image"];
pub const EMPTY_MESSAGE: &str = "Record not found";

/// Body of the transactions table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// One row of cells per record, in response order.
    Rows(Vec<[String; 7]>),
    /// A single cell spanning `colspan` columns.
    Placeholder { text: &'static str, colspan: usize },
}

/// What the transactions table shows, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub body: TableBody,
}

impl TableView {
    pub fn from_records(records: &[TransactionRecord]) -> Self {
        let body = if records.is_empty() {
            TableBody::Placeholder {
                text: EMPTY_MESSAGE,
                colspan: COLUMNS.len(),
            }
        } else {
            TableBody::Rows(records.iter().map(record_cells).collect())
        };
        Self { body }
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(COLUMNS.to_vec());
        match &self.body {
            TableBody::Rows(rows) => {
                for row in rows {
                    table.add_row(row.to_vec());
                }
            }
            // comfy-table has no column spans; the message sits in the first cell
            TableBody::Placeholder { text, .. } => {
                table.add_row(vec![*text]);
            }
        }
        table
    }
}

fn record_cells(record: &TransactionRecord) -> [String; 7] {
    [
        record.id.to_string(),
        record.title.clone(),
        record.description.clone(),
        record.price.to_string(),
        record.category.clone(),
        record.sold_label().to_string(),
        record.image.clone(),
    ]
}

/// Draw the transactions table.
pub fn render_table(records: &[TransactionRecord]) -> String {
    TableView::from_records(records).to_table().to_string()
}
