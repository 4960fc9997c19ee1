use serde::{Deserialize, Serialize};

use super::promotion::{display_value, Promotion};

/// Column titles of the search results table, in display order.
pub const RESULT_COLUMNS: [&str; 5] = ["ID", "ProductID", "Category", "Available", "Discount"];

/// Read-only snapshot of the last successful search, already in display form.
///
/// Rows keep the order the service returned them in.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub rows: Vec<[String; 5]>,
}

impl SearchResults {
    pub fn from_records(records: &[Promotion]) -> Self {
        Self {
            rows: records.iter().map(result_row).collect(),
        }
    }
}

fn result_row(record: &Promotion) -> [String; 5] {
    [
        record.id.to_string(),
        record.productid.clone(),
        record.category.clone(),
        display_value(&record.available),
        display_value(&record.discount),
    ]
}
