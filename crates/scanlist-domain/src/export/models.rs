//! Export data models.

use serde::{Deserialize, Serialize};

pub const SHEET_NAME: &str = "Items";
pub const TEXT_COLUMN: &str = "Text";

/// A single exported record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRow {
    #[serde(rename = "Text")]
    pub text: String,
}

/// One worksheet worth of records with its column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<ItemRow>,
}

impl ItemSheet {
    /// The "Items" sheet with its header but no rows.
    pub fn empty() -> Self {
        Self {
            name: SHEET_NAME.to_string(),
            headers: vec![TEXT_COLUMN.to_string()],
            rows: Vec::new(),
        }
    }

    pub fn from_rows(rows: Vec<ItemRow>) -> Self {
        Self {
            rows,
            ..Self::empty()
        }
    }

    /// Cell values of a row, in header order.
    pub fn row_values(row: &ItemRow) -> Vec<&str> {
        vec![row.text.as_str()]
    }
}
