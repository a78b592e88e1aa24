use super::models::{ItemRow, ItemSheet};
use crate::Item;

/// Converts items into the exported sheet layout.
pub struct ItemExporter;

impl ItemExporter {
    pub fn export_items(items: &[Item]) -> ItemSheet {
        let rows = items
            .iter()
            .map(|item| ItemRow {
                text: item.text.clone(),
            })
            .collect();
        ItemSheet::from_rows(rows)
    }
}
