//! Item export records.
//!
//! Flattens the item list into the tabular shape written to the
//! spreadsheet: one sheet, one `Text` column, one row per item.

pub mod exporter;
pub mod models;

pub use exporter::ItemExporter;
pub use models::{ItemRow, ItemSheet};
