pub mod export;
pub mod item;
pub mod store;

pub use export::{ItemExporter, ItemRow, ItemSheet};
pub use item::{Item, ItemId};
pub use store::ItemStore;
