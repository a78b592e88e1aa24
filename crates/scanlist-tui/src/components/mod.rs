pub mod item_row;
pub mod notice;
pub mod popup;

pub use item_row::*;
pub use notice::*;
pub use popup::*;
