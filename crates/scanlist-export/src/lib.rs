pub mod error;
pub mod notice;
pub mod payload;
pub mod permission;
pub mod pipeline;
pub mod share;
pub mod storage;
pub mod writer;
pub mod xlsx;

pub use error::ExportError;
pub use notice::{Notice, NoticeLevel};
pub use payload::SpreadsheetPayload;
pub use permission::{PermissionGate, PermissionRationale, PermissionStatus, StaticPermission};
pub use pipeline::{ExportOutcome, ExportPipeline, ExportReport, ExportSettings, FileNamer};
pub use share::{NoShare, ShareTarget, SystemShare};
pub use storage::{Destination, StorageLayout};
pub use writer::AtomicWriter;
pub use xlsx::XlsxWorkbook;
