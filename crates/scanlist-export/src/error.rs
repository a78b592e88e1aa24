use scanlist_core::ScanlistError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot save file without permission to write to external storage")]
    PermissionDenied,

    #[error("Permission request failed: {0}")]
    PermissionRequest(String),

    #[error("Error writing to {path}: {source}")]
    PrimaryWrite {
        path: PathBuf,
        #[source]
        source: ScanlistError,
    },

    #[error("Fallback write to {path} failed: {source}")]
    FallbackWrite {
        path: PathBuf,
        #[source]
        source: ScanlistError,
    },

    #[error("No share mechanism available")]
    ShareUnavailable,

    #[error("Share failed: {0}")]
    Share(String),

    #[error("Spreadsheet encoding failed: {0}")]
    Encode(String),

    #[error("Invalid payload: {0}")]
    Payload(String),
}

impl From<zip::result::ZipError> for ExportError {
    fn from(err: zip::result::ZipError) -> Self {
        ExportError::Encode(err.to_string())
    }
}
