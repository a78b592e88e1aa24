use crate::ExportError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encoded workbook as handed to the storage layer: base64 text, decoded
/// back to bytes when written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetPayload {
    base64: String,
}

impl SpreadsheetPayload {
    /// Wraps raw workbook bytes as standard, padded base64.
    pub fn encode(bytes: &[u8]) -> Self {
        Self {
            base64: STANDARD.encode(bytes),
        }
    }

    /// Returns the workbook bytes. Fails with [`ExportError::Payload`] on
    /// malformed base64.
    pub fn decode(&self) -> Result<Vec<u8>, ExportError> {
        STANDARD
            .decode(self.base64.as_bytes())
            .map_err(|e| ExportError::Payload(e.to_string()))
    }
}
