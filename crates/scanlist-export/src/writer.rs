use crate::SpreadsheetPayload;
use scanlist_core::{ScanlistError, ScanlistResult};
use std::path::Path;
use tokio::fs;

/// Writes files through a temp file in the target directory followed by a
/// rename, so a reader never sees a half-written workbook.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write `data` to `path`, creating missing parent directories.
    ///
    /// The temp file lives next to the target so the rename stays on one
    /// filesystem. An existing file at `path` is replaced.
    pub async fn write_atomic(path: &Path, data: &[u8]) -> ScanlistResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).await?;

        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.into_temp_path();

        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;
        // Already renamed; nothing left to clean up.
        let _ = temp_path.keep();

        tracing::debug!("Atomically wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    /// Decode a base64 payload and write the bytes.
    pub async fn write_payload(path: &Path, payload: &SpreadsheetPayload) -> ScanlistResult<()> {
        let bytes = payload
            .decode()
            .map_err(|e| ScanlistError::Serialization(e.to_string()))?;
        Self::write_atomic(path, &bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_creates_missing_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/items.xlsx");

        AtomicWriter::write_atomic(&path, b"PK").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"PK");
    }

    #[tokio::test]
    async fn test_write_payload_decodes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.xlsx");
        let payload = SpreadsheetPayload::encode(b"hello");

        AtomicWriter::write_payload(&path, &payload).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");

        let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[tokio::test]
    async fn test_write_into_file_parent_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let result = AtomicWriter::write_atomic(&blocker.join("items.xlsx"), b"PK").await;
        assert!(result.is_err());
    }
}
