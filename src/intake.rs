//! File intake
//!
//! Reads the chosen file from disk, decodes it, and builds the in-memory
//! [`FileRecord`]. Failures never disturb whatever file was loaded before.

use crate::error::AppError;
use crate::models::FileRecord;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Read and decode a file into a [`FileRecord`].
///
/// Decoding is strict UTF-8; binary files surface as a `ReadFailure` rather
/// than being shipped to the model mangled.
pub async fn load_file(path: &str) -> Result<FileRecord, AppError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::ReadFailure(e.to_string()))?;

    let content = String::from_utf8(bytes)
        .map_err(|_| AppError::ReadFailure("file is not valid UTF-8 text".to_string()))?;

    Ok(FileRecord::new(path, content))
}

/// Format a size as a human-readable string with 1024-based units.
///
/// At most two decimals, trailing zeros trimmed: `1536` -> `"1.5 KB"`.
pub fn format_size(size: u64) -> String {
    if size == 0 {
        return "0 Bytes".to_string();
    }

    let exp = (size.ilog2() / 10).min(SIZE_UNITS.len() as u32 - 1) as usize;
    let value = size as f64 / 1024f64.powi(exp as i32);

    let mut text = format!("{:.2}", value);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    format!("{} {}", text, SIZE_UNITS[exp])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_format_size_boundaries() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
    }

    #[test]
    fn test_format_size_trims_trailing_zeros() {
        // 1126/1024 = 1.0996..., rounds to "1.1" not "1.10"
        assert_eq!(format_size(1126), "1.1 KB");
        // Sizes past GB stay in GB
        assert_eq!(format_size(2 * 1024u64.pow(4)), "2048 GB");
    }

    #[tokio::test]
    async fn test_load_file_builds_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"hello")
            .unwrap();

        let record = load_file(path.to_str().unwrap()).await.unwrap();
        assert_eq!(record.name, "notes.txt");
        assert_eq!(record.content, "hello");
        assert_eq!(record.size, 5);
    }

    #[tokio::test]
    async fn test_load_file_missing_is_read_failure() {
        let err = load_file("/nonexistent/definitely-missing.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ReadFailure(_)));
    }

    #[tokio::test]
    async fn test_load_file_rejects_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&[0xff, 0xfe, 0x00, 0x80])
            .unwrap();

        let err = load_file(path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, AppError::ReadFailure(_)));
    }
}
