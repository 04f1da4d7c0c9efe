//! Shared data models
//!
//! `FileRecord` is the single-document in-memory representation of the
//! currently loaded file. `FileSummary` is the slim projection sent to the
//! webview (name and size only; the content never crosses the bridge).

use crate::intake::format_size;
use serde::Serialize;
use std::path::Path;

/// The currently loaded file. At most one exists at a time; a new selection
/// replaces it wholesale and removal clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub path: String,
    /// Basename of `path`
    pub name: String,
    /// Decoded UTF-8 content
    pub content: String,
    /// Decoded character count, not raw byte length. This mirrors the
    /// original behavior and can under-report for multibyte text; kept
    /// deliberately (see DESIGN.md).
    pub size: u64,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, content: String) -> Self {
        let path = path.into();
        let name = Path::new(&path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        let size = content.chars().count() as u64;
        Self {
            path,
            name,
            content,
            size,
        }
    }
}

/// Webview-facing view of a `FileRecord`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub path: String,
    pub name: String,
    pub size: u64,
    /// Human-readable size ("1.5 KB")
    pub size_label: String,
}

impl From<&FileRecord> for FileSummary {
    fn from(record: &FileRecord) -> Self {
        Self {
            path: record.path.clone(),
            name: record.name.clone(),
            size: record.size,
            size_label: format_size(record.size),
        }
    }
}
