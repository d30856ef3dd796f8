//! Uploaded document entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document uploaded against a research project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Server-issued opaque identifier.
    pub id: String,
    /// Original file name.
    pub file_name: String,
    /// MIME type as recorded at upload.
    #[serde(default)]
    pub file_type: String,
    /// Size in bytes, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Upload timestamp.
    pub upload_date: DateTime<Utc>,
    /// Identifier of the owning project.
    pub project_id: String,
    /// Username of the uploader, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<String>,
}

impl Document {
    /// Formats the file size as a human-readable string (e.g. "2.5 MB").
    pub fn human_size(&self) -> String {
        let Some(bytes) = self.file_size else {
            return "-".to_string();
        };
        if bytes == 0 {
            return "0 Bytes".to_string();
        }
        const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
        let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
        let exponent = exponent.min(UNITS.len() - 1);
        let value = bytes as f64 / 1024f64.powi(exponent as i32);
        format!("{} {}", (value * 100.0).round() / 100.0, UNITS[exponent])
    }
}
