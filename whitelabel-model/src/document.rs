//! Document types exchanged with the text-extraction backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of processing one uploaded document, as reported by the
/// backend's extraction service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentProcessingResult {
    pub success: bool,
    /// Extracted text, when the backend chose to return it inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Extraction method the backend selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_chars: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One row in the documents listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_chars: Option<u64>,
    pub uploaded_at: DateTime<Utc>,
}

impl DocumentSummary {
    /// Build a listing row from a fresh processing result.
    pub fn from_result(name: impl Into<String>, result: &DocumentProcessingResult) -> Self {
        Self {
            name: name.into(),
            pages: result.pages,
            total_chars: result.total_chars,
            uploaded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_carries_result_counts() {
        let result = DocumentProcessingResult {
            success: true,
            text: None,
            method: Some("pdfplumber".to_string()),
            pages: Some(12),
            total_chars: Some(34_567),
            error: None,
        };
        let summary = DocumentSummary::from_result("handbook.pdf", &result);
        assert_eq!(summary.name, "handbook.pdf");
        assert_eq!(summary.pages, Some(12));
        assert_eq!(summary.total_chars, Some(34_567));
    }
}
