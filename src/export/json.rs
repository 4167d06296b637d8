//! JSON report export.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::Document;

use super::totals::BatchTotals;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Full report over a set of documents.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    /// Generation time
    pub generated_at: DateTime<Utc>,
    /// Aggregates
    pub totals: BatchTotals,
    /// Documents in id order
    pub documents: &'a [Document],
}

impl<'a> Report<'a> {
    /// Build a report stamped with the current time.
    pub fn new(documents: &'a [Document]) -> Self {
        Self {
            generated_at: Utc::now(),
            totals: BatchTotals::from_documents(documents),
            documents,
        }
    }
}

/// Render a report as JSON.
pub fn to_json(report: &Report<'_>, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Export(format!("JSON serialization error: {}", e)))
}

/// Render a single document as JSON.
pub fn document_to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Export(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentIdentity, Section};

    fn documents() -> Vec<Document> {
        let mut doc = Document::new(DocumentIdentity::from_path(1, "corpus/paper.json"));
        doc.title = "Test".to_string();
        doc.sections.push(Section::image("[Figure 1]", "Normal"));
        vec![doc]
    }

    #[test]
    fn test_report_pretty() {
        let documents = documents();
        let json = to_json(&Report::new(&documents), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"generated_at\""));
        assert!(json.contains("\"totals\""));
        assert!(json.contains("\"Test\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_report_compact() {
        let documents = documents();
        let json = to_json(&Report::new(&documents), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totals"]["documents"], 1);
        assert_eq!(value["totals"]["quality"]["Poor"], 1);
        assert_eq!(value["documents"][0]["sections"][0]["section_type"], "image");
        assert_eq!(value["documents"][0]["sections"][0]["has_caption"], false);
    }

    #[test]
    fn test_document_json() {
        let documents = documents();
        let json = document_to_json(&documents[0], JsonFormat::Compact).unwrap();
        assert!(json.contains("\"format_quality\":\"Poor\""));
    }
}
