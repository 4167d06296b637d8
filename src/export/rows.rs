//! Flat export rows.

use serde::Serialize;

use crate::model::{Document, Section};

/// Placeholder for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Maximum characters of section content in detail rows.
const CONTENT_PREVIEW_CHARS: usize = 100;

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Truncate to the preview length, appending `...` when cut.
pub fn truncate_content(text: &str) -> String {
    if text.chars().count() > CONTENT_PREVIEW_CHARS {
        let cut: String = text.chars().take(CONTENT_PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// One row per document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Folder")]
    pub parent_folder: String,
    #[serde(rename = "File Name")]
    pub name: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author (Metadata)")]
    pub author: String,
    #[serde(rename = "Author (Text)")]
    pub author_from_text: String,
    #[serde(rename = "Word Count")]
    pub word_count: usize,
    #[serde(rename = "Images")]
    pub image_count: usize,
    #[serde(rename = "Unique Images")]
    pub unique_image_count: usize,
    #[serde(rename = "Arabic References")]
    pub arabic_references: u32,
    #[serde(rename = "English References")]
    pub english_references: u32,
    #[serde(rename = "Total References")]
    pub total_references: u32,
    #[serde(rename = "Footnotes")]
    pub footnotes: u32,
    #[serde(rename = "Uses Proper Styles")]
    pub uses_proper_styles: &'static str,
    #[serde(rename = "Format Quality")]
    pub format_quality: &'static str,
    #[serde(rename = "Total Headings")]
    pub total_headings: u32,
    #[serde(rename = "Images Missing Captions")]
    pub images_missing_captions: usize,
    #[serde(rename = "Hierarchy Issues")]
    pub hierarchy_issues: usize,
    #[serde(rename = "Total Format Issues")]
    pub total_format_issues: usize,
}

impl SummaryRow {
    /// Build the summary row of a document.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id,
            parent_folder: doc.parent_folder.clone(),
            name: doc.name.clone(),
            title: doc.title.clone(),
            author: doc.author.clone(),
            author_from_text: doc.author_from_text.clone(),
            word_count: doc.word_count,
            image_count: doc.image_count,
            unique_image_count: doc.unique_image_count,
            arabic_references: doc.arabic_reference_count,
            english_references: doc.english_reference_count,
            total_references: doc.total_references(),
            footnotes: doc.footnote_count,
            uses_proper_styles: yes_no(doc.uses_proper_styles),
            format_quality: doc.format_quality.as_str(),
            total_headings: doc.heading_stats.total,
            images_missing_captions: doc.images_missing_captions.len(),
            hierarchy_issues: doc.heading_hierarchy_issues.len(),
            total_format_issues: doc.total_format_issues(),
        }
    }
}

/// One row per heading or image section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionRow {
    #[serde(rename = "Document ID")]
    pub document_id: u32,
    #[serde(rename = "Type")]
    pub section_type: &'static str,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Current Style")]
    pub current_style: String,
    #[serde(rename = "Suggested Style")]
    pub suggested_style: String,
    #[serde(rename = "Font")]
    pub font: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "Issue")]
    pub issue: String,
}

impl SectionRow {
    /// Build a detail row; text sections have none.
    pub fn from_section(document_id: u32, section: &Section) -> Option<Self> {
        if !section.is_heading() && !section.is_image() {
            return None;
        }

        let issue = if section.style_mismatch() {
            format!(
                "Should be {}",
                section.suggested_style.as_deref().unwrap_or(NOT_AVAILABLE)
            )
        } else if section.is_image() && !section.has_caption() {
            "Missing caption".to_string()
        } else {
            String::new()
        };

        Some(Self {
            document_id,
            section_type: section.section_type.label(),
            content: truncate_content(&section.heading),
            current_style: section.style_name.clone(),
            suggested_style: section
                .suggested_style
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            font: section
                .font_name
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            size: section
                .font_size
                .map(|s| s.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            issue,
        })
    }

    /// Detail rows of a document.
    pub fn from_document(doc: &Document) -> Vec<Self> {
        doc.sections
            .iter()
            .filter_map(|s| Self::from_section(doc.id, s))
            .collect()
    }
}

/// Kind of remediation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Declared heading style differs from the suggestion
    HeadingStyle,
    /// Image marker without caption
    MissingCaption,
    /// Free-text format issue
    FormatIssue,
}

impl IssueType {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::HeadingStyle => "Heading Style",
            IssueType::MissingCaption => "Missing Caption",
            IssueType::FormatIssue => "Format Issue",
        }
    }
}

/// One row per recorded issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueRow {
    #[serde(rename = "Document ID")]
    pub document_id: u32,
    #[serde(rename = "File Name")]
    pub name: String,
    #[serde(rename = "Issue Type")]
    pub issue_type: &'static str,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Suggested Action")]
    pub suggested_action: String,
}

impl IssueRow {
    fn new(doc: &Document, issue_type: IssueType, description: String, action: String) -> Self {
        Self {
            document_id: doc.id,
            name: doc.name.clone(),
            issue_type: issue_type.label(),
            description,
            suggested_action: action,
        }
    }

    /// Issue rows of a document: hierarchy issues, missing captions, then
    /// free-text issues.
    pub fn from_document(doc: &Document) -> Vec<Self> {
        let hierarchy = doc.heading_hierarchy_issues.iter().map(|issue| {
            Self::new(
                doc,
                IssueType::HeadingStyle,
                format!("{} - Current: {}", issue.heading, issue.current_style),
                format!("Change to: {}", issue.suggested_style),
            )
        });
        let captions = doc.images_missing_captions.iter().map(|marker| {
            Self::new(
                doc,
                IssueType::MissingCaption,
                marker.clone(),
                "Add caption below image".to_string(),
            )
        });
        let format = doc.format_issues.iter().map(|issue| {
            Self::new(
                doc,
                IssueType::FormatIssue,
                issue.clone(),
                "Apply proper Word styles".to_string(),
            )
        });

        hierarchy.chain(captions).chain(format).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentIdentity, HierarchyIssue};

    fn document() -> Document {
        let mut doc = Document::new(DocumentIdentity::from_path(7, "corpus/theses/paper.json"));
        doc.sections = vec![
            Section::heading("Title", "Normal", "Heading 1"),
            Section::heading("1. Introduction", "Normal", "Heading 2")
                .with_font(Some("Arial".to_string()), Some(16.0)),
            Section::image("[Figure 1] map", "Normal"),
        ];
        doc.heading_hierarchy_issues =
            vec![HierarchyIssue::new("1. Introduction", "Normal", "Heading 2")];
        doc.images_missing_captions = vec!["[Figure 1] map".to_string()];
        doc.format_issues = vec!["Processing failed: boom".to_string()];
        doc
    }

    #[test]
    fn test_truncate_content() {
        assert_eq!(truncate_content("short"), "short");
        let long = "ب".repeat(120);
        let cut = truncate_content(&long);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_summary_row() {
        let row = SummaryRow::from_document(&document());
        assert_eq!(row.id, 7);
        assert_eq!(row.parent_folder, "theses");
        assert_eq!(row.uses_proper_styles, "Yes");
        assert_eq!(row.format_quality, "Poor");
        assert_eq!(row.total_format_issues, 3);
    }

    #[test]
    fn test_section_rows() {
        let rows = SectionRow::from_document(&document());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].issue, "Should be Heading 1");
        assert_eq!(rows[0].font, "N/A");
        assert_eq!(rows[1].font, "Arial");
        assert_eq!(rows[1].size, "16");
        assert_eq!(rows[2].section_type, "Image");
        assert_eq!(rows[2].suggested_style, "N/A");
        assert_eq!(rows[2].issue, "Missing caption");
    }

    #[test]
    fn test_issue_rows() {
        let rows = IssueRow::from_document(&document());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].issue_type, "Heading Style");
        assert_eq!(rows[0].description, "1. Introduction - Current: Normal");
        assert_eq!(rows[0].suggested_action, "Change to: Heading 2");
        assert_eq!(rows[1].issue_type, "Missing Caption");
        assert_eq!(rows[1].suggested_action, "Add caption below image");
        assert_eq!(rows[2].issue_type, "Format Issue");
        assert_eq!(rows[2].suggested_action, "Apply proper Word styles");
    }
}
