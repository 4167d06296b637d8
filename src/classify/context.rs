//! Per-document pass state.

use serde::{Deserialize, Serialize};

use crate::model::{Document, HeadingStats, HierarchyIssue, Section};

use super::caption::{missing_captions, CaptionWindow};
use super::references::ReferenceKind;

/// Result of classifying one paragraph stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Sections in input order
    pub sections: Vec<Section>,

    /// Arabic-script reference entries
    pub arabic_reference_count: u32,

    /// Latin-script reference entries
    pub english_reference_count: u32,

    /// Heading style histogram
    pub heading_stats: HeadingStats,

    /// Declared/suggested style mismatches
    pub heading_hierarchy_issues: Vec<HierarchyIssue>,

    /// Marker texts of image sections without caption
    pub images_missing_captions: Vec<String>,
}

impl Classification {
    /// Number of heading sections.
    pub fn heading_count(&self) -> usize {
        self.sections.iter().filter(|s| s.is_heading()).count()
    }

    /// Number of image sections.
    pub fn image_count(&self) -> usize {
        self.sections.iter().filter(|s| s.is_image()).count()
    }

    /// Move the results onto a document.
    pub fn apply_to(self, doc: &mut Document) {
        doc.sections = self.sections;
        doc.arabic_reference_count = self.arabic_reference_count;
        doc.english_reference_count = self.english_reference_count;
        doc.heading_stats = self.heading_stats;
        doc.heading_hierarchy_issues = self.heading_hierarchy_issues;
        doc.images_missing_captions = self.images_missing_captions;
    }
}

/// Mutable state threaded through one left-to-right pass.
///
/// Created per document and consumed by [`PassContext::finish`], so no
/// state survives between documents.
#[derive(Debug, Default)]
pub(crate) struct PassContext {
    position: usize,
    in_references: bool,
    pub(crate) caption: CaptionWindow,
    result: Classification,
}

impl PassContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Position of the current non-empty paragraph.
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Move to the next non-empty paragraph.
    pub(crate) fn advance(&mut self) {
        self.position += 1;
    }

    pub(crate) fn in_references(&self) -> bool {
        self.in_references
    }

    /// Enter the reference region. There is no way back out.
    pub(crate) fn enter_references(&mut self) {
        self.in_references = true;
    }

    pub(crate) fn count_reference(&mut self, kind: ReferenceKind) {
        match kind {
            ReferenceKind::Arabic => self.result.arabic_reference_count += 1,
            ReferenceKind::English => self.result.english_reference_count += 1,
        }
    }

    pub(crate) fn sections(&self) -> &[Section] {
        &self.result.sections
    }

    pub(crate) fn stats_mut(&mut self) -> &mut HeadingStats {
        &mut self.result.heading_stats
    }

    pub(crate) fn push_section(&mut self, section: Section) {
        self.result.sections.push(section);
    }

    pub(crate) fn push_issue(&mut self, issue: HierarchyIssue) {
        self.result.heading_hierarchy_issues.push(issue);
    }

    /// Link a caption to the most recent section.
    pub(crate) fn caption_last(&mut self) {
        if let Some(section) = self.result.sections.last_mut() {
            section.mark_captioned();
        }
    }

    /// Append body text to the open section.
    ///
    /// Returns false when the text was dropped because no section is open.
    pub(crate) fn append_body(&mut self, text: &str) -> bool {
        match self.result.sections.last_mut() {
            Some(section) => {
                section.append_text(text);
                true
            }
            None => false,
        }
    }

    /// Close the pass and collect uncaptioned images.
    pub(crate) fn finish(mut self) -> Classification {
        self.result.images_missing_captions = missing_captions(&self.result.sections);
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_dropped_without_section() {
        let mut ctx = PassContext::new();
        assert!(!ctx.append_body("orphan text"));
        assert!(ctx.sections().is_empty());

        ctx.push_section(Section::heading("Title", "Normal", "Heading 1"));
        assert!(ctx.append_body("first line"));
        assert_eq!(ctx.sections()[0].text, "first line\n");
    }

    #[test]
    fn test_reference_region_is_sticky() {
        let mut ctx = PassContext::new();
        assert!(!ctx.in_references());
        ctx.enter_references();
        ctx.advance();
        assert!(ctx.in_references());
        ctx.count_reference(ReferenceKind::English);
        ctx.count_reference(ReferenceKind::Arabic);
        ctx.count_reference(ReferenceKind::English);
        let result = ctx.finish();
        assert_eq!(result.english_reference_count, 2);
        assert_eq!(result.arabic_reference_count, 1);
    }

    #[test]
    fn test_finish_collects_missing_captions() {
        let mut ctx = PassContext::new();
        ctx.push_section(Section::image("[Figure 1]", "Normal"));
        ctx.push_section(Section::image("[Figure 2]", "Normal"));
        ctx.caption_last();
        let result = ctx.finish();
        assert_eq!(result.images_missing_captions, vec!["[Figure 1]".to_string()]);
        assert_eq!(result.image_count(), 2);
    }
}
