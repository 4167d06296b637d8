//! Per-document analysis.
//!
//! The [`Analyzer`] runs the full per-document pipeline: metadata, word
//! count, paragraph classification, footnotes, image deduplication and
//! quality scoring. Failures inside the pipeline never escape; they end
//! up as a note in the document's `format_issues`.

mod images;
mod options;
mod quality;

pub use images::{unique_image_count, ImageInventory};
pub use options::{AnalyzeOptions, DEFAULT_PROPER_STYLES};
pub use quality::{score, score_document, score_ratio};

use std::collections::BTreeMap;

use crate::classify::{leading_lines, StructureClassifier};
use crate::error::{Error, Result};
use crate::model::{Document, DocumentIdentity, DocumentInput, ParagraphRecord};

/// Analyzes documents with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalyzeOptions,
}

impl Analyzer {
    /// Create an analyzer.
    pub fn new(options: AnalyzeOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    /// Analyze one document. Always returns a document; internal failures
    /// are recorded in `format_issues`.
    pub fn analyze(&self, identity: DocumentIdentity, input: &DocumentInput) -> Document {
        let mut doc = Document::new(identity);

        apply_metadata(&mut doc, input);
        doc.word_count = count_words(input);

        if let Err(e) = self.classify_into(&mut doc, input) {
            log::warn!("Failed to analyze {}: {}", doc.path.display(), e);
            doc.record_failure(&e);
        }

        doc.format_quality = score_document(&doc);
        doc
    }

    fn classify_into(&self, doc: &mut Document, input: &DocumentInput) -> Result<()> {
        validate(&input.paragraphs)?;

        let classification = StructureClassifier::new(&self.options).classify(&input.paragraphs);
        classification.apply_to(doc);

        doc.footnote_count = input.footnote_count;

        let inventory = ImageInventory::from_targets(&input.image_targets);
        doc.image_count = inventory.total();
        doc.unique_image_count = inventory.unique();
        let duplicates = inventory.duplicates();
        if !duplicates.is_empty() {
            log::info!(
                "{}: {} images, {} unique (dropped {})",
                doc.name,
                doc.image_count,
                doc.unique_image_count,
                duplicates.join(", ")
            );
        }

        doc.uses_proper_styles =
            doc.heading_stats.proper_ratio() >= self.options.proper_style_threshold;

        log_style_summary(doc);
        Ok(())
    }
}

/// Title and author fields, container metadata first.
fn apply_metadata(doc: &mut Document, input: &DocumentInput) {
    let (first, second) = leading_lines(&input.paragraphs);

    if let Some(author) = second {
        doc.author_from_text = author.to_string();
    }
    if let Some(title) = input.metadata.title().or(first) {
        doc.title = title.to_string();
    }
    if let Some(author) = input.metadata.author().or(second) {
        doc.author = author.to_string();
    }
}

/// Whitespace-delimited tokens over all paragraphs and table cells.
pub fn count_words(input: &DocumentInput) -> usize {
    let paragraphs: usize = input.paragraphs.iter().map(ParagraphRecord::word_count).sum();
    let cells: usize = input
        .table_cells
        .iter()
        .map(|c| c.split_whitespace().count())
        .sum();
    paragraphs + cells
}

/// Check that indices increase strictly and font sizes are usable.
pub fn validate(paragraphs: &[ParagraphRecord]) -> Result<()> {
    let mut previous: Option<usize> = None;

    for record in paragraphs {
        if previous.is_some_and(|p| record.index <= p) {
            return Err(Error::InvalidInput(format!(
                "paragraph index {} out of order",
                record.index
            )));
        }
        previous = Some(record.index);

        if let Some(size) = record.font_size() {
            if !size.is_finite() || size <= 0.0 {
                return Err(Error::InvalidInput(format!(
                    "paragraph {} has invalid font size {}",
                    record.index, size
                )));
            }
        }
    }

    Ok(())
}

fn log_style_summary(doc: &Document) {
    let mut styles: BTreeMap<&str, usize> = BTreeMap::new();
    for heading in doc.headings() {
        *styles.entry(heading.style_name.as_str()).or_insert(0) += 1;
    }
    let summary = styles
        .iter()
        .map(|(style, count)| format!("{}: {}", style, count))
        .collect::<Vec<_>>()
        .join(", ");
    log::info!(
        "{}: headings [{}], {} image sections",
        doc.name,
        summary,
        doc.images().count()
    );
}
