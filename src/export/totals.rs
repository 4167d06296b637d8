//! Corpus-wide aggregates.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Document, FormatQuality};

/// Aggregated figures over a set of documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchTotals {
    /// Documents aggregated
    pub documents: usize,
    /// Sum of word counts
    pub words: usize,
    /// Sum of heading counts
    pub headings: u32,
    /// Sum of embedded images
    pub images: usize,
    /// Sum of logically unique images
    pub unique_images: usize,
    /// Arabic reference entries
    pub arabic_references: u32,
    /// English reference entries
    pub english_references: u32,
    /// Footnotes
    pub footnotes: u32,
    /// Documents per quality verdict
    pub quality: BTreeMap<FormatQuality, usize>,
    /// Documents below the proper-style threshold
    pub without_proper_styles: usize,
    /// Documents with at least one uncaptioned image
    pub with_missing_captions: usize,
    /// Names of documents rated Poor
    pub poor_documents: Vec<String>,
}

impl BatchTotals {
    /// Aggregate documents.
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut totals = Self {
            documents: documents.len(),
            quality: FormatQuality::ALL.iter().map(|q| (*q, 0)).collect(),
            ..Default::default()
        };

        for doc in documents {
            totals.words += doc.word_count;
            totals.headings += doc.heading_stats.total;
            totals.images += doc.image_count;
            totals.unique_images += doc.unique_image_count;
            totals.arabic_references += doc.arabic_reference_count;
            totals.english_references += doc.english_reference_count;
            totals.footnotes += doc.footnote_count;
            *totals.quality.entry(doc.format_quality).or_insert(0) += 1;
            if !doc.uses_proper_styles {
                totals.without_proper_styles += 1;
            }
            if !doc.images_missing_captions.is_empty() {
                totals.with_missing_captions += 1;
            }
            if doc.format_quality == FormatQuality::Poor {
                totals.poor_documents.push(doc.name.clone());
            }
        }

        totals
    }

    /// Reference entries in both scripts.
    pub fn references(&self) -> u32 {
        self.arabic_references + self.english_references
    }

    /// Documents with the given verdict.
    pub fn count(&self, quality: FormatQuality) -> usize {
        self.quality.get(&quality).copied().unwrap_or(0)
    }

    /// Log the processing summary.
    pub fn log_summary(&self) {
        log::info!("Documents: {}", self.documents);
        log::info!("Words: {}", self.words);
        log::info!("Headings: {}", self.headings);
        log::info!("Images: {} ({} unique)", self.images, self.unique_images);
        log::info!(
            "References: {} ({} Arabic, {} English)",
            self.references(),
            self.arabic_references,
            self.english_references
        );
        log::info!("Footnotes: {}", self.footnotes);
        for (quality, count) in &self.quality {
            log::info!("  {}: {}", quality, count);
        }
        log::info!("Not using proper styles: {}", self.without_proper_styles);
        log::info!("With uncaptioned images: {}", self.with_missing_captions);
        if !self.poor_documents.is_empty() {
            log::info!(
                "Poor formatting: {}",
                self.poor_documents
                    .iter()
                    .take(5)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }
}
