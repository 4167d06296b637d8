//! Paragraph classification.
//!
//! A single left-to-right pass over a document's paragraph stream turns
//! flat paragraph records into an ordered list of [`Section`]s. Each
//! paragraph is tried against the rules below, first match wins:
//!
//! 1. The first non-empty paragraph is the title, the second the author line.
//! 2. A reference-section title switches on the reference region for good.
//! 3. Inside that region, reference entries are counted per script.
//! 4. Figure/table/image markers open an image section.
//! 5. The paragraph right after a marker may be absorbed as its caption.
//! 6. Outside the reference region, short styled, emphasized, numbered or
//!    bulleted paragraphs become headings with a suggested style.
//! 7. Anything else is body text of the open section.

mod advisor;
mod caption;
mod context;
mod heading;
mod references;

pub use advisor::{heading_level, heading_style, Advice, HeadingStyleAdvisor};
pub use caption::{is_caption, missing_captions, CaptionWindow};
pub use context::Classification;
pub use heading::{detect_heading, HeadingCue};
pub use references::{classify_reference, is_reference_shaped, is_rtl_char, rtl_ratio, ReferenceKind};

use unicode_normalization::UnicodeNormalization;

use crate::analyze::AnalyzeOptions;
use crate::model::{ParagraphRecord, Section};
use crate::patterns::Construct;

use context::PassContext;

/// Style suggested for the document title.
pub const TITLE_STYLE: &str = "Heading 1";

/// NFC-normalize text and collapse whitespace runs to single spaces.
pub fn clean_text(text: &str) -> String {
    let normalized: String = text.nfc().collect();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First and second non-empty paragraphs (title and author lines).
pub fn leading_lines(paragraphs: &[ParagraphRecord]) -> (Option<&str>, Option<&str>) {
    let mut lines = paragraphs
        .iter()
        .map(|p| p.text.trim())
        .filter(|t| !t.is_empty());
    (lines.next(), lines.next())
}

/// Classifies a document's paragraph stream into sections.
#[derive(Debug, Clone, Copy)]
pub struct StructureClassifier<'a> {
    options: &'a AnalyzeOptions,
    advisor: HeadingStyleAdvisor<'a>,
}

impl<'a> StructureClassifier<'a> {
    /// Create a classifier bound to analysis options.
    pub fn new(options: &'a AnalyzeOptions) -> Self {
        Self {
            options,
            advisor: HeadingStyleAdvisor::new(options),
        }
    }

    /// Classify one document's paragraphs.
    ///
    /// Paragraphs with blank text are skipped and do not count as a position.
    pub fn classify(&self, paragraphs: &[ParagraphRecord]) -> Classification {
        let mut ctx = PassContext::new();

        for record in paragraphs {
            let text = record.text.trim();
            if text.is_empty() {
                continue;
            }
            self.step(&mut ctx, record, text);
            ctx.advance();
        }

        ctx.finish()
    }

    fn step(&self, ctx: &mut PassContext, record: &ParagraphRecord, text: &str) {
        let position = ctx.position();
        let patterns = &self.options.patterns;

        match position {
            0 => {
                self.push_title(ctx, record, text);
                return;
            }
            1 => {
                log::debug!("Paragraph {}: author line", record.index);
                return;
            }
            _ => {}
        }

        if !ctx.in_references() && patterns.is_match(Construct::ReferenceSection, text) {
            log::debug!("Paragraph {}: reference region starts", record.index);
            ctx.enter_references();
        }

        let caption_due = ctx.caption.take_due(position);

        if ctx.in_references() {
            if let Some(kind) = classify_reference(text, self.options) {
                log::debug!("Paragraph {}: {:?} reference", record.index, kind);
                ctx.count_reference(kind);
                return;
            }
        }

        if patterns.is_match(Construct::Marker, text) {
            log::debug!("Paragraph {}: image marker", record.index);
            let section = Section::image(clean_text(text), record.style_name.as_str())
                .with_font(record.font_name().map(str::to_string), record.font_size());
            ctx.push_section(section);
            ctx.caption.open(position);
            return;
        }

        if caption_due && is_caption(text, self.options) {
            log::debug!("Paragraph {}: caption", record.index);
            ctx.caption_last();
            return;
        }

        if !ctx.in_references() {
            if let Some(cue) = detect_heading(record, text, self.options) {
                self.push_heading(ctx, record, text, cue);
                return;
            }
        }

        if !ctx.append_body(text) {
            log::debug!("Paragraph {}: dropped before first section", record.index);
        }
    }

    fn push_title(&self, ctx: &mut PassContext, record: &ParagraphRecord, text: &str) {
        log::debug!("Paragraph {}: title", record.index);
        self.count_heading(ctx, record);
        let section = Section::heading(clean_text(text), record.style_name.as_str(), TITLE_STYLE)
            .with_font(record.font_name().map(str::to_string), record.font_size());
        ctx.push_section(section);
    }

    fn push_heading(
        &self,
        ctx: &mut PassContext,
        record: &ParagraphRecord,
        text: &str,
        cue: HeadingCue,
    ) {
        let heading = clean_text(text);
        let advice = self
            .advisor
            .advise(&heading, &record.style_name, ctx.sections());
        log::debug!(
            "Paragraph {}: heading ({:?}), suggested {}",
            record.index,
            cue,
            advice.suggested_style
        );

        self.count_heading(ctx, record);
        if let Some(issue) = advice.issue {
            ctx.push_issue(issue);
        }

        let section = Section::heading(heading, record.style_name.as_str(), advice.suggested_style)
            .with_font(record.font_name().map(str::to_string), record.font_size());
        ctx.push_section(section);
    }

    fn count_heading(&self, ctx: &mut PassContext, record: &ParagraphRecord) {
        let proper = self.options.is_proper_style(&record.style_name);
        let emphasized = self.options.is_emphasized(record);
        let stats = ctx.stats_mut();

        stats.total += 1;
        if proper {
            stats.proper_style += 1;
        } else if emphasized {
            stats.font_based += 1;
        }
        if record.style_name == "Normal" {
            stats.normal_style += 1;
        }
    }
}
