//! Analysis options and configuration.

use std::sync::Arc;

use crate::model::ParagraphRecord;
use crate::patterns::PatternTable;

/// Styles treated as proper heading/title styles by default.
pub const DEFAULT_PROPER_STYLES: &[&str] = &[
    "Heading 1",
    "Heading 2",
    "Heading 3",
    "Heading 4",
    "Heading 5",
    "Heading 6",
    "Title",
    "Subtitle",
];

/// Options for classifying and scoring documents.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Maximum words for a style-, emphasis- or bullet-based heading
    pub max_heading_words: usize,

    /// Minimum characters for an emphasis-based heading
    pub min_heading_chars: usize,

    /// Caption fallback: maximum characters of an unprefixed caption
    pub max_caption_chars: usize,

    /// Font size (points) above which a run counts as large
    pub large_font_threshold: f32,

    /// Maximum share of right-to-left characters in a Latin reference entry
    pub max_latin_rtl_ratio: f64,

    /// Advisor: headings shorter than this default to level 2
    pub short_heading_chars: usize,

    /// Share of proper-style headings required for `uses_proper_styles`
    pub proper_style_threshold: f64,

    /// Recognised heading/title style names
    pub proper_styles: Vec<String>,

    /// Classification patterns
    pub patterns: Arc<PatternTable>,
}

impl AnalyzeOptions {
    /// Create new analyze options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading word limit.
    pub fn with_max_heading_words(mut self, words: usize) -> Self {
        self.max_heading_words = words;
        self
    }

    /// Set the caption length limit.
    pub fn with_max_caption_chars(mut self, chars: usize) -> Self {
        self.max_caption_chars = chars;
        self
    }

    /// Set the large-font threshold in points.
    pub fn with_large_font_threshold(mut self, points: f32) -> Self {
        self.large_font_threshold = points;
        self
    }

    /// Set the proper-style compliance threshold.
    pub fn with_proper_style_threshold(mut self, ratio: f64) -> Self {
        self.proper_style_threshold = ratio.clamp(0.0, 1.0);
        self
    }

    /// Replace the proper style set.
    pub fn with_proper_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.proper_styles = styles.into_iter().map(Into::into).collect();
        self
    }

    /// Use a custom pattern table.
    pub fn with_patterns(mut self, patterns: PatternTable) -> Self {
        self.patterns = Arc::new(patterns);
        self
    }

    /// Check if a style name is a proper heading/title style.
    pub fn is_proper_style(&self, style_name: &str) -> bool {
        self.proper_styles
            .iter()
            .any(|s| s.eq_ignore_ascii_case(style_name.trim()))
    }

    /// Whether a paragraph carries bold or large-font formatting.
    pub fn is_emphasized(&self, record: &ParagraphRecord) -> bool {
        record.emphasized
            || record
                .first_run
                .as_ref()
                .is_some_and(|run| run.is_emphasized(self.large_font_threshold))
    }
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            max_heading_words: 20,
            min_heading_chars: 3,
            max_caption_chars: 200,
            large_font_threshold: 14.0,
            max_latin_rtl_ratio: 0.3,
            short_heading_chars: 50,
            proper_style_threshold: 0.8,
            proper_styles: DEFAULT_PROPER_STYLES.iter().map(|s| s.to_string()).collect(),
            patterns: Arc::new(PatternTable::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RunFormat;

    #[test]
    fn test_defaults() {
        let options = AnalyzeOptions::default();
        assert_eq!(options.max_heading_words, 20);
        assert_eq!(options.max_caption_chars, 200);
        assert!(!options.patterns.is_empty());
    }

    #[test]
    fn test_proper_style_lookup() {
        let options = AnalyzeOptions::default();
        assert!(options.is_proper_style("Heading 2"));
        assert!(options.is_proper_style("heading 2"));
        assert!(options.is_proper_style("Title"));
        assert!(!options.is_proper_style("Normal"));
        assert!(!options.is_proper_style("Heading 7"));
    }

    #[test]
    fn test_custom_proper_styles() {
        let options = AnalyzeOptions::new().with_proper_styles(["عنوان 1", "Heading 1"]);
        assert!(options.is_proper_style("عنوان 1"));
        assert!(!options.is_proper_style("Title"));
    }

    #[test]
    fn test_emphasis_from_run() {
        let options = AnalyzeOptions::default();
        let plain = ParagraphRecord::new(3, "Overview");
        assert!(!options.is_emphasized(&plain));

        let large = ParagraphRecord::new(3, "Overview").with_run(RunFormat::default().with_size(16.0));
        assert!(options.is_emphasized(&large));

        let flagged = ParagraphRecord::new(3, "Overview").emphasized();
        assert!(options.is_emphasized(&flagged));
    }

    #[test]
    fn test_builder_chain() {
        let options = AnalyzeOptions::new()
            .with_max_heading_words(12)
            .with_proper_style_threshold(1.5);
        assert_eq!(options.max_heading_words, 12);
        assert_eq!(options.proper_style_threshold, 1.0);
    }
}
