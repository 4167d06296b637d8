//! Heading eligibility rules.

use crate::analyze::AnalyzeOptions;
use crate::model::ParagraphRecord;
use crate::patterns::Construct;

use super::references::is_reference_shaped;

/// Which cue made a paragraph a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingCue {
    /// Short paragraph with a proper heading/title style
    ProperStyle,
    /// Short paragraph with bold or large-font formatting
    Emphasis,
    /// Numbered heading pattern
    Numbered,
    /// Short bulleted paragraph
    Bullet,
}

/// A bare number such as `12` or `3.4`.
fn is_bare_number(text: &str) -> bool {
    text.chars().any(char::is_numeric)
        && text
            .chars()
            .all(|c| c.is_numeric() || c.is_whitespace() || matches!(c, '.' | ',' | '-'))
}

/// Decide whether a paragraph outside the references region is a heading.
///
/// Reference-shaped text never qualifies, whatever its style.
pub fn detect_heading(
    record: &ParagraphRecord,
    text: &str,
    options: &AnalyzeOptions,
) -> Option<HeadingCue> {
    if is_reference_shaped(text, options) {
        return None;
    }

    let words = text.split_whitespace().count();
    let short = words <= options.max_heading_words;

    if short && options.is_proper_style(&record.style_name) {
        return Some(HeadingCue::ProperStyle);
    }

    if short
        && !is_bare_number(text)
        && text.chars().count() >= options.min_heading_chars
        && options.is_emphasized(record)
    {
        return Some(HeadingCue::Emphasis);
    }

    let patterns = &options.patterns;
    if patterns.is_match(Construct::NumberedHeading, text) {
        return Some(HeadingCue::Numbered);
    }

    if short && patterns.is_match(Construct::Bullet, text) {
        return Some(HeadingCue::Bullet);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(record: &ParagraphRecord) -> Option<HeadingCue> {
        detect_heading(record, record.text.trim(), &AnalyzeOptions::default())
    }

    #[test]
    fn test_proper_style() {
        let record = ParagraphRecord::new(5, "Background").with_style("Heading 2");
        assert_eq!(detect(&record), Some(HeadingCue::ProperStyle));
    }

    #[test]
    fn test_proper_style_too_long() {
        let long = vec!["word"; 21].join(" ");
        let record = ParagraphRecord::new(5, long).with_style("Heading 2");
        assert_eq!(detect(&record), None);
    }

    #[test]
    fn test_emphasis() {
        let record = ParagraphRecord::new(5, "Study area").emphasized();
        assert_eq!(detect(&record), Some(HeadingCue::Emphasis));
    }

    #[test]
    fn test_emphasis_rejects_numbers_and_short_text() {
        assert_eq!(detect(&ParagraphRecord::new(5, "42").emphasized()), None);
        assert_eq!(detect(&ParagraphRecord::new(5, "3.14").emphasized()), None);
        assert_eq!(detect(&ParagraphRecord::new(5, "Ab").emphasized()), None);
    }

    #[test]
    fn test_numbered() {
        let record = ParagraphRecord::new(5, "1. Introduction");
        assert_eq!(detect(&record), Some(HeadingCue::Numbered));
        let nested = ParagraphRecord::new(5, "2.3 Methodology");
        assert_eq!(detect(&nested), Some(HeadingCue::Numbered));
    }

    #[test]
    fn test_bullet() {
        let record = ParagraphRecord::new(5, "• Key findings");
        assert_eq!(detect(&record), Some(HeadingCue::Bullet));
        let long = format!("• {}", vec!["word"; 25].join(" "));
        assert_eq!(detect(&ParagraphRecord::new(5, long)), None);
    }

    #[test]
    fn test_reference_shaped_text_is_not_heading() {
        let record = ParagraphRecord::new(5, "Smith, J. (2019). Title. Journal, 4, 22-31.")
            .with_style("Heading 2");
        assert_eq!(detect(&record), None);
    }

    #[test]
    fn test_plain_body_text() {
        let record = ParagraphRecord::new(5, "This paragraph is ordinary body text.");
        assert_eq!(detect(&record), None);
    }
}
