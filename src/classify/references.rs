//! Reference-entry recognition.

use unicode_bidi::{bidi_class, BidiClass};

use crate::analyze::AnalyzeOptions;
use crate::patterns::Construct;

/// Script family of a reference-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Entry written in right-to-left (Arabic) script
    Arabic,
    /// Entry written predominantly in Latin script
    English,
}

/// Check if a character belongs to a right-to-left script.
pub fn is_rtl_char(c: char) -> bool {
    matches!(bidi_class(c), BidiClass::R | BidiClass::AL)
}

/// Share of right-to-left characters among all characters of `text`.
pub fn rtl_ratio(text: &str) -> f64 {
    let (rtl, total) = text.chars().fold((0usize, 0usize), |(rtl, total), c| {
        (rtl + usize::from(is_rtl_char(c)), total + 1)
    });
    if total == 0 {
        0.0
    } else {
        rtl as f64 / total as f64
    }
}

/// Classify a paragraph as an Arabic or English reference entry.
///
/// Arabic: contains right-to-left characters and either a parenthesized
/// four-digit year or at least two periods. English: right-to-left
/// characters below the configured share and either a parenthesized year
/// or at least two periods plus a comma. Arabic is tried first.
pub fn classify_reference(text: &str, options: &AnalyzeOptions) -> Option<ReferenceKind> {
    let has_year = options.patterns.is_match(Construct::Year, text);
    let periods = text.matches('.').count();

    if text.chars().any(is_rtl_char) && (has_year || periods >= 2) {
        return Some(ReferenceKind::Arabic);
    }

    if rtl_ratio(text) < options.max_latin_rtl_ratio
        && (has_year || (periods >= 2 && text.contains(',')))
    {
        return Some(ReferenceKind::English);
    }

    None
}

/// Whether text has the shape of a reference entry in either script.
pub fn is_reference_shaped(text: &str, options: &AnalyzeOptions) -> bool {
    classify_reference(text, options).is_some()
}
