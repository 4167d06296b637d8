//! Heading style suggestions.

use crate::analyze::AnalyzeOptions;
use crate::model::{HierarchyIssue, Section};
use crate::patterns::Construct;

/// Style name for a heading level.
pub fn heading_style(level: u8) -> String {
    format!("Heading {}", level)
}

/// Parse `Heading N` into its level.
pub fn heading_level(style: &str) -> Option<u8> {
    style
        .trim()
        .strip_prefix("Heading")
        .and_then(|rest| rest.trim().parse().ok())
}

/// Outcome of advising on one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    /// Suggested style name
    pub suggested_style: String,
    /// Mismatch to record, if the declared style differs
    pub issue: Option<HierarchyIssue>,
}

/// Suggests a proper heading style for headings detected from text or
/// formatting cues.
#[derive(Debug, Clone, Copy)]
pub struct HeadingStyleAdvisor<'a> {
    options: &'a AnalyzeOptions,
}

impl<'a> HeadingStyleAdvisor<'a> {
    /// Create an advisor bound to analysis options.
    pub fn new(options: &'a AnalyzeOptions) -> Self {
        Self { options }
    }

    /// Suggest a style for `text` declared as `declared`, given the
    /// sections already emitted for this document.
    pub fn advise(&self, text: &str, declared: &str, previous: &[Section]) -> Advice {
        let suggested_style = self.suggest_level(text, declared, previous);
        let issue = (suggested_style != declared)
            .then(|| HierarchyIssue::new(text, declared, suggested_style.as_str()));
        Advice {
            suggested_style,
            issue,
        }
    }

    fn suggest_level(&self, text: &str, declared: &str, previous: &[Section]) -> String {
        if self.options.is_proper_style(declared) {
            return declared.to_string();
        }

        let patterns = &self.options.patterns;
        if let Some(number) = patterns.capture(Construct::Enumeration, text) {
            let depth = number.split('.').filter(|s| !s.is_empty()).count();
            let level = match depth {
                0 | 1 => 2,
                2 => 3,
                _ => 4,
            };
            return heading_style(level);
        }
        if patterns.is_match(Construct::LetterEnumeration, text)
            || patterns.is_match(Construct::NumberedHeading, text)
        {
            return heading_style(2);
        }
        if patterns.is_match(Construct::Bullet, text) {
            return heading_style(3);
        }
        if text.chars().count() < self.options.short_heading_chars {
            return heading_style(2);
        }

        let used: Vec<u8> = previous
            .iter()
            .filter(|s| s.is_heading())
            .filter_map(|s| s.suggested_style.as_deref().and_then(heading_level))
            .collect();
        let level = [2, 3, 4]
            .into_iter()
            .find(|level| !used.contains(level))
            .unwrap_or(4);
        heading_style(level)
    }
}
