//! Per-document heading statistics and issue records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading-style histogram for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingStats {
    /// Heading sections, title included
    pub total: u32,

    /// Headings declared with a proper heading/title style
    pub proper_style: u32,

    /// Headings declared with the `Normal` style
    pub normal_style: u32,

    /// Headings recognised only through bold/large-font formatting
    pub font_based: u32,
}

impl HeadingStats {
    /// Share of headings using a proper style; 1.0 when there are none.
    pub fn proper_ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            f64::from(self.proper_style) / f64::from(self.total)
        }
    }
}

/// A heading whose declared style disagrees with the suggested one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyIssue {
    /// Heading text
    pub heading: String,

    /// Declared style
    pub current_style: String,

    /// Suggested style
    pub suggested_style: String,
}

impl HierarchyIssue {
    /// Create a new hierarchy issue.
    pub fn new(
        heading: impl Into<String>,
        current_style: impl Into<String>,
        suggested_style: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            current_style: current_style.into(),
            suggested_style: suggested_style.into(),
        }
    }
}

/// Ordinal formatting-quality verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormatQuality {
    /// Proper styles throughout, no issues
    Excellent,
    /// Mostly proper styles, a few issues
    Good,
    /// Mixed styling
    Fair,
    /// Needs formatting attention
    #[default]
    Poor,
}

impl FormatQuality {
    /// All verdicts, best first.
    pub const ALL: [FormatQuality; 4] = [
        FormatQuality::Excellent,
        FormatQuality::Good,
        FormatQuality::Fair,
        FormatQuality::Poor,
    ];

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatQuality::Excellent => "Excellent",
            FormatQuality::Good => "Good",
            FormatQuality::Fair => "Fair",
            FormatQuality::Poor => "Poor",
        }
    }
}

impl fmt::Display for FormatQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proper_ratio_without_headings() {
        let stats = HeadingStats::default();
        assert_eq!(stats.proper_ratio(), 1.0);
    }

    #[test]
    fn test_proper_ratio() {
        let stats = HeadingStats {
            total: 4,
            proper_style: 3,
            normal_style: 1,
            font_based: 0,
        };
        assert_eq!(stats.proper_ratio(), 0.75);
    }

    #[test]
    fn test_quality_display() {
        assert_eq!(FormatQuality::Fair.to_string(), "Fair");
        assert!(FormatQuality::Excellent < FormatQuality::Poor);
    }
}
