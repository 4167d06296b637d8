//! Formatting-quality scoring.

use crate::model::{Document, FormatQuality, HeadingStats};

/// Score a heading histogram and issue count.
///
/// Thresholds are evaluated best first. The third branch is an OR, so a
/// document with no proper headings but at most ten issues is still Fair.
pub fn score(stats: &HeadingStats, issue_count: usize) -> FormatQuality {
    score_ratio(stats.proper_ratio(), issue_count)
}

/// Score a proper-style ratio and issue count.
pub fn score_ratio(proper_ratio: f64, issue_count: usize) -> FormatQuality {
    if proper_ratio >= 0.9 && issue_count == 0 {
        FormatQuality::Excellent
    } else if proper_ratio >= 0.7 && issue_count <= 3 {
        FormatQuality::Good
    } else if proper_ratio >= 0.5 || issue_count <= 10 {
        FormatQuality::Fair
    } else {
        FormatQuality::Poor
    }
}

/// Score a completed document.
pub fn score_document(doc: &Document) -> FormatQuality {
    score(&doc.heading_stats, doc.total_format_issues())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: u32, proper: u32) -> HeadingStats {
        HeadingStats {
            total,
            proper_style: proper,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_headings_not_penalized() {
        assert_eq!(score(&HeadingStats::default(), 0), FormatQuality::Excellent);
    }

    #[test]
    fn test_excellent_boundary() {
        assert_eq!(score(&stats(10, 9), 0), FormatQuality::Excellent);
        assert_eq!(score(&stats(10, 9), 1), FormatQuality::Good);
    }

    #[test]
    fn test_below_ninety_is_at_best_good() {
        assert_eq!(score_ratio(0.89, 0), FormatQuality::Good);
        assert_eq!(score(&stats(100, 89), 0), FormatQuality::Good);
    }

    #[test]
    fn test_good_boundary() {
        assert_eq!(score(&stats(10, 7), 3), FormatQuality::Good);
        assert_eq!(score(&stats(10, 7), 4), FormatQuality::Fair);
        assert_eq!(score(&stats(10, 6), 0), FormatQuality::Fair);
    }

    #[test]
    fn test_fair_or_branch() {
        // No proper headings at all, yet few issues: still Fair
        assert_eq!(score(&stats(2, 0), 1), FormatQuality::Fair);
        assert_eq!(score(&stats(2, 0), 10), FormatQuality::Fair);
        assert_eq!(score(&stats(2, 1), 50), FormatQuality::Fair);
    }

    #[test]
    fn test_poor() {
        assert_eq!(score(&stats(10, 4), 11), FormatQuality::Poor);
        assert_eq!(score(&stats(2, 0), 11), FormatQuality::Poor);
    }
}
