//! Image marker to caption linking.

use crate::analyze::AnalyzeOptions;
use crate::model::Section;
use crate::patterns::Construct;

/// One-paragraph caption expectation opened by an image marker.
///
/// The window records the position at which a caption is due. It is
/// consulted exactly once per paragraph position and closes after that
/// check whatever its outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptionWindow {
    due_at: Option<usize>,
}

impl CaptionWindow {
    /// Expect a caption right after the marker at `marker_position`.
    pub fn open(&mut self, marker_position: usize) {
        self.due_at = Some(marker_position + 1);
    }

    /// Check whether a caption is due at `position`, closing the window
    /// unless it points further ahead.
    pub fn take_due(&mut self, position: usize) -> bool {
        match self.due_at {
            Some(due) if due == position => {
                self.due_at = None;
                true
            }
            Some(due) if due > position => false,
            _ => {
                self.due_at = None;
                false
            }
        }
    }

    /// Whether a caption is currently expected.
    pub fn is_open(&self) -> bool {
        self.due_at.is_some()
    }
}

/// Check if text qualifies as a caption for the preceding marker.
///
/// Either an explicit caption prefix, or short text without a final period.
pub fn is_caption(text: &str, options: &AnalyzeOptions) -> bool {
    options.patterns.is_match(Construct::Caption, text)
        || (text.chars().count() < options.max_caption_chars && !text.ends_with('.'))
}

/// Marker texts of image sections that never received a caption.
pub fn missing_captions(sections: &[Section]) -> Vec<String> {
    sections
        .iter()
        .filter(|s| s.is_image() && !s.has_caption())
        .map(|s| s.heading.clone())
        .collect()
}
