//! Classifier output units.

use serde::{Deserialize, Serialize};

/// Kind of a classified section. Fixed when the section is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    /// A title or heading paragraph
    Heading,
    /// A figure/table/image marker paragraph
    Image,
}

impl SectionType {
    /// Display label used in exports.
    pub fn label(&self) -> &'static str {
        match self {
            SectionType::Heading => "Heading",
            SectionType::Image => "Image",
        }
    }
}

/// A heading or image marker together with the body text that follows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Heading or marker text
    pub heading: String,

    /// Declared style of the originating paragraph
    pub style_name: String,

    /// Section kind
    pub section_type: SectionType,

    /// Body text accumulated until the next classified paragraph
    pub text: String,

    /// Font name of the triggering run
    pub font_name: Option<String>,

    /// Font size of the triggering run in points
    pub font_size: Option<f32>,

    /// Suggested style (heading sections only)
    pub suggested_style: Option<String>,

    /// Whether a caption followed the marker (image sections only)
    has_caption: bool,
}

impl Section {
    fn new(heading: impl Into<String>, style_name: impl Into<String>, section_type: SectionType) -> Self {
        Self {
            heading: heading.into(),
            style_name: style_name.into(),
            section_type,
            text: String::new(),
            font_name: None,
            font_size: None,
            suggested_style: None,
            has_caption: false,
        }
    }

    /// Create a heading section with its suggested style.
    pub fn heading(
        heading: impl Into<String>,
        style_name: impl Into<String>,
        suggested_style: impl Into<String>,
    ) -> Self {
        let mut section = Self::new(heading, style_name, SectionType::Heading);
        section.suggested_style = Some(suggested_style.into());
        section
    }

    /// Create an image-marker section, initially without caption.
    pub fn image(heading: impl Into<String>, style_name: impl Into<String>) -> Self {
        Self::new(heading, style_name, SectionType::Image)
    }

    /// Attach font information.
    pub fn with_font(mut self, name: Option<String>, size: Option<f32>) -> Self {
        self.font_name = name;
        self.font_size = size;
        self
    }

    /// Check if this is a heading section.
    pub fn is_heading(&self) -> bool {
        self.section_type == SectionType::Heading
    }

    /// Check if this is an image section.
    pub fn is_image(&self) -> bool {
        self.section_type == SectionType::Image
    }

    /// Whether a caption has been linked to this image section.
    pub fn has_caption(&self) -> bool {
        self.has_caption
    }

    /// Link a caption. Once set the flag stays set.
    pub fn mark_captioned(&mut self) {
        if self.is_image() {
            self.has_caption = true;
        }
    }

    /// Append a body paragraph.
    pub fn append_text(&mut self, paragraph: &str) {
        self.text.push_str(paragraph);
        self.text.push('\n');
    }

    /// Whether the suggested style differs from the declared one.
    pub fn style_mismatch(&self) -> bool {
        match self.suggested_style {
            Some(ref suggested) => self.is_heading() && *suggested != self.style_name,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_only_on_images() {
        let mut heading = Section::heading("Intro", "Normal", "Heading 2");
        heading.mark_captioned();
        assert!(!heading.has_caption());

        let mut image = Section::image("[Figure 1]", "Normal");
        assert!(!image.has_caption());
        image.mark_captioned();
        assert!(image.has_caption());
    }

    #[test]
    fn test_append_text() {
        let mut section = Section::heading("Intro", "Heading 1", "Heading 1");
        section.append_text("First.");
        section.append_text("Second.");
        assert_eq!(section.text, "First.\nSecond.\n");
    }

    #[test]
    fn test_style_mismatch() {
        assert!(Section::heading("1. Intro", "Normal", "Heading 2").style_mismatch());
        assert!(!Section::heading("Intro", "Heading 2", "Heading 2").style_mismatch());
        assert!(!Section::image("[Figure 1]", "Normal").style_mismatch());
    }

    #[test]
    fn test_section_type_serde() {
        let json = serde_json::to_string(&SectionType::Image).unwrap();
        assert_eq!(json, "\"image\"");
    }
}
