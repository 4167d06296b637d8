//! Paragraph-level input records.

use serde::{Deserialize, Serialize};

/// Style name assumed when the container declares none.
pub const DEFAULT_STYLE: &str = "Normal";

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

/// One non-empty body paragraph, as handed over by the parsing collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    /// Ordinal position of the paragraph in the source document
    pub index: usize,

    /// Trimmed paragraph text
    pub text: String,

    /// Declared paragraph style name
    #[serde(default = "default_style")]
    pub style_name: String,

    /// Whether the paragraph carries bold or large-font run formatting
    #[serde(default)]
    pub emphasized: bool,

    /// Formatting of the first run, if the paragraph has runs
    #[serde(default)]
    pub first_run: Option<RunFormat>,
}

impl ParagraphRecord {
    /// Create a record with the default style and no run formatting.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            style_name: default_style(),
            emphasized: false,
            first_run: None,
        }
    }

    /// Create a record whose emphasis flag is derived from its first run.
    ///
    /// A run counts as emphasized when it is bold or its font size is
    /// strictly greater than `large_font_threshold` points.
    pub fn from_run(
        index: usize,
        text: impl Into<String>,
        style_name: impl Into<String>,
        run: RunFormat,
        large_font_threshold: f32,
    ) -> Self {
        Self {
            index,
            text: text.into(),
            style_name: style_name.into(),
            emphasized: run.is_emphasized(large_font_threshold),
            first_run: Some(run),
        }
    }

    /// Set the declared style.
    pub fn with_style(mut self, style_name: impl Into<String>) -> Self {
        self.style_name = style_name.into();
        self
    }

    /// Mark the paragraph as carrying bold/large-font formatting.
    pub fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }

    /// Attach first-run formatting without touching the emphasis flag.
    pub fn with_run(mut self, run: RunFormat) -> Self {
        self.first_run = Some(run);
        self
    }

    /// Font name of the first run.
    pub fn font_name(&self) -> Option<&str> {
        self.first_run.as_ref().and_then(|r| r.font_name.as_deref())
    }

    /// Font size of the first run in points.
    pub fn font_size(&self) -> Option<f32> {
        self.first_run.as_ref().and_then(|r| r.font_size)
    }

    /// Number of whitespace-delimited words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Formatting of a single text run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunFormat {
    /// Bold run
    #[serde(default)]
    pub bold: bool,

    /// Font name
    #[serde(default)]
    pub font_name: Option<String>,

    /// Font size in points
    #[serde(default)]
    pub font_size: Option<f32>,
}

impl RunFormat {
    /// Create a bold run format.
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    /// Set the font name.
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    /// Set the font size in points.
    pub fn with_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Check for bold or larger-than-threshold font.
    pub fn is_emphasized(&self, large_font_threshold: f32) -> bool {
        self.bold || self.font_size.is_some_and(|s| s > large_font_threshold)
    }
}
