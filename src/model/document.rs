//! Document-level types.

use super::{FormatQuality, HeadingStats, HierarchyIssue, ParagraphRecord, Section};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Title used when neither metadata nor text provide one.
pub const UNTITLED: &str = "Untitled";

/// Author used when neither metadata nor text provide one.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Text-derived author used when the document has no second paragraph.
pub const UNKNOWN: &str = "Unknown";

/// Everything the parsing collaborator extracts from one source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Path of the original document, if different from the dump itself
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Container-declared metadata
    #[serde(default)]
    pub metadata: ContainerMetadata,

    /// Body paragraphs in document order (required, so unrelated JSON is rejected)
    pub paragraphs: Vec<ParagraphRecord>,

    /// Table cell text, used for word counting only
    #[serde(default)]
    pub table_cells: Vec<String>,

    /// Embedded-image relationship targets (e.g. `media/image7.png`)
    #[serde(default)]
    pub image_targets: Vec<String>,

    /// Raw footnote-reference count
    #[serde(default)]
    pub footnote_count: u32,
}

impl DocumentInput {
    /// Create an input from a paragraph list.
    pub fn from_paragraphs(paragraphs: Vec<ParagraphRecord>) -> Self {
        Self {
            paragraphs,
            ..Default::default()
        }
    }

    /// Set container metadata.
    pub fn with_metadata(mut self, title: Option<&str>, author: Option<&str>) -> Self {
        self.metadata = ContainerMetadata {
            title: title.map(str::to_string),
            author: author.map(str::to_string),
        };
        self
    }

    /// Set image relationship targets.
    pub fn with_images<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_targets = targets.into_iter().map(Into::into).collect();
        self
    }

    /// Set table cell text.
    pub fn with_table_cells<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table_cells = cells.into_iter().map(Into::into).collect();
        self
    }

    /// Set the footnote count.
    pub fn with_footnotes(mut self, count: u32) -> Self {
        self.footnote_count = count;
        self
    }
}

/// Title and author as declared by the document container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerMetadata {
    /// Declared title
    #[serde(default)]
    pub title: Option<String>,

    /// Declared author
    #[serde(default)]
    pub author: Option<String>,
}

impl ContainerMetadata {
    /// Declared title, if present and non-blank.
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Declared author, if present and non-blank.
    pub fn author(&self) -> Option<&str> {
        non_blank(self.author.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Identity of one input file within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentIdentity {
    /// Sequential id within the run (1-based)
    pub id: u32,

    /// File path
    pub path: PathBuf,

    /// Display name (file name)
    pub name: String,

    /// Name of the containing folder
    pub parent_folder: String,
}

impl DocumentIdentity {
    /// Derive display name and parent folder from a path.
    pub fn from_path(id: u32, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parent_folder = path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            id,
            path: path.to_path_buf(),
            name,
            parent_folder,
        }
    }
}

/// A fully analyzed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Sequential id within the run
    pub id: u32,

    /// Source path
    pub path: PathBuf,

    /// Display name
    pub name: String,

    /// Name of the containing folder
    pub parent_folder: String,

    /// Extracted title
    pub title: String,

    /// Author from container metadata (falls back to the text-derived author)
    pub author: String,

    /// Author taken from the second non-empty paragraph
    pub author_from_text: String,

    /// Words across paragraphs and table cells
    pub word_count: usize,

    /// Distinct embedded-image targets
    pub image_count: usize,

    /// Logical images after collapsing generated duplicates
    pub unique_image_count: usize,

    /// Classified sections in document order
    pub sections: Vec<Section>,

    /// Reference entries in right-to-left script
    pub arabic_reference_count: u32,

    /// Reference entries in Latin script
    pub english_reference_count: u32,

    /// Footnote references
    pub footnote_count: u32,

    /// Whether headings predominantly use proper styles
    pub uses_proper_styles: bool,

    /// Overall verdict
    pub format_quality: FormatQuality,

    /// Free-text issues (including processing failures)
    pub format_issues: Vec<String>,

    /// Marker texts of images without caption
    pub images_missing_captions: Vec<String>,

    /// Declared/suggested heading-style mismatches
    pub heading_hierarchy_issues: Vec<HierarchyIssue>,

    /// Heading-style histogram
    pub heading_stats: HeadingStats,
}

impl Document {
    /// Create an empty document for the given identity.
    pub fn new(identity: DocumentIdentity) -> Self {
        Self {
            id: identity.id,
            path: identity.path,
            name: identity.name,
            parent_folder: identity.parent_folder,
            title: UNTITLED.to_string(),
            author: UNKNOWN_AUTHOR.to_string(),
            author_from_text: UNKNOWN.to_string(),
            word_count: 0,
            image_count: 0,
            unique_image_count: 0,
            sections: Vec::new(),
            arabic_reference_count: 0,
            english_reference_count: 0,
            footnote_count: 0,
            uses_proper_styles: true,
            format_quality: FormatQuality::default(),
            format_issues: Vec::new(),
            images_missing_captions: Vec::new(),
            heading_hierarchy_issues: Vec::new(),
            heading_stats: HeadingStats::default(),
        }
    }

    /// Sum of all recorded issues.
    pub fn total_format_issues(&self) -> usize {
        self.format_issues.len()
            + self.images_missing_captions.len()
            + self.heading_hierarchy_issues.len()
    }

    /// Arabic and English reference entries combined.
    pub fn total_references(&self) -> u32 {
        self.arabic_reference_count + self.english_reference_count
    }

    /// Heading sections in document order.
    pub fn headings(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_heading())
    }

    /// Image sections in document order.
    pub fn images(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_image())
    }

    /// Record a processing failure as a format issue.
    pub fn record_failure(&mut self, err: &crate::Error) {
        self.format_issues.push(format!("Processing failed: {}", err));
    }
}
