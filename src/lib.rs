//! # docaudit
//!
//! Heuristic structure classification and formatting-quality scoring for
//! word-processing documents.
//!
//! The library consumes the paragraph stream of a document (text, declared
//! style, run formatting, position) as produced by a document parser, and
//! reconstructs titles, headings, image markers, captions and reference
//! lists well enough to score formatting quality and to suggest fixes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docaudit::analyze_file;
//!
//! fn main() -> docaudit::Result<()> {
//!     let doc = analyze_file("corpus/paper.json")?;
//!
//!     println!("{}: {}", doc.title, doc.format_quality);
//!     for issue in &doc.heading_hierarchy_issues {
//!         println!("{} -> {}", issue.heading, issue.suggested_style);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heading detection**: styled, emphasized, numbered and bulleted headings
//! - **Style advice**: suggested `Heading N` levels for unstyled headings
//! - **Caption linking**: figure/table markers matched to their captions
//! - **Reference counting**: Arabic and Latin reference entries
//! - **Swappable patterns**: regex table per script and construct, loadable from JSON
//! - **Batch processing**: parallel, resumable runs with CSV and JSON export

pub mod analyze;
pub mod batch;
pub mod classify;
pub mod detect;
pub mod error;
pub mod export;
pub mod model;
pub mod patterns;

// Re-export commonly used types
pub use analyze::{AnalyzeOptions, Analyzer};
pub use batch::{format_duration, BatchOptions, BatchProcessor, BatchReport, Checkpoint, Progress};
pub use classify::{Classification, StructureClassifier};
pub use detect::{discover_inputs, discover_inputs_excluding, is_candidate, load_input};
pub use error::{Error, Result};
pub use export::{write_csv, BatchTotals, JsonFormat, Report};
pub use model::{
    Document, DocumentIdentity, DocumentInput, FormatQuality, HeadingStats, HierarchyIssue,
    ParagraphRecord, RunFormat, Section, SectionType,
};
pub use patterns::{Construct, PatternSpec, PatternTable, Script};

use std::path::Path;

/// Analyze an in-memory paragraph stream with default options.
///
/// # Example
///
/// ```
/// use docaudit::{analyze, DocumentInput, ParagraphRecord};
///
/// let input = DocumentInput::from_paragraphs(vec![
///     ParagraphRecord::new(0, "A Study of Rivers"),
///     ParagraphRecord::new(1, "J. Doe"),
///     ParagraphRecord::new(2, "2.3 Methodology"),
/// ]);
/// let doc = analyze(&input);
/// assert_eq!(doc.sections[1].suggested_style.as_deref(), Some("Heading 3"));
/// ```
pub fn analyze(input: &DocumentInput) -> Document {
    let path = input.source.clone().unwrap_or_default();
    Analyzer::default().analyze(DocumentIdentity::from_path(1, path), input)
}

/// Load and analyze one paragraph dump.
///
/// # Arguments
///
/// * `path` - Path to the JSON paragraph dump
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    analyze_file_with_options(path, AnalyzeOptions::default())
}

/// Load and analyze one paragraph dump with custom options.
///
/// # Example
///
/// ```no_run
/// use docaudit::{analyze_file_with_options, AnalyzeOptions};
///
/// let options = AnalyzeOptions::new().with_max_heading_words(15);
/// let doc = analyze_file_with_options("paper.json", options).unwrap();
/// ```
pub fn analyze_file_with_options<P: AsRef<Path>>(
    path: P,
    options: AnalyzeOptions,
) -> Result<Document> {
    let path = path.as_ref();
    let input = load_input(path)?;
    let source = input.source.as_deref().unwrap_or(path);
    let identity = DocumentIdentity::from_path(1, source);
    Ok(Analyzer::new(options).analyze(identity, &input))
}

/// Builder for analyzing single documents or whole corpora.
///
/// # Example
///
/// ```no_run
/// use docaudit::DocAudit;
///
/// let report = DocAudit::new()
///     .with_patterns_file("patterns.json")?
///     .with_checkpoint("state.json")
///     .sequential()
///     .run("corpus", |_| {})?;
/// println!("{} documents", report.documents.len());
/// # Ok::<(), docaudit::Error>(())
/// ```
pub struct DocAudit {
    analyze_options: AnalyzeOptions,
    batch_options: BatchOptions,
}

impl DocAudit {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            analyze_options: AnalyzeOptions::default(),
            batch_options: BatchOptions::default(),
        }
    }

    /// Use a custom pattern table.
    pub fn with_patterns(mut self, patterns: PatternTable) -> Self {
        self.analyze_options = self.analyze_options.with_patterns(patterns);
        self
    }

    /// Load a pattern table from a JSON file.
    pub fn with_patterns_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        Ok(self.with_patterns(PatternTable::load(path)?))
    }

    /// Replace the analysis options.
    pub fn with_options(mut self, options: AnalyzeOptions) -> Self {
        self.analyze_options = options;
        self
    }

    /// Set the checkpoint file.
    pub fn with_checkpoint(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.batch_options = self.batch_options.with_checkpoint(path);
        self
    }

    /// Discard the checkpoint before a batch run.
    pub fn reset(mut self) -> Self {
        self.batch_options = self.batch_options.with_reset(true);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.batch_options = self.batch_options.sequential();
        self
    }

    /// Analyze one paragraph dump.
    pub fn analyze_file<P: AsRef<Path>>(self, path: P) -> Result<Document> {
        analyze_file_with_options(path, self.analyze_options)
    }

    /// Run a batch over a corpus directory.
    pub fn run<P, F>(self, root: P, progress: F) -> Result<BatchReport>
    where
        P: AsRef<Path>,
        F: FnMut(Progress<'_>),
    {
        BatchProcessor::new(Analyzer::new(self.analyze_options), self.batch_options)
            .run(root, progress)
    }
}

impl Default for DocAudit {
    fn default() -> Self {
        Self::new()
    }
}
