//! Document model types for structure classification.
//!
//! This module defines the records that flow through the audit: the
//! paragraph stream handed over by the parsing collaborator, the sections
//! the classifier reconstructs, and the per-document aggregate that the
//! export side consumes.

mod document;
mod paragraph;
mod section;
mod stats;

pub use document::{
    ContainerMetadata, Document, DocumentIdentity, DocumentInput, UNKNOWN, UNKNOWN_AUTHOR,
    UNTITLED,
};
pub use paragraph::{ParagraphRecord, RunFormat, DEFAULT_STYLE};
pub use section::{Section, SectionType};
pub use stats::{FormatQuality, HeadingStats, HierarchyIssue};
