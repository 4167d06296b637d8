//! Export of analyzed documents.
//!
//! Documents are flattened into summary, section and issue rows for CSV,
//! or serialized whole into a JSON report with corpus totals.

mod json;
mod rows;
mod tabular;
mod totals;

pub use json::{document_to_json, to_json, JsonFormat, Report};
pub use rows::{truncate_content, IssueRow, IssueType, SectionRow, SummaryRow, NOT_AVAILABLE};
pub use tabular::{write_csv, ISSUES_FILE, SECTIONS_FILE, SUMMARY_FILE};
pub use totals::BatchTotals;
