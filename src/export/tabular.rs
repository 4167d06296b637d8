//! CSV export.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::Document;

use super::rows::{IssueRow, SectionRow, SummaryRow};

/// Summary file name.
pub const SUMMARY_FILE: &str = "summary.csv";
/// Section detail file name.
pub const SECTIONS_FILE: &str = "sections.csv";
/// Issue file name.
pub const ISSUES_FILE: &str = "issues.csv";

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the CSV reports into `dir`, returning the files written.
///
/// `issues.csv` is only written when at least one document has an issue;
/// otherwise a leftover one from an earlier export is removed.
pub fn write_csv<P: AsRef<Path>>(dir: P, documents: &[Document]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .map_err(|e| Error::Export(format!("cannot create {}: {}", dir.display(), e)))?;

    let summary: Vec<SummaryRow> = documents.iter().map(SummaryRow::from_document).collect();
    let sections: Vec<SectionRow> = documents.iter().flat_map(SectionRow::from_document).collect();
    let issues: Vec<IssueRow> = documents.iter().flat_map(IssueRow::from_document).collect();

    let mut written = Vec::new();

    let path = dir.join(SUMMARY_FILE);
    write_rows(&path, &summary)?;
    written.push(path);

    let path = dir.join(SECTIONS_FILE);
    write_rows(&path, &sections)?;
    written.push(path);

    let path = dir.join(ISSUES_FILE);
    if !issues.is_empty() {
        write_rows(&path, &issues)?;
        written.push(path);
    } else if path.exists() {
        fs::remove_file(&path)
            .map_err(|e| Error::Export(format!("cannot remove {}: {}", path.display(), e)))?;
    }

    log::info!(
        "Exported {} documents, {} sections, {} issues to {}",
        summary.len(),
        sections.len(),
        issues.len(),
        dir.display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentIdentity, Section};
    use tempfile::tempdir;

    fn document(id: u32) -> Document {
        let mut doc = Document::new(DocumentIdentity::from_path(id, format!("corpus/d{}.json", id)));
        doc.title = "A, quoted \"title\"".to_string();
        doc.sections = vec![Section::heading("Intro", "Heading 1", "Heading 1")];
        doc
    }

    #[test]
    fn test_no_issues_file_without_issues() {
        let dir = tempdir().unwrap();
        let written = write_csv(dir.path(), &[document(1)]).unwrap();
        assert_eq!(written.len(), 2);
        assert!(!dir.path().join(ISSUES_FILE).exists());

        let summary = fs::read_to_string(dir.path().join(SUMMARY_FILE)).unwrap();
        let mut lines = summary.lines();
        assert!(lines.next().unwrap().starts_with("ID,Folder,File Name,Title"));
        assert!(lines.next().unwrap().contains("\"A, quoted \"\"title\"\"\""));
    }

    #[test]
    fn test_issues_file_written() {
        let dir = tempdir().unwrap();
        let mut doc = document(2);
        doc.images_missing_captions.push("[Figure 1]".to_string());
        let written = write_csv(dir.path().join("out"), &[document(1), doc]).unwrap();
        assert_eq!(written.len(), 3);

        let issues = fs::read_to_string(dir.path().join("out").join(ISSUES_FILE)).unwrap();
        assert_eq!(issues.lines().count(), 2);
        assert!(issues.contains("Missing Caption"));
    }

    #[test]
    fn test_stale_issues_file_removed() {
        let dir = tempdir().unwrap();
        let mut doc = document(1);
        doc.images_missing_captions.push("[Figure 1]".to_string());
        write_csv(dir.path(), &[doc]).unwrap();
        assert!(dir.path().join(ISSUES_FILE).exists());

        let written = write_csv(dir.path(), &[document(1)]).unwrap();
        assert!(!written.contains(&dir.path().join(ISSUES_FILE)));
        assert!(!dir.path().join(ISSUES_FILE).exists());
    }
}
