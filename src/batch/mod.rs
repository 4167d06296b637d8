//! Resumable batch processing over a corpus directory.
//!
//! Inputs are discovered below a root, filtered against the checkpoint,
//! analyzed in chunks (in parallel within a chunk) and checkpointed after
//! every chunk. A file that fails to load still produces a document with
//! the failure recorded in its `format_issues`.

mod checkpoint;

pub use checkpoint::{Checkpoint, DEFAULT_CHECKPOINT};

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::analyze::{score_document, Analyzer};
use crate::detect::{discover_inputs_excluding, load_input};
use crate::error::Result;
use crate::model::{Document, DocumentIdentity};

/// Options for batch runs.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Checkpoint file location
    pub checkpoint_path: PathBuf,

    /// Documents per chunk between checkpoint saves
    pub checkpoint_interval: usize,

    /// Analyze documents of a chunk in parallel
    pub parallel: bool,

    /// Discard any existing checkpoint before starting
    pub reset: bool,

    /// Files and directories never treated as inputs, besides the checkpoint
    pub exclude: Vec<PathBuf>,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the checkpoint file.
    pub fn with_checkpoint(mut self, path: impl Into<PathBuf>) -> Self {
        self.checkpoint_path = path.into();
        self
    }

    /// Set the checkpoint interval (at least 1).
    pub fn with_interval(mut self, documents: usize) -> Self {
        self.checkpoint_interval = documents.max(1);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Discard the checkpoint before running.
    pub fn with_reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    /// Keep a file, or everything below a directory, out of discovery.
    pub fn with_exclude(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude.push(path.into());
        self
    }

    /// Paths skipped by discovery: the checkpoint and any exclusions.
    pub fn excluded_paths(&self) -> Vec<PathBuf> {
        std::iter::once(self.checkpoint_path.clone())
            .chain(self.exclude.iter().cloned())
            .collect()
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            checkpoint_path: PathBuf::from(DEFAULT_CHECKPOINT),
            checkpoint_interval: 10,
            parallel: true,
            reset: false,
            exclude: Vec::new(),
        }
    }
}

/// Progress notification for one finished document.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    /// Documents finished so far in this run
    pub completed: usize,
    /// Documents scheduled in this run
    pub total: usize,
    /// The document just finished
    pub document: &'a Document,
}

/// Result of a batch run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Analyzed documents in id order
    pub documents: Vec<Document>,

    /// Inputs discovered below the root
    pub total_files: usize,

    /// Inputs skipped because the checkpoint lists them as processed
    pub skipped: usize,

    /// Inputs that failed to load
    pub failed: usize,

    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl BatchReport {
    /// Documents analyzed successfully in this run.
    pub fn processed(&self) -> usize {
        self.documents.len() - self.failed
    }

    /// Elapsed time rendered like `42s`, `3.5m` or `1.2h`.
    pub fn elapsed_display(&self) -> String {
        format_duration(self.elapsed.as_secs_f64())
    }
}

/// Render seconds as `42s`, `3.5m` or `1.2h`.
pub fn format_duration(secs: f64) -> String {
    if secs < 60.0 {
        format!("{:.0}s", secs)
    } else if secs < 3600.0 {
        format!("{:.1}m", secs / 60.0)
    } else {
        format!("{:.1}h", secs / 3600.0)
    }
}

struct Outcome {
    input: PathBuf,
    document: Document,
    error: Option<String>,
}

fn checkpoint_key(path: &Path) -> String {
    path.display().to_string()
}

/// Runs an [`Analyzer`] over a corpus with checkpointing.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    analyzer: Analyzer,
    options: BatchOptions,
}

impl BatchProcessor {
    /// Create a batch processor.
    pub fn new(analyzer: Analyzer, options: BatchOptions) -> Self {
        Self { analyzer, options }
    }

    /// The batch options in use.
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Process every pending input below `root`.
    ///
    /// `progress` is called once per finished document, in id order.
    pub fn run<P, F>(&self, root: P, mut progress: F) -> Result<BatchReport>
    where
        P: AsRef<Path>,
        F: FnMut(Progress<'_>),
    {
        let start = Instant::now();
        let checkpoint_path = &self.options.checkpoint_path;

        if self.options.reset {
            Checkpoint::reset(checkpoint_path);
        }
        let mut checkpoint = Checkpoint::load(checkpoint_path);

        let inputs = discover_inputs_excluding(root, &self.options.excluded_paths())?;
        let total_files = inputs.len();
        let jobs: Vec<(u32, PathBuf)> = inputs
            .into_iter()
            .filter(|p| !checkpoint.is_processed(&checkpoint_key(p)))
            .zip(1u32..)
            .map(|(path, id)| (id, path))
            .collect();
        let skipped = total_files - jobs.len();

        log::info!(
            "Found {} inputs, {} already processed, {} to process",
            total_files,
            skipped,
            jobs.len()
        );

        let mut documents = Vec::with_capacity(jobs.len());
        let mut failed = 0;

        for chunk in jobs.chunks(self.options.checkpoint_interval.max(1)) {
            let outcomes: Vec<Outcome> = if self.options.parallel {
                chunk
                    .par_iter()
                    .map(|(id, path)| self.process(*id, path))
                    .collect()
            } else {
                chunk
                    .iter()
                    .map(|(id, path)| self.process(*id, path))
                    .collect()
            };

            for outcome in outcomes {
                let key = checkpoint_key(&outcome.input);
                match outcome.error {
                    Some(error) => {
                        failed += 1;
                        checkpoint.mark_failed(key, error);
                    }
                    None => checkpoint.mark_processed(key),
                }

                progress(Progress {
                    completed: documents.len() + 1,
                    total: jobs.len(),
                    document: &outcome.document,
                });
                documents.push(outcome.document);
            }

            checkpoint.save(checkpoint_path);
        }

        checkpoint.save(checkpoint_path);

        let report = BatchReport {
            documents,
            total_files,
            skipped,
            failed,
            elapsed: start.elapsed(),
        };
        log::info!(
            "Processed {} documents ({} failed) in {}",
            report.documents.len(),
            report.failed,
            report.elapsed_display()
        );
        Ok(report)
    }

    fn process(&self, id: u32, path: &Path) -> Outcome {
        match load_input(path) {
            Ok(input) => {
                let source = input.source.as_deref().unwrap_or(path);
                let identity = DocumentIdentity::from_path(id, source);
                Outcome {
                    input: path.to_path_buf(),
                    document: self.analyzer.analyze(identity, &input),
                    error: None,
                }
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}", path.display(), e);
                let mut document = Document::new(DocumentIdentity::from_path(id, path));
                document.record_failure(&e);
                document.format_quality = score_document(&document);
                Outcome {
                    input: path.to_path_buf(),
                    document,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
