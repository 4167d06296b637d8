//! Resumable batch state.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default checkpoint file name.
pub const DEFAULT_CHECKPOINT: &str = "processing_checkpoint.json";

/// Which inputs a batch has already handled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Inputs analyzed successfully
    #[serde(default)]
    pub processed: BTreeSet<String>,

    /// Inputs that failed, with the error message
    #[serde(default)]
    pub failed: BTreeMap<String, String>,

    /// Time of the last save
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Checkpoint {
    /// Read a checkpoint file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| Error::Checkpoint(format!("{}: {}", path.display(), e)))
    }

    /// Load a checkpoint, starting empty if it is missing or unreadable.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(checkpoint) => {
                log::info!(
                    "Resuming from checkpoint: {} processed, {} failed",
                    checkpoint.processed.len(),
                    checkpoint.failed.len()
                );
                checkpoint
            }
            Err(e) => {
                log::warn!("Ignoring checkpoint {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write the checkpoint, stamping the current time.
    pub fn write<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.timestamp = Some(Utc::now());
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Write the checkpoint, logging instead of failing.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        if let Err(e) = self.write(path) {
            log::error!("Failed to save checkpoint {}: {}", path.display(), e);
        }
    }

    /// Delete a checkpoint file if present.
    pub fn reset<P: AsRef<Path>>(path: P) {
        let path = path.as_ref();
        if path.exists() {
            match fs::remove_file(path) {
                Ok(()) => log::info!("Checkpoint {} reset", path.display()),
                Err(e) => log::warn!("Failed to reset checkpoint {}: {}", path.display(), e),
            }
        }
    }

    /// Check if an input was already processed.
    pub fn is_processed(&self, key: &str) -> bool {
        self.processed.contains(key)
    }

    /// Record a successful input.
    pub fn mark_processed(&mut self, key: impl Into<String>) {
        let key = key.into();
        self.failed.remove(&key);
        self.processed.insert(key);
    }

    /// Record a failed input.
    pub fn mark_failed(&mut self, key: impl Into<String>, error: impl Into<String>) {
        self.failed.insert(key.into(), error.into());
    }
}
