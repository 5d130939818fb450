//! JSON-file persistence for the task collection.
//!
//! The whole collection is one pretty-printed JSON array, rewritten in
//! full after every mutation. There is no locking and no partial-write
//! recovery: concurrent CLI invocations race as last-writer-wins, and a
//! crash mid-write can corrupt the file. Known limitation, accepted for a
//! single-user local tool.
//!
//! Reads are degraded-but-available: a missing, empty, or unparseable
//! file loads as an empty collection. Write failures propagate, since
//! they mean a mutation was not durably saved.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::Task;

pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Opens a store at `path`, creating parent directories and an empty
    /// `[]` file if nothing is there yet.
    pub fn open(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating data directory {}", parent.display()))?;
        }
        if !path.exists() {
            fs::write(&path, "[]")
                .with_context(|| format!("creating task file {}", path.display()))?;
        }
        Ok(Self { path })
    }

    /// Opens the store at the platform data directory (`tasks.json`).
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "tracklet")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Self::open(dirs.data_dir().join("tasks.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full persisted collection.
    ///
    /// Never fails: an unreadable or unparseable file loads as an empty
    /// collection, with a warning as the only trace of the degradation.
    pub fn load(&self) -> Vec<Task> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("could not read {}: {}", self.path.display(), err);
                return Vec::new();
            }
        };

        if data.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&data) {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!("could not parse {}: {}", self.path.display(), err);
                Vec::new()
            }
        }
    }

    /// Serializes the full collection and overwrites the file.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing task file {}", self.path.display()))?;
        tracing::debug!("saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
