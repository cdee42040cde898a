/// JSON file implementation of the snapshot store
///
/// The whole guild state is one JSON document on disk. Writes go through a
/// temp file followed by a rename so a crash mid-write never leaves a
/// half-written snapshot behind.

use std::fs;
use std::path::PathBuf;

use crate::domain::GuildState;
use crate::storage::{StateStore, StorageError};

/// Snapshot store writing a single JSON document
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a store for the given snapshot path
    ///
    /// Parent directories are created up front so the first save cannot fail
    /// on a missing directory.
    pub fn new(path: PathBuf) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        tracing::info!("snapshot store initialized at: {:?}", path);
        Ok(Self { path })
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StateStore for JsonSnapshotStore {
    fn load(&self) -> Result<Option<GuildState>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let state: GuildState = serde_json::from_str(&contents)?;
        tracing::debug!(
            quests = state.quests.len(),
            level = state.stats.level,
            "loaded snapshot"
        );
        Ok(Some(state))
    }

    fn save(&self, state: &GuildState) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(state)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!("saved snapshot to {:?}", self.path);
        Ok(())
    }
}
