/// Storage layer for persisting the guild snapshot
///
/// The core treats persistence as a snapshot contract: load once at session
/// start, save after every mutation. The concrete store writes a JSON
/// document; the trait keeps the engine independent of that choice.

pub mod snapshot;

// Re-export the main storage types
pub use snapshot::JsonSnapshotStore;

use thiserror::Error;

use crate::domain::GuildState;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Trait defining the snapshot load/save contract
///
/// `load` returns `None` when no snapshot exists yet (first session); a
/// corrupt snapshot is an error the caller recovers from by falling back to
/// default state. `save` is fire-and-forget from the engine's perspective.
pub trait StateStore {
    /// Load the persisted snapshot, if any
    fn load(&self) -> Result<Option<GuildState>, StorageError>;

    /// Persist the current snapshot
    fn save(&self, state: &GuildState) -> Result<(), StorageError>;
}
