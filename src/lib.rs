/// Public library interface for the Quest Tracker MCP server
///
/// This module exports the server implementation and the public domain types
/// so other applications and the test suites can drive the progression
/// engine directly.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod mcp;
mod storage;
mod tools;

// Re-export public modules and types
pub use domain::*;
pub use storage::{JsonSnapshotStore, StateStore, StorageError};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main quest tracker server that implements the MCP protocol
///
/// The server owns the in-memory guild state, the snapshot store it is
/// persisted through, and the bonus source feeding the reward formula. All
/// mutation goes through the state container; every mutation is followed by
/// a snapshot save.
pub struct QuestTrackerServer {
    state: GuildState,
    store: JsonSnapshotStore,
    bonus: Box<dyn BonusSource + Send>,
}

impl QuestTrackerServer {
    /// Create a new quest tracker server with the specified snapshot path
    ///
    /// A missing snapshot starts a fresh guild; a corrupt one is logged and
    /// replaced with default state rather than failing the session.
    pub async fn new(snapshot_path: PathBuf) -> Result<Self, ServerError> {
        Self::with_bonus_source(snapshot_path, Box::new(RandomBonus)).await
    }

    /// Create a server with an injected bonus source (used by tests)
    pub async fn with_bonus_source(
        snapshot_path: PathBuf,
        bonus: Box<dyn BonusSource + Send>,
    ) -> Result<Self, ServerError> {
        tracing::info!("Initializing Quest Tracker server with snapshot: {:?}", snapshot_path);

        let store = JsonSnapshotStore::new(snapshot_path)?;
        let state = match store.load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                tracing::info!("no snapshot found, starting a fresh guild");
                GuildState::new()
            }
            Err(StorageError::Corrupt(err)) => {
                tracing::warn!("snapshot is corrupt ({}), starting a fresh guild", err);
                GuildState::new()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            state,
            store,
            bonus,
        })
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until the server is shut down or an error
    /// occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(
            "Server starting with {} quests, hunter level {}",
            self.state.quests.len(),
            self.state.stats.level
        );

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await?;

        Ok(())
    }

    /// Read access to the guild state
    pub fn state(&self) -> &GuildState {
        &self.state
    }

    /// Mutable access to the guild state (useful for testing)
    pub fn state_mut(&mut self) -> &mut GuildState {
        &mut self.state
    }

    /// Split borrow for tools that mutate state and roll the daily bonus
    pub fn parts_mut(&mut self) -> (&mut GuildState, &mut dyn BonusSource) {
        (&mut self.state, self.bonus.as_mut())
    }

    /// Persist the current state, fire-and-forget
    ///
    /// A failed save is the storage collaborator's problem; the in-memory
    /// state stays authoritative and the session keeps going.
    pub fn persist(&self) {
        if let Err(err) = self.store.save(&self.state) {
            tracing::error!("failed to save snapshot: {}", err);
        }
    }
}
