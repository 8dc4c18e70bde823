//! Storage trait abstraction.

use std::path::PathBuf;

use async_trait::async_trait;
use paceboard_core::TrackerState;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The document exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Document location
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The document was read but is not a valid tracker document
    #[error("corrupt document {}: {source}", .path.display())]
    Corrupt {
        /// Document location
        path: PathBuf,
        /// Parse failure
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Document location
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A goal holds a value JSON cannot represent (NaN or infinity)
    #[error("goal '{goal}' of user '{user}' has a non-finite value")]
    NonFinite {
        /// User name
        user: String,
        /// Goal name
        goal: String,
    },

    /// Serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where a loaded state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Read from the persisted document
    Stored,
    /// No document existed; the seed was written and returned
    Seeded,
    /// The document was unreadable or corrupt; the seed was returned and
    /// nothing was written
    Fallback,
}

/// Storage abstraction for the tracker document.
///
/// The document is always read and written whole. There is no locking:
/// two writers racing on the same target both succeed and the last one
/// wins.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load the document, seeding it if it does not exist yet.
    ///
    /// A missing document is seeded and persisted. A corrupt or unreadable
    /// one yields the seed without touching what is on disk. Only a failed
    /// seed write is reported as an error.
    async fn load(&self) -> Result<TrackerState> {
        Ok(self.load_with_source().await?.0)
    }

    /// Like [`Storage::load`], also reporting where the state came from.
    async fn load_with_source(&self) -> Result<(TrackerState, LoadSource)>;

    /// Replace the persisted document with `state`.
    async fn save(&mut self, state: &TrackerState) -> Result<()>;
}
