use thiserror::Error;

use crate::core::LedgerState;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Occurs when the backing storage cannot be read or written.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),
    /// Occurs when a persisted record exists but cannot be decoded.
    #[error("malformed ledger record: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// Durable storage for a [`LedgerState`]: one whole record, read and
/// overwritten in full. Handles to the backing resource are scoped per
/// call and released on every exit path.
pub trait LedgerStore {
    /// Reads and decodes the persisted record; `None` when no record
    /// exists yet.
    fn load(&self) -> Result<Option<LedgerState>>;

    /// Encodes and writes the full state, replacing any prior record.
    fn save(&self, state: &LedgerState) -> Result<()>;
}
