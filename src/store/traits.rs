//! Storage capability for the persisted completion flag.

use async_trait::async_trait;

use crate::error::StorageError;

/// Storage key for the completion flag. The version suffix is the only
/// migration mechanism: bumping it resets completion for every user.
pub const COMPLETION_KEY: &str = "demo-guided-tour-complete-v1";

/// Backend-agnostic persistence for the tour completion flag.
///
/// Injected into the coordinator so tests run without a real backend.
/// Both operations are best-effort at the call sites: an absent key loads
/// as `false`, and write failures are logged, never fatal.
#[async_trait]
pub trait CompletionStore: Send + Sync {
    /// Read the persisted flag.
    async fn load(&self) -> Result<bool, StorageError>;

    /// Write the flag.
    async fn store(&self, completed: bool) -> Result<(), StorageError>;
}
