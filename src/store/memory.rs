//! In-memory store for tests and ephemeral runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;

use super::traits::CompletionStore;

/// Process-local completion flag. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    flag: RwLock<Option<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompletionStore for MemoryStore {
    async fn load(&self) -> Result<bool, StorageError> {
        Ok(self.flag.read().await.unwrap_or(false))
    }

    async fn store(&self, completed: bool) -> Result<(), StorageError> {
        *self.flag.write().await = Some(completed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_flag_loads_as_false() {
        let store = MemoryStore::new();
        assert!(!store.load().await.unwrap());
    }

    #[tokio::test]
    async fn store_then_load() {
        let store = MemoryStore::new();
        store.store(true).await.unwrap();
        assert!(store.load().await.unwrap());
        store.store(false).await.unwrap();
        assert!(!store.load().await.unwrap());
    }
}
