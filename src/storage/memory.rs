//! In-memory storage adapter
//!
//! Backs the cart with a plain `HashMap` behind a mutex. Useful as a
//! test double and for ephemeral carts that do not need to survive the
//! process. Clones share the same backing map, so a test can keep a
//! handle to inspect what the store wrote.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::storage::StorageAdapter;
use crate::types::CartError;

/// HashMap-backed storage adapter
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw payload currently stored under `key`, if any
    pub fn stored_bytes(&self, key: &str) -> Option<Vec<u8>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// How many writes this store has accepted
    ///
    /// Lets tests assert the write-through contract: exactly one write
    /// per mutation.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl StorageAdapter for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, CartError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    async fn write(&self, key: &str, payload: &[u8]) -> Result<(), CartError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), payload.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
