//! # Receipt Store
//!
//! Identifier → points, for the lifetime of the process.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    InMemoryReceiptStore                                 │
//! │                                                                         │
//! │  POST /receipts/process ──► insert(id, points) ──► write lock          │
//! │                                                                         │
//! │  GET /receipts/{id}/points ──► get(id) ──────────► read lock           │
//! │                                                                         │
//! │  GET /health ──────────────► count() ────────────► read lock           │
//! │                                                                         │
//! │  Readers run in parallel. A writer holds the lock only for one          │
//! │  HashMap::insert, so lookups never observe a half-written entry.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A poisoned lock means a thread panicked while holding it. The store then
//! reports [`StoreError::Poisoned`] rather than serving possibly torn data.

use std::collections::HashMap;
use std::sync::RwLock;

use receipt_core::Points;
use thiserror::Error;

/// Receipt store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Receipt store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage for scored receipts.
pub trait ReceiptStore: Send + Sync {
    /// Stores `points` under `id`, replacing any previous value.
    fn insert(&self, id: &str, points: Points) -> StoreResult<()>;

    /// Looks up the points stored under `id`.
    fn get(&self, id: &str) -> StoreResult<Option<Points>>;

    /// Number of stored receipts.
    fn count(&self) -> StoreResult<usize>;
}

/// `RwLock<HashMap>` backed store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    records: RwLock<HashMap<String, Points>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn insert(&self, id: &str, points: Points) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        records.insert(id.to_string(), points);
        Ok(())
    }

    fn get(&self, id: &str) -> StoreResult<Option<Points>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.get(id).copied())
    }

    fn count(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_insert_then_get() {
        let store = InMemoryReceiptStore::new();
        store.insert("abc", 28).unwrap();

        assert_eq!(store.get("abc").unwrap(), Some(28));
        assert_eq!(store.get("missing").unwrap(), None);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_zero_points_are_stored() {
        let store = InMemoryReceiptStore::new();
        store.insert("zero", 0).unwrap();
        assert_eq!(store.get("zero").unwrap(), Some(0));
    }

    #[test]
    fn test_insert_overwrites() {
        let store = InMemoryReceiptStore::new();
        store.insert("abc", 1).unwrap();
        store.insert("abc", 2).unwrap();

        assert_eq!(store.get("abc").unwrap(), Some(2));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_concurrent_inserts_and_reads() {
        let store = Arc::new(InMemoryReceiptStore::new());

        let writers: Vec<_> = (0..8u64)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for n in 0..250u64 {
                        store.insert(&format!("{worker}-{n}"), worker * 1000 + n).unwrap();
                        // Reads of unrelated keys see either nothing or a whole value
                        if let Some(points) = store.get(&format!("{}-{n}", (worker + 1) % 8)).unwrap() {
                            assert_eq!(points % 1000, n);
                        }
                    }
                })
            })
            .collect();

        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(store.count().unwrap(), 2000);
        assert_eq!(store.get("7-249").unwrap(), Some(7249));
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let store = Arc::new(InMemoryReceiptStore::new());

        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = poisoner.records.write().unwrap();
            panic!("poison the store");
        })
        .join();

        assert!(matches!(store.get("abc"), Err(StoreError::Poisoned)));
        assert!(matches!(store.insert("abc", 1), Err(StoreError::Poisoned)));
    }
}
