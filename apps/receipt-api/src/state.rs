//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::ids::{IdGenerator, UuidGenerator};
use crate::store::{InMemoryReceiptStore, ReceiptStore};

/// Shared application state.
///
/// Cheap to clone: both collaborators sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    /// Creates state from explicit collaborators.
    pub fn new(store: Arc<dyn ReceiptStore>, ids: Arc<dyn IdGenerator>) -> Self {
        AppState { store, ids }
    }

    /// Production wiring: empty in-memory store and UUID v4 identifiers.
    pub fn in_memory() -> Self {
        AppState::new(Arc::new(InMemoryReceiptStore::new()), Arc::new(UuidGenerator))
    }
}
