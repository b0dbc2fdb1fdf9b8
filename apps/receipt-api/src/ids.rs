//! Receipt identifier generation.

use uuid::Uuid;

/// Produces identifiers for newly scored receipts.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier. Must not repeat within the process.
    fn generate(&self) -> String;
}

/// Random UUID v4 in canonical hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
