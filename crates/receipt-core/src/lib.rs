//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of Receipt Points. It validates submitted
//! receipts and scores them, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (axum)                           │   │
//! │  │   POST /receipts/process        GET /receipts/{id}/points       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │validation │  │  points   │  │   │
//! │  │   │Submission │  │   Money   │  │ presence  │  │  7 rules  │  │   │
//! │  │   │ Receipt   │  │  (cents)  │  │ + format  │  │ breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Submitted and validated receipt types
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Submission → Receipt
//! - [`points`] - Receipt → Points
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{calculate, validate_receipt, ItemSubmission, ReceiptSubmission};
//!
//! let submission = ReceiptSubmission {
//!     retailer: Some("Target".to_string()),
//!     purchase_date: Some("2022-01-01".to_string()),
//!     purchase_time: Some("13:01".to_string()),
//!     total: Some("35.35".into()),
//!     items: Some(vec![
//!         ItemSubmission::new("Mountain Dew 12PK", "6.49"),
//!         ItemSubmission::new("Emils Cheese Pizza", "12.25"),
//!         ItemSubmission::new("Knorr Creamy Chicken", "1.26"),
//!         ItemSubmission::new("Doritos Nacho Cheese", "3.35"),
//!         ItemSubmission::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
//!     ]),
//! };
//!
//! let receipt = validate_receipt(&submission).unwrap();
//! assert_eq!(calculate(&receipt).unwrap(), 28);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{MoneyError, PointsError, PointsResult, ValidationError, ValidationResult};
pub use money::Money;
pub use points::{breakdown, calculate, Points, PointsBreakdown};
pub use types::*;
pub use validation::validate_receipt;
