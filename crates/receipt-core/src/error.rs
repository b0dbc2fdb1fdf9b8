//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── ValidationError  - Submitted receipt rejected (400)               │
//! │  ├── MoneyError       - Decimal amount could not be parsed             │
//! │  └── PointsError      - Score does not fit in Points (500)             │
//! │                                                                         │
//! │  receipt-api errors (app crate)                                        │
//! │  ├── StoreError       - Receipt store failures                         │
//! │  └── ApiError         - What HTTP clients see ({ "msg": ... })         │
//! │                                                                         │
//! │  Flow: MoneyError → ValidationError → ApiError → HTTP response         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Messages
//! The `Display` text of every [`ValidationError`] variant IS the message
//! returned to the client. Changing a string here changes the public API.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A submitted receipt was rejected.
///
/// Variants are listed in the order the validator checks them. The first
/// failing check wins, so a receipt missing both `retailer` and `total`
/// always reports [`ValidationError::RetailerMissing`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Retailer not present in request")]
    RetailerMissing,

    #[error("Purchase date not present in request")]
    PurchaseDateMissing,

    #[error("Purchase time not present in request")]
    PurchaseTimeMissing,

    #[error("Total not present in request")]
    TotalMissing,

    #[error("Items not present in request")]
    ItemsMissing,

    /// `index` is the zero-based position of the offending item. It is kept
    /// for logs only; the wire message does not mention it.
    #[error("Item description not present for an item")]
    ItemDescriptionMissing { index: usize },

    #[error("Item price not present for an item")]
    ItemPriceMissing { index: usize },

    // -------------------------------------------------------------------------
    // Format checks (run after every presence check has passed)
    // -------------------------------------------------------------------------
    #[error("Purchase date is not a valid date in request")]
    InvalidPurchaseDate { input: String },

    #[error("Purchase time is not a valid time in request")]
    InvalidPurchaseTime { input: String },

    /// `reason` says why the amount was refused; the wire message does not.
    #[error("Total is not a valid amount in request")]
    InvalidTotal {
        input: String,
        #[source]
        reason: MoneyError,
    },

    #[error("Item price is not a valid amount for an item")]
    InvalidItemPrice {
        index: usize,
        input: String,
        #[source]
        reason: MoneyError,
    },
}

// =============================================================================
// Money Error
// =============================================================================

/// Decimal amount parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a decimal amount")]
    InvalidFormat(String),

    /// More than two significant fractional digits ("1.255").
    #[error("'{0}' has sub-cent precision")]
    SubCentPrecision(String),

    #[error("'{0}' is out of range")]
    OutOfRange(String),

    /// Parsed fine, but receipts carry no negative amounts.
    #[error("'{0}' is negative")]
    Negative(String),
}

// =============================================================================
// Points Error
// =============================================================================

/// A valid receipt whose score does not fit in [`Points`](crate::Points).
///
/// Only reachable with prices near the top of the `Money` range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointsError {
    #[error("points overflow while scoring {rule}")]
    Overflow { rule: &'static str },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for scoring operations.
pub type PointsResult<T> = Result<T, PointsError>;

// =============================================================================
// Unit Tests
// =============================================================================
