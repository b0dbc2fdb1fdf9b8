//! # Domain Types
//!
//! Receipt types used throughout Receipt Points.
//!
//! ## Two Shapes of a Receipt
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt Types                                   │
//! │                                                                         │
//! │  ┌───────────────────────┐   validate   ┌───────────────────────┐      │
//! │  │  ReceiptSubmission    │ ───────────► │       Receipt         │      │
//! │  │  ───────────────────  │              │  ───────────────────  │      │
//! │  │  retailer?   String   │              │  retailer   String    │      │
//! │  │  purchaseDate? String │              │  purchase_date Date   │      │
//! │  │  purchaseTime? String │              │  purchase_time Time   │      │
//! │  │  total?  AmountField  │              │  total      Money     │      │
//! │  │  items?  [ItemSub..]  │              │  items  [LineItem]≥1  │      │
//! │  └───────────────────────┘              └───────────────────────┘      │
//! │     (what the client sent)               (what points are computed on) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every submission field is optional so that a missing field surfaces as a
//! specific [`ValidationError`](crate::ValidationError) instead of a generic
//! deserialization failure.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Amount Field
// =============================================================================

/// A money amount as it appears on the wire: `"35.35"` or `35.35`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    Text(String),
    Number(serde_json::Number),
}

impl AmountField {
    /// Presence in the truthy sense: an empty string and the number zero
    /// count as absent, the string `"0.00"` does not.
    pub fn is_present(&self) -> bool {
        match self {
            AmountField::Text(text) => !text.is_empty(),
            AmountField::Number(number) => number.as_f64().is_some_and(|value| value != 0.0),
        }
    }

    /// Decimal text form, ready for [`Money::parse`].
    pub fn to_decimal_text(&self) -> String {
        match self {
            AmountField::Text(text) => text.clone(),
            AmountField::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for AmountField {
    fn from(text: &str) -> Self {
        AmountField::Text(text.to_string())
    }
}

// =============================================================================
// Submission (wire document)
// =============================================================================

/// A receipt exactly as submitted to `POST /receipts/process`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,

    /// Expected as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,

    /// Expected as 24-hour `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<AmountField>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemSubmission>>,
}

/// One line item as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<AmountField>,
}

impl ItemSubmission {
    /// Convenience constructor for a fully populated item.
    pub fn new(short_description: &str, price: &str) -> Self {
        ItemSubmission {
            short_description: Some(short_description.to_string()),
            price: Some(AmountField::from(price)),
        }
    }
}

// =============================================================================
// Receipt (validated)
// =============================================================================

/// A receipt that passed validation.
///
/// ## Invariants
/// - `retailer` is non-empty
/// - `total` and every item price are non-negative
/// - `items` holds at least one entry
/// - every item description is non-empty (it may still be all whitespace)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub total: Money,
    pub items: Vec<LineItem>,
}

/// A validated line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub short_description: String,
    pub price: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
