//! # Validation Module
//!
//! Turns a [`ReceiptSubmission`] into a typed [`Receipt`] or explains why it
//! cannot.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Phases                                  │
//! │                                                                         │
//! │  Phase 1: Presence (first failure wins)                                │
//! │  ├── retailer                                                          │
//! │  ├── purchaseDate                                                      │
//! │  ├── purchaseTime                                                      │
//! │  ├── total                                                             │
//! │  ├── items (non-empty)                                                 │
//! │  └── per item, in order: shortDescription, then price                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Phase 2: Format (only once every field is present)                    │
//! │  ├── purchaseDate  → NaiveDate  (YYYY-MM-DD)                           │
//! │  ├── purchaseTime  → NaiveTime  (HH:MM, 24-hour)                       │
//! │  ├── total         → Money      (non-negative, cents precision)        │
//! │  └── item prices   → Money      (non-negative, cents precision)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Receipt (typed, ready for points::calculate)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Presence is truthiness: a missing key, `null`, `""` and the number `0`
//! are all "not present".
//!
//! ## Usage
//! ```rust
//! use receipt_core::types::{ItemSubmission, ReceiptSubmission};
//! use receipt_core::validation::validate_receipt;
//!
//! let submission = ReceiptSubmission {
//!     retailer: Some("Target".to_string()),
//!     purchase_date: Some("2022-01-01".to_string()),
//!     purchase_time: Some("13:01".to_string()),
//!     total: Some("6.49".into()),
//!     items: Some(vec![ItemSubmission::new("Mountain Dew 12PK", "6.49")]),
//! };
//!
//! let receipt = validate_receipt(&submission).unwrap();
//! assert_eq!(receipt.total.cents(), 649);
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::{MoneyError, ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{AmountField, ItemSubmission, LineItem, Receipt, ReceiptSubmission};

/// `YYYY-MM-DD`
const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// 24-hour `HH:MM`
const PURCHASE_TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a submitted receipt.
///
/// ## Returns
/// - `Ok(Receipt)` when every presence and format check passes
/// - `Err(ValidationError)` for the FIRST failing check, in the order shown
///   in the module docs
pub fn validate_receipt(submission: &ReceiptSubmission) -> ValidationResult<Receipt> {
    // Phase 1: presence
    let retailer = require_text(&submission.retailer, ValidationError::RetailerMissing)?;
    let purchase_date = require_text(&submission.purchase_date, ValidationError::PurchaseDateMissing)?;
    let purchase_time = require_text(&submission.purchase_time, ValidationError::PurchaseTimeMissing)?;
    let total = require_amount(&submission.total, ValidationError::TotalMissing)?;
    let items = require_items(&submission.items)?;

    let mut present_items = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        present_items.push(require_item(index, item)?);
    }

    // Phase 2: format
    let purchase_date = parse_purchase_date(purchase_date)?;
    let purchase_time = parse_purchase_time(purchase_time)?;
    let total = parse_amount(total).map_err(|reason| ValidationError::InvalidTotal {
        input: total.to_decimal_text(),
        reason,
    })?;

    let items = present_items
        .into_iter()
        .enumerate()
        .map(|(index, (description, price))| {
            let parsed = parse_amount(price).map_err(|reason| ValidationError::InvalidItemPrice {
                index,
                input: price.to_decimal_text(),
                reason,
            })?;
            Ok(LineItem {
                short_description: description.to_string(),
                price: parsed,
            })
        })
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(Receipt {
        retailer: retailer.to_string(),
        purchase_date,
        purchase_time,
        total,
        items,
    })
}

// =============================================================================
// Presence Checks
// =============================================================================

fn require_text<'a>(field: &'a Option<String>, missing: ValidationError) -> ValidationResult<&'a str> {
    match field.as_deref() {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(missing),
    }
}

fn require_amount<'a>(
    field: &'a Option<AmountField>,
    missing: ValidationError,
) -> ValidationResult<&'a AmountField> {
    match field {
        Some(amount) if amount.is_present() => Ok(amount),
        _ => Err(missing),
    }
}

fn require_items(items: &Option<Vec<ItemSubmission>>) -> ValidationResult<&[ItemSubmission]> {
    match items.as_deref() {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(ValidationError::ItemsMissing),
    }
}

/// Description is checked before price within the same item.
fn require_item(index: usize, item: &ItemSubmission) -> ValidationResult<(&str, &AmountField)> {
    let description = require_text(
        &item.short_description,
        ValidationError::ItemDescriptionMissing { index },
    )?;
    let price = require_amount(&item.price, ValidationError::ItemPriceMissing { index })?;
    Ok((description, price))
}

// =============================================================================
// Format Checks
// =============================================================================

fn parse_purchase_date(input: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(input, PURCHASE_DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidPurchaseDate {
            input: input.to_string(),
        }
    })
}

fn parse_purchase_time(input: &str) -> ValidationResult<NaiveTime> {
    NaiveTime::parse_from_str(input, PURCHASE_TIME_FORMAT).map_err(|_| {
        ValidationError::InvalidPurchaseTime {
            input: input.to_string(),
        }
    })
}

/// Parses a receipt amount. Negative amounts are not valid on a receipt.
fn parse_amount(amount: &AmountField) -> Result<Money, MoneyError> {
    let text = amount.to_decimal_text();
    let money = Money::parse(&text)?;
    if money.is_negative() {
        return Err(MoneyError::Negative(text));
    }
    Ok(money)
}

// =============================================================================
// Unit Tests
// =============================================================================
