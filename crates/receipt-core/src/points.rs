//! # Points Module
//!
//! The loyalty points rules. Pure and deterministic: the same [`Receipt`]
//! always scores the same.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Points Rules                                     │
//! │                                                                         │
//! │  Rule                     Condition                        Points       │
//! │  ──────────────────────   ──────────────────────────────   ──────────   │
//! │  Retailer name            each ASCII letter or digit       +1 each      │
//! │  Round-dollar total       total has no cents               +50          │
//! │  Quarter multiple         total % $0.25 == 0               +25          │
//! │  Item pairs               every 2 items                    +5 each      │
//! │  Description length       trimmed length % 3 == 0          ceil(p×0.2)  │
//! │  Odd purchase day         day of month is odd              +6           │
//! │  Afternoon purchase       14:01 ..= 15:59                  +10          │
//! │                                                                         │
//! │  Every rule is independent. The score is the plain sum, checked for    │
//! │  overflow: huge prices yield PointsError instead of a wrapped score.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use receipt_core::points::calculate;
//! use receipt_core::types::{ItemSubmission, ReceiptSubmission};
//! use receipt_core::validation::validate_receipt;
//!
//! let receipt = validate_receipt(&ReceiptSubmission {
//!     retailer: Some("M&M Corner Market".to_string()),
//!     purchase_date: Some("2022-03-20".to_string()),
//!     purchase_time: Some("14:33".to_string()),
//!     total: Some("9.00".into()),
//!     items: Some(vec![ItemSubmission::new("Gatorade", "2.25"); 4]),
//! })
//! .unwrap();
//!
//! assert_eq!(calculate(&receipt).unwrap(), 109);
//! ```

use chrono::{Datelike, NaiveTime, Timelike};

use crate::error::{PointsError, PointsResult};
use crate::money::Money;
use crate::types::Receipt;

/// A loyalty score. Never negative.
pub type Points = u64;

const ROUND_DOLLAR_BONUS: Points = 50;
const QUARTER_MULTIPLE_BONUS: Points = 25;
const QUARTER: Money = Money::from_cents(25);
const ITEM_PAIR_BONUS: Points = 5;
/// 20% of the item price, in basis points.
const DESCRIPTION_BONUS_RATE_BPS: u32 = 2_000;
const ODD_DAY_BONUS: Points = 6;
const AFTERNOON_BONUS: Points = 10;

// =============================================================================
// Points Breakdown
// =============================================================================

/// Points earned by each rule.
///
/// Kept separate from the total so logs and tests can see which rule fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: Points,
    pub round_dollar_total: Points,
    pub quarter_multiple_total: Points,
    pub item_pairs: Points,
    pub item_descriptions: Points,
    pub odd_purchase_day: Points,
    pub afternoon_purchase: Points,
}

impl PointsBreakdown {
    /// Sum of every rule.
    pub fn total(&self) -> PointsResult<Points> {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .try_fold(0, checked_add("total"))
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Scores a receipt.
pub fn calculate(receipt: &Receipt) -> PointsResult<Points> {
    breakdown(receipt)?.total()
}

/// Scores a receipt rule by rule.
pub fn breakdown(receipt: &Receipt) -> PointsResult<PointsBreakdown> {
    Ok(PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar_total: if receipt.total.is_whole_dollars() {
            ROUND_DOLLAR_BONUS
        } else {
            0
        },
        quarter_multiple_total: if receipt.total.is_multiple_of(QUARTER) {
            QUARTER_MULTIPLE_BONUS
        } else {
            0
        },
        item_pairs: (receipt.items.len() / 2) as Points * ITEM_PAIR_BONUS,
        item_descriptions: receipt
            .items
            .iter()
            .map(|item| description_points(&item.short_description, item.price))
            .try_fold(0, checked_add("item descriptions"))?,
        odd_purchase_day: if receipt.purchase_date.day() % 2 == 1 {
            ODD_DAY_BONUS
        } else {
            0
        },
        afternoon_purchase: if is_afternoon(receipt.purchase_time) {
            AFTERNOON_BONUS
        } else {
            0
        },
    })
}

fn checked_add(rule: &'static str) -> impl Fn(Points, Points) -> PointsResult<Points> {
    move |acc, points| acc.checked_add(points).ok_or(PointsError::Overflow { rule })
}

/// One point per ASCII letter or digit; spaces and punctuation are ignored.
fn retailer_name_points(retailer: &str) -> Points {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as Points
}

/// `ceil(price × 0.2)` when the trimmed description length is a multiple of
/// three. An all-whitespace description trims to length 0 and qualifies.
///
/// Length is counted in UTF-16 code units, so an emoji counts as two.
fn description_points(description: &str, price: Money) -> Points {
    if trim_description(description).encode_utf16().count() % 3 != 0 {
        return 0;
    }
    // Validated prices are non-negative, so this never clamps in practice
    Points::try_from(price.ceil_dollars_at_rate(DESCRIPTION_BONUS_RATE_BPS)).unwrap_or(0)
}

/// Unicode whitespace plus the byte order mark.
fn trim_description(description: &str) -> &str {
    description.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// After 14:00 and before 16:00. Exactly 14:00 does not count.
fn is_afternoon(time: NaiveTime) -> bool {
    (time.hour() == 14 && time.minute() != 0) || time.hour() == 15
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemSubmission, LineItem, ReceiptSubmission};
    use crate::validation::validate_receipt;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn receipt(
        retailer: &str,
        date: &str,
        time: &str,
        total: &str,
        items: &[(&str, &str)],
    ) -> Receipt {
        validate_receipt(&ReceiptSubmission {
            retailer: Some(retailer.to_string()),
            purchase_date: Some(date.to_string()),
            purchase_time: Some(time.to_string()),
            total: Some(total.into()),
            items: Some(
                items
                    .iter()
                    .map(|(description, price)| ItemSubmission::new(description, price))
                    .collect(),
            ),
        })
        .unwrap()
    }

    fn target_receipt() -> Receipt {
        receipt(
            "Target",
            "2022-01-01",
            "13:01",
            "35.35",
            &[
                ("Mountain Dew 12PK", "6.49"),
                ("Emils Cheese Pizza", "12.25"),
                ("Knorr Creamy Chicken", "1.26"),
                ("Doritos Nacho Cheese", "3.35"),
                ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        )
    }

    /// Single neutral item, even day, morning: only the rule under test fires.
    fn with_total(total: &str) -> Receipt {
        receipt("&", "2022-01-02", "09:00", total, &[("ab", "1.00")])
    }

    fn with_time(time: &str) -> Receipt {
        receipt("&", "2022-01-02", time, "1.01", &[("ab", "1.00")])
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let points = breakdown(&target_receipt()).unwrap();

        assert_eq!(points.retailer_name, 6);
        assert_eq!(points.round_dollar_total, 0);
        assert_eq!(points.quarter_multiple_total, 0);
        assert_eq!(points.item_pairs, 10);
        assert_eq!(points.item_descriptions, 6);
        assert_eq!(points.odd_purchase_day, 6);
        assert_eq!(points.afternoon_purchase, 0);
        assert_eq!(points.total().unwrap(), 28);
        assert_eq!(calculate(&target_receipt()).unwrap(), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let r = receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            "9.00",
            &[
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
            ],
        );
        let points = breakdown(&r).unwrap();

        assert_eq!(points.retailer_name, 14);
        assert_eq!(points.round_dollar_total, 50);
        assert_eq!(points.quarter_multiple_total, 25);
        assert_eq!(points.item_pairs, 10);
        assert_eq!(points.item_descriptions, 0);
        assert_eq!(points.odd_purchase_day, 0);
        assert_eq!(points.afternoon_purchase, 10);
        assert_eq!(points.total().unwrap(), 109);
    }

    #[test]
    fn test_retailer_name_counts_ascii_alphanumerics_only() {
        assert_eq!(retailer_name_points("Target"), 6);
        assert_eq!(retailer_name_points("M&M Corner Market"), 14);
        assert_eq!(retailer_name_points("7-Eleven"), 7);
        assert_eq!(retailer_name_points("Café"), 3);
        assert_eq!(retailer_name_points("   "), 0);
    }

    #[test]
    fn test_round_dollar_and_quarter_are_independent() {
        let round = breakdown(&with_total("9.00")).unwrap();
        assert_eq!(round.round_dollar_total + round.quarter_multiple_total, 75);

        let quarter_only = breakdown(&with_total("1.25")).unwrap();
        assert_eq!(quarter_only.round_dollar_total, 0);
        assert_eq!(quarter_only.quarter_multiple_total, 25);

        let neither = breakdown(&with_total("35.35")).unwrap();
        assert_eq!(neither.round_dollar_total, 0);
        assert_eq!(neither.quarter_multiple_total, 0);

        // $0.00 is both a round dollar amount and a multiple of $0.25
        let zero = breakdown(&with_total("0.00")).unwrap();
        assert_eq!(zero.round_dollar_total + zero.quarter_multiple_total, 75);
    }

    #[test]
    fn test_item_pairs() {
        let one = receipt("&", "2022-01-02", "09:00", "1.01", &[("ab", "1.00")]);
        assert_eq!(breakdown(&one).unwrap().item_pairs, 0);

        let three = receipt(
            "&",
            "2022-01-02",
            "09:00",
            "1.01",
            &[("ab", "1.00"), ("ab", "1.00"), ("ab", "1.00")],
        );
        assert_eq!(breakdown(&three).unwrap().item_pairs, 5);
    }

    #[test]
    fn test_description_points() {
        // "Emils Cheese Pizza" is 18 long: ceil(12.25 × 0.2) = ceil(2.45) = 3
        assert_eq!(description_points("Emils Cheese Pizza", Money::from_cents(1225)), 3);
        // Trimmed "Klarbrunn 12-PK 12 FL OZ" is 24 long
        assert_eq!(
            description_points("   Klarbrunn 12-PK 12 FL OZ  ", Money::from_cents(1200)),
            3
        );
        // Length 17 is not a multiple of 3
        assert_eq!(description_points("Mountain Dew 12PK", Money::from_cents(649)), 0);
        // Exact: 20% of $15.00 is 3, not 4
        assert_eq!(description_points("abc", Money::from_cents(1500)), 3);
        assert_eq!(description_points("abc", Money::zero()), 0);
    }

    #[test]
    fn test_whitespace_only_description_counts_as_length_zero() {
        assert_eq!(description_points("   ", Money::from_cents(1000)), 2);
    }

    #[test]
    fn test_odd_purchase_day() {
        let odd = receipt("&", "2022-01-01", "09:00", "1.01", &[("ab", "1.00")]);
        assert_eq!(breakdown(&odd).unwrap().odd_purchase_day, 6);

        let odd_two_digit = receipt("&", "2022-01-31", "09:00", "1.01", &[("ab", "1.00")]);
        assert_eq!(breakdown(&odd_two_digit).unwrap().odd_purchase_day, 6);

        let even = receipt("&", "2022-01-10", "09:00", "1.01", &[("ab", "1.00")]);
        assert_eq!(breakdown(&even).unwrap().odd_purchase_day, 0);
    }

    #[test]
    fn test_afternoon_window_boundaries() {
        assert_eq!(breakdown(&with_time("13:59")).unwrap().afternoon_purchase, 0);
        assert_eq!(breakdown(&with_time("14:00")).unwrap().afternoon_purchase, 0);
        assert_eq!(breakdown(&with_time("14:01")).unwrap().afternoon_purchase, 10);
        assert_eq!(breakdown(&with_time("15:00")).unwrap().afternoon_purchase, 10);
        assert_eq!(breakdown(&with_time("15:59")).unwrap().afternoon_purchase, 10);
        assert_eq!(breakdown(&with_time("16:00")).unwrap().afternoon_purchase, 0);
    }

    #[test]
    fn test_neutral_receipt_scores_zero() {
        assert_eq!(calculate(&with_time("09:00")).unwrap(), 0);
    }

    #[test]
    fn test_description_length_counts_utf16_units() {
        // An emoji is a surrogate pair: "😀a" is 3 units long
        assert_eq!(description_points("😀a", Money::from_cents(1000)), 2);
        assert_eq!(description_points("éab", Money::from_cents(1000)), 2);
        // A byte order mark is trimmed like whitespace
        assert_eq!(description_points("\u{FEFF}abc\u{FEFF}", Money::from_cents(1000)), 2);
    }

    fn receipt_with_max_prices(item_count: usize) -> Receipt {
        Receipt {
            retailer: "&".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 1, 2).unwrap(),
            purchase_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            total: Money::from_cents(101),
            items: vec![
                LineItem {
                    short_description: "abc".to_string(),
                    price: Money::from_cents(i64::MAX),
                };
                item_count
            ],
        }
    }

    #[test]
    fn test_description_points_overflow_is_an_error() {
        // Each item is worth 18_446_744_073_709_552 points; 1000 of them pass u64::MAX
        assert!(calculate(&receipt_with_max_prices(999)).is_ok());
        assert_eq!(
            breakdown(&receipt_with_max_prices(1000)),
            Err(PointsError::Overflow {
                rule: "item descriptions"
            })
        );
        assert!(calculate(&receipt_with_max_prices(1100)).is_err());
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let points = PointsBreakdown {
            item_descriptions: Points::MAX,
            afternoon_purchase: AFTERNOON_BONUS,
            ..Default::default()
        };
        assert_eq!(points.total(), Err(PointsError::Overflow { rule: "total" }));
    }

    proptest! {
        #[test]
        fn prop_calculate_is_deterministic_and_matches_breakdown(
            retailer in "[ -~]{1,30}",
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            total_cents in 0i64..1_000_000,
            prices in proptest::collection::vec((" {0,2}[a-zA-Z0-9 ]{1,20}", 0i64..100_000), 1..10),
        ) {
            let items: Vec<ItemSubmission> = prices
                .iter()
                .map(|(description, cents)| ItemSubmission {
                    short_description: Some(description.clone()),
                    price: Some(format!("{}.{:02}", cents / 100, cents % 100).as_str().into()),
                })
                .collect();
            let submission = ReceiptSubmission {
                retailer: Some(retailer),
                purchase_date: Some(format!("2022-05-{:02}", day)),
                purchase_time: Some(format!("{:02}:{:02}", hour, minute)),
                total: Some(format!("{}.{:02}", total_cents / 100, total_cents % 100).as_str().into()),
                items: Some(items),
            };
            let receipt = validate_receipt(&submission).unwrap();

            let first = calculate(&receipt).unwrap();
            prop_assert_eq!(first, calculate(&receipt).unwrap());
            prop_assert_eq!(first, breakdown(&receipt).unwrap().total().unwrap());
        }
    }
}
