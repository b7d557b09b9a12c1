//! Free-form coupon text classification.
//!
//! Retailers phrase promotions loosely ("Save $10 on this item", "Apply 15%
//! coupon"); this module maps any message string into a closed set of
//! discount shapes with ordered pattern precedence.

use once_cell::sync::Lazy;
use regex::Regex;

use super::numeric::parse_decimal_text;
use crate::domain::product::Coupon;

// Currency symbol followed by digits with an optional 1-2 digit fraction.
static FIXED_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\d[\d,]*(?:\.\d{1,2})?)").expect("fixed-amount pattern compiles"));

// Digits with an optional 1-2 digit fraction followed by a percent symbol.
static PERCENTAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d[\d,]*(?:\.\d{1,2})?)\s*%").expect("percentage pattern compiles"));

/// Three-way classification of a coupon message.
///
/// Total over all strings: every input maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CouponClassification {
    Fixed(f64),
    Percentage(f64),
    Unclassified,
}

impl CouponClassification {
    /// Convert into the domain coupon, `None` when unclassified.
    pub fn into_coupon(self) -> Option<Coupon> {
        match self {
            Self::Fixed(amount) => Some(Coupon::Fixed { amount }),
            Self::Percentage(percent) => Some(Coupon::Percentage { percent }),
            Self::Unclassified => None,
        }
    }
}

/// Classify a coupon message with ordered precedence: fixed amount first,
/// then percentage, else unclassified.
///
/// A pattern match whose value would violate the coupon invariants (fixed
/// amount must be > 0, percentage must lie in (0, 100]) does not produce a
/// coupon; the remaining patterns are still tried in order. Numeric parsing
/// reuses the price normalization rule.
pub fn classify(message: &str) -> CouponClassification {
    if let Some(amount) = FIXED_AMOUNT
        .captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_decimal_text(m.as_str()))
    {
        if amount > 0.0 {
            return CouponClassification::Fixed(amount);
        }
    }

    if let Some(percent) = PERCENTAGE
        .captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_decimal_text(m.as_str()))
    {
        if percent > 0.0 && percent <= 100.0 {
            return CouponClassification::Percentage(percent);
        }
    }

    CouponClassification::Unclassified
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("Save $10 on this item", CouponClassification::Fixed(10.0))]
    #[case("$5.50 off at checkout", CouponClassification::Fixed(5.5))]
    #[case("Save $1,000 on bundles", CouponClassification::Fixed(1000.0))]
    #[case("15% off select items", CouponClassification::Percentage(15.0))]
    #[case("Apply 7.5 % coupon", CouponClassification::Percentage(7.5))]
    #[case("Limited time offer", CouponClassification::Unclassified)]
    #[case("", CouponClassification::Unclassified)]
    fn classifies_known_shapes(#[case] message: &str, #[case] expected: CouponClassification) {
        assert_eq!(classify(message), expected);
    }

    #[test]
    fn fixed_amount_wins_over_percentage() {
        assert_eq!(
            classify("Save $10 or take 15% off"),
            CouponClassification::Fixed(10.0)
        );
    }

    #[test]
    fn invariant_violations_do_not_build_coupons() {
        // $0 is not a discount; the percentage pattern still gets its turn.
        assert_eq!(classify("$0 off"), CouponClassification::Unclassified);
        assert_eq!(
            classify("$0 off plus 20% off"),
            CouponClassification::Percentage(20.0)
        );
        assert_eq!(classify("150% off"), CouponClassification::Unclassified);
        assert_eq!(classify("0% off"), CouponClassification::Unclassified);
        assert_eq!(classify("100% off"), CouponClassification::Percentage(100.0));
    }

    #[test]
    fn into_coupon_maps_variants() {
        assert_eq!(
            CouponClassification::Fixed(10.0).into_coupon(),
            Some(crate::domain::product::Coupon::Fixed { amount: 10.0 })
        );
        assert_eq!(CouponClassification::Unclassified.into_coupon(), None);
    }

    proptest! {
        #[test]
        fn total_over_arbitrary_text(s in ".*") {
            match classify(&s) {
                CouponClassification::Fixed(amount) => prop_assert!(amount > 0.0),
                CouponClassification::Percentage(percent) => {
                    prop_assert!(percent > 0.0 && percent <= 100.0);
                }
                CouponClassification::Unclassified => {}
            }
        }
    }
}
