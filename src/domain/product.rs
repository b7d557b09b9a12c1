use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marketplace a product page was scraped from.
///
/// The data model anticipates several retailers; extraction rules currently
/// exist for Amazon only. Serialized values match the persisted enumeration
/// of the tracking database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marketplace {
    #[serde(rename = "AMAZON")]
    Amazon,
    #[serde(rename = "EBAY")]
    Ebay,
    #[serde(rename = "BESTBUY")]
    BestBuy,
}

/// Structured product record extracted from a single page parse.
///
/// Every field is independently optional: retail markup is inconsistent and
/// frequently incomplete, and a field that could not be extracted is a normal
/// outcome reported through the diagnostics list, not an error state. The
/// record is immutable once returned and carries no timestamps, so parsing
/// the same document twice yields identical values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Current price. When present it is finite and non-negative, parsed
    /// from locale-formatted text with thousands separators removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<SellerInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<Coupon>,
}

impl ExtractedProduct {
    /// True when no field at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
            && self.seller.is_none()
            && self.coupon.is_none()
    }
}

/// Fulfillment and merchant information from the buy box.
///
/// A half-populated value is a successful extraction: either key may be
/// absent on its own without the seller field counting as failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ships_from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_by: Option<String>,
}

/// Promotional discount attached to a product.
///
/// Exactly one shape is ever populated: a fixed currency amount (> 0) or a
/// percentage in (0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Coupon {
    Fixed { amount: f64 },
    Percentage { percent: f64 },
}

/// Timestamped price history record, appended by the persistence
/// collaborator whenever a parse cycle produced a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    pub recorded_at: DateTime<Utc>,
}

impl PricePoint {
    /// Record a price observation at the current instant.
    pub fn now(price: f64) -> Self {
        Self {
            price,
            recorded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_product_reports_empty() {
        let product = ExtractedProduct::default();
        assert!(product.is_empty());

        let product = ExtractedProduct {
            price: Some(19.99),
            ..Default::default()
        };
        assert!(!product.is_empty());
    }

    #[test]
    fn coupon_serializes_tagged() {
        let fixed = serde_json::to_value(Coupon::Fixed { amount: 10.0 }).unwrap();
        assert_eq!(fixed["type"], "fixed");
        assert_eq!(fixed["amount"], 10.0);

        let percent = serde_json::to_value(Coupon::Percentage { percent: 15.0 }).unwrap();
        assert_eq!(percent["type"], "percentage");
        assert_eq!(percent["percent"], 15.0);
    }

    #[test]
    fn marketplace_round_trips_persisted_names() {
        assert_eq!(
            serde_json::to_string(&Marketplace::BestBuy).unwrap(),
            "\"BESTBUY\""
        );
        let parsed: Marketplace = serde_json::from_str("\"AMAZON\"").unwrap();
        assert_eq!(parsed, Marketplace::Amazon);
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let product = ExtractedProduct {
            title: Some("Wireless Mouse".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("price").is_none());
        assert!(json.get("seller").is_none());
    }
}
