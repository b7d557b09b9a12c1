//! Extraction configuration: selector rule-sets parameterized by marketplace.
//!
//! Rules are plain data so operators can override anchors when a retailer
//! ships a markup change, without rebuilding the engine.

use serde::{Deserialize, Serialize};

use super::error::ExtractionError;
use crate::domain::product::Marketplace;

/// CSS anchors for one marketplace's product page markup.
///
/// Each field names either a container (the stable reference point for
/// locating a value) or the value node/attribute within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorRules {
    /// Title container; its trimmed text is the product title.
    pub title_container: String,

    /// Price block container.
    pub price_container: String,
    /// Price text node within the price container.
    pub price_text: String,

    /// Main image wrapper.
    pub image_container: String,
    /// Image node within the wrapper; its `src` attribute is the value.
    pub image_node: String,

    /// Buy box container.
    pub buy_box: String,
    /// Offer features sub-container within the buy box.
    pub offer_features: String,
    /// "Ships from" feature node.
    pub ships_from: String,
    /// "Sold by" feature node.
    pub sold_by: String,
    /// Message text node within either seller feature.
    pub seller_text: String,

    /// Coupon/promo block container.
    pub coupon_container: String,
    /// Dedicated coupon label node; container text is the fallback source.
    pub coupon_label: String,
}

impl SelectorRules {
    /// Anchor set for Amazon desktop product pages.
    pub fn amazon() -> Self {
        Self {
            title_container: "#title_feature_div".to_string(),
            price_container: "div#corePrice_feature_div".to_string(),
            price_text: "span.a-offscreen".to_string(),
            image_container: "#imgTagWrapperId".to_string(),
            image_node: "img".to_string(),
            buy_box: "#desktop_qualifiedBuyBox".to_string(),
            offer_features: "#offer-display-features".to_string(),
            ships_from: "#fulfillerInfoFeature_feature_div".to_string(),
            sold_by: "#merchantInfoFeature_feature_div".to_string(),
            seller_text: "span.a-size-small.offer-display-feature-text-message".to_string(),
            coupon_container: "#promoPriceBlockMessage_feature_div".to_string(),
            coupon_label: "span.a-color-success.couponLabelText".to_string(),
        }
    }
}

/// Top-level extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub marketplace: Marketplace,
    pub selectors: SelectorRules,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            marketplace: Marketplace::Amazon,
            selectors: SelectorRules::amazon(),
        }
    }
}

impl ExtractionConfig {
    /// Rule-set for the given marketplace.
    ///
    /// Only Amazon has one today; other marketplaces are anticipated by the
    /// data model but deliberately carry no invented selectors.
    pub fn for_marketplace(marketplace: Marketplace) -> Result<Self, ExtractionError> {
        match marketplace {
            Marketplace::Amazon => Ok(Self::default()),
            other => Err(ExtractionError::UnsupportedMarketplace(other)),
        }
    }
}
