//! Product page parser: independent field probes over a parsed document.
//!
//! Each probe follows the same three-step contract - locate a container,
//! narrow to the value node or attribute, transform the raw text - and
//! reports its outcome as a tagged value. Probes never raise and never
//! observe each other's results; the merge into a single record happens in
//! [`ContextualParser::parse_with_context`].

use scraper::Selector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::context::ParseContext;
use super::coupon::{self, CouponClassification};
use super::document::ProductDocument;
use super::error::{Diagnostic, ExtractionError, FieldOutcome};
use super::numeric::parse_decimal_text;
use super::{ContextualParser, SelectorRules};
use crate::domain::product::{ExtractedProduct, SellerInfo};

/// One extraction call's complete result: the partially-populated record
/// plus the diagnostics explaining every absent field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageExtraction {
    pub product: ExtractedProduct,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parser for one marketplace's product pages.
///
/// Selectors are compiled once at construction; the parser itself holds no
/// per-call state, so a single instance may serve concurrent extractions.
#[derive(Debug)]
pub struct ProductPageParser {
    title_container: Selector,
    price_container: Selector,
    price_text: Selector,
    image_container: Selector,
    image_node: Selector,
    buy_box: Selector,
    offer_features: Selector,
    ships_from: Selector,
    sold_by: Selector,
    seller_text: Selector,
    coupon_container: Selector,
    coupon_label: Selector,
}

fn compile(field: &str, selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector)
        .map_err(|e| ExtractionError::invalid_selector(field, selector, e.to_string()))
}

impl ProductPageParser {
    /// Parser for the default (Amazon) rule-set.
    pub fn new() -> Result<Self, ExtractionError> {
        Self::with_rules(&SelectorRules::amazon())
    }

    /// Parser for a custom rule-set. Fails only on selectors that do not
    /// compile.
    pub fn with_rules(rules: &SelectorRules) -> Result<Self, ExtractionError> {
        Ok(Self {
            title_container: compile("title", &rules.title_container)?,
            price_container: compile("price", &rules.price_container)?,
            price_text: compile("price", &rules.price_text)?,
            image_container: compile("image", &rules.image_container)?,
            image_node: compile("image", &rules.image_node)?,
            buy_box: compile("seller", &rules.buy_box)?,
            offer_features: compile("seller", &rules.offer_features)?,
            ships_from: compile("seller", &rules.ships_from)?,
            sold_by: compile("seller", &rules.sold_by)?,
            seller_text: compile("seller", &rules.seller_text)?,
            coupon_container: compile("coupon", &rules.coupon_container)?,
            coupon_label: compile("coupon", &rules.coupon_label)?,
        })
    }

    /// Product title: trimmed text of the title container.
    pub fn extract_title(&self, document: &ProductDocument) -> FieldOutcome<String> {
        match document.first(&self.title_container) {
            Some(container) => FieldOutcome::Found(ProductDocument::text_of(container)),
            None => FieldOutcome::Missing,
        }
    }

    /// Current price: the price-text node under the price container,
    /// normalized to a finite non-negative decimal.
    pub fn extract_price(&self, document: &ProductDocument) -> FieldOutcome<f64> {
        let Some(container) = document.first(&self.price_container) else {
            return FieldOutcome::Missing;
        };
        let Some(value_node) = ProductDocument::first_within(container, &self.price_text) else {
            return FieldOutcome::Missing;
        };

        let text = ProductDocument::text_of(value_node);
        match parse_decimal_text(&text) {
            Some(price) => FieldOutcome::Found(price),
            None => FieldOutcome::Malformed(format!("price text {text:?} has no parsable amount")),
        }
    }

    /// Main image URL: the `src` attribute of the image node under the
    /// wrapper. A node without the attribute counts as missing, not
    /// malformed. A relative source is resolved against the context's base
    /// URL when one is available.
    pub fn extract_image(
        &self,
        document: &ProductDocument,
        context: &ParseContext,
    ) -> FieldOutcome<String> {
        let Some(wrapper) = document.first(&self.image_container) else {
            return FieldOutcome::Missing;
        };
        let Some(image) = ProductDocument::first_within(wrapper, &self.image_node) else {
            return FieldOutcome::Missing;
        };

        match ProductDocument::attr_of(image, "src") {
            Some(src) => FieldOutcome::Found(resolve_source(src, context)),
            None => FieldOutcome::Missing,
        }
    }

    /// Seller information from the buy box.
    ///
    /// The ships-from and sold-by nodes are probed independently; each is
    /// optional on its own. Only when both are absent does the seller field
    /// count as missing. A half-result is success, not partial failure.
    pub fn extract_seller(&self, document: &ProductDocument) -> FieldOutcome<SellerInfo> {
        let Some(buy_box) = document.first(&self.buy_box) else {
            return FieldOutcome::Missing;
        };
        let Some(features) = ProductDocument::first_within(buy_box, &self.offer_features) else {
            return FieldOutcome::Missing;
        };

        let ships_from = ProductDocument::first_within(features, &self.ships_from)
            .and_then(|node| ProductDocument::first_within(node, &self.seller_text))
            .map(ProductDocument::text_of);
        let sold_by = ProductDocument::first_within(features, &self.sold_by)
            .and_then(|node| ProductDocument::first_within(node, &self.seller_text))
            .map(ProductDocument::text_of);

        if ships_from.is_none() && sold_by.is_none() {
            return FieldOutcome::Missing;
        }

        FieldOutcome::Found(SellerInfo { ships_from, sold_by })
    }

    /// Coupon message text, when the page carries a coupon container at all.
    ///
    /// Prefers the dedicated label node; falls back to the raw text of the
    /// whole container. `None` means the page carries no coupon container,
    /// which is not a diagnostic-worthy absence.
    pub fn locate_coupon_message(&self, document: &ProductDocument) -> Option<String> {
        let container = document.first(&self.coupon_container)?;
        let message = match ProductDocument::first_within(container, &self.coupon_label) {
            Some(label) => ProductDocument::text_of(label),
            None => ProductDocument::text_of(container),
        };
        Some(message)
    }
}

fn resolve_source(src: &str, context: &ParseContext) -> String {
    match &context.base_url {
        Some(base) => base
            .join(src)
            .map(|resolved| resolved.to_string())
            .unwrap_or_else(|_| src.to_string()),
        None => src.to_string(),
    }
}

/// Record a probe outcome: a found value passes through, an absent or
/// malformed field becomes its diagnostic.
fn merge<T>(
    outcome: FieldOutcome<T>,
    field: &str,
    missing_message: String,
    label_suffix: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<T> {
    match outcome {
        FieldOutcome::Found(value) => Some(value),
        FieldOutcome::Missing => {
            diagnostics.push(Diagnostic::missing_element(field, missing_message));
            None
        }
        FieldOutcome::Malformed(reason) => {
            diagnostics.push(Diagnostic::malformed_value(
                field,
                format!("{reason}{label_suffix}"),
            ));
            None
        }
    }
}

impl ContextualParser for ProductPageParser {
    type Output = PageExtraction;
    type Context = ParseContext;

    /// Run every probe independently and merge the tagged outcomes.
    ///
    /// One probe's outcome never gates another's execution; the returned
    /// record is whatever subset of fields succeeded, with one diagnostic
    /// per field that did not.
    fn parse_with_context(
        &self,
        document: &ProductDocument,
        context: &ParseContext,
    ) -> PageExtraction {
        let mut product = ExtractedProduct::default();
        let mut diagnostics = Vec::new();
        let suffix = context.label_suffix();

        product.title = merge(
            self.extract_title(document),
            "title",
            format!("product title container not found{suffix}"),
            &suffix,
            &mut diagnostics,
        );

        product.price = merge(
            self.extract_price(document),
            "price",
            format!("product price container not found{suffix}"),
            &suffix,
            &mut diagnostics,
        );

        product.image_url = merge(
            self.extract_image(document, context),
            "image",
            format!("product image source not found{suffix}"),
            &suffix,
            &mut diagnostics,
        );

        product.seller = merge(
            self.extract_seller(document),
            "seller",
            format!("neither ships-from nor sold-by present in buy box{suffix}"),
            &suffix,
            &mut diagnostics,
        );

        match self.locate_coupon_message(document) {
            Some(message) => match coupon::classify(&message) {
                CouponClassification::Unclassified => {
                    diagnostics.push(Diagnostic::classification_failure(
                        "coupon",
                        format!("coupon message {message:?} matches no known discount shape{suffix}"),
                    ));
                }
                classified => product.coupon = classified.into_coupon(),
            },
            // Not every product carries a coupon; a missing container is
            // informational, not a diagnostic.
            None => debug!("no coupon container present{}", suffix),
        }

        PageExtraction {
            product,
            diagnostics,
        }
    }
}
