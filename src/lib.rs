//! PriceWatch - retail product page extraction engine
//!
//! Turns a raw retailer product-page document into a structured,
//! partially-populated record (title, price, image, seller, coupon).
//! Retail markup is inconsistent and frequently incomplete, so the engine
//! never fails outright: each field is probed independently, absent or
//! malformed values degrade into diagnostics, and the caller always gets a
//! record back. Fetching pages and persisting records are collaborator
//! concerns behind the traits in [`domain::repositories`].

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the public surface for convenience
pub use application::ProductExtractionService;
pub use domain::{Coupon, ExtractedProduct, Marketplace, PricePoint, SellerInfo};
pub use infrastructure::parsing::{
    ContextualParser, CouponClassification, Diagnostic, DiagnosticKind, ExtractionConfig,
    ExtractionError, ExtractionResult, FieldOutcome, PageExtraction, ParseContext,
    ProductDocument, ProductPageParser, SelectorRules,
};
