//! HTML parsing infrastructure for retailer product pages
//!
//! Trait-based parsing architecture with compiled selector rule-sets,
//! tagged per-field outcomes and diagnostics returned by value. Markup
//! problems never abort a parse; they degrade it field by field.

pub mod config;
pub mod context;
pub mod coupon;
pub mod document;
pub mod error;
pub mod numeric;
pub mod product_page_parser;

// Re-export public types
pub use config::{ExtractionConfig, SelectorRules};
pub use context::ParseContext;
pub use coupon::CouponClassification;
pub use document::ProductDocument;
pub use error::{Diagnostic, DiagnosticKind, ExtractionError, ExtractionResult, FieldOutcome};
pub use product_page_parser::{PageExtraction, ProductPageParser};

/// Parser trait with context support.
///
/// Implementations take an immutable document handle plus caller context
/// and produce their output without mutating either.
pub trait ContextualParser {
    type Output;
    type Context;

    /// Parse an already-built document with contextual information.
    fn parse_with_context(
        &self,
        document: &ProductDocument,
        context: &Self::Context,
    ) -> Self::Output;
}
