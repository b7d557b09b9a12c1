//! Extraction service layer
//!
//! High-level service coordinating the field probes for one marketplace.
//! The only hard failure it ever reports is the absence of a document to
//! parse; everything the markup gets wrong stays field-local.

use tracing::{debug, info};

use crate::domain::product::Marketplace;
use crate::infrastructure::parsing::{
    ContextualParser, ExtractionConfig, ExtractionError, PageExtraction, ParseContext,
    ProductDocument, ProductPageParser,
};

/// High-level product extraction service.
///
/// Holds the compiled parser for its configured marketplace and no per-call
/// state; independent inputs may be extracted concurrently from any number
/// of workers without coordination.
pub struct ProductExtractionService {
    parser: ProductPageParser,
    config: ExtractionConfig,
}

impl ProductExtractionService {
    /// Create a service from an explicit configuration. Fails only when a
    /// configured selector does not compile.
    pub fn new(config: ExtractionConfig) -> Result<Self, ExtractionError> {
        let parser = ProductPageParser::with_rules(&config.selectors)?;
        Ok(Self { parser, config })
    }

    /// Service with the default Amazon rule-set.
    pub fn amazon() -> Result<Self, ExtractionError> {
        Self::new(ExtractionConfig::default())
    }

    /// Service for the given marketplace; `UnsupportedMarketplace` for
    /// retailers without a rule-set.
    pub fn for_marketplace(marketplace: Marketplace) -> Result<Self, ExtractionError> {
        Self::new(ExtractionConfig::for_marketplace(marketplace)?)
    }

    /// Extract whatever fields the page yields.
    ///
    /// Never fails: malformed or empty markup degrades field by field into
    /// diagnostics, and the record is assembled from whichever probes
    /// succeeded.
    pub fn extract(&self, html: &str, context: &ParseContext) -> PageExtraction {
        debug!(
            marketplace = ?self.config.marketplace,
            label = context.product_label.as_deref().unwrap_or(""),
            "parsing product page"
        );

        let document = ProductDocument::parse(html);
        let extraction = self.parser.parse_with_context(&document, context);

        info!(
            empty = extraction.product.is_empty(),
            diagnostics = extraction.diagnostics.len(),
            "product page parsed"
        );
        extraction
    }

    /// Extraction seam facing the fetch collaborator.
    ///
    /// `None` means the fetcher produced no body this cycle; that is the one
    /// contract violation surfaced as a hard error, distinct from every
    /// markup-content diagnostic.
    pub fn extract_fetched(
        &self,
        body: Option<&str>,
        context: &ParseContext,
    ) -> Result<PageExtraction, ExtractionError> {
        match body {
            Some(html) => Ok(self.extract(html, context)),
            None => Err(ExtractionError::DocumentUnavailable),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_creation_succeeds_for_default_config() {
        assert!(ProductExtractionService::amazon().is_ok());
    }

    #[test]
    fn unsupported_marketplace_is_refused_at_construction() {
        assert!(matches!(
            ProductExtractionService::for_marketplace(Marketplace::BestBuy),
            Err(ExtractionError::UnsupportedMarketplace(Marketplace::BestBuy))
        ));
    }

    #[test]
    fn missing_body_is_the_only_hard_failure() {
        let service = ProductExtractionService::amazon().unwrap();
        let context = ParseContext::new();

        assert_eq!(
            service.extract_fetched(None, &context),
            Err(ExtractionError::DocumentUnavailable)
        );
        // An empty body is still a parseable (empty) document.
        assert!(service.extract_fetched(Some(""), &context).is_ok());
    }
}
