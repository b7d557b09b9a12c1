//! Parsing context for product page extraction.

use url::Url;

/// Caller-supplied context for one extraction call.
///
/// The label only enriches diagnostic messages; the base URL resolves a
/// relative image source to an absolute URL. Neither influences which fields
/// are probed.
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    /// Human-readable product name, e.g. the name the user tracks it under.
    pub product_label: Option<String>,

    /// Page URL, used to absolutize relative resource references.
    pub base_url: Option<Url>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a product label for diagnostic enrichment.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.product_label = Some(label.into());
        self
    }

    /// Attach the page URL for relative resource resolution.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Suffix appended to diagnostic messages, ` for <label>` or empty.
    pub(crate) fn label_suffix(&self) -> String {
        match &self.product_label {
            Some(label) => format!(" for {label}"),
            None => String::new(),
        }
    }
}
