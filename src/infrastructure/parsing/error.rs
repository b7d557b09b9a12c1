//! Error and outcome types for product page extraction.
//!
//! Markup-content problems are field-local: they surface as [`Diagnostic`]
//! values returned alongside the extracted record, never as errors. The
//! [`ExtractionError`] enum covers the few hard failures a caller can
//! actually act on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::product::Marketplace;

/// Why a specific field did not yield a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An expected markup anchor is absent: page structure changed, content
    /// not rendered, or genuinely not present for this product.
    MissingElement,
    /// The anchor was present but its text does not conform to the expected
    /// shape (e.g. non-numeric price text).
    MalformedValue,
    /// Coupon text was present but matches no recognized discount pattern.
    ClassificationFailure,
}

/// Structured record explaining why a field is absent from the extracted
/// product. Accumulated over repeated cycles these drive alerting and retry
/// decisions in the caller; a single occurrence is not a job failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub field: String,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn missing_element(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind: DiagnosticKind::MissingElement,
            message: message.into(),
        }
    }

    pub fn malformed_value(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind: DiagnosticKind::MalformedValue,
            message: message.into(),
        }
    }

    pub fn classification_failure(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind: DiagnosticKind::ClassificationFailure,
            message: message.into(),
        }
    }
}

/// Tagged result of one field probe.
///
/// Every extractor is a pure function over the parsed document returning one
/// of these; no extractor raises and no extractor observes another's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome<T> {
    Found(T),
    Missing,
    /// Anchor present, text unusable. Carries the reason for the diagnostic.
    Malformed(String),
}

impl<T> FieldOutcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Hard failures of the extraction engine.
///
/// Everything here is either a contract violation (no document to parse) or
/// a configuration problem detected at construction time. Markup issues are
/// never represented as `ExtractionError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The fetch collaborator produced no body for this cycle.
    #[error("no document body available for extraction")]
    DocumentUnavailable,

    /// The requested marketplace has no selector rule-set yet.
    #[error("no extraction rules implemented for marketplace {0:?}")]
    UnsupportedMarketplace(Marketplace),

    /// A configured selector failed to compile.
    #[error("invalid CSS selector for field '{field}': '{selector}' - {reason}")]
    InvalidSelector {
        field: String,
        selector: String,
        reason: String,
    },
}

impl ExtractionError {
    pub fn invalid_selector(field: &str, selector: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            field: field.to_string(),
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;
