//! Infrastructure layer for HTML parsing and logging
//!
//! Parsing lives here because it is markup-facing plumbing; the domain
//! record types it produces live in `domain`.

pub mod logging;
pub mod parsing;

// Re-export commonly used items
pub use logging::{init_logging, init_logging_with_config, LoggingConfig};
pub use parsing::{
    Diagnostic, DiagnosticKind, ExtractionConfig, ExtractionError, ExtractionResult,
    PageExtraction, ParseContext, ProductPageParser, SelectorRules,
};
