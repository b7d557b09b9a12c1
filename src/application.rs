//! Application layer - extraction orchestration services

pub mod extraction_service;

pub use extraction_service::ProductExtractionService;
