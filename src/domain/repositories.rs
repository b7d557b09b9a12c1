//! Collaborator interfaces at the extraction engine's boundaries.
//!
//! The engine itself performs no I/O. Fetching lives upstream behind
//! [`PageFetcher`]; storing snapshots and price history lives downstream
//! behind [`SnapshotRepository`]. Implementations belong to the application
//! embedding the engine.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::{ExtractedProduct, Marketplace, PricePoint};

/// Upstream HTTP collaborator.
///
/// Returns the page body on a successful (2xx) fetch and `None` on any
/// failure. Request identity rotation (user agents, proxies), retries and
/// timeouts are this collaborator's concern, never the engine's.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Option<String>;
}

/// Downstream persistence collaborator.
///
/// Given a stable product identity, keeps the latest snapshot current and
/// accumulates the price history over repeated extraction cycles.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Overwrite non-absent fields of the stored snapshot; absent fields are
    /// left untouched or nulled per the store's own policy.
    async fn upsert_snapshot(
        &self,
        product_id: Uuid,
        marketplace: Marketplace,
        snapshot: &ExtractedProduct,
    ) -> Result<()>;

    /// Append a timestamped history record. Called only for cycles where a
    /// price was present.
    async fn record_price(&self, product_id: Uuid, point: PricePoint) -> Result<()>;
}
