//! The API client seam the screens fetch through.

use crate::models::catalog::{CatalogItem, Category, ResourceKind};
use crate::models::detail::DetailRecord;
use crate::Result;
use async_trait::async_trait;

/// Per-resource fetch operations consumed by the screens.
///
/// Every operation either succeeds with the parsed resource or fails with
/// an [`Error`](crate::Error); screens decide what a failure means.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Items of one home category, in the order the API returned them.
    async fn list(&self, category: Category) -> Result<Vec<CatalogItem>>;

    /// Full record for one title. Trailers are always present, possibly empty.
    async fn detail(&self, kind: ResourceKind, id: &str) -> Result<DetailRecord>;
}
