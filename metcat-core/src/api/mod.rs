//! Remote catalog access.
//!
//! [`CatalogApi`] is the seam everything above the HTTP layer talks to;
//! [`ApiClient`] is the reqwest implementation used in production.

pub mod client;
pub mod routes;

use async_trait::async_trait;
use metcat_model::{Department, DetailRecord, ObjectId, SearchQuery, SearchResponse};

use crate::error::CatalogResult;

pub use client::ApiClient;

#[async_trait]
pub trait CatalogApi: Send + Sync + std::fmt::Debug {
    /// First stage: the complete ordered identifier list for a query.
    async fn search(&self, query: &SearchQuery) -> CatalogResult<SearchResponse>;

    /// Second stage: full detail for one identifier.
    async fn object(&self, id: ObjectId) -> CatalogResult<DetailRecord>;

    async fn departments(&self) -> CatalogResult<Vec<Department>>;
}
