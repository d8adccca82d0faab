//! Catalog access and incremental result aggregation for metcat.
//!
//! Search is two-stage: one request yields the full ordered identifier
//! list, then details are hydrated one fixed-size window at a time as the
//! reader scrolls. [`search::AggregationController`] owns that session
//! state; [`search::SearchInitiator`] seeds it and
//! [`search::ScrollTrigger`] advances it.
#![allow(missing_docs)]

pub mod api;
pub mod detail;
pub mod error;
pub mod favorites;
pub mod highlights;
pub mod search;

pub use api::{ApiClient, CatalogApi};
pub use detail::ObjectDetail;
pub use error::{CatalogError, CatalogResult, DetailError, FavoritesError};
pub use favorites::{FavoritesStore, JsonFavorites};
pub use highlights::{HIGHLIGHT_IDS, load_highlights};
pub use search::{
    AdvanceOutcome, AggregationController, DetailFetcher, ResultSet,
    ScrollMetrics, ScrollTrigger, SearchInitiator, SearchSummary,
    SessionTicket,
};
