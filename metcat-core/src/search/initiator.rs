use std::sync::Arc;

use metcat_model::{IdentifierList, SearchQuery};
use tracing::{info, warn};

use super::controller::AggregationController;
use super::filter::filter_displayable;
use crate::api::CatalogApi;

/// Counts reported once a search has been seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    pub total: usize,
    pub displayed: usize,
    /// Displayable records after filtering.
    pub shown: usize,
    /// `false` when a newer search superseded this one before it seeded.
    pub applied: bool,
}

impl SearchSummary {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Runs the two-stage lookup and seeds the controller.
#[derive(Debug, Clone)]
pub struct SearchInitiator {
    api: Arc<dyn CatalogApi>,
    controller: Arc<AggregationController>,
}

impl SearchInitiator {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        controller: Arc<AggregationController>,
    ) -> Self {
        Self { api, controller }
    }

    pub fn controller(&self) -> &Arc<AggregationController> {
        &self.controller
    }

    /// Header-bar search. Whitespace-only text issues no request and
    /// leaves the current session alone.
    pub async fn simple(&self, text: &str) -> Option<SearchSummary> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.run(&SearchQuery::simple(text)).await)
    }

    /// Search for `query`, hydrate its first page and seed the controller.
    ///
    /// A failed search seeds an empty session instead of returning an
    /// error.
    pub async fn run(&self, query: &SearchQuery) -> SearchSummary {
        let ticket = self.controller.begin_session();

        let ids: IdentifierList = match self.api.search(query).await {
            Ok(response) => response.into_identifiers(),
            Err(err) => {
                warn!(error = %err, "search request failed; showing no results");
                IdentifierList::from(Vec::new())
            }
        };

        let first = ids.len().min(self.controller.page_size());
        let batch = self.controller.fetcher().fetch_window(&ids[..first]).await;
        let first_page = filter_displayable(batch);

        let total = ids.len();
        let shown = first_page.len();
        let applied = self.controller.seed_session(ticket, ids, first_page);
        if applied {
            info!(total, shown, "search complete");
        }

        SearchSummary {
            total,
            displayed: first,
            shown,
            applied,
        }
    }
}
