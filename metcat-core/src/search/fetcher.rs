use std::sync::Arc;

use futures::future::join_all;
use metcat_model::{DetailRecord, ObjectId};
use tracing::{debug, warn};

use crate::api::CatalogApi;

/// Parallel per-identifier detail hydration.
///
/// A failed fetch never aborts the window: it logs and yields `None` in
/// that identifier's slot.
#[derive(Debug, Clone)]
pub struct DetailFetcher {
    api: Arc<dyn CatalogApi>,
}

impl DetailFetcher {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// Fetch every identifier in `window` concurrently.
    ///
    /// The output has one slot per input identifier, in window order
    /// regardless of completion order.
    pub async fn fetch_window(
        &self,
        window: &[ObjectId],
    ) -> Vec<Option<DetailRecord>> {
        if window.is_empty() {
            return Vec::new();
        }
        debug!(count = window.len(), "fetching detail window");

        let requests = window.iter().map(|&id| {
            let api = Arc::clone(&self.api);
            async move {
                match api.object(id).await {
                    Ok(record) => Some(record),
                    Err(err) => {
                        warn!(object_id = %id, error = %err, "detail fetch failed; skipping object");
                        None
                    }
                }
            }
        });

        join_all(requests).await
    }
}
