//! Scriptable in-memory catalog for controller and initiator tests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use metcat_core::{CatalogApi, CatalogError, CatalogResult};
use metcat_model::prelude::*;
use parking_lot::Mutex;
use reqwest::StatusCode;
use tokio::sync::watch;

/// Closed gate holding detail fetches until [`Gate::open`] is called.
#[derive(Debug, Clone)]
pub struct Gate {
    tx: Arc<watch::Sender<bool>>,
}

impl Gate {
    fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn open(&self) {
        self.tx.send_replace(true);
    }

    async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        let _ = rx.wait_for(|open| *open).await;
    }
}

#[derive(Debug, Default)]
pub struct StubCatalog {
    /// `None` makes `search` fail.
    search_ids: Option<Vec<ObjectId>>,
    failing: HashSet<ObjectId>,
    imageless: HashSet<ObjectId>,
    gate: Option<Gate>,
    searches: Mutex<Vec<SearchQuery>>,
    object_requests: Mutex<Vec<ObjectId>>,
}

impl StubCatalog {
    pub fn with_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            search_ids: Some(ids.into_iter().map(ObjectId).collect()),
            ..Self::default()
        }
    }

    pub fn failing_search() -> Self {
        Self::default()
    }

    pub fn null_results() -> Self {
        Self {
            search_ids: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn fail_objects(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.failing.extend(ids.into_iter().map(ObjectId));
        self
    }

    pub fn without_images(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.imageless.extend(ids.into_iter().map(ObjectId));
        self
    }

    /// Hold every detail fetch until the returned gate opens.
    pub fn gated(mut self) -> (Self, Gate) {
        let gate = Gate::new();
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn ids(&self) -> Vec<ObjectId> {
        self.search_ids.clone().unwrap_or_default()
    }

    pub fn object_requests(&self) -> Vec<ObjectId> {
        self.object_requests.lock().clone()
    }

    pub fn search_count(&self) -> usize {
        self.searches.lock().len()
    }

    pub fn last_search(&self) -> Option<SearchQuery> {
        self.searches.lock().last().cloned()
    }
}

pub fn record_with_image(id: ObjectId) -> DetailRecord {
    let mut record = DetailRecord::new(id);
    record.title = Some(format!("Object {id}"));
    record.primary_image = Some(format!("https://images.test/{id}.jpg"));
    record
}

#[async_trait]
impl CatalogApi for StubCatalog {
    async fn search(&self, query: &SearchQuery) -> CatalogResult<SearchResponse> {
        self.searches.lock().push(query.clone());
        match &self.search_ids {
            Some(ids) => Ok(SearchResponse {
                total: ids.len() as u32,
                object_ids: if ids.is_empty() { None } else { Some(ids.clone()) },
            }),
            None => Err(CatalogError::status(
                "/search",
                StatusCode::SERVICE_UNAVAILABLE,
            )),
        }
    }

    async fn object(&self, id: ObjectId) -> CatalogResult<DetailRecord> {
        self.object_requests.lock().push(id);
        if let Some(gate) = &self.gate {
            gate.wait().await;
        }
        if self.failing.contains(&id) {
            return Err(CatalogError::status(
                format!("/objects/{id}"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        if self.imageless.contains(&id) {
            return Ok(DetailRecord::new(id));
        }
        Ok(record_with_image(id))
    }

    async fn departments(&self) -> CatalogResult<Vec<Department>> {
        Ok(vec![Department {
            department_id: 11,
            display_name: "European Paintings".to_string(),
        }])
    }
}
