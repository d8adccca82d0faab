use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use metcat_model::{
    Department, DepartmentsResponse, DetailRecord, ObjectId, SearchQuery,
    SearchResponse,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::{CatalogApi, routes};
use crate::error::{CatalogError, CatalogResult};

/// HTTP client for the collection API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Arc<str>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a client rooted at `base_url` (no trailing slash needed).
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("metcat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Client)?;

        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        info!(%base_url, ?timeout, "creating catalog client");

        Ok(Self {
            client,
            base_url: Arc::from(base_url),
        })
    }

    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let path = path.as_ref();
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> CatalogResult<T> {
        let url = self.build_url(path);
        debug!(%url, ?query, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::status(url, status));
        }

        response
            .json::<T>()
            .await
            .map_err(|source| CatalogError::Decode { url, source })
    }
}

#[async_trait]
impl CatalogApi for ApiClient {
    async fn search(&self, query: &SearchQuery) -> CatalogResult<SearchResponse> {
        self.get_json(routes::SEARCH, &query.to_query_pairs()).await
    }

    async fn object(&self, id: ObjectId) -> CatalogResult<DetailRecord> {
        match self.get_json(&routes::object(id), &[]).await {
            Err(CatalogError::Status { status, .. })
                if status == StatusCode::NOT_FOUND =>
            {
                Err(CatalogError::NotFound(id))
            }
            other => other,
        }
    }

    async fn departments(&self) -> CatalogResult<Vec<Department>> {
        let response: DepartmentsResponse =
            self.get_json(routes::DEPARTMENTS, &[]).await?;
        Ok(response.departments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn build_url_joins_without_double_slash() {
        let api = client("https://collection.test/v1/");
        assert_eq!(api.base_url(), "https://collection.test/v1");
        assert_eq!(
            api.build_url(routes::object(ObjectId(42))),
            "https://collection.test/v1/objects/42"
        );
        assert_eq!(
            api.build_url("search"),
            "https://collection.test/v1/search"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let api = client("https://collection.test/v1");
        assert_eq!(
            api.build_url("https://elsewhere.test/x"),
            "https://elsewhere.test/x"
        );
    }
}
