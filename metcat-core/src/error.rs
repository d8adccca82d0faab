use std::path::PathBuf;

use metcat_model::ObjectId;
use reqwest::StatusCode;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures talking to the remote collection API.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("object {0} not found")]
    NotFound(ObjectId),
}

impl CatalogError {
    /// Status-only failure, used by non-HTTP catalog implementations too.
    pub fn status(url: impl Into<String>, status: StatusCode) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }
}

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("failed to read favorites at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write favorites at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("favorites at {path} are not valid JSON")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure opening a single object: the record or its favorite state.
#[derive(Debug, Error)]
pub enum DetailError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Favorites(#[from] FavoritesError),
}
