//! Locally persisted favorites.
//!
//! The on-disk shape is a JSON object whose `metFavorites` key holds a
//! flat array of stringified object identifiers. Other keys in the file
//! are preserved untouched.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use metcat_model::ObjectId;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::FavoritesError;

/// Storage key holding the favorites array.
pub const FAVORITES_KEY: &str = "metFavorites";

/// Every operation reads the backing store and fails the same way when
/// it cannot be read.
pub trait FavoritesStore: Send + Sync + std::fmt::Debug {
    fn is_favorite(&self, id: ObjectId) -> Result<bool, FavoritesError>;

    /// Flip `id` and return its new state.
    fn toggle(&self, id: ObjectId) -> Result<bool, FavoritesError>;

    /// Favorites in the order they were added.
    fn list(&self) -> Result<Vec<ObjectId>, FavoritesError>;
}

/// File-backed store, re-read and re-written on every toggle.
#[derive(Debug, Clone)]
pub struct JsonFavorites {
    path: PathBuf,
}

impl JsonFavorites {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>, FavoritesError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(Map::new());
            }
            Err(source) => {
                return Err(FavoritesError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&contents).map_err(|source| {
            FavoritesError::Malformed {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn read_entries(&self) -> Result<Vec<String>, FavoritesError> {
        let document = self.read_document()?;
        Ok(entries(&document))
    }

    fn write_document(
        &self,
        document: &Map<String, Value>,
    ) -> Result<(), FavoritesError> {
        let write_err = |source| FavoritesError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let bytes = serde_json::to_vec_pretty(document).map_err(|source| {
            FavoritesError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, bytes).map_err(write_err)
    }
}

fn entries(document: &Map<String, Value>) -> Vec<String> {
    match document.get(FAVORITES_KEY) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

impl FavoritesStore for JsonFavorites {
    fn is_favorite(&self, id: ObjectId) -> Result<bool, FavoritesError> {
        let key = id.to_string();
        Ok(self.read_entries()?.iter().any(|entry| *entry == key))
    }

    fn toggle(&self, id: ObjectId) -> Result<bool, FavoritesError> {
        let key = id.to_string();
        let mut document = self.read_document()?;
        let mut current = entries(&document);

        let now_favorite = if current.iter().any(|entry| *entry == key) {
            current.retain(|entry| *entry != key);
            false
        } else {
            current.push(key);
            true
        };

        document.insert(
            FAVORITES_KEY.to_string(),
            Value::Array(current.into_iter().map(Value::String).collect()),
        );
        self.write_document(&document)?;
        debug!(object_id = %id, favorite = now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    fn list(&self) -> Result<Vec<ObjectId>, FavoritesError> {
        let ids = self
            .read_entries()?
            .iter()
            .filter_map(|entry| match entry.parse::<ObjectId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    debug!(entry, "skipping unparseable favorite");
                    None
                }
            })
            .collect();
        Ok(ids)
    }
}
