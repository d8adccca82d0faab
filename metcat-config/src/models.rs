use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub paging: PagingConfig,
    pub favorites: FavoritesConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    pub fn favorites_path(&self) -> &Path {
        &self.favorites.path
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Collection API root, without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy)]
pub struct PagingConfig {
    pub page_size: usize,
    pub scroll_threshold: f32,
}

#[derive(Debug, Clone)]
pub struct FavoritesConfig {
    pub path: PathBuf,
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
