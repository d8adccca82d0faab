use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    ENV_API_BASE_URL, ENV_CONFIG_PATH, ENV_FAVORITES_PATH, ENV_HTTP_TIMEOUT,
    ENV_PAGE_SIZE, ENV_SCROLL_THRESHOLD,
};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub paging: FilePagingConfig,
    #[serde(default)]
    pub favorites: FileFavoritesConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Humantime string, e.g. `"15s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FilePagingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_threshold: Option<f32>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileFavoritesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Environment overrides. Values are kept raw so the loader can report
/// which variable failed to parse.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub api_base_url: Option<String>,
    pub http_timeout: Option<String>,
    pub page_size: Option<String>,
    pub scroll_threshold: Option<String>,
    pub favorites_path: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        EnvConfig {
            config_path: var(ENV_CONFIG_PATH).map(PathBuf::from),
            api_base_url: var(ENV_API_BASE_URL),
            http_timeout: var(ENV_HTTP_TIMEOUT),
            page_size: var(ENV_PAGE_SIZE),
            scroll_threshold: var(ENV_SCROLL_THRESHOLD),
            favorites_path: var(ENV_FAVORITES_PATH).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn blank_variables_are_ignored() {
        let vars: HashMap<&str, &str> = [
            (ENV_API_BASE_URL, "   "),
            (ENV_PAGE_SIZE, " 40 "),
        ]
        .into_iter()
        .collect();
        let env = EnvConfig::from_lookup(|name| {
            vars.get(name).map(|v| v.to_string())
        });
        assert!(env.api_base_url.is_none());
        assert_eq!(env.page_size.as_deref(), Some("40"));
    }

    #[test]
    fn file_config_rejects_unknown_sections() {
        let parsed = toml::from_str::<FileConfig>("[server]\nport = 1\n");
        assert!(parsed.is_err());
    }
}
