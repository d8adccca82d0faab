pub mod error;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use tracing::debug;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT, DEFAULT_PAGE_SIZE,
    DEFAULT_SCROLL_THRESHOLD, ENV_HTTP_TIMEOUT, ENV_PAGE_SIZE,
    ENV_SCROLL_THRESHOLD, FAVORITES_FILE_NAME,
};
use crate::models::{
    ApiConfig, Config, ConfigMetadata, FavoritesConfig, PagingConfig,
};
use crate::sources::{EnvConfig, FileConfig};
use crate::validation::{self, ConfigWarnings};

pub use error::ConfigLoadError;

static DEFAULT_CONFIG_LOCATIONS: LazyLock<Vec<PathBuf>> = LazyLock::new(|| {
    vec![
        PathBuf::from("metcat.toml"),
        PathBuf::from("config/metcat.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Use these overrides instead of reading the process environment.
    pub env: Option<EnvConfig>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.options.env = Some(env);
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let env_config = match &self.options.env {
            Some(env) => env.clone(),
            None => EnvConfig::gather(),
        };

        let (file_config, config_path) = self.load_file_config(&env_config)?;

        let mut warnings = ConfigWarnings::default();
        if config_path.is_none() {
            warnings.push_with_hint(
                "No metcat.toml detected; using defaults and environment variables",
                "Create metcat.toml or set METCAT_CONFIG_PATH to customise the API endpoint and paging",
            );
        }

        let config = compose_config(
            file_config.unwrap_or_default(),
            env_config,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;

        warnings.extend(validation::apply_guard_rails(&config)?);

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // Explicit and env-provided paths must exist; defaults are optional.
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env_config.config_path.clone());

        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingConfig { path });
                }
                path
            }
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.clone(),
                None => return Ok((None, None)),
            },
        };

        debug!(path = %path.display(), "reading configuration file");

        let contents =
            fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
                path: path.clone(),
                source,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| {
                ConfigLoadError::Parse {
                    path: path.clone(),
                    source,
                }
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        api: file_api,
        paging: file_paging,
        favorites: file_favorites,
    } = file;

    let base_url = env
        .api_base_url
        .or(file_api.base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let timeout = match env.http_timeout {
        Some(raw) => parse_duration(ENV_HTTP_TIMEOUT, raw)?,
        None => match file_api.timeout {
            Some(raw) => parse_duration("api.timeout", raw)?,
            None => DEFAULT_HTTP_TIMEOUT,
        },
    };

    let page_size = match env.page_size {
        Some(raw) => parse_number(ENV_PAGE_SIZE, raw)?,
        None => file_paging.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    };

    let scroll_threshold = match env.scroll_threshold {
        Some(raw) => parse_number(ENV_SCROLL_THRESHOLD, raw)?,
        None => file_paging
            .scroll_threshold
            .unwrap_or(DEFAULT_SCROLL_THRESHOLD),
    };

    let favorites_path = env
        .favorites_path
        .or(file_favorites.path)
        .unwrap_or_else(default_favorites_path);

    Ok(Config {
        api: ApiConfig { base_url, timeout },
        paging: PagingConfig {
            page_size,
            scroll_threshold,
        },
        favorites: FavoritesConfig {
            path: favorites_path,
        },
        metadata,
    })
}

fn parse_duration(
    field: &'static str,
    value: String,
) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(&value).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            field,
            value,
            source,
        }
    })
}

fn parse_number<T: FromStr>(
    field: &'static str,
    value: String,
) -> Result<T, ConfigLoadError> {
    value
        .parse::<T>()
        .map_err(|_| ConfigLoadError::InvalidNumber { field, value })
}

fn default_favorites_path() -> PathBuf {
    directories::ProjectDirs::from("org", "metcat", "metcat")
        .map(|dirs| dirs.data_dir().join(FAVORITES_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(FAVORITES_FILE_NAME))
}
