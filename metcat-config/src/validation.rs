use thiserror::Error;
use url::Url;

use crate::constants::LARGE_PAGE_SIZE;
use crate::models::Config;

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("scroll threshold must be a finite, non-negative distance (got {0})")]
    InvalidScrollThreshold(f32),
    #[error("API base URL '{url}' is not an absolute http(s) URL")]
    InvalidBaseUrl { url: String },
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.paging.page_size == 0 {
        return Err(ConfigGuardRailError::ZeroPageSize);
    }
    let threshold = config.paging.scroll_threshold;
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ConfigGuardRailError::InvalidScrollThreshold(threshold));
    }

    match Url::parse(&config.api.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            if url.scheme() == "http" {
                warnings.push("API base URL uses plain http");
            }
        }
        _ => {
            return Err(ConfigGuardRailError::InvalidBaseUrl {
                url: config.api.base_url.clone(),
            });
        }
    }

    if config.paging.page_size > LARGE_PAGE_SIZE {
        warnings.push_with_hint(
            format!(
                "page size {} issues that many parallel detail requests per scroll",
                config.paging.page_size
            ),
            "Keep METCAT_PAGE_SIZE at or below 80 to stay friendly to the public API",
        );
    }

    Ok(warnings)
}
