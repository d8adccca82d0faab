use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str =
    "https://collectionapi.metmuseum.org/public/collection/v1";

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Identifiers hydrated per page, for the seed and every advance.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Remaining scroll distance below which the next page is requested.
pub const DEFAULT_SCROLL_THRESHOLD: f32 = 200.0;

/// Past this many identifiers a page fans out into an unfriendly number
/// of concurrent requests against a public API.
pub const LARGE_PAGE_SIZE: usize = 80;

pub const FAVORITES_FILE_NAME: &str = "favorites.json";

pub const ENV_CONFIG_PATH: &str = "METCAT_CONFIG_PATH";
pub const ENV_API_BASE_URL: &str = "METCAT_API_BASE_URL";
pub const ENV_HTTP_TIMEOUT: &str = "METCAT_HTTP_TIMEOUT";
pub const ENV_PAGE_SIZE: &str = "METCAT_PAGE_SIZE";
pub const ENV_SCROLL_THRESHOLD: &str = "METCAT_SCROLL_THRESHOLD";
pub const ENV_FAVORITES_PATH: &str = "METCAT_FAVORITES_PATH";
