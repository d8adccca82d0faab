//! Shared configuration library for metcat.
//!
//! Settings resolve from three layers, highest precedence first: process
//! environment (optionally seeded from a `.env` file), a `metcat.toml`
//! file, and built-in defaults. The binary and the integration tests use
//! the same loader so defaults and guard rails live in one place.
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::{ApiConfig, Config, ConfigMetadata, FavoritesConfig, PagingConfig};
pub use sources::{EnvConfig, FileConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
