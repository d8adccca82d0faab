//! Endpoint paths, relative to the configured base URL.

pub const SEARCH: &str = "/search";
pub const OBJECTS: &str = "/objects";
pub const DEPARTMENTS: &str = "/departments";

/// `/objects/{id}`
pub fn object(id: impl std::fmt::Display) -> String {
    format!("{OBJECTS}/{id}")
}
