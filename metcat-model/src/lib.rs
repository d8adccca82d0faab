//! Core data model definitions shared across metcat crates.
#![allow(missing_docs)]

pub mod department;
pub mod ids;
pub mod object;
pub mod prelude;
pub mod search;

mod serde_helpers;

// Intentionally curated re-exports for downstream consumers.
pub use department::{Department, DepartmentsResponse};
pub use ids::{IdentifierList, ObjectId};
pub use object::{DetailRecord, ObjectTag};
pub use search::{SearchQuery, SearchResponse};
