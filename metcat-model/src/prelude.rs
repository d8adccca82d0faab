//! Glob-importable set of the model types most call sites need.

pub use crate::department::{Department, DepartmentsResponse};
pub use crate::ids::{IdentifierList, ObjectId};
pub use crate::object::{DetailRecord, ObjectTag};
pub use crate::search::{SearchQuery, SearchResponse};
