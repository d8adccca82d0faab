use std::fmt;
use std::str::FromStr;

/// Opaque catalog identifier returned by the search endpoint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl ObjectId {
    pub const fn new(raw: u32) -> Self {
        ObjectId(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ObjectId {
    fn from(raw: u32) -> Self {
        ObjectId(raw)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ObjectId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(ObjectId)
    }
}

/// Ordered identifiers produced by one search call.
///
/// Immutable once built; a new search produces a new list.
pub type IdentifierList = std::sync::Arc<[ObjectId]>;
