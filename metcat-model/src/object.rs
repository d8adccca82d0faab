//! Per-object detail payload as served by `/objects/{id}`.

use serde::{Deserialize, Serialize};

use crate::ids::ObjectId;
use crate::serde_helpers::{blank_as_none, null_as_default};

/// Denormalized artwork record keyed by its identifier.
///
/// Treated as immutable once fetched. Text fields the API leaves blank
/// deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    #[serde(rename = "objectID")]
    pub object_id: ObjectId,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub artist_display_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub artist_display_bio: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub culture: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub period: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub object_date: Option<String>,
    #[serde(default)]
    pub object_begin_date: Option<i32>,
    #[serde(default)]
    pub object_end_date: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub medium: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub dimensions: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub credit_line: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub classification: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub geography_type: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub primary_image: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub primary_image_small: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_images: Vec<String>,
    #[serde(
        rename = "objectURL",
        default,
        deserialize_with = "blank_as_none"
    )]
    pub object_url: Option<String>,
    #[serde(default)]
    pub is_highlight: bool,
    #[serde(default)]
    pub is_public_domain: bool,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub accession_number: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub repository: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<ObjectTag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTag {
    pub term: String,
}

impl DetailRecord {
    /// Bare record carrying only its identifier; every other field empty.
    pub fn new(object_id: ObjectId) -> Self {
        Self {
            object_id,
            title: None,
            artist_display_name: None,
            artist_display_bio: None,
            culture: None,
            period: None,
            department: None,
            object_date: None,
            object_begin_date: None,
            object_end_date: None,
            medium: None,
            dimensions: None,
            credit_line: None,
            classification: None,
            country: None,
            region: None,
            city: None,
            geography_type: None,
            primary_image: None,
            primary_image_small: None,
            additional_images: Vec::new(),
            object_url: None,
            is_highlight: false,
            is_public_domain: false,
            accession_number: None,
            repository: None,
            tags: Vec::new(),
        }
    }

    /// Usable for display: carries a non-empty primary image.
    pub fn has_primary_image(&self) -> bool {
        self.primary_image
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    /// Thumbnail used for result cards.
    pub fn card_image(&self) -> Option<&str> {
        self.primary_image_small
            .as_deref()
            .or(self.primary_image.as_deref())
    }

    /// Primary image followed by any additional views. Empty when the
    /// record has no primary image.
    pub fn gallery(&self) -> Vec<&str> {
        let Some(primary) = self.primary_image.as_deref() else {
            return Vec::new();
        };
        std::iter::once(primary)
            .chain(
                self.additional_images
                    .iter()
                    .map(String::as_str)
                    .filter(|url| !url.trim().is_empty()),
            )
            .collect()
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Begin/end years, only when both are known and differ.
    pub fn date_range(&self) -> Option<(i32, i32)> {
        match (self.object_begin_date, self.object_end_date) {
            (Some(begin), Some(end)) if begin != end => Some((begin, end)),
            _ => None,
        }
    }

    /// Most specific geography available, joined as "city, region, country".
    pub fn geography(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.region, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
