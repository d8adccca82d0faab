//! Search request facets and the first-stage search response.

use serde::{Deserialize, Serialize};

use crate::ids::{IdentifierList, ObjectId};

/// Response of `/search`: bare identifiers, never full records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u32,
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<ObjectId>>,
}

impl SearchResponse {
    /// Full ordered identifier list; `null` maps to empty.
    pub fn into_identifiers(self) -> IdentifierList {
        self.object_ids.unwrap_or_default().into()
    }
}

/// Free-text query plus the facet parameters of the advanced form.
///
/// Empty strings and `None` are treated alike: the parameter is left
/// off the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub department_id: Option<u32>,
    pub artist_or_culture: bool,
    pub date_begin: Option<i32>,
    pub date_end: Option<i32>,
    pub medium: Option<String>,
    pub has_images: bool,
    pub geo_location: Option<String>,
    pub tags: Option<String>,
}

impl SearchQuery {
    /// Header-bar search: text only, no facets.
    pub fn simple(text: impl Into<String>) -> Self {
        Self {
            q: Some(text.into()),
            ..Self::default()
        }
    }

    /// Advanced form defaults: image-bearing results only.
    pub fn advanced() -> Self {
        Self {
            has_images: true,
            ..Self::default()
        }
    }

    /// Query string pairs in the order the remote endpoint documents
    /// them. With nothing set, falls back to `hasImages=true`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = non_blank(&self.q) {
            pairs.push(("q", q.to_string()));
        }
        pairs.extend(self.facet_pairs());
        if pairs.is_empty() {
            pairs.push(("hasImages", "true".to_string()));
        }
        pairs
    }

    fn facet_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.department_id {
            pairs.push(("departmentId", id.to_string()));
        }
        if self.artist_or_culture {
            pairs.push(("artistOrCulture", "true".to_string()));
        }
        if let Some(begin) = self.date_begin {
            pairs.push(("dateBegin", begin.to_string()));
        }
        if let Some(end) = self.date_end {
            pairs.push(("dateEnd", end.to_string()));
        }
        if let Some(medium) = non_blank(&self.medium) {
            pairs.push(("medium", medium.to_string()));
        }
        if self.has_images {
            pairs.push(("hasImages", "true".to_string()));
        }
        if let Some(geo) = non_blank(&self.geo_location) {
            pairs.push(("geoLocation", geo.to_string()));
        }
        if let Some(tags) = non_blank(&self.tags) {
            pairs.push(("tags", tags.to_string()));
        }
        pairs
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_object_ids_become_empty_list() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"total": 0, "objectIDs": null}"#)
                .unwrap();
        assert!(response.into_identifiers().is_empty());
    }

    #[test]
    fn identifiers_keep_server_order() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"total": 3, "objectIDs": [9, 3, 7]}"#)
                .unwrap();
        let ids = response.into_identifiers();
        assert_eq!(&*ids, &[ObjectId(9), ObjectId(3), ObjectId(7)]);
    }

    #[test]
    fn simple_query_sends_only_text() {
        let pairs = SearchQuery::simple("sunflowers").to_query_pairs();
        assert_eq!(pairs, vec![("q", "sunflowers".to_string())]);
    }

    #[test]
    fn facets_render_in_documented_order() {
        let query = SearchQuery {
            q: Some("cat".into()),
            department_id: Some(10),
            artist_or_culture: true,
            date_begin: Some(-1000),
            date_end: Some(100),
            medium: Some("Bronze".into()),
            has_images: true,
            geo_location: Some("Egypt".into()),
            tags: Some("  ".into()),
        };
        let keys: Vec<&str> =
            query.to_query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "q",
                "departmentId",
                "artistOrCulture",
                "dateBegin",
                "dateEnd",
                "medium",
                "hasImages",
                "geoLocation",
            ]
        );
    }

    #[test]
    fn empty_advanced_query_defaults_to_has_images() {
        let query = SearchQuery {
            has_images: false,
            ..SearchQuery::default()
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![("hasImages", "true".to_string())]
        );
    }
}
