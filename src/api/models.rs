//! JSON models for the favorites and GIF endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// A user-curated GIF reference with free-form tags.
///
/// `id` is the external GIF identifier. The backend also returns the owning
/// user, which the client ignores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub id: String,
    /// Tag sets are unordered and duplicate-free; `BTreeSet` collapses
    /// duplicates on deserialization and keeps iteration stable.
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl FavoriteRecord {
    pub fn new(id: impl Into<String>) -> Self {
        FavoriteRecord {
            id: id.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, T>(id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        FavoriteRecord {
            id: id.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// One rendition of a GIF (a particular size tier).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rendition {
    pub url: String,
    /// The GIF API encodes dimensions as decimal strings.
    #[serde(deserialize_with = "dimension")]
    pub width: u32,
    #[serde(deserialize_with = "dimension")]
    pub height: u32,
}

/// The renditions the views consume: a fixed-width thumbnail for the grid
/// and the original for the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Renditions {
    pub fixed_width: Rendition,
    pub original: Rendition,
}

/// A single GIF item as returned by the GIF endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GifImage {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// The GIF's public page, used for sharing.
    #[serde(default)]
    pub url: String,
    pub images: Renditions,
}

/// Pagination metadata attached to search responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub offset: u64,
}

/// One page of GIF items plus pagination metadata.
///
/// Transient: replaced wholesale on every fetch, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GifPage {
    #[serde(default)]
    pub data: Vec<GifImage>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Accepts both `"200"` and `200`; the GIF API uses strings, but numbers
/// appear in the wild.
fn dimension<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(number) => Ok(number),
        Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PAYLOAD: &str = r#"{
        "data": [
            {
                "id": "abc123",
                "title": "Excited Dog",
                "url": "https://gifs.example.com/abc123",
                "images": {
                    "fixed_width": {
                        "url": "https://media.example.com/abc123/200w.gif",
                        "width": "200",
                        "height": "150"
                    },
                    "original": {
                        "url": "https://media.example.com/abc123/giphy.gif",
                        "width": "480",
                        "height": "360"
                    }
                }
            }
        ],
        "pagination": { "total_count": 23, "count": 9, "offset": 18 }
    }"#;

    #[test]
    fn test_search_page_deserializes() {
        let page: GifPage = serde_json::from_str(SEARCH_PAYLOAD).unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "abc123");
        assert_eq!(page.data[0].images.fixed_width.width, 200);
        assert_eq!(page.data[0].images.original.height, 360);
        assert_eq!(page.pagination.total_count, 23);
        assert_eq!(page.pagination.offset, 18);
    }

    #[test]
    fn test_missing_pagination_defaults_to_zero() {
        let page: GifPage = serde_json::from_str(r#"{ "data": [] }"#).unwrap();
        assert_eq!(page.pagination.total_count, 0);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_numeric_dimensions_accepted() {
        let rendition: Rendition = serde_json::from_str(
            r#"{ "url": "https://media.example.com/x.gif", "width": 200, "height": 150 }"#,
        )
        .unwrap();
        assert_eq!((rendition.width, rendition.height), (200, 150));
    }

    #[test]
    fn test_favorite_duplicate_tags_collapse() {
        let record: FavoriteRecord = serde_json::from_str(
            r#"{ "id": "abc123", "user": "auth0|42", "tags": ["funny", "dog", "funny"] }"#,
        )
        .unwrap();

        assert_eq!(record.id, "abc123");
        assert_eq!(record.tags.len(), 2);
        assert!(record.tags.contains("funny"));
        assert!(record.tags.contains("dog"));
    }

    #[test]
    fn test_favorite_without_tags_is_empty_set() {
        let record: FavoriteRecord = serde_json::from_str(r#"{ "id": "abc123" }"#).unwrap();
        assert!(record.tags.is_empty());
    }
}
