//! Screen routing.
//!
//! Routes keep a path-and-query addressing scheme (`q`, `p`, `tag`) so
//! startup deep links can be parsed and any location can be rendered as a
//! shareable string. In-app navigation swaps the current `Route` value.

use std::fmt;

use reqwest::Url;

/// Synthetic base for parsing path-plus-query strings; the authority is
/// throwaway.
const PARSE_BASE: &str = "app://local";

/// Which screen is showing, plus its view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Trending,
    Search {
        query: String,
        /// Zero-based page index.
        page: usize,
    },
    Favorites {
        page: usize,
        /// Optional tag filter over the favorites collection.
        tag: Option<String>,
    },
}

impl Route {
    /// Parse a location such as `/search?q=cats&p=2`.
    ///
    /// Unknown paths fall back to trending; a missing or malformed `p`
    /// means page zero; an empty `tag` means no filter.
    pub fn parse(location: &str) -> Route {
        let url = match Url::parse(PARSE_BASE).and_then(|base| base.join(location)) {
            Ok(url) => url,
            Err(_) => return Route::Trending,
        };

        let mut query = String::new();
        let mut page = 0;
        let mut tag = None;

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "q" => query = value.into_owned(),
                "p" => page = value.parse().unwrap_or(0),
                "tag" => tag = Some(value.into_owned()).filter(|tag| !tag.is_empty()),
                _ => {}
            }
        }

        match url.path() {
            "/search" => Route::Search { query, page },
            "/favorites" => Route::Favorites { page, tag },
            _ => Route::Trending,
        }
    }

    /// The same route pointed at a different page. Trending does not
    /// paginate and is returned unchanged.
    pub fn with_page(&self, page: usize) -> Route {
        match self {
            Route::Trending => Route::Trending,
            Route::Search { query, .. } => Route::Search {
                query: query.clone(),
                page,
            },
            Route::Favorites { tag, .. } => Route::Favorites {
                page,
                tag: tag.clone(),
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut url = Url::parse(PARSE_BASE).expect("static base URI parses");

        match self {
            Route::Trending => return write!(f, "/"),
            Route::Search { query, page } => {
                url.set_path("/search");
                let mut pairs = url.query_pairs_mut();
                pairs.append_pair("q", query);
                if *page > 0 {
                    pairs.append_pair("p", &page.to_string());
                }
            }
            Route::Favorites { page, tag } => {
                url.set_path("/favorites");
                let mut pairs = url.query_pairs_mut();
                if let Some(tag) = tag {
                    pairs.append_pair("tag", tag);
                }
                if *page > 0 {
                    pairs.append_pair("p", &page.to_string());
                }
            }
        }

        match url.query() {
            Some(query) if !query.is_empty() => write!(f, "{}?{}", url.path(), query),
            _ => write!(f, "{}", url.path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_with_page() {
        assert_eq!(
            Route::parse("/search?q=cats&p=2"),
            Route::Search {
                query: "cats".to_string(),
                page: 2,
            }
        );
    }

    #[test]
    fn test_parse_missing_page_is_zero() {
        assert_eq!(
            Route::parse("/search?q=cats"),
            Route::Search {
                query: "cats".to_string(),
                page: 0,
            }
        );
    }

    #[test]
    fn test_parse_malformed_page_is_zero() {
        assert_eq!(
            Route::parse("/favorites?p=banana"),
            Route::Favorites { page: 0, tag: None }
        );
    }

    #[test]
    fn test_parse_favorites_tag_filter() {
        assert_eq!(
            Route::parse("/favorites?tag=funny&p=1"),
            Route::Favorites {
                page: 1,
                tag: Some("funny".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_unknown_path_falls_back_to_trending() {
        assert_eq!(Route::parse("/"), Route::Trending);
        assert_eq!(Route::parse("/nope"), Route::Trending);
        assert_eq!(Route::parse(""), Route::Trending);
    }

    #[test]
    fn test_display_round_trips() {
        let routes = [
            Route::Trending,
            Route::Search {
                query: "excited dog".to_string(),
                page: 3,
            },
            Route::Search {
                query: "cats".to_string(),
                page: 0,
            },
            Route::Favorites {
                page: 2,
                tag: Some("cute dogs".to_string()),
            },
            Route::Favorites { page: 0, tag: None },
        ];

        for route in routes {
            assert_eq!(Route::parse(&route.to_string()), route, "{route}");
        }
    }

    #[test]
    fn test_with_page() {
        let search = Route::Search {
            query: "cats".to_string(),
            page: 0,
        };
        assert_eq!(
            search.with_page(4),
            Route::Search {
                query: "cats".to_string(),
                page: 4,
            }
        );
        assert_eq!(Route::Trending.with_page(4), Route::Trending);
    }
}
