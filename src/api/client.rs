//! Authenticated HTTP client for the backend endpoints.

use reqwest::Url;
use serde_json::json;

use crate::api::models::{FavoriteRecord, GifPage};
use crate::error::Error;

/// Client for the favorites and GIF endpoints.
///
/// Every backend call attaches `Authorization: Bearer <token>`. The client
/// is cheap to clone (the underlying `reqwest::Client` is reference
/// counted), so each background task takes its own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    token: String,
}

impl ApiClient {
    /// Build a client against `base` using the session's bearer token.
    pub fn new(base: Url, token: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base,
            token: token.into(),
        }
    }

    /// Join path segments onto the base URI. Segments are percent-encoded,
    /// so free-form tag names survive the trip.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base.clone();

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Error::Transport(format!("base URI {} cannot be a base", self.base)))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }

        Ok(url)
    }

    /// `GET /favorites` - the full favorites collection for the current user.
    pub async fn list_favorites(&self) -> Result<Vec<FavoriteRecord>, Error> {
        let url = self.endpoint(&["favorites"])?;
        let records = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(records)
    }

    /// `POST /favorites` - favorite a GIF by id.
    pub async fn add_favorite(&self, id: &str) -> Result<(), Error> {
        let url = self.endpoint(&["favorites"])?;
        self.http
            .post(url)
            .bearer_auth(&self.token)
            .json(&json!({ "id": id }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// `DELETE /favorites/{id}` - unfavorite a GIF.
    pub async fn remove_favorite(&self, id: &str) -> Result<(), Error> {
        let url = self.endpoint(&["favorites", id])?;
        self.http
            .delete(url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// `POST /favorites/{id}/tags/{tag}` - add a tag to one record.
    pub async fn add_tag(&self, id: &str, tag: &str) -> Result<(), Error> {
        let url = self.endpoint(&["favorites", id, "tags", tag])?;
        self.http
            .post(url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// `DELETE /favorites/{id}/tags/{tag}` - remove a tag from one record.
    pub async fn remove_tag(&self, id: &str, tag: &str) -> Result<(), Error> {
        let url = self.endpoint(&["favorites", id, "tags", tag])?;
        self.http
            .delete(url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// `GET /giphy/trending?limit=N` - the backend-ranked default feed.
    pub async fn trending(&self, limit: usize) -> Result<GifPage, Error> {
        let url = self.endpoint(&["giphy", "trending"])?;
        let page = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(&[("limit", limit.to_string())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page)
    }

    /// `GET /giphy/query?q=&offset=&limit=` - one page of search results.
    pub async fn search(&self, query: &str, offset: usize, limit: usize) -> Result<GifPage, Error> {
        let url = self.endpoint(&["giphy", "query"])?;
        let page = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(&[
                ("q", query.to_string()),
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page)
    }

    /// `GET /giphy/gifs?ids=a,b,c` - hydrate favorite ids into displayable
    /// media.
    pub async fn gifs_by_ids(&self, ids: &[String]) -> Result<GifPage, Error> {
        let url = self.endpoint(&["giphy", "gifs"])?;
        let page = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(&[("ids", ids.join(","))])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page)
    }

    /// Fetch raw media bytes from a rendition URL.
    ///
    /// Media hosts are outside the backend and take no bearer token.
    pub async fn fetch_media(&self, url: &str) -> Result<Vec<u8>, Error> {
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(Url::parse(base).unwrap(), "test-token")
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let url = client("http://localhost:8000")
            .endpoint(&["favorites", "abc123"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/favorites/abc123");
    }

    #[test]
    fn test_endpoint_handles_trailing_slash_base() {
        let url = client("https://api.example.com/gifs/")
            .endpoint(&["giphy", "trending"])
            .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/gifs/giphy/trending");
    }

    #[test]
    fn test_endpoint_escapes_free_form_tags() {
        let url = client("http://localhost:8000")
            .endpoint(&["favorites", "abc123", "tags", "cute dogs"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/favorites/abc123/tags/cute%20dogs"
        );
    }
}
