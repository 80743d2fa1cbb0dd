use crate::api::{self, OmdbDetailResponse, OmdbSearchResponse};
use crate::error::OmdbError;
use crate::traits::MovieDatabase;
use async_trait::async_trait;
use movieflix_models::{MovieDetail, MovieSummary};
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

/// Stateless request/response wrapper around the OMDb API.
///
/// Every call is a fresh request: no retries, no timeout override beyond
/// transport defaults, no response caching.
#[derive(Clone)]
pub struct OmdbClient {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url,
        }
    }

    fn validated<'a>(arg: &'a str, message: &str) -> Result<&'a str, OmdbError> {
        let trimmed = arg.trim();
        if trimmed.is_empty() {
            return Err(OmdbError::Validation(message.to_string()));
        }
        Ok(trimmed)
    }
}

#[async_trait]
impl MovieDatabase for OmdbClient {
    async fn search_by_title(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        let query = Self::validated(query, "Search query cannot be empty")?;

        debug!(query, "searching OMDb by title");
        let body: OmdbSearchResponse = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("s", query)])
            .send()
            .await?
            .json()
            .await?;

        api::map_search_response(body)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<MovieDetail, OmdbError> {
        let id = Self::validated(id, "IMDB ID cannot be empty")?;

        debug!(id, "fetching OMDb detail");
        let body: OmdbDetailResponse = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("i", id)])
            .send()
            .await?
            .json()
            .await?;

        api::map_detail_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OmdbClient {
        OmdbClient::new("test_key".to_string(), "https://omdb.invalid/".to_string())
    }

    // Validation failures must short-circuit before any network I/O, so
    // these run against an unroutable base URL.

    #[tokio::test]
    async fn test_search_rejects_empty_query_locally() {
        match client().search_by_title("   ").await {
            Err(OmdbError::Validation(msg)) => assert_eq!(msg, "Search query cannot be empty"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_rejects_empty_id_locally() {
        match client().fetch_by_id("").await {
            Err(OmdbError::Validation(msg)) => assert_eq!(msg, "IMDB ID cannot be empty"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }
}
