use crate::error::OmdbError;
use async_trait::async_trait;
use movieflix_models::{MovieDetail, MovieSummary};

/// Seam between controllers and the remote title database.
#[async_trait]
pub trait MovieDatabase: Send + Sync + 'static {
    /// Search the database by title. Results arrive in remote order.
    async fn search_by_title(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError>;

    /// Fetch full metadata for one title by IMDB ID.
    async fn fetch_by_id(&self, id: &str) -> Result<MovieDetail, OmdbError>;
}
