use crate::error::OmdbError;
use movieflix_models::{MovieDetail, MovieSummary, RatingEntry};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEARCH_ERROR: &str = "No movies found";
pub const DEFAULT_DETAIL_ERROR: &str = "Movie not found";

#[derive(Debug, Serialize, Deserialize)]
pub struct OmdbSummary {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    #[serde(rename = "Type")]
    pub media_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search")]
    pub search: Option<Vec<OmdbSummary>>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OmdbRating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OmdbDetailResponse {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Type")]
    pub media_type: Option<String>,
    #[serde(rename = "Rated")]
    pub rated: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Writer")]
    pub writer: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Awards")]
    pub awards: Option<String>,
    #[serde(rename = "Metascore")]
    pub metascore: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "BoxOffice")]
    pub box_office: Option<String>,
    #[serde(rename = "Ratings", default)]
    pub ratings: Option<Vec<OmdbRating>>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

fn summary_from_wire(item: OmdbSummary) -> MovieSummary {
    MovieSummary {
        imdb_id: item.imdb_id,
        title: item.title,
        year: item.year,
        poster: item.poster,
        media_type: item.media_type,
    }
}

/// Map a search response body into domain summaries.
///
/// `Response: "False"` is the canonical failure signal regardless of HTTP
/// status, carrying the remote message when one is supplied.
pub fn map_search_response(body: OmdbSearchResponse) -> Result<Vec<MovieSummary>, OmdbError> {
    if body.response == "False" {
        return Err(OmdbError::NotFound(
            body.error.unwrap_or_else(|| DEFAULT_SEARCH_ERROR.to_string()),
        ));
    }

    Ok(body
        .search
        .unwrap_or_default()
        .into_iter()
        .map(summary_from_wire)
        .collect())
}

/// Map a detail response body into a domain record.
pub fn map_detail_response(body: OmdbDetailResponse) -> Result<MovieDetail, OmdbError> {
    if body.response == "False" {
        return Err(OmdbError::NotFound(
            body.error.unwrap_or_else(|| DEFAULT_DETAIL_ERROR.to_string()),
        ));
    }

    Ok(MovieDetail {
        imdb_id: body.imdb_id.unwrap_or_default(),
        title: body.title.unwrap_or_default(),
        year: body.year.unwrap_or_default(),
        poster: body.poster.unwrap_or_default(),
        media_type: body.media_type,
        rated: body.rated,
        released: body.released,
        runtime: body.runtime,
        genre: body.genre,
        director: body.director,
        writer: body.writer,
        actors: body.actors,
        plot: body.plot,
        language: body.language,
        country: body.country,
        awards: body.awards,
        metascore: body.metascore,
        imdb_rating: body.imdb_rating,
        imdb_votes: body.imdb_votes,
        box_office: body.box_office,
        ratings: body
            .ratings
            .unwrap_or_default()
            .into_iter()
            .map(|r| RatingEntry {
                source: r.source,
                value: r.value,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_search_response_success() {
        let body: OmdbSearchResponse = serde_json::from_str(
            r#"{
                "Search": [
                    {"imdbID": "tt0372784", "Title": "Batman Begins", "Year": "2005",
                     "Poster": "https://example.com/bb.jpg", "Type": "movie"}
                ],
                "totalResults": "1",
                "Response": "True"
            }"#,
        )
        .unwrap();

        let results = map_search_response(body).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].imdb_id, "tt0372784");
        assert_eq!(results[0].title, "Batman Begins");
        assert_eq!(results[0].year, "2005");
        assert_eq!(results[0].media_type.as_deref(), Some("movie"));
    }

    #[test]
    fn test_map_search_response_false_uses_remote_message() {
        let body: OmdbSearchResponse =
            serde_json::from_str(r#"{"Response": "False", "Error": "Movie not found!"}"#).unwrap();

        match map_search_response(body) {
            Err(OmdbError::NotFound(msg)) => assert_eq!(msg, "Movie not found!"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_map_search_response_false_without_message_uses_default() {
        let body: OmdbSearchResponse =
            serde_json::from_str(r#"{"Response": "False"}"#).unwrap();

        match map_search_response(body) {
            Err(OmdbError::NotFound(msg)) => assert_eq!(msg, DEFAULT_SEARCH_ERROR),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_map_search_response_true_with_absent_list_is_empty() {
        let body: OmdbSearchResponse =
            serde_json::from_str(r#"{"Response": "True", "totalResults": "0"}"#).unwrap();

        let results = map_search_response(body).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_map_detail_response_success_keeps_rating_order() {
        let body: OmdbDetailResponse = serde_json::from_str(
            r#"{
                "imdbID": "tt0372784", "Title": "Batman Begins", "Year": "2005",
                "Poster": "https://example.com/bb.jpg", "Type": "movie",
                "Plot": "A young Bruce Wayne...",
                "Director": "Christopher Nolan",
                "Ratings": [
                    {"Source": "Internet Movie Database", "Value": "8.2/10"},
                    {"Source": "Rotten Tomatoes", "Value": "85%"},
                    {"Source": "Metacritic", "Value": "70/100"}
                ],
                "Response": "True"
            }"#,
        )
        .unwrap();

        let detail = map_detail_response(body).unwrap();
        assert_eq!(detail.imdb_id, "tt0372784");
        assert_eq!(detail.director.as_deref(), Some("Christopher Nolan"));
        assert_eq!(detail.ratings.len(), 3);
        assert_eq!(detail.ratings[0].source, "Internet Movie Database");
        assert_eq!(detail.ratings[1].value, "85%");
        assert_eq!(detail.ratings[2].source, "Metacritic");
    }

    #[test]
    fn test_map_detail_response_false_uses_default_message() {
        let body: OmdbDetailResponse =
            serde_json::from_str(r#"{"Response": "False"}"#).unwrap();

        match map_detail_response(body) {
            Err(OmdbError::NotFound(msg)) => assert_eq!(msg, DEFAULT_DETAIL_ERROR),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
