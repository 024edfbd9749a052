use serde::{Deserialize, Serialize};

use super::errors::{FetchError, FetchResult};

/// A movie as displayed on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub poster_image: Option<String>,
    pub release_year: i32,
}

/// Response body of the search endpoint.
///
/// The nested field names are the endpoint's contract:
/// `{"movies": [{"titleText": {"text": ..}, "primaryImage": {"url": ..}, "releaseYear": {"year": ..}}]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub movies: Vec<MoviePayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePayload {
    pub title_text: TitleText,
    #[serde(default)]
    pub primary_image: Option<PrimaryImage>,
    pub release_year: ReleaseYear,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TitleText {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrimaryImage {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseYear {
    pub year: i32,
}

impl From<MoviePayload> for MovieRecord {
    fn from(payload: MoviePayload) -> Self {
        Self {
            title: payload.title_text.text,
            poster_image: payload.primary_image.map(|image| image.url),
            release_year: payload.release_year.year,
        }
    }
}

impl SearchResponse {
    /// Parses a response body and extracts the movie records in order.
    pub fn parse_movies(body: &str) -> FetchResult<Vec<MovieRecord>> {
        let response: SearchResponse =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(response.into_records())
    }

    pub fn into_records(self) -> Vec<MovieRecord> {
        self.movies.into_iter().map(MovieRecord::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_movie() {
        let body = r#"{"movies": [{"titleText": {"text": "Dune"}, "primaryImage": {"url": "http://x/d.jpg"}, "releaseYear": {"year": 2021}}]}"#;
        let movies = SearchResponse::parse_movies(body).unwrap();
        assert_eq!(
            movies,
            vec![MovieRecord {
                title: "Dune".to_string(),
                poster_image: Some("http://x/d.jpg".to_string()),
                release_year: 2021,
            }]
        );
    }

    #[test]
    fn test_parse_keeps_response_order() {
        let body = r#"{"movies": [
            {"titleText": {"text": "B"}, "primaryImage": {"url": "b"}, "releaseYear": {"year": 2020}},
            {"titleText": {"text": "A"}, "primaryImage": {"url": "a"}, "releaseYear": {"year": 2019}}
        ]}"#;
        let titles: Vec<String> = SearchResponse::parse_movies(body)
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_missing_or_null_poster() {
        let body = r#"{"movies": [
            {"titleText": {"text": "A"}, "releaseYear": {"year": 2020}},
            {"titleText": {"text": "B"}, "primaryImage": null, "releaseYear": {"year": 2020}}
        ]}"#;
        let movies = SearchResponse::parse_movies(body).unwrap();
        assert!(movies.iter().all(|m| m.poster_image.is_none()));
    }

    #[test]
    fn test_missing_movies_field_is_empty() {
        assert!(SearchResponse::parse_movies("{}").unwrap().is_empty());
    }

    #[test]
    fn test_missing_title_is_decode_error() {
        let body = r#"{"movies": [{"primaryImage": {"url": "a"}, "releaseYear": {"year": 2020}}]}"#;
        assert!(matches!(
            SearchResponse::parse_movies(body),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        assert!(matches!(
            SearchResponse::parse_movies("<html>"),
            Err(FetchError::Decode(_))
        ));
    }
}
