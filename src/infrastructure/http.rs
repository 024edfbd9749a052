use crate::domain::{FetchError, FetchResult, MovieRecord, MovieSearch, SearchRequest, SearchResponse};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Content type sent with every search request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// [`MovieSearch`] over HTTP: one `POST` of the JSON request body per search.
pub struct HttpMovieSearch {
    client: Client,
    endpoint: String,
}

impl HttpMovieSearch {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MovieSearch for HttpMovieSearch {
    fn search(&self, request: &SearchRequest) -> FetchResult<Vec<MovieRecord>> {
        let body = serde_json::to_string(request).map_err(|e| FetchError::Encode(e.to_string()))?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        SearchResponse::parse_movies(&text)
    }
}
