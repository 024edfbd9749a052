//! Search service boundary.
//!
//! The application layer talks to the movie search endpoint only through
//! [`MovieSearch`], so the HTTP client can be swapped for an in-process fake.

use super::errors::FetchResult;
use super::filters::SearchRequest;
use super::models::MovieRecord;

/// A backend that answers one search request with one page of movies.
///
/// Implementations perform a single request/response exchange with no retry.
/// Calls are made from worker threads, so implementations must be shareable.
///
/// # Examples
///
/// ```
/// use reelgrid::domain::{FetchResult, MovieRecord, MovieSearch, SearchRequest};
///
/// struct Empty;
///
/// impl MovieSearch for Empty {
///     fn search(&self, _request: &SearchRequest) -> FetchResult<Vec<MovieRecord>> {
///         Ok(Vec::new())
///     }
/// }
///
/// let request = SearchRequest { page: 1, year: None, genre: String::new() };
/// assert!(Empty.search(&request).unwrap().is_empty());
/// ```
pub trait MovieSearch: Send + Sync {
    fn search(&self, request: &SearchRequest) -> FetchResult<Vec<MovieRecord>>;
}
