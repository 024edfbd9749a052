use thiserror::Error;

/// Failure of a single search request.
///
/// Every variant takes the same path through the reconciler: the loading
/// flag is cleared and the displayed movie list is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed with status {status}")]
    RequestFailed { status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

pub type FetchResult<T> = Result<T, FetchError>;
