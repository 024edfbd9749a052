//! Fetch reconciliation.
//!
//! The [`Reconciler`] turns filter transitions into numbered requests and
//! decides what each completed request does to the displayed movie list.
//! It performs no I/O; the dispatcher runs the requests and feeds the
//! completions back in arrival order.

use crate::domain::{FetchError, FetchResult, FilterState, MovieRecord, SearchRequest};

/// What to do with a response that is not for the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsePolicy {
    /// Only the latest issued request may update the list.
    #[default]
    LatestOnly,
    /// Every response is applied as it arrives; the last arrival wins even
    /// when it was issued for older filters.
    ArrivalOrder,
}

/// A request that has been issued and must be run against the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub request: SearchRequest,
}

/// The outcome of running a [`Ticket`].
#[derive(Debug, Clone)]
pub struct Completion {
    pub generation: u64,
    pub result: FetchResult<Vec<MovieRecord>>,
}

/// Effect of applying a [`Completion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The movie list was replaced with `count` records.
    Replaced { count: usize },
    /// The request failed; the list is unchanged.
    Failed(FetchError),
    /// The response was superseded by a newer request and ignored.
    Stale,
}

#[derive(Debug, Default)]
pub struct Reconciler {
    policy: ResponsePolicy,
    latest_generation: u64,
    in_flight: usize,
    loading: bool,
    movies: Vec<MovieRecord>,
    last_error: Option<FetchError>,
}

impl Reconciler {
    pub fn new(policy: ResponsePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Issues a request for `filters` and marks the reconciler as loading.
    ///
    /// Requests already in flight are not cancelled.
    pub fn issue(&mut self, filters: &FilterState) -> Ticket {
        self.latest_generation += 1;
        self.in_flight += 1;
        self.loading = true;
        Ticket {
            generation: self.latest_generation,
            request: filters.to_request(),
        }
    }

    /// Applies a completed request.
    ///
    /// The loading flag is always settled before the result is inspected, so
    /// a failure never leaves it stuck.
    pub fn apply(&mut self, completion: Completion) -> Applied {
        self.in_flight = self.in_flight.saturating_sub(1);

        let is_latest = completion.generation == self.latest_generation;
        if self.policy == ResponsePolicy::LatestOnly && !is_latest {
            return Applied::Stale;
        }
        self.loading = false;

        match completion.result {
            Ok(movies) => {
                let count = movies.len();
                self.movies = movies;
                self.last_error = None;
                Applied::Replaced { count }
            }
            Err(error) => {
                self.last_error = Some(error.clone());
                Applied::Failed(error)
            }
        }
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }
}
