//! Application state for the terminal movie browser.
//!
//! [`App`] holds the current filters and UI mode, translates user actions
//! into filter transitions, and routes every transition through the
//! reconciler so each change issues exactly one search request.

use crate::application::dispatcher::FetchDispatcher;
use crate::application::reconciler::{Applied, Completion, Reconciler, ResponsePolicy};
use crate::domain::{FetchError, FilterState, MovieRecord, MovieSearch, YEAR_OPTIONS};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Label of the year picker entry that clears the year.
pub const YEAR_PLACEHOLDER: &str = "Select Year";

/// Represents the current mode of the application.
///
/// The mode decides how key presses are interpreted and which popups are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Browsing the grid - paging, genre and card navigation keys active
    Normal,
    /// The year picker is open
    YearSelect,
    /// Help screen is displayed
    Help,
}

/// One entry of the year picker: the label shown and the value submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearOption {
    pub label: String,
    pub value: String,
}

/// Returns the year picker entries: the placeholder followed by each offered year.
pub fn year_options() -> Vec<YearOption> {
    std::iter::once(YearOption {
        label: YEAR_PLACEHOLDER.to_string(),
        value: String::new(),
    })
    .chain(YEAR_OPTIONS.iter().map(|year| YearOption {
        label: year.to_string(),
        value: year.to_string(),
    }))
    .collect()
}

/// Main application state.
///
/// Filter changes only happen through the methods below; each one that
/// produces a different [`FilterState`] issues one request.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use reelgrid::application::{App, ResponsePolicy};
/// use reelgrid::domain::{FetchResult, FilterState, MovieRecord, MovieSearch, SearchRequest};
///
/// struct Empty;
///
/// impl MovieSearch for Empty {
///     fn search(&self, _request: &SearchRequest) -> FetchResult<Vec<MovieRecord>> {
///         Ok(Vec::new())
///     }
/// }
///
/// let mut app = App::new(Arc::new(Empty), FilterState::default(), ResponsePolicy::LatestOnly);
/// assert!(app.is_loading());
/// app.next_page();
/// assert_eq!(app.filters.page, 2);
/// assert_eq!(app.reconciler().latest_generation(), 2);
/// ```
pub struct App {
    /// Filters the latest request was issued for
    pub filters: FilterState,
    /// Current application mode
    pub mode: AppMode,
    /// Index of the highlighted card in the grid
    pub selected_card: usize,
    /// Highlighted entry in the year picker
    pub year_cursor: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    reconciler: Reconciler,
    dispatcher: FetchDispatcher,
}

impl App {
    /// Creates the application and issues the initial request for `filters`.
    ///
    /// # Arguments
    ///
    /// * `search` - Backend the requests are run against
    /// * `filters` - Filters in effect on start-up
    /// * `policy` - How responses to superseded requests are treated
    pub fn new(search: Arc<dyn MovieSearch>, filters: FilterState, policy: ResponsePolicy) -> Self {
        let mut app = Self {
            filters,
            mode: AppMode::Normal,
            selected_card: 0,
            year_cursor: 0,
            help_scroll: 0,
            status_message: None,
            reconciler: Reconciler::new(policy),
            dispatcher: FetchDispatcher::new(search),
        };
        app.issue_fetch();
        app
    }

    /// Replaces the filters and issues a request if they changed.
    ///
    /// Returns whether a request was issued.
    pub fn set_filters(&mut self, next: FilterState) -> bool {
        if next == self.filters {
            return false;
        }
        self.filters = next;
        self.issue_fetch();
        true
    }

    pub fn previous_page(&mut self) -> bool {
        self.set_filters(self.filters.previous_page())
    }

    pub fn next_page(&mut self) -> bool {
        self.set_filters(self.filters.next_page())
    }

    pub fn select_genre(&mut self, genre: &str) -> bool {
        self.set_filters(self.filters.with_genre(genre))
    }

    pub fn cycle_genre(&mut self) -> bool {
        let genre = self.filters.cycled_genre();
        self.select_genre(genre)
    }

    /// Applies a year picker value (see [`FilterState::with_year_option`]).
    pub fn select_year_option(&mut self, value: &str) -> bool {
        self.set_filters(self.filters.with_year_option(value))
    }

    /// Re-issues the request for the current filters.
    pub fn refresh(&mut self) {
        self.issue_fetch();
    }

    fn issue_fetch(&mut self) {
        let ticket = self.reconciler.issue(&self.filters);
        info!(
            generation = ticket.generation,
            page = ticket.request.page,
            year = ?ticket.request.year,
            genre = %ticket.request.genre,
            "issuing search request"
        );
        self.dispatcher.dispatch(ticket);
    }

    /// Applies every completion that has already arrived.
    ///
    /// Returns the number of completions processed.
    pub fn drain_completions(&mut self) -> usize {
        let mut processed = 0;
        while let Some(completion) = self.dispatcher.try_next() {
            self.handle_completion(completion);
            processed += 1;
        }
        processed
    }

    /// Blocks up to `timeout` for the next completion and applies it.
    pub fn wait_for_completion(&mut self, timeout: Duration) -> Option<Applied> {
        let completion = self.dispatcher.next_within(timeout)?;
        Some(self.handle_completion(completion))
    }

    /// Waits until no request is in flight, or until a wait exceeds `timeout`.
    ///
    /// Returns whether every issued request completed.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        while self.reconciler.in_flight() > 0 {
            if self.wait_for_completion(timeout).is_none() {
                return false;
            }
        }
        true
    }

    fn handle_completion(&mut self, completion: Completion) -> Applied {
        let generation = completion.generation;
        let applied = self.reconciler.apply(completion);
        match &applied {
            Applied::Replaced { count } => {
                info!(generation, count, "search results applied");
                self.selected_card = 0;
                self.status_message = None;
            }
            Applied::Failed(error) => {
                warn!(generation, error = %error, "search request failed");
                self.status_message = Some(format!("Fetch failed: {error}"));
            }
            Applied::Stale => {
                debug!(
                    generation,
                    latest = self.reconciler.latest_generation(),
                    "discarding stale search response"
                );
            }
        }
        applied
    }

    pub fn movies(&self) -> &[MovieRecord] {
        self.reconciler.movies()
    }

    pub fn is_loading(&self) -> bool {
        self.reconciler.is_loading()
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.reconciler.last_error()
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    /// Returns the highlighted movie, if the grid is not empty.
    pub fn selected_movie(&self) -> Option<&MovieRecord> {
        self.movies().get(self.selected_card)
    }

    pub fn select_next_card(&mut self) {
        if self.selected_card + 1 < self.movies().len() {
            self.selected_card += 1;
        }
    }

    pub fn select_previous_card(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
    }

    /// Opens the year picker with the current year highlighted.
    pub fn start_year_select(&mut self) {
        self.mode = AppMode::YearSelect;
        let current = self.filters.year.map(|y| y.to_string()).unwrap_or_default();
        self.year_cursor = year_options()
            .iter()
            .position(|option| option.value == current)
            .unwrap_or(0);
    }

    pub fn year_cursor_up(&mut self) {
        self.year_cursor = self.year_cursor.saturating_sub(1);
    }

    pub fn year_cursor_down(&mut self) {
        if self.year_cursor + 1 < year_options().len() {
            self.year_cursor += 1;
        }
    }

    /// Applies the highlighted year option and closes the picker.
    pub fn confirm_year_select(&mut self) -> bool {
        self.mode = AppMode::Normal;
        match year_options().get(self.year_cursor) {
            Some(option) => self.select_year_option(&option.value),
            None => false,
        }
    }

    pub fn cancel_year_select(&mut self) {
        self.mode = AppMode::Normal;
    }
}
