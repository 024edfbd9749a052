//! Filter and pagination state for the movie grid.
//!
//! A [`FilterState`] is an immutable value. Every user interaction produces a
//! new one, and the reconciler derives the outbound [`SearchRequest`] from
//! whichever value is current.

use serde::{Deserialize, Serialize};

/// Genre label that means "no genre filter".
pub const ALL_GENRES: &str = "All";

/// Genre buttons, in display order.
pub const GENRES: [&str; 4] = [ALL_GENRES, "Animation", "Comedy", "Fantasy"];

/// Years offered by the year picker, newest first.
pub const YEAR_OPTIONS: [i32; 6] = [2024, 2023, 2022, 2021, 2020, 2019];

/// The (page, year, genre) tuple driving the next search request.
///
/// # Examples
///
/// ```
/// use reelgrid::domain::FilterState;
///
/// let filters = FilterState::default();
/// assert_eq!(filters.page, 1);
/// assert_eq!(filters.year, None);
/// assert_eq!(filters.genre, "All");
///
/// assert_eq!(filters.previous_page().page, 1);
/// assert_eq!(filters.next_page().page, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Current page, never below 1
    pub page: u32,
    /// Selected release year, if any
    pub year: Option<i32>,
    /// Selected genre label, `"All"` when unfiltered
    pub genre: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            page: 1,
            year: None,
            genre: ALL_GENRES.to_string(),
        }
    }
}

impl FilterState {
    /// Builds a state from raw values, clamping the page to 1.
    pub fn new(page: u32, year: Option<i32>, genre: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            year,
            genre: genre.into(),
        }
    }

    /// Moves one page back, stopping at page 1.
    pub fn previous_page(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self.clone()
        }
    }

    /// Moves one page forward. There is no known last page.
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }

    /// Applies the value of a year picker option.
    ///
    /// The value goes through a numeric parse with no check against
    /// [`YEAR_OPTIONS`]. Blank or non-numeric values clear the year.
    pub fn with_year_option(&self, value: &str) -> Self {
        self.with_year(value.trim().parse::<i32>().ok())
    }

    pub fn with_year(&self, year: Option<i32>) -> Self {
        Self {
            year,
            ..self.clone()
        }
    }

    /// Selects a genre by its button label, verbatim.
    pub fn with_genre(&self, genre: &str) -> Self {
        Self {
            genre: genre.to_string(),
            ..self.clone()
        }
    }

    /// Label of the genre button after the current one, wrapping around.
    ///
    /// A genre that is not one of the buttons cycles back to the first.
    pub fn cycled_genre(&self) -> &'static str {
        let next = GENRES
            .iter()
            .position(|g| *g == self.genre)
            .map(|i| (i + 1) % GENRES.len())
            .unwrap_or(0);
        GENRES[next]
    }

    /// Heading shown above the grid, e.g. `"2020 Comedy Movies"`.
    ///
    /// A year of 0 reads as unset, like an absent year.
    pub fn heading(&self) -> String {
        match self.year {
            Some(year) if year != 0 => format!("{} {} Movies", year, self.genre),
            _ => format!("{} {} Movies", ALL_GENRES, self.genre),
        }
    }

    /// Derives the request payload for the search endpoint.
    ///
    /// The `"All"` genre is sent as an empty string.
    pub fn to_request(&self) -> SearchRequest {
        let genre = if self.genre == ALL_GENRES {
            String::new()
        } else {
            self.genre.clone()
        };
        SearchRequest {
            page: self.page,
            year: self.year,
            genre,
        }
    }
}

/// Body of a search request: `{"page": 1, "year": null, "genre": ""}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub page: u32,
    pub year: Option<i32>,
    pub genre: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_page_clamps_at_one() {
        for page in 1..=5 {
            let filters = FilterState::new(page, None, ALL_GENRES);
            assert_eq!(filters.previous_page().page, (page - 1).max(1));
        }

        let first = FilterState::default();
        assert_eq!(first.previous_page(), first);
        assert_eq!(first.previous_page().previous_page(), first);
    }

    #[test]
    fn test_next_page_increments_by_one() {
        let mut filters = FilterState::default();
        for expected in 2..=10 {
            filters = filters.next_page();
            assert_eq!(filters.page, expected);
        }
        assert_eq!(FilterState::new(41, Some(2020), "Comedy").next_page().page, 42);
    }

    #[test]
    fn test_new_clamps_zero_page() {
        assert_eq!(FilterState::new(0, None, ALL_GENRES).page, 1);
    }

    #[test]
    fn test_page_changes_keep_other_filters() {
        let filters = FilterState::new(3, Some(2021), "Fantasy");
        let next = filters.next_page();
        assert_eq!(next.year, Some(2021));
        assert_eq!(next.genre, "Fantasy");
    }

    #[test]
    fn test_year_option_parsing() {
        let filters = FilterState::default();
        assert_eq!(filters.with_year_option("2020").year, Some(2020));
        assert_eq!(filters.with_year_option("1999").year, Some(1999));
        assert_eq!(filters.with_year_option("").year, None);
        assert_eq!(filters.with_year_option("soon").year, None);
    }

    #[test]
    fn test_all_genre_is_sent_as_empty_string() {
        let request = FilterState::default().to_request();
        assert_eq!(
            request,
            SearchRequest {
                page: 1,
                year: None,
                genre: String::new(),
            }
        );
    }

    #[test]
    fn test_other_genres_are_sent_verbatim() {
        for genre in &GENRES[1..] {
            let request = FilterState::default().with_genre(genre).to_request();
            assert_eq!(request.genre, *genre);
        }
        // No normalization of labels
        let request = FilterState::default().with_genre("all").to_request();
        assert_eq!(request.genre, "all");
    }

    #[test]
    fn test_request_json_shape() {
        let json = serde_json::to_value(FilterState::default().to_request()).unwrap();
        assert_eq!(json, serde_json::json!({"page": 1, "year": null, "genre": ""}));

        let json = serde_json::to_value(
            FilterState::default()
                .with_year(Some(2020))
                .with_genre("Comedy")
                .to_request(),
        )
        .unwrap();
        assert_eq!(json, serde_json::json!({"page": 1, "year": 2020, "genre": "Comedy"}));
    }

    #[test]
    fn test_cycled_genre() {
        let filters = FilterState::default();
        assert_eq!(filters.cycled_genre(), "Animation");
        assert_eq!(filters.with_genre("Fantasy").cycled_genre(), "All");
        assert_eq!(filters.with_genre("Horror").cycled_genre(), "All");
    }

    #[test]
    fn test_heading() {
        let filters = FilterState::default();
        assert_eq!(filters.heading(), "All All Movies");
        assert_eq!(
            filters.with_year(Some(2020)).with_genre("Comedy").heading(),
            "2020 Comedy Movies"
        );
        assert_eq!(filters.with_year(Some(0)).heading(), "All All Movies");
    }
}
