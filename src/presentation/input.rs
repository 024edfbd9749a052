use crate::application::{App, AppMode};
use crate::domain::GENRES;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::YearSelect => Self::handle_year_select_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match key {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                app.previous_page();
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
                app.next_page();
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                app.select_genre(GENRES[index]);
            }
            KeyCode::Char('g') => {
                app.cycle_genre();
            }
            KeyCode::Char('y') => {
                app.start_year_select();
            }
            KeyCode::Char('r') => {
                app.refresh();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.select_next_card();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.select_previous_card();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            KeyCode::Esc => {
                app.status_message = None;
            }
            _ => {}
        }
    }

    fn handle_year_select_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.year_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => app.year_cursor_down(),
            KeyCode::Enter => {
                app.confirm_year_select();
            }
            KeyCode::Esc | KeyCode::Char('q') => app.cancel_year_select(),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ResponsePolicy;
    use crate::domain::{FetchResult, FilterState, MovieRecord, MovieSearch, SearchRequest};
    use std::sync::Arc;

    struct NoMovies;

    impl MovieSearch for NoMovies {
        fn search(&self, _request: &SearchRequest) -> FetchResult<Vec<MovieRecord>> {
            Ok(Vec::new())
        }
    }

    fn new_app() -> App {
        App::new(Arc::new(NoMovies), FilterState::default(), ResponsePolicy::LatestOnly)
    }

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    #[test]
    fn test_paging_keys() {
        let mut app = new_app();

        press(&mut app, KeyCode::Left);
        assert_eq!(app.filters.page, 1);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.filters.page, 3);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.filters.page, 2);

        // mount + three page changes
        assert_eq!(app.reconciler().latest_generation(), 4);
    }

    #[test]
    fn test_genre_keys() {
        let mut app = new_app();

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.filters.genre, "Comedy");
        assert_eq!(app.filters.to_request().genre, "Comedy");

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.filters.genre, "All");
        assert_eq!(app.filters.to_request().genre, "");

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.filters.genre, "Animation");
    }

    #[test]
    fn test_year_picker_keys() {
        let mut app = new_app();

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.mode, AppMode::YearSelect);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.filters.year, Some(2023));

        // Paging keys are inert while the picker is open
        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.filters.page, 1);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_help_mode_toggle() {
        let mut app = new_app();

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);

        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.help_scroll, 4);

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_control_keys_ignored() {
        let mut app = new_app();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(app.filters.page, 1);
    }
}
