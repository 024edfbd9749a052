//! reelgrid - terminal movie browser
//!
//! Pages through movies from a search endpoint, filtered by release year
//! and genre, and shows them as a grid of cards.

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;

use reelgrid::application::{App, AppMode};
use reelgrid::domain::MovieSearch;
use reelgrid::infrastructure::{init_logging, Config, HttpMovieSearch};
use reelgrid::presentation::{render_ui, InputHandler};

/// Entry point for the reelgrid movie browser.
///
/// Reads the command line, sets up file logging, and either prints a single
/// page (`--print`) or runs the terminal interface until the user quits.
///
/// # Errors
///
/// Returns an error if logging or terminal setup fails, or if the single
/// page fetch of `--print` mode fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_cli();
    init_logging(&config.log_file)?;
    info!(endpoint = %config.endpoint, policy = ?config.policy, "reelgrid starting");

    let search: Arc<dyn MovieSearch> =
        Arc::new(HttpMovieSearch::new(config.endpoint.clone(), config.timeout)?);

    if config.print {
        return print_page(search, &config);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(search, config.filters.clone(), config.policy);
    let res = run_app(&mut terminal, &mut app, config.tick);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    info!("reelgrid exiting");
    Ok(())
}

/// Fetches the page for the configured filters and prints one line per movie.
fn print_page(search: Arc<dyn MovieSearch>, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(search, config.filters.clone(), config.policy);

    if !app.settle(config.timeout + Duration::from_secs(1)) {
        return Err("timed out waiting for the search endpoint".into());
    }
    if let Some(error) = app.last_error() {
        return Err(Box::new(error.clone()));
    }

    println!("{}", app.filters.heading());
    for movie in app.movies() {
        println!(
            "{} ({}) {}",
            movie.title,
            movie.release_year,
            movie.poster_image.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Main application event loop.
///
/// Applies finished requests, redraws, and waits up to one tick for a key
/// press. Returns when the user presses 'q' in normal mode.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, tick: Duration) -> io::Result<()> {
    loop {
        app.drain_completions();
        terminal.draw(|f| render_ui(f, app))?;

        if !event::poll(tick)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
