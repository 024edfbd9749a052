use crate::application::{year_options, App, AppMode, YEAR_PLACEHOLDER};
use crate::domain::{MovieRecord, GENRES};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Width of one movie card, borders included.
pub const CARD_WIDTH: u16 = 28;
/// Height of one movie card, borders included.
pub const CARD_HEIGHT: u16 = 5;

const ACCENT: Color = Color::Yellow;

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_filters(f, app, chunks[1]);
    render_subtitle(f, chunks[2]);
    render_grid(f, app, chunks[3]);
    render_pagination(f, app, chunks[4]);
    render_status_bar(f, app, chunks[5]);

    if app.is_loading() {
        render_loading(f);
    }

    match app.mode {
        AppMode::YearSelect => render_year_picker(f, app.year_cursor),
        AppMode::Help => render_help_popup(f, app.help_scroll),
        AppMode::Normal => {}
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("reelgrid | {}", app.filters.heading()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(header, area);
}

fn render_filters(f: &mut Frame, app: &App, area: Rect) {
    let year_label = app
        .filters
        .year
        .map(|year| year.to_string())
        .unwrap_or_else(|| YEAR_PLACEHOLDER.to_string());

    let mut spans = vec![
        Span::raw("Year: "),
        Span::styled(format!("[{year_label}]"), Style::default().fg(ACCENT)),
        Span::raw("   Genre: "),
    ];
    for genre in GENRES {
        let style = if app.filters.genre == genre {
            Style::default().bg(ACCENT).fg(Color::Black)
        } else {
            Style::default().bg(Color::Blue).fg(Color::White)
        };
        spans.push(Span::styled(format!(" {genre} "), style));
        spans.push(Span::raw(" "));
    }

    let filters = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Filters"));
    f.render_widget(filters, area);
}

fn render_subtitle(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new("Online streaming").style(Style::default().fg(ACCENT)),
        area,
    );
}

/// Number of card columns that fit in `width`, at least one.
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// First grid row to draw so that the selected card stays on screen.
pub fn first_visible_row(selected: usize, columns: usize, visible_rows: usize) -> usize {
    let selected_row = selected / columns.max(1);
    selected_row.saturating_sub(visible_rows.saturating_sub(1))
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Movies ({})", app.movies().len()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let movies = app.movies();
    if movies.is_empty() {
        if !app.is_loading() {
            f.render_widget(
                Paragraph::new("No movies").style(Style::default().fg(Color::DarkGray)),
                inner,
            );
        }
        return;
    }

    let columns = grid_columns(inner.width);
    let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
    let first_row = first_visible_row(app.selected_card, columns, visible_rows);

    for (index, movie) in movies.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let col = index % columns;
        let card_area = Rect {
            x: inner.x + col as u16 * CARD_WIDTH,
            y: inner.y + row as u16 * CARD_HEIGHT,
            width: CARD_WIDTH.min(inner.width),
            height: CARD_HEIGHT.min(inner.height),
        }
        .intersection(inner);
        render_card(f, movie, index == app.selected_card, card_area);
    }
}

fn render_card(f: &mut Frame, movie: &MovieRecord, selected: bool, area: Rect) {
    let border_style = if selected {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let poster = movie.poster_image.as_deref().unwrap_or("no poster");

    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            movie.release_year.to_string(),
            Style::default().fg(ACCENT),
        )),
        Line::from(Span::styled(
            poster.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                movie.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(card, area);
}

fn render_pagination(f: &mut Frame, app: &App, area: Rect) {
    let button = Style::default().bg(Color::Blue).fg(Color::White);
    let line = Line::from(vec![
        Span::styled(" Previous ", button),
        Span::raw(format!("  Page {}  ", app.filters.page)),
        Span::styled(" Next ", button),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else if let Some(movie) = app.selected_movie() {
                format!(
                    "{} | ←/→: page | 1-4/g: genre | y: year | r: refresh | ?: help | q: quit",
                    movie.poster_image.as_deref().unwrap_or("no poster")
                )
            } else {
                "←/→: page | 1-4/g: genre | y: year | r: refresh | ?: help | q: quit".to_string()
            }
        }
        AppMode::YearSelect => "↑↓: choose year | Enter: apply | Esc: cancel".to_string(),
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let style = if app.status_message.is_some() && app.mode == AppMode::Normal {
        Style::default().fg(Color::Red)
    } else {
        match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::YearSelect => Style::default().fg(ACCENT),
            AppMode::Help => Style::default().fg(Color::Cyan),
        }
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

/// A rectangle of `width` x `height` centered in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_loading(f: &mut Frame) {
    let area = centered(f.area(), 16, 3);
    f.render_widget(Clear, area);
    let loading = Paragraph::new("Loading...")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(ACCENT));
    f.render_widget(loading, area);
}

fn render_year_picker(f: &mut Frame, cursor: usize) {
    let options = year_options();
    let area = centered(f.area(), 20, options.len() as u16 + 2);
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = options
        .iter()
        .map(|option| ListItem::new(option.label.clone()))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Year"))
        .highlight_style(Style::default().bg(ACCENT).fg(Color::Black));

    let mut state = ListState::default().with_selected(Some(cursor));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("reelgrid Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

const HELP_TEXT: &str = r#"REELGRID KEY REFERENCE

=== PAGES ===
← / h / p       Previous page (stops at page 1)
→ / l / n       Next page
r               Fetch the current page again

=== FILTERS ===
1               Genre: All
2               Genre: Animation
3               Genre: Comedy
4               Genre: Fantasy
g               Next genre
y               Open the year picker
                  ↑↓ choose, Enter apply, Esc cancel
                  "Select Year" clears the year filter

=== GRID ===
↑ / k           Previous card
↓ / j           Next card
                The highlighted card's poster URL is shown in the status bar

=== REQUESTS ===
Every filter or page change sends one request to the search endpoint.
A spinner is shown while the newest request is running.
Responses for requests that were superseded by a newer one are ignored.
When a request fails the grid keeps its movies and the status bar shows the error.

=== OTHER ===
F1 or ?         Show this help
q               Quit

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#;
