pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use engine::{Planner, Trip};

use crate::app::{AppState, Section};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState, planner: &Planner) {
    let area = frame.area();
    let theme = Theme::default();

    let Ok(trip) = planner.trip(state.trip_id) else {
        return;
    };

    // Main layout: info bar, tabs, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, trip, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    match state.section {
        Section::Overview => screens::overview::render(frame, layout[2], planner, trip),
        Section::Itinerary => screens::itinerary::render(frame, layout[2], state, trip),
        Section::Budget => screens::budget::render(frame, layout[2], state, trip),
        Section::Checklist => screens::checklist::render(frame, layout[2], state, trip),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
}

fn render_info_bar(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    trip: &Trip,
    theme: &Theme,
) {
    let dates = format!(
        "{} - {}",
        trip.start_date.format("%d %b"),
        trip.end_date.format("%d %b %Y")
    );

    let mut line = vec![
        Span::styled("Trip", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", trip.name)),
        Span::styled("Destination", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", trip.destination)),
        Span::styled("Dates", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {dates}")),
    ];

    if let Some(status) = &state.status {
        line.push(Span::raw("  "));
        line.push(Span::styled(
            status.clone(),
            Style::default().fg(theme.error),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::tabs::tab_shortcuts(theme);

    parts.push(Span::styled("  |  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("t", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" trip"));

    let context_hints = context_hints(state, theme);
    if !context_hints.is_empty() {
        parts.push(Span::styled("  |  ", Style::default().fg(theme.border)));
        parts.extend(context_hints);
    }

    parts.push(Span::styled("  |  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("q", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    match state.section {
        Section::Overview => Vec::new(),
        Section::Itinerary => vec![
            Span::styled("[ ]", Style::default().fg(theme.accent)),
            Span::raw(" day  "),
            Span::styled("j/k", Style::default().fg(theme.accent)),
            Span::raw(" select  "),
            Span::styled("J/K", Style::default().fg(theme.accent)),
            Span::raw(" move  "),
            Span::styled("d", Style::default().fg(theme.accent)),
            Span::raw(" delete"),
        ],
        Section::Budget => vec![
            Span::styled("j/k", Style::default().fg(theme.accent)),
            Span::raw(" select  "),
            Span::styled("d", Style::default().fg(theme.accent)),
            Span::raw(" delete  "),
            Span::styled("x", Style::default().fg(theme.accent)),
            Span::raw(" export"),
        ],
        Section::Checklist => vec![
            Span::styled("j/k", Style::default().fg(theme.accent)),
            Span::raw(" select  "),
            Span::styled("space", Style::default().fg(theme.accent)),
            Span::raw(" toggle  "),
            Span::styled("f", Style::default().fg(theme.accent)),
            Span::raw(" filter  "),
            Span::styled("d", Style::default().fg(theme.accent)),
            Span::raw(" delete"),
        ],
    }
}
