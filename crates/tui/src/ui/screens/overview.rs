use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use engine::{Planner, Trip, TripPrivacy};

use crate::ui::{
    components::card::{Card, StatCard},
    theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, planner: &Planner, trip: &Trip) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Trip counters
            Constraint::Min(0),    // About + travelers
        ])
        .split(area);

    render_counters(frame, layout[0], planner, &theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(layout[1]);

    render_about(frame, columns[0], trip, &theme);
    render_travelers(frame, columns[1], trip, &theme);
}

fn render_counters(frame: &mut Frame<'_>, area: Rect, planner: &Planner, theme: &Theme) {
    let stats = planner.stats();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let mut total = StatCard::new("Total Trips", stats.total.to_string(), theme);
    if let Some(recent) = planner.recent_trip() {
        total = total.subtitle(format!("latest: {}", recent.name));
    }
    total.render(frame, cols[0]);
    StatCard::new("Upcoming", stats.upcoming.to_string(), theme).render(frame, cols[1]);
    StatCard::new("Completed", stats.past.to_string(), theme).render(frame, cols[2]);
}

fn render_about(frame: &mut Frame<'_>, area: Rect, trip: &Trip, theme: &Theme) {
    let card = Card::new("About This Trip", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let privacy = match trip.privacy {
        TripPrivacy::Public => "Public",
        TripPrivacy::Private => "Private",
    };

    let lines = vec![
        Line::from(Span::styled(
            trip.description.clone(),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Destination", Style::default().fg(theme.text_muted)),
            Span::raw(format!(": {}", trip.destination)),
        ]),
        Line::from(vec![
            Span::styled("Dates", Style::default().fg(theme.text_muted)),
            Span::raw(format!(
                ": {} - {}",
                trip.start_date.format("%d %b %Y"),
                trip.end_date.format("%d %b %Y")
            )),
        ]),
        Line::from(vec![
            Span::styled("Privacy", Style::default().fg(theme.text_muted)),
            Span::raw(format!(": {privacy}")),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_travelers(frame: &mut Frame<'_>, area: Rect, trip: &Trip, theme: &Theme) {
    let card = Card::new("Travelers", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let items: Vec<ListItem<'_>> = trip
        .members()
        .iter()
        .map(|member| {
            ListItem::new(Line::from(vec![
                Span::styled(member.name.clone(), Style::default().fg(theme.text)),
                Span::styled(
                    format!("  {}", member.role.label()),
                    Style::default().fg(theme.dim),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No travelers yet.",
                Style::default().fg(theme.dim),
            ))),
            inner,
        );
    } else {
        frame.render_widget(List::new(items), inner);
    }
}
