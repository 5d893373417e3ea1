use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use engine::Trip;

use crate::{
    app::AppState,
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, trip: &Trip) {
    let theme = Theme::default();
    let days = trip.itinerary().days();

    if days.is_empty() {
        let card = Card::new("Itinerary", &theme);
        let inner = card.inner(area);
        card.render_frame(frame, area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No activities planned yet.",
                Style::default().fg(theme.dim),
            ))),
            inner,
        );
        return;
    }

    let day_index = state.itinerary.day_index.min(days.len() - 1);
    let day = days[day_index];

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(area);

    render_day_selector(frame, layout[0], trip, &days, day_index, &theme);
    render_day_schedule(frame, layout[1], state, trip, day, &theme);
}

fn render_day_selector(
    frame: &mut Frame<'_>,
    area: Rect,
    trip: &Trip,
    days: &[u32],
    day_index: usize,
    theme: &Theme,
) {
    let card = Card::new("Days", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let items: Vec<ListItem<'_>> = days
        .iter()
        .map(|day| {
            let marker = if trip.itinerary().is_manually_ordered(*day) {
                " *"
            } else {
                ""
            };
            ListItem::new(Line::from(format!("Day {day}{marker}")))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(day_index));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn render_day_schedule(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    trip: &Trip,
    day: u32,
    theme: &Theme,
) {
    // Day 1 falls on the trip's start date.
    let date = trip
        .start_date
        .checked_add_days(chrono::Days::new(u64::from(day - 1)))
        .map(|date| date.format(" · %a %d %b").to_string())
        .unwrap_or_default();
    let order = if trip.itinerary().is_manually_ordered(day) {
        " (custom order)"
    } else {
        ""
    };
    let title = format!("Day {day}{date}{order}");
    let card = Card::new(&title, theme).focused(true);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let activities = trip.itinerary().for_day(day);
    if activities.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No activities planned for this day.",
                Style::default().fg(theme.dim),
            ))),
            inner,
        );
        return;
    }

    let items: Vec<ListItem<'_>> = activities
        .iter()
        .map(|activity| {
            let header = Line::from(vec![
                Span::styled(
                    activity.time.format("%H:%M").to_string(),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(
                    format!("  [{}]", activity.category.label()),
                    Style::default().fg(theme.text_muted),
                ),
                Span::styled(
                    format!("  {}", activity.title),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);

            let mut detail = activity.location.clone();
            if !activity.description.is_empty() {
                if !detail.is_empty() {
                    detail.push_str("  ");
                }
                detail.push_str(&activity.description);
            }
            let detail = Line::from(Span::styled(
                format!("       {detail}"),
                Style::default().fg(theme.dim),
            ));

            ListItem::new(vec![header, detail])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.itinerary.selected.min(activities.len() - 1)));

    let list = List::new(items)
        .highlight_style(Style::default().fg(theme.accent))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, inner, &mut list_state);
}
