use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use engine::{CategoryFilter, Trip};

use crate::{
    app::AppState,
    ui::{
        components::{card::Card, charts::percentage_bar},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, trip: &Trip) {
    let theme = Theme::default();
    let overview = trip.checklist_overview();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Progress
            Constraint::Min(0),    // Categories + items
        ])
        .split(area);

    render_progress(frame, layout[0], &overview, &theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(layout[1]);

    render_categories(frame, columns[0], state, &overview, &theme);
    render_items(frame, columns[1], state, trip, &theme);
}

fn render_progress(
    frame: &mut Frame<'_>,
    area: Rect,
    overview: &engine::ChecklistOverview,
    theme: &Theme,
) {
    let card = Card::new("Packing Progress", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let bar_style = if overview.progress == 100 {
        Style::default().fg(theme.positive)
    } else {
        Style::default().fg(theme.accent)
    };

    let lines = vec![
        Line::from(Span::styled(percentage_bar(overview.progress, 40), bar_style)),
        Line::from(Span::styled(
            format!("{} of {} items packed", overview.completed, overview.total),
            Style::default().fg(theme.dim),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_categories(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    overview: &engine::ChecklistOverview,
    theme: &Theme,
) {
    let card = Card::new("Categories", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let mut items = vec![ListItem::new(Line::from(format!(
        "All Items ({})",
        overview.total
    )))];
    items.extend(overview.categories.iter().map(|entry| {
        ListItem::new(Line::from(format!("{} ({})", entry.name, entry.count)))
    }));

    let selected = match &state.checklist.filter {
        CategoryFilter::All => 0,
        CategoryFilter::Category(name) => overview
            .categories
            .iter()
            .position(|entry| entry.name == *name)
            .map(|index| index + 1)
            .unwrap_or(0),
    };

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn render_items(frame: &mut Frame<'_>, area: Rect, state: &AppState, trip: &Trip, theme: &Theme) {
    let filter = &state.checklist.filter;
    let title = match filter {
        CategoryFilter::All => "All Items".to_string(),
        CategoryFilter::Category(name) => name.clone(),
    };
    let card = Card::new(&title, theme).focused(true);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let filtered = trip.checklist_filtered(filter);
    if filtered.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No items in this category.",
                Style::default().fg(theme.dim),
            ))),
            inner,
        );
        return;
    }

    let items: Vec<ListItem<'_>> = filtered
        .iter()
        .map(|item| {
            let (checkbox, text_style) = if item.completed {
                ("[x]", Style::default().fg(theme.dim))
            } else {
                ("[ ]", Style::default().fg(theme.text))
            };
            ListItem::new(Line::from(vec![
                Span::styled(checkbox, Style::default().fg(theme.accent)),
                Span::styled(format!(" {}", item.text), text_style),
                Span::styled(
                    format!("  · {}", item.category),
                    Style::default().fg(theme.text_muted),
                ),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.checklist.selected.min(filtered.len() - 1)));

    let list = List::new(items)
        .highlight_style(Style::default().fg(theme.accent))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, inner, &mut list_state);
}
