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
    ui::{
        components::{
            card::{Card, StatCard},
            charts::ascii_bar,
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, trip: &Trip) {
    let theme = Theme::default();
    let summary = trip.budget();

    let breakdown_height = summary.categories.len().max(1) as u16 + 2;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                // Summary cards
            Constraint::Length(breakdown_height), // Category breakdown
            Constraint::Min(0),                   // Expense list
        ])
        .split(area);

    render_summary(frame, layout[0], trip, &summary, &theme);
    render_breakdown(frame, layout[1], &summary, &theme);
    render_expenses(frame, layout[2], state, trip, &theme);
}

fn render_summary(
    frame: &mut Frame<'_>,
    area: Rect,
    trip: &Trip,
    summary: &engine::BudgetSummary,
    theme: &Theme,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    StatCard::new("Total Spent", summary.total.to_string(), theme).render(frame, cols[0]);
    StatCard::new("Expenses", trip.expenses().len().to_string(), theme).render(frame, cols[1]);

    let top = summary
        .categories
        .iter()
        .max_by_key(|slice| slice.amount)
        .map(|slice| slice.name.clone())
        .unwrap_or_else(|| "-".to_string());
    StatCard::new("Top Category", top, theme).render(frame, cols[2]);
}

fn render_breakdown(
    frame: &mut Frame<'_>,
    area: Rect,
    summary: &engine::BudgetSummary,
    theme: &Theme,
) {
    let card = Card::new("Expense Breakdown", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    if summary.categories.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No expenses recorded.",
                Style::default().fg(theme.dim),
            ))),
            inner,
        );
        return;
    }

    let total = summary.total.cents().max(0) as u64;
    let lines: Vec<Line<'_>> = summary
        .categories
        .iter()
        .map(|slice| {
            let cents = slice.amount.cents().max(0) as u64;
            let percent = if total == 0 { 0 } else { cents * 100 / total };
            Line::from(vec![
                Span::styled(
                    format!("{:<14}", slice.name),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    ascii_bar(cents, total, 24),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(
                    format!("  {:>10}", slice.amount.to_string()),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("  {percent:>3}%"),
                    Style::default().fg(theme.text_muted),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_expenses(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    trip: &Trip,
    theme: &Theme,
) {
    let card = Card::new("Expenses", theme).focused(true);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let expenses = trip.expenses();
    if expenses.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No expenses for this trip.",
                Style::default().fg(theme.dim),
            ))),
            inner,
        );
        return;
    }

    let items: Vec<ListItem<'_>> = expenses
        .iter()
        .map(|expense| {
            let text = format!(
                "{:<14} {:<34} {:<16}",
                expense.category, expense.description, expense.paid_by
            );
            ListItem::new(Line::from(vec![
                Span::raw(text),
                Span::styled(
                    format!("{:>10}", expense.amount.to_string()),
                    Style::default()
                        .fg(theme.negative)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.budget.selected.min(expenses.len() - 1)));

    let list = List::new(items)
        .highlight_style(Style::default().fg(theme.accent))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, inner, &mut list_state);
}
