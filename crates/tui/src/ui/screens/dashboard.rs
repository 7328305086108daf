use engine::Expense;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::Card,
            charts::{render_pie, render_weekly},
            icons::category_icon,
            money::{format_amount, styled_amount},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12), // Charts
            Constraint::Min(3),     // Recent expenses
        ])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(layout[0]);

    let slices = state.chart_mode.slices(state.store.list());
    render_pie(frame, charts[0], &slices, theme);
    render_weekly(frame, charts[1], theme);

    render_recent_expenses(frame, layout[1], state, theme);
}

fn render_recent_expenses(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Recent Expenses", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let expenses = state.store.list();
    if expenses.is_empty() {
        let empty = Paragraph::new(Line::from(vec![
            Span::styled("No expenses yet. Press ", Style::default().fg(theme.text_muted)),
            Span::styled("a", Style::default().fg(theme.primary)),
            Span::styled(" to add one.", Style::default().fg(theme.text_muted)),
        ]));
        frame.render_widget(empty, inner);
        return;
    }

    let width = usize::from(inner.width);
    let items: Vec<ListItem> = expenses
        .iter()
        .map(|expense| expense_item(expense, &state.currency, width, theme))
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(theme.background)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, inner, &mut list_state);
}

/// Two-line row: icon and description with the amount at the right edge,
/// then the category in muted text.
fn expense_item<'a>(
    expense: &'a Expense,
    currency: &str,
    width: usize,
    theme: &Theme,
) -> ListItem<'a> {
    let icon = category_icon(&expense.category);
    let amount = format_amount(expense.amount, currency);

    // icon cell + separator
    let lead = 3;
    let used = lead + expense.description.chars().count() + amount.chars().count();
    let padding = width.saturating_sub(used).max(1);

    let title = Line::from(vec![
        Span::raw(format!("{icon} ")),
        Span::styled(
            expense.description.as_str(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        styled_amount(expense.amount, currency, theme),
    ]);
    let subtitle = Line::from(vec![
        Span::raw(" ".repeat(lead)),
        Span::styled(
            expense.category.as_str(),
            Style::default().fg(theme.text_muted),
        ),
    ]);

    ListItem::new(vec![title, subtitle])
}
