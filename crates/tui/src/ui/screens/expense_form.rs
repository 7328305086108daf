use engine::FormField;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::EditorState,
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, editor: &EditorState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Description
            Constraint::Length(3), // Amount
            Constraint::Length(3), // Category
            Constraint::Length(1),
            Constraint::Length(1), // Save
            Constraint::Min(0),
        ])
        .split(area);

    for (field, row) in FormField::ALL.iter().zip(layout.iter()) {
        render_field(frame, *row, editor, *field, theme);
    }

    let save = Paragraph::new(Line::from(vec![
        Span::styled(
            " Save ",
            Style::default()
                .fg(theme.surface)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Enter", Style::default().fg(theme.text_muted)),
    ]));
    frame.render_widget(save, layout[4]);
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    editor: &EditorState,
    field: FormField,
    theme: &Theme,
) {
    let focused = editor.focus == field;
    let card = Card::new(field.label(), theme).focused(focused);

    let mut spans = vec![Span::styled(
        editor.draft.value(field).to_string(),
        Style::default().fg(theme.text),
    )];
    if focused {
        spans.push(Span::styled("│", Style::default().fg(theme.primary)));
    }

    card.render_with(frame, area, Paragraph::new(Line::from(spans)));
}
