use engine::ThemePreference;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::AppState,
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let lines: Vec<Line> = ThemePreference::ALL
        .iter()
        .map(|option| radio_line(*option, state.theme, theme))
        .collect();

    let height = (lines.len() as u16 + 2).min(area.height);
    let area = Rect { height, ..area };
    Card::new("Theme", theme).render_with(frame, area, Paragraph::new(lines));
}

fn radio_line(option: ThemePreference, current: ThemePreference, theme: &Theme) -> Line<'static> {
    if option == current {
        Line::from(vec![
            Span::styled(" (•) ", Style::default().fg(theme.primary)),
            Span::styled(
                option.label(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(" ( ) ", Style::default().fg(theme.text_muted)),
            Span::styled(option.label(), Style::default().fg(theme.text)),
        ])
    }
}
