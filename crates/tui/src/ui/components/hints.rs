use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.primary)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(theme.text_muted),
        ));
    }

    spans
}

pub fn dashboard() -> Vec<KeyHint> {
    vec![
        KeyHint::new("↑↓", "select"),
        KeyHint::new("Enter", "edit"),
        KeyHint::new("a", "add"),
        KeyHint::new("s", "settings"),
        KeyHint::new("q", "quit"),
    ]
}

pub fn expense_form() -> Vec<KeyHint> {
    vec![
        KeyHint::new("Tab", "next field"),
        KeyHint::new("Enter", "save"),
        KeyHint::new("Esc", "back"),
    ]
}

pub fn settings() -> Vec<KeyHint> {
    vec![KeyHint::new("↑↓", "theme"), KeyHint::new("Esc", "back")]
}
