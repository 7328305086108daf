use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Formats an amount with two decimals after the currency symbol, e.g.
/// `$75.50`.
#[must_use]
pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{currency}{amount:.2}")
}

/// Amount in the primary color, as shown on every expense row.
#[must_use]
pub fn styled_amount(amount: f64, currency: &str, theme: &Theme) -> Span<'static> {
    Span::styled(
        format_amount(amount, currency),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )
}
