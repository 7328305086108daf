pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{AppState, Screen};

pub use terminal::{AppTerminal as Terminal, TerminalSession};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::for_appearance(state.appearance());
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    // Title bar, content, hint bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let (title, hints) = match &state.screen {
        Screen::Dashboard => ("Dashboard", components::hints::dashboard()),
        Screen::AddEdit(editor) => (editor.title(), components::hints::expense_form()),
        Screen::Settings => ("Settings", components::hints::settings()),
    };

    render_title_bar(frame, layout[0], title, &theme);

    match &state.screen {
        Screen::Dashboard => screens::dashboard::render(frame, layout[1], state, &theme),
        Screen::AddEdit(editor) => screens::expense_form::render(frame, layout[1], editor, &theme),
        Screen::Settings => screens::settings::render(frame, layout[1], state, &theme),
    }

    let bar = Paragraph::new(Line::from(components::hints::hints_to_spans(&hints, &theme)));
    frame.render_widget(bar, layout[2]);
}

fn render_title_bar(frame: &mut Frame<'_>, area: Rect, title: &str, theme: &Theme) {
    let line = Line::from(vec![Span::styled(
        format!(" {title}"),
        Style::default()
            .fg(theme.surface)
            .add_modifier(Modifier::BOLD),
    )]);
    let bar = Paragraph::new(line).style(Style::default().bg(theme.primary));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use engine::{ChartMode, Expense, ExpenseStore};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

    use super::*;
    use crate::{
        app::{App, EditorState},
        config::AppConfig,
    };

    fn draw_buffer(state: &AppState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(state: &AppState) -> String {
        draw_buffer(state)
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn uses_color(buffer: &Buffer, color: Color) -> bool {
        buffer.content().iter().any(|cell| cell.fg == color)
    }

    fn food_and_transport() -> ExpenseStore {
        ExpenseStore::from(vec![
            Expense::new(1, "Lunch", 10.0, "Food"),
            Expense::new(2, "Bus", 10.0, "Transport"),
            Expense::new(3, "Dinner", 20.0, "Food"),
        ])
    }

    #[test]
    fn dashboard_lists_sample_expenses() {
        let app = App::new(AppConfig::default());
        let screen = draw(&app.state);
        assert!(screen.contains("Dashboard"));
        assert!(screen.contains("Categories"));
        assert!(screen.contains("Weekly"));
        assert!(screen.contains("Groceries"));
        assert!(screen.contains("$75.50"));
        assert!(screen.contains("Transport"));
    }

    #[test]
    fn editor_shows_prefilled_fields() {
        let mut app = App::new(AppConfig::default());
        let editor = app
            .state
            .selected_expense()
            .map(EditorState::edit)
            .unwrap();
        app.state.screen = Screen::AddEdit(editor);

        let screen = draw(&app.state);
        assert!(screen.contains("Edit Expense"));
        assert!(screen.contains("75.5"));
        assert!(screen.contains("Save"));
    }

    #[test]
    fn settings_marks_current_theme() {
        let mut app = App::new(AppConfig::default());
        app.state.screen = Screen::Settings;
        let screen = draw(&app.state);
        assert!(screen.contains("(•) System"));
        assert!(screen.contains("( ) Dark"));
    }

    #[test]
    fn empty_store_draws_the_ring() {
        let mut app = App::new(AppConfig::default());
        app.state.store = ExpenseStore::new();
        let theme = Theme::light();

        let buffer = draw_buffer(&app.state);
        let screen = draw(&app.state);

        assert!(screen.contains("No expenses yet"));
        assert!(uses_color(&buffer, theme.empty_ring));
        assert!(!uses_color(&buffer, theme.secondary));
    }

    #[test]
    fn category_mode_merges_slices_on_the_dashboard() {
        let theme = Theme::light();
        let mut app = App::new(AppConfig::default());
        app.state.store = food_and_transport();

        // three transactions use the first three palette colors
        let buffer = draw_buffer(&app.state);
        assert!(uses_color(&buffer, theme.tertiary));
        assert!(!uses_color(&buffer, theme.empty_ring));

        // two categories stop at the second
        app.state.chart_mode = ChartMode::Category;
        let buffer = draw_buffer(&app.state);
        assert!(uses_color(&buffer, theme.secondary));
        assert!(!uses_color(&buffer, theme.tertiary));
        assert!(!uses_color(&buffer, theme.empty_ring));
    }
}
