use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use engine::{
    Appearance, ChartMode, Clock, EngineError, Expense, ExpenseDraft, ExpenseId, ExpenseStore,
    FormField, SystemClock, ThemePreference, form,
};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Dashboard,
    AddEdit(EditorState),
    Settings,
}

/// The Add/Edit form: `editing` is `None` when adding.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub editing: Option<ExpenseId>,
    pub draft: ExpenseDraft,
    pub focus: FormField,
}

impl EditorState {
    pub fn add() -> Self {
        Self {
            editing: None,
            draft: ExpenseDraft::default(),
            focus: FormField::Description,
        }
    }

    pub fn edit(expense: &Expense) -> Self {
        Self {
            editing: Some(expense.id),
            draft: ExpenseDraft::for_expense(expense),
            focus: FormField::Description,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Expense"
        } else {
            "Add Expense"
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub store: ExpenseStore,
    pub theme: ThemePreference,
    pub host_appearance: Appearance,
    pub chart_mode: ChartMode,
    pub currency: String,
    /// Highlighted row of the dashboard list.
    pub selected: usize,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            screen: Screen::Dashboard,
            store: ExpenseStore::with_sample_data(),
            theme: ThemePreference::System,
            host_appearance: config.appearance,
            chart_mode: config.chart_mode,
            currency: config.currency.clone(),
            selected: 0,
        }
    }

    /// Resolved light/dark mode for this frame.
    pub fn appearance(&self) -> Appearance {
        self.theme.resolve(self.host_appearance)
    }

    pub fn selected_expense(&self) -> Option<&Expense> {
        self.store.list().get(self.selected)
    }

    fn select_next(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.store.len() - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

pub struct App {
    clock: Box<dyn Clock>,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: AppConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            state: AppState::new(&config),
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut session = ui::TerminalSession::start()?;
        let result = self.event_loop(session.terminal());
        session.finish()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == event::KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.handle_action(map_key(key));
    }

    pub fn handle_action(&mut self, action: AppAction) {
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.state.screen {
            Screen::Dashboard => self.handle_dashboard(action),
            Screen::AddEdit(_) => self.handle_editor(action),
            Screen::Settings => self.handle_settings(action),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn handle_dashboard(&mut self, action: AppAction) {
        match action {
            AppAction::Up | AppAction::Input('k') => self.state.select_prev(),
            AppAction::Down | AppAction::Input('j') => self.state.select_next(),
            AppAction::Submit | AppAction::Input('e') => {
                if let Some(editor) = self.state.selected_expense().map(EditorState::edit) {
                    self.state.screen = Screen::AddEdit(editor);
                }
            }
            AppAction::Input('a') => self.state.screen = Screen::AddEdit(EditorState::add()),
            AppAction::Input('s') => self.state.screen = Screen::Settings,
            AppAction::Input('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_editor(&mut self, action: AppAction) {
        if action == AppAction::Submit {
            self.save_expense();
            return;
        }
        if action == AppAction::Back {
            self.state.screen = Screen::Dashboard;
            return;
        }

        let Screen::AddEdit(editor) = &mut self.state.screen else {
            return;
        };
        match action {
            AppAction::NextField | AppAction::Down => editor.focus = editor.focus.next(),
            AppAction::PrevField | AppAction::Up => editor.focus = editor.focus.previous(),
            AppAction::Backspace => editor.draft.pop(editor.focus),
            AppAction::Input(ch) => {
                if !editor.draft.push(editor.focus, ch) {
                    tracing::debug!(%ch, "amount input refused");
                }
            }
            _ => {}
        }
    }

    /// Validates the form and stores it. An invalid form stays open and
    /// nothing changes.
    fn save_expense(&mut self) {
        let Screen::AddEdit(editor) = &self.state.screen else {
            return;
        };

        match form::commit(
            &mut self.state.store,
            &editor.draft,
            editor.editing,
            self.clock.as_ref(),
        ) {
            Ok(expense) => {
                tracing::info!(id = %expense.id, category = %expense.category, "expense saved");
                self.state.screen = Screen::Dashboard;
            }
            Err(EngineError::UnknownExpense(id)) => {
                tracing::warn!(%id, "edited expense is gone, nothing saved");
                self.state.screen = Screen::Dashboard;
            }
            Err(err) => tracing::debug!("save ignored: {err}"),
        }
    }

    fn handle_settings(&mut self, action: AppAction) {
        let theme = match action {
            AppAction::Up | AppAction::Input('k') => self.state.theme.previous(),
            AppAction::Down | AppAction::Input('j') => self.state.theme.next(),
            AppAction::Back | AppAction::Input('q') => {
                self.state.screen = Screen::Dashboard;
                return;
            }
            _ => return,
        };
        tracing::info!(theme = %theme, "theme changed");
        self.state.theme = theme;
    }
}
