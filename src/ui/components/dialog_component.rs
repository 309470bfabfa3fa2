//! Modal dialog state machine.
//!
//! Owns which dialog is visible plus the input state the date-filter dialog
//! needs; rendering is delegated to the modules under `dialogs/`. Exactly
//! one dialog can be open at a time and it takes key priority over the rest
//! of the UI.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use crate::constants::{ERROR_DATE_IN_FUTURE, ERROR_DATE_UNPARSEABLE};
use crate::logger::Logger;
use crate::ui::components::dialogs::{date_filter_dialog, delete_confirmation_dialog, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::datetime;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub error_message: Option<String>,
    pub scroll_offset: usize,
    logger: Logger,
    /// Whether a date filter is currently applied; controls the clear hint
    date_filter_active: bool,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            error_message: None,
            scroll_offset: 0,
            logger: Logger::new(),
            date_filter_active: false,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn set_date_filter_active(&mut self, active: bool) {
        self.date_filter_active = active;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.dialog_type = Some(dialog_type);
        self.input_buffer.clear();
        self.error_message = None;
        self.scroll_offset = 0;
    }

    pub fn hide(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.error_message = None;
        self.scroll_offset = 0;
    }

    /// Validate the typed date: must parse and must not lie in the future.
    /// There is no lower bound.
    fn submit_date(&mut self) -> Action {
        match datetime::parse_date(self.input_buffer.trim()) {
            Err(_) => {
                self.error_message = Some(ERROR_DATE_UNPARSEABLE.to_string());
                Action::None
            }
            Ok(day) => {
                if day > Local::now().date_naive() {
                    self.error_message = Some(ERROR_DATE_IN_FUTURE.to_string());
                    Action::None
                } else {
                    Action::SetDateFilter(day)
                }
            }
        }
    }

    fn handle_date_filter_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.submit_date(),
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.error_message = None;
                Action::None
            }
            KeyCode::Char('c') => Action::ClearDateFilter,
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                self.input_buffer.push(c);
                self.error_message = None;
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        match dialog_type {
            DialogType::DateFilter => self.handle_date_filter_key(key),
            DialogType::DeleteConfirmation { day, rows, .. } => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => Action::DeleteRows { day, rows },
                KeyCode::Char('n') | KeyCode::Esc => Action::HideDialog,
                _ => Action::None,
            },
            DialogType::Error(_) | DialogType::Info(_) => Action::HideDialog,
            DialogType::Help | DialogType::Logs => match key.code {
                KeyCode::Up => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down => {
                    self.scroll_offset += 1;
                    Action::None
                }
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('G') => Action::HideDialog,
                _ => Action::None,
            },
        }
    }

    fn render(&mut self, f: &mut Frame, _rect: Rect) {
        match &self.dialog_type {
            Some(DialogType::DateFilter) => date_filter_dialog::render(
                f,
                &self.input_buffer,
                self.error_message.as_deref(),
                self.date_filter_active,
            ),
            Some(DialogType::DeleteConfirmation { label, .. }) => delete_confirmation_dialog::render(f, label),
            Some(DialogType::Error(message)) => system_dialogs::render_error(f, message),
            Some(DialogType::Info(message)) => system_dialogs::render_info(f, message),
            Some(DialogType::Help) => system_dialogs::render_help(f, self.scroll_offset),
            Some(DialogType::Logs) => system_dialogs::render_logs(f, &self.logger.get_logs(), self.scroll_offset),
            None => {}
        }
    }
}
