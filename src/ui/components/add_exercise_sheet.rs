//! Modal sheet for logging a new exercise.
//!
//! Presents the template catalog, narrowed by an optional category chip,
//! and logs the chosen template as a record timestamped now. The sheet is
//! constructed from an [`AddExerciseConfig`]: the owner controls visibility,
//! and the configured leave-for-editor action lets the user jump to the
//! catalog editor, which closes the sheet and opens the editor in one
//! update.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::constants::{DIALOG_TITLE_ADD_EXERCISE, PICKER_CAPTION_FILTER, PICKER_HEADER_CATEGORY};
use crate::entities::template;
use crate::haptics::HapticFeedback;
use crate::ui::components::dialogs::common::centered_rect;
use crate::ui::components::flow_picker::FlowPicker;
use crate::ui::core::{actions::Action, Component};

/// Configuration bundle the sheet is constructed with.
#[derive(Clone)]
pub struct AddExerciseConfig {
    /// Catalog snapshot to pick from
    pub templates: Vec<template::Model>,
    /// Action emitted when the user leaves the sheet for the catalog
    /// editor. The app closes the sheet and opens the editor atomically.
    pub on_leave_for_editor: Action,
}

pub struct AddExerciseSheet {
    templates: Vec<template::Model>,
    on_leave_for_editor: Action,
    picker: FlowPicker<String>,
    haptics: Arc<dyn HapticFeedback>,
    selected_index: usize,
    list_state: ListState,
}

impl AddExerciseSheet {
    pub fn new(config: AddExerciseConfig, haptics: Arc<dyn HapticFeedback>) -> Self {
        let categories = Self::categories_of(&config.templates);
        let picker =
            FlowPicker::new(PICKER_HEADER_CATEGORY, categories, haptics.clone()).with_caption(PICKER_CAPTION_FILTER);
        let mut sheet = Self {
            templates: config.templates,
            on_leave_for_editor: config.on_leave_for_editor,
            picker,
            haptics,
            selected_index: 0,
            list_state: ListState::default(),
        };
        sheet.update_list_state();
        sheet
    }

    pub fn update_templates(&mut self, templates: Vec<template::Model>) {
        let categories = Self::categories_of(&templates);
        let selection = self.picker.selection().cloned();
        self.templates = templates;

        // Rebuild the chip row; the old selection may no longer have a chip,
        // which the picker tolerates.
        self.picker = FlowPicker::new(PICKER_HEADER_CATEGORY, categories, self.haptics.clone())
            .with_caption(PICKER_CAPTION_FILTER);
        self.picker.set_selection(selection);
        self.update_list_state();
    }

    fn categories_of(templates: &[template::Model]) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for template in templates {
            if !categories.contains(&template.category) {
                categories.push(template.category.clone());
            }
        }
        categories
    }

    /// Templates visible under the current category chip.
    pub fn filtered_templates(&self) -> Vec<&template::Model> {
        match self.picker.selection() {
            Some(category) => self.templates.iter().filter(|t| &t.category == category).collect(),
            None => self.templates.iter().collect(),
        }
    }

    fn update_list_state(&mut self) {
        let count = self.filtered_templates().len();
        if count == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= count {
                self.selected_index = count - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for AddExerciseSheet {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.picker.handle_key_events(key) {
            self.update_list_state();
            return Action::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let count = self.filtered_templates().len();
                if count > 0 {
                    self.selected_index = if self.selected_index == 0 {
                        count - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.filtered_templates().len();
                if count > 0 {
                    self.selected_index = (self.selected_index + 1) % count;
                    self.update_list_state();
                }
                Action::None
            }
            KeyCode::Enter => {
                let filtered = self.filtered_templates();
                if let Some(template) = filtered.get(self.selected_index) {
                    Action::LogExercise {
                        name: template.name.clone(),
                        category: template.category.clone(),
                    }
                } else {
                    Action::None
                }
            }
            KeyCode::Char('e') => self.on_leave_for_editor.clone(),
            KeyCode::Esc => Action::CloseSheet,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = centered_rect(60, 70, rect);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(DIALOG_TITLE_ADD_EXERCISE)
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(6),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

        self.picker.render(f, chunks[0], true);

        let items: Vec<ListItem> = self
            .filtered_templates()
            .iter()
            .map(|template| {
                ListItem::new(Line::from(vec![
                    Span::styled(template.name.clone(), Style::default().fg(Color::White)),
                    Span::styled(format!("  {}", template.category), Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();
        let mut list_state = self.list_state.clone();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Pick an exercise"))
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
        f.render_stateful_widget(list, chunks[1], &mut list_state);
        self.list_state = list_state;

        let instructions = Paragraph::new("Enter: log • Space: category • e: edit catalog • Esc: close")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(instructions, chunks[2]);
    }
}
