//! Catalog editor screen.
//!
//! Lists the exercise templates the add sheet picks from; supports deleting
//! entries and creating new ones. The creation form is where the chip
//! picker's validation contract shows: submitting without a category sets
//! the picker's error, and the error clears itself on the next selection
//! change.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use uuid::Uuid;

use crate::constants::{
    CATEGORIES, ERROR_CATEGORY_REQUIRED, ERROR_NAME_REQUIRED, PICKER_CAPTION_CATEGORY, PICKER_HEADER_CATEGORY,
};
use crate::entities::template;
use crate::haptics::HapticFeedback;
use crate::ui::components::flow_picker::FlowPicker;
use crate::ui::core::{actions::Action, Component};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EditorField {
    Name,
    Category,
}

pub struct TemplateEditorComponent {
    templates: Vec<template::Model>,
    selected_index: usize,
    list_state: ListState,
    creating: bool,
    name_input: String,
    focused_field: EditorField,
    error_message: Option<String>,
    picker: FlowPicker<String>,
}

impl TemplateEditorComponent {
    pub fn new(templates: Vec<template::Model>, haptics: Arc<dyn HapticFeedback>) -> Self {
        let categories = CATEGORIES.iter().map(|c| c.to_string()).collect();
        let picker =
            FlowPicker::new(PICKER_HEADER_CATEGORY, categories, haptics).with_caption(PICKER_CAPTION_CATEGORY);
        let mut editor = Self {
            templates,
            selected_index: 0,
            list_state: ListState::default(),
            creating: false,
            name_input: String::new(),
            focused_field: EditorField::Name,
            error_message: None,
            picker,
        };
        editor.update_list_state();
        editor
    }

    pub fn update_data(&mut self, templates: Vec<template::Model>) {
        self.templates = templates;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.templates.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.templates.len() {
                self.selected_index = self.templates.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn start_creating(&mut self) {
        self.creating = true;
        self.name_input.clear();
        self.focused_field = EditorField::Name;
        self.error_message = None;
        self.picker.set_selection(None);
    }

    fn submit(&mut self) -> Action {
        let name = self.name_input.trim();
        if name.is_empty() {
            self.error_message = Some(ERROR_NAME_REQUIRED.to_string());
            return Action::None;
        }
        let Some(category) = self.picker.selection().cloned() else {
            self.picker.set_error(ERROR_CATEGORY_REQUIRED);
            return Action::None;
        };

        let action = Action::CreateTemplate {
            name: name.to_string(),
            category,
        };
        self.creating = false;
        action
    }

    fn handle_creating_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.creating = false;
                Action::None
            }
            KeyCode::Tab => {
                self.focused_field = match self.focused_field {
                    EditorField::Name => EditorField::Category,
                    EditorField::Category => EditorField::Name,
                };
                Action::None
            }
            KeyCode::Enter => self.submit(),
            _ => {
                match self.focused_field {
                    EditorField::Category => {
                        self.picker.handle_key_events(key);
                    }
                    EditorField::Name => match key.code {
                        KeyCode::Char(c) => {
                            self.name_input.push(c);
                            self.error_message = None;
                        }
                        KeyCode::Backspace => {
                            self.name_input.pop();
                        }
                        _ => {}
                    },
                }
                Action::None
            }
        }
    }

    fn render_create_form(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(rect);

        let name_style = if self.focused_field == EditorField::Name {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        let name_input = Paragraph::new(format!("{}█", self.name_input))
            .block(Block::default().borders(Borders::ALL).title(" Name "))
            .style(name_style);
        f.render_widget(name_input, chunks[0]);

        self.picker.render(f, chunks[1], self.focused_field == EditorField::Category);

        let footer = if let Some(error) = &self.error_message {
            Span::styled(error.clone(), Style::default().fg(Color::Red))
        } else {
            Span::styled(
                "Tab: switch field • Enter: save • Esc: cancel",
                Style::default().fg(Color::Yellow),
            )
        };
        f.render_widget(Paragraph::new(Line::from(footer)), chunks[2]);
    }
}

impl Component for TemplateEditorComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.creating {
            return self.handle_creating_key(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if !self.templates.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.templates.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.templates.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.templates.len();
                    self.update_list_state();
                }
                Action::None
            }
            KeyCode::Char('n') => {
                self.start_creating();
                Action::None
            }
            KeyCode::Char('d') => {
                if let Some(template) = self.templates.get(self.selected_index) {
                    match Uuid::parse_str(&template.uuid) {
                        Ok(uuid) => Action::DeleteTemplate(uuid),
                        Err(_) => Action::None,
                    }
                } else {
                    Action::None
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => Action::CloseScreen,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Edit Exercises")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let constraints = if self.creating {
            [Constraint::Min(3), Constraint::Length(11)]
        } else {
            [Constraint::Min(3), Constraint::Length(1)]
        };
        let chunks = Layout::vertical(constraints).split(inner);

        let items: Vec<ListItem> = self
            .templates
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
            .block(Block::default().borders(Borders::ALL).title("Catalog"))
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
        f.render_stateful_widget(list, chunks[0], &mut list_state);
        self.list_state = list_state;

        if self.creating {
            self.render_create_form(f, chunks[1]);
        } else {
            let instructions = Paragraph::new("n: new • d: delete • Esc: back")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            f.render_widget(instructions, chunks[1]);
        }
    }
}
