//! The main exercise list screen.
//!
//! Renders the record collection as one section per calendar day, most
//! recent first, or a single section when a date filter is active. The
//! component holds no business logic: the section structure comes from
//! [`compute_view_state`] and every gesture becomes an [`Action`].

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::config::DisplayConfig;
use crate::constants::{
    EMPTY_BODY_NO_EXERCISES, EMPTY_BODY_NO_MATCH, EMPTY_TITLE_NO_EXERCISES, EMPTY_TITLE_NO_MATCH,
};
use crate::entities::exercise;
use crate::ui::core::{
    actions::{Action, DialogType, ScreenId},
    Component,
};
use crate::ui::view_state::{compute_view_state, EmptyState, ExerciseRow, ViewState};

pub struct ExerciseListComponent {
    pub exercises: Vec<exercise::Model>,
    pub date_filter: Option<NaiveDate>,
    pub view: ViewState,
    pub selected_index: usize,
    pub list_state: ListState,
    display_config: DisplayConfig,
}

impl Default for ExerciseListComponent {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

impl ExerciseListComponent {
    pub fn new(display_config: DisplayConfig) -> Self {
        Self {
            exercises: Vec::new(),
            date_filter: None,
            view: compute_view_state(&[], None, Local::now()),
            selected_index: 0,
            list_state: ListState::default(),
            display_config,
        }
    }

    /// Replace the collection snapshot and filter, recomputing the sections
    /// wholesale.
    pub fn update_data(&mut self, exercises: Vec<exercise::Model>, date_filter: Option<NaiveDate>) {
        self.exercises = exercises;
        self.date_filter = date_filter;
        self.view = compute_view_state(&self.exercises, self.date_filter, Local::now());
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        let rows = self.view.row_count();
        if rows == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= rows {
                self.selected_index = rows - 1;
            }
            let rendered_index = self.calculate_rendered_index();
            self.list_state.select(Some(rendered_index));
        }
    }

    /// Index of the selected row within the rendered list, accounting for
    /// section headers and blank separator lines.
    fn calculate_rendered_index(&self) -> usize {
        let mut rendered_index = 0;
        let mut row_index = 0;

        for (section_index, section) in self.view.sections.iter().enumerate() {
            if section_index > 0 {
                rendered_index += 1; // Blank separator line
            }
            rendered_index += 1; // Section header

            for _ in &section.rows {
                if row_index == self.selected_index {
                    return rendered_index;
                }
                rendered_index += 1;
                row_index += 1;
            }
        }

        rendered_index
    }

    pub fn get_selected_row(&self) -> Option<&ExerciseRow> {
        self.view.row(self.selected_index)
    }

    fn create_list_items(&self) -> Vec<ListItem<'_>> {
        let mut items = Vec::new();

        for (section_index, section) in self.view.sections.iter().enumerate() {
            if section_index > 0 {
                items.push(ListItem::new(Line::from("")));
            }

            items.push(ListItem::new(Line::from(Span::styled(
                section.day.format(&self.display_config.date_format).to_string(),
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
            ))));

            for row in &section.rows {
                items.push(self.create_row_item(row));
            }
        }

        items
    }

    fn create_row_item(&self, row: &ExerciseRow) -> ListItem<'_> {
        let mut spans = vec![
            Span::styled(row.name.clone(), Style::default().fg(Color::White)),
            Span::styled(format!(", {}", row.category), Style::default().fg(Color::Gray)),
        ];
        if let Some(time) = row.time {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                time.format(&self.display_config.time_format).to_string(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            ));
        }
        ListItem::new(Line::from(spans))
    }

    fn render_empty_state(&self, f: &mut Frame, rect: Rect, empty: EmptyState) {
        let (title, body) = match empty {
            EmptyState::NoExercisesYet => (EMPTY_TITLE_NO_EXERCISES, EMPTY_BODY_NO_EXERCISES),
            EmptyState::NothingOnDate(_) => (EMPTY_TITLE_NO_MATCH, EMPTY_BODY_NO_MATCH),
        };

        let block = Block::default().borders(Borders::ALL).title(self.block_title());
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([
            Constraint::Percentage(40),
            Constraint::Length(2),
            Constraint::Percentage(40),
        ])
        .split(inner);

        let message = Paragraph::new(vec![
            Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(body, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center);
        f.render_widget(message, chunks[1]);
    }

    fn block_title(&self) -> String {
        match self.date_filter {
            Some(day) => format!("Exercises ({day})"),
            None => "Exercises".to_string(),
        }
    }
}

impl Component for ExerciseListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousRow,
            KeyCode::Down | KeyCode::Char('j') => Action::NextRow,
            KeyCode::Enter => {
                if let Some(row) = self.get_selected_row() {
                    Action::OpenScreen(ScreenId::ExerciseDetails(row.uuid))
                } else {
                    Action::None
                }
            }
            KeyCode::Char('d') => {
                // Deletion is phrased as section-local row positions; the
                // app resolves them against the current bucket on confirm.
                if let Some((section, pos)) = self.view.row_at(self.selected_index) {
                    let row = &section.rows[pos];
                    Action::ShowDialog(DialogType::DeleteConfirmation {
                        day: section.day,
                        rows: vec![pos],
                        label: format!("{}, {}", row.name, row.category),
                    })
                } else {
                    Action::None
                }
            }
            KeyCode::Char('a') => Action::OpenScreen(ScreenId::AddExercise),
            KeyCode::Char('f') => Action::ShowDialog(DialogType::DateFilter),
            // Plain 'c' only; Ctrl+C stays a global quit
            KeyCode::Char('c') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.date_filter.is_some() {
                    Action::ClearDateFilter
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextRow => {
                let rows = self.view.row_count();
                if rows > 0 {
                    self.selected_index = (self.selected_index + 1) % rows;
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousRow => {
                let rows = self.view.row_count();
                if rows > 0 {
                    self.selected_index = if self.selected_index == 0 {
                        rows - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if let Some(empty) = self.view.empty {
            self.render_empty_state(f, rect, empty);
            return;
        }

        let items = self.create_list_items();
        let mut list_state = self.list_state.clone();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(self.block_title()))
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut list_state);
        self.list_state = list_state;
    }
}
