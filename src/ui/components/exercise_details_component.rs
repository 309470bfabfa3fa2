//! Read-only details screen for one exercise record.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::DisplayConfig;
use crate::entities::exercise;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime;
use uuid::Uuid;

pub struct ExerciseDetailsComponent {
    /// None when the identity the screen was opened with no longer resolves
    record: Option<exercise::Model>,
    display_config: DisplayConfig,
}

impl ExerciseDetailsComponent {
    pub fn new(record: Option<exercise::Model>, display_config: DisplayConfig) -> Self {
        Self { record, display_config }
    }

    fn record_uuid(&self) -> Option<Uuid> {
        self.record
            .as_ref()
            .and_then(|record| Uuid::parse_str(&record.uuid).ok())
    }
}

impl Component for ExerciseDetailsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::CloseScreen,
            KeyCode::Char('d') => {
                if let Some(uuid) = self.record_uuid() {
                    Action::DeleteExercise(uuid)
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Exercise Details")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let lines = match &self.record {
            Some(record) => {
                let recorded = record
                    .timestamp
                    .as_deref()
                    .and_then(datetime::parse_timestamp)
                    .map(|dt| {
                        format!(
                            "{} at {}",
                            dt.date_naive().format(&self.display_config.date_format),
                            dt.format(&self.display_config.time_format)
                        )
                    })
                    .unwrap_or_else(|| "—".to_string());

                vec![
                    Line::from(vec![
                        Span::styled("Name:      ", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(record.name.clone()),
                    ]),
                    Line::from(vec![
                        Span::styled("Category:  ", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(record.category.clone()),
                    ]),
                    Line::from(vec![
                        Span::styled("Recorded:  ", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(recorded),
                    ]),
                    Line::from(""),
                    Line::from(Span::styled(
                        "d: delete • Esc: back",
                        Style::default().fg(Color::Yellow),
                    )),
                ]
            }
            None => vec![Line::from(Span::styled(
                "Exercise not found",
                Style::default().fg(Color::Red),
            ))],
        };

        f.render_widget(Paragraph::new(lines), inner);
    }
}
