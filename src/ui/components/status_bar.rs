//! Status bar component

use chrono::NaiveDate;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, filter: Option<NaiveDate>, loading: bool, busy: bool) {
        let status_text = if loading {
            "Loading exercises...".to_string()
        } else if busy {
            "Working...".to_string()
        } else if let Some(day) = filter {
            format!("Filtered to {day} • c: clear • a: add • d: delete • ?: help • q: quit")
        } else {
            "a: add • d: delete • f: filter • ?: help • q: quit".to_string()
        };

        let status_color = if loading || busy { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
