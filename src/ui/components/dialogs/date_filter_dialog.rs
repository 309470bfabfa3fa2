//! Date-filter dialog: a free-form YYYY-MM-DD input bounded above by today.

use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common::{centered_rect, create_dialog_block, create_input_paragraph, create_instructions_paragraph};
use crate::constants::DIALOG_TITLE_DATE_FILTER;

pub fn render(f: &mut Frame, input_buffer: &str, error: Option<&str>, filter_active: bool) {
    let area = centered_rect(40, 30, f.area());
    f.render_widget(Clear, area);

    let block = create_dialog_block(DIALOG_TITLE_DATE_FILTER, Color::Cyan);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(inner);

    f.render_widget(create_input_paragraph(input_buffer, "Date (YYYY-MM-DD)"), chunks[0]);

    if let Some(error) = error {
        let error_line = Paragraph::new(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
        f.render_widget(error_line, chunks[1]);
    }

    let mut shortcuts = vec![
        ("Enter", Color::Green, ": apply "),
        ("Esc", Color::Yellow, ": cancel "),
    ];
    if filter_active {
        shortcuts.push(("c", Color::Red, ": clear filter"));
    }
    f.render_widget(create_instructions_paragraph(&shortcuts), chunks[3]);
}
