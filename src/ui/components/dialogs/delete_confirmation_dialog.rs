//! Delete confirmation dialog.

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{centered_rect, create_dialog_block};
use crate::constants::DIALOG_TITLE_CONFIRM_DELETE;

pub fn render(f: &mut Frame, label: &str) {
    let area = centered_rect(60, 25, f.area());
    f.render_widget(Clear, area);

    let preview = if label.chars().count() > 40 {
        let truncated: String = label.chars().take(37).collect();
        format!("{truncated}...")
    } else {
        label.to_string()
    };

    let text = format!("Delete exercise?\n\n\"{preview}\"\n\nPress 'y' to confirm or 'n'/Esc to cancel");

    let paragraph = Paragraph::new(text)
        .block(create_dialog_block(DIALOG_TITLE_CONFIRM_DELETE, Color::Red))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
