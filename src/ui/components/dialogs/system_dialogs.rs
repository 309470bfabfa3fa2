//! Error, info, help, and session-log dialogs.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{centered_rect, create_dialog_block};
use crate::constants::DIALOG_TITLE_LOGS;

pub fn render_error(f: &mut Frame, message: &str) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let text = format!("{message}\n\nPress any key to dismiss");
    let paragraph = Paragraph::new(text)
        .block(create_dialog_block("Error", Color::Red))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

pub fn render_info(f: &mut Frame, message: &str) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let text = format!("{message}\n\nPress any key to dismiss");
    let paragraph = Paragraph::new(text)
        .block(create_dialog_block("Info", Color::Green))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

pub fn render_help(f: &mut Frame, scroll_offset: usize) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let entries: &[(&str, &str)] = &[
        ("j / Down", "next exercise"),
        ("k / Up", "previous exercise"),
        ("Enter", "exercise details"),
        ("a", "add an exercise"),
        ("d", "delete selected exercise"),
        ("f", "filter by date"),
        ("c", "clear the date filter"),
        ("?", "this help"),
        ("G", "session logs"),
        ("q / Esc", "quit"),
    ];

    let mut lines: Vec<Line> = vec![Line::from(""), Line::from(Span::styled(
        "Key bindings",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(""));
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Cyan)),
            Span::styled((*desc).to_string(), Style::default().fg(Color::Gray)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(create_dialog_block("Help", Color::Cyan))
        .scroll((scroll_offset as u16, 0));
    f.render_widget(paragraph, area);
}

pub fn render_logs(f: &mut Frame, logs: &[String], scroll_offset: usize) {
    let area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, area);

    let lines: Vec<Line> = if logs.is_empty() {
        vec![Line::from(Span::styled(
            "No log entries this session",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        logs.iter()
            .map(|entry| Line::from(Span::styled(entry.clone(), Style::default().fg(Color::Gray))))
            .collect()
    };

    let paragraph = Paragraph::new(lines)
        .block(create_dialog_block(DIALOG_TITLE_LOGS, Color::Yellow))
        .scroll((scroll_offset as u16, 0));
    f.render_widget(paragraph, area);
}
