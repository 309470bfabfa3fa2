//! Generic single-selection chip picker.
//!
//! A row of pill-shaped chips that flows across lines, holding at most one
//! active item. Activating the active chip clears the selection; activating
//! any other chip replaces it. Every activation pulses the haptic service.
//!
//! The picker displays an externally-owned error message but never produces
//! one: validation belongs to the owner. Any selection change, keyboard or
//! programmatic, clears a present error; that rule lives in
//! [`FlowPicker::set_selection`] so it cannot be bypassed.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::haptics::HapticFeedback;

/// A value the picker can offer as a chip.
pub trait SelectionItem: Clone + PartialEq {
    fn label(&self) -> &str;
}

impl SelectionItem for String {
    fn label(&self) -> &str {
        self
    }
}

pub struct FlowPicker<T: SelectionItem> {
    items: Vec<T>,
    selection: Option<T>,
    cursor: usize,
    header: String,
    caption: Option<String>,
    error: Option<String>,
    haptics: Arc<dyn HapticFeedback>,
}

impl<T: SelectionItem> FlowPicker<T> {
    pub fn new(header: impl Into<String>, items: Vec<T>, haptics: Arc<dyn HapticFeedback>) -> Self {
        Self {
            items,
            selection: None,
            cursor: 0,
            header: header.into(),
            caption: None,
            error: None,
            haptics,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selection(&self) -> Option<&T> {
        self.selection.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Set the displayed error. The owner calls this after its own
    /// validation; the picker only shows and clears it.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    /// Change the selection. A present error is cleared whenever the value
    /// actually changes, no matter who changed it.
    pub fn set_selection(&mut self, selection: Option<T>) {
        if self.selection != selection {
            self.selection = selection;
            if self.error.is_some() {
                self.error = None;
            }
        }
    }

    pub fn cursor_left(&mut self) {
        if !self.items.is_empty() && self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        if !self.items.is_empty() && self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    /// Toggle the chip under the cursor, with a haptic pulse.
    pub fn toggle_cursor_item(&mut self) {
        let Some(item) = self.items.get(self.cursor).cloned() else {
            return;
        };
        self.haptics.trigger_selection();
        if self.selection.as_ref() == Some(&item) {
            self.set_selection(None);
        } else {
            self.set_selection(Some(item));
        }
    }

    /// Route a key event into the picker. Returns false for keys the picker
    /// does not consume so the owner can handle them.
    pub fn handle_key_events(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => {
                self.cursor_left();
                true
            }
            KeyCode::Right => {
                self.cursor_right();
                true
            }
            KeyCode::Char(' ') => {
                self.toggle_cursor_item();
                true
            }
            _ => false,
        }
    }

    /// Lay the chips out across lines no wider than `width`.
    fn chip_lines(&self, width: u16, focused: bool) -> Vec<Line<'static>> {
        let width = width.max(1) as usize;
        let mut lines: Vec<Line> = Vec::new();
        let mut spans: Vec<Span> = Vec::new();
        let mut used = 0usize;

        for (index, item) in self.items.iter().enumerate() {
            let chip_text = format!(" {} ", item.label());
            let chip_width = chip_text.chars().count();

            let mut style = if self.selection.as_ref() == Some(item) {
                // Prominent filled pill for the active chip
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            if focused && index == self.cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            if used > 0 && used + chip_width + 1 > width {
                lines.push(Line::from(std::mem::take(&mut spans)));
                used = 0;
            }
            if used > 0 {
                spans.push(Span::raw(" "));
                used += 1;
            }
            spans.push(Span::styled(chip_text, style));
            used += chip_width;
        }

        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }
        lines
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect, focused: bool) {
        let chunks =
            Layout::vertical([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)]).split(rect);

        let header = Paragraph::new(self.header.clone()).style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(header, chunks[0]);

        // Red outline while an error is displayed
        let border_style = if self.error.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner_width = chunks[1].width.saturating_sub(2);
        let chips = Paragraph::new(self.chip_lines(inner_width, focused)).block(block);
        f.render_widget(chips, chunks[1]);

        // Footer: error beats caption, both beat nothing
        let footer = if let Some(error) = &self.error {
            Some(Span::styled(error.clone(), Style::default().fg(Color::Red)))
        } else {
            self.caption
                .as_ref()
                .map(|caption| Span::styled(caption.clone(), Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)))
        };
        if let Some(footer) = footer {
            f.render_widget(Paragraph::new(Line::from(footer)), chunks[2]);
        }
    }
}
