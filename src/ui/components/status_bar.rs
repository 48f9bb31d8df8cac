//! Status bar component

use crate::constants::STATUS_HINTS;
use crate::ui::core::Focus;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown for the current focus and background activity
    pub fn status_text(focus: Focus, pending_requests: usize) -> String {
        let hints = match focus {
            Focus::Games => STATUS_HINTS,
            Focus::GameForm => "Typing a new game • Enter: add • Tab: next field • Esc: back",
            Focus::ReviewForm => "Writing a review • Enter: post • Tab: choose game • Esc: back",
        };

        if pending_requests > 0 {
            format!("⟳ {} request(s) in flight • {}", pending_requests, hints)
        } else {
            hints.to_string()
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, focus: Focus, pending_requests: usize) {
        let status_color = if pending_requests > 0 { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(Self::status_text(focus, pending_requests))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
