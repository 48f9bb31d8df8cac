//! Card displaying a single game.

use crate::models::Game;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Stateless view of one [`Game`].
///
/// Deleting only reports the game's identifier upward; the request itself is
/// issued by the app.
pub struct GameCard {
    pub game: Game,
    pub selected: bool,
}

impl GameCard {
    /// Rows a card occupies, borders included
    pub const HEIGHT: u16 = 5;

    pub fn new(game: Game) -> Self {
        Self { game, selected: false }
    }

    /// Intent emitted when the user deletes this card
    pub fn on_delete(&self) -> Action {
        Action::DeleteGame(self.game.id.clone())
    }

    fn body(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(self.game.platform.clone(), Style::default().fg(Color::Yellow)),
            Span::styled(" • ", Style::default().fg(Color::Gray)),
            Span::styled(self.game.hours_label(), Style::default().fg(Color::Green)),
        ])];

        match self.game.image_url.as_deref() {
            Some(url) if !url.is_empty() => lines.push(Line::from(Span::styled(
                format!("🖼 {}", url),
                Style::default().fg(Color::DarkGray),
            ))),
            _ => lines.push(Line::from(Span::styled("no cover", Style::default().fg(Color::DarkGray)))),
        }

        lines
    }
}

impl Component for GameCard {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('d') | KeyCode::Delete => self.on_delete(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (border_color, border_type) = if self.selected {
            (Color::Cyan, BorderType::Thick)
        } else {
            (Color::Gray, BorderType::Rounded)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .title(format!(" {} ", self.game.name))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(border_color));

        let paragraph = Paragraph::new(self.body()).block(block);
        f.render_widget(paragraph, rect);
    }
}
