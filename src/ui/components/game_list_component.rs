use crate::constants::{EMPTY_GAMES_MESSAGE, TITLE_GAMES};
use crate::models::Game;
use crate::ui::components::common::create_panel_block;
use crate::ui::components::game_card::GameCard;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Column of game cards with a keyboard selection.
pub struct GameListComponent {
    pub cards: Vec<GameCard>,
    pub selected_index: usize,
    pub focused: bool,
    scroll_offset: usize,
}

impl Default for GameListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GameListComponent {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            selected_index: 0,
            focused: true,
            scroll_offset: 0,
        }
    }

    pub fn update_data(&mut self, games: &[Game]) {
        self.cards = games.iter().cloned().map(GameCard::new).collect();
        if self.selected_index >= self.cards.len() {
            self.selected_index = self.cards.len().saturating_sub(1);
        }
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.selected = index == self.selected_index;
        }
    }

    pub fn selected_game(&self) -> Option<&Game> {
        self.cards.get(self.selected_index).map(|card| &card.game)
    }

    fn select(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(self.selected_index) {
            card.selected = false;
        }
        self.selected_index = index;
        if let Some(card) = self.cards.get_mut(self.selected_index) {
            card.selected = true;
        }
    }

    fn next(&mut self) {
        if !self.cards.is_empty() {
            self.select((self.selected_index + 1) % self.cards.len());
        }
    }

    fn previous(&mut self) {
        if !self.cards.is_empty() {
            let index = if self.selected_index == 0 {
                self.cards.len() - 1
            } else {
                self.selected_index - 1
            };
            self.select(index);
        }
    }

    /// Keep the selected card inside the visible window
    fn adjust_scroll(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible {
            self.scroll_offset = self.selected_index + 1 - visible;
        }
        let max_offset = self.cards.len().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

impl Component for GameListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextGame,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousGame,
            _ => match self.cards.get_mut(self.selected_index) {
                Some(card) => card.handle_key_events(key),
                None => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextGame => {
                self.next();
                Action::None
            }
            Action::PreviousGame => {
                self.previous();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!("{} ({})", TITLE_GAMES, self.cards.len());
        let block = create_panel_block(&title, self.focused);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if self.cards.is_empty() {
            let empty = Paragraph::new(EMPTY_GAMES_MESSAGE)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            f.render_widget(empty, inner);
            return;
        }

        let visible = (inner.height / GameCard::HEIGHT) as usize;
        self.adjust_scroll(visible);

        for (slot, card) in self.cards.iter_mut().skip(self.scroll_offset).take(visible).enumerate() {
            let card_area = Rect::new(
                inner.x,
                inner.y + slot as u16 * GameCard::HEIGHT,
                inner.width,
                GameCard::HEIGHT,
            );
            card.render(f, card_area);
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
