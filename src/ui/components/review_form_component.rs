//! Review composer scoped to the known games.

use crate::constants::{NO_GAME_SELECTED, TITLE_NEW_REVIEW};
use crate::models::{Game, Review};
use crate::ui::components::common::{
    create_input_paragraph, create_instructions_paragraph, create_panel_block, create_selection_paragraph, shortcuts,
};
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

/// Keeps its own draft (selected game and text) and reports finished
/// reviews upward as [`Action::AddReview`].
pub struct ReviewFormComponent {
    pub games: Vec<Game>,
    pub selected_game_index: Option<usize>,
    pub content: String,
    pub focused: bool,
}

impl Default for ReviewFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewFormComponent {
    pub fn new() -> Self {
        Self {
            games: Vec::new(),
            selected_game_index: None,
            content: String::new(),
            focused: false,
        }
    }

    /// Refresh the selectable games, keeping the current choice when it still exists
    pub fn update_data(&mut self, games: &[Game]) {
        let selected_id = self.selected_game().map(|game| game.id.clone());
        self.games = games.to_vec();
        self.selected_game_index =
            selected_id.and_then(|id| self.games.iter().position(|game| game.id == id));
    }

    pub fn selected_game(&self) -> Option<&Game> {
        self.selected_game_index.and_then(|index| self.games.get(index))
    }

    fn select_next_game(&mut self) {
        if self.games.is_empty() {
            return;
        }
        self.selected_game_index = Some(match self.selected_game_index {
            None => 0,
            Some(index) => (index + 1) % self.games.len(),
        });
    }

    fn select_previous_game(&mut self) {
        if self.games.is_empty() {
            return;
        }
        self.selected_game_index = Some(match self.selected_game_index {
            None | Some(0) => self.games.len() - 1,
            Some(index) => index - 1,
        });
    }

    fn clear_draft(&mut self) {
        self.selected_game_index = None;
        self.content.clear();
    }

    fn handle_submit(&mut self) -> Action {
        let Some(game) = self.selected_game() else {
            log::debug!("Review form: a game must be selected");
            return Action::None;
        };
        if self.content.is_empty() {
            log::debug!("Review form: content is required");
            return Action::None;
        }

        let review = Review::new(game.id.clone(), self.content.clone());
        self.clear_draft();
        Action::AddReview(review)
    }
}

impl Component for ReviewFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::FocusPanel(Focus::Games),
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Tab | KeyCode::Down => {
                self.select_next_game();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.select_previous_game();
                Action::None
            }
            KeyCode::Char(c) => {
                self.content.push(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.content.pop();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_panel_block(TITLE_NEW_REVIEW, self.focused);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Length(1)])
            .split(inner);

        let game_label = match self.selected_game() {
            Some(game) => game.name.clone(),
            None if self.games.is_empty() => NO_GAME_SELECTED.to_string(),
            None => "Select a game (Tab)".to_string(),
        };
        f.render_widget(create_selection_paragraph(game_label, "Game *", self.focused), chunks[0]);
        f.render_widget(create_input_paragraph(&self.content, "Review *", self.focused), chunks[1]);

        if self.focused {
            let instructions = create_instructions_paragraph(&[
                ("Enter", Color::Green, " Post"),
                shortcuts::SEPARATOR,
                ("Tab", Color::Cyan, " Game"),
                shortcuts::SEPARATOR,
                shortcuts::ESC_LEAVE,
            ]);
            f.render_widget(instructions, chunks[2]);
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
