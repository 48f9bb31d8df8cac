//! Input panel for the new-game draft.
//!
//! The draft itself belongs to the app: every keystroke is reported as an
//! [`Action::EditDraft`] and the updated draft is pushed back through
//! [`GameFormComponent::update_data`].

use crate::constants::TITLE_NEW_GAME;
use crate::models::{DraftField, GameDraft};
use crate::ui::components::common::{
    create_input_paragraph, create_instructions_paragraph, create_panel_block, shortcuts,
};
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

pub struct GameFormComponent {
    pub draft: GameDraft,
    pub active_field: DraftField,
    pub focused: bool,
}

impl Default for GameFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GameFormComponent {
    pub fn new() -> Self {
        Self {
            draft: GameDraft::default(),
            active_field: DraftField::Name,
            focused: false,
        }
    }

    pub fn update_data(&mut self, draft: &GameDraft) {
        if draft.is_empty() && !self.draft.is_empty() {
            // Draft was reset after a successful create
            self.active_field = DraftField::Name;
        }
        self.draft = draft.clone();
    }

    fn edit_active(&self, edit: impl FnOnce(&mut String)) -> Action {
        let mut value = self.draft.field(self.active_field).to_string();
        edit(&mut value);
        Action::EditDraft {
            field: self.active_field,
            value,
        }
    }

    /// Submit when every required field is filled, otherwise jump to the gap
    fn handle_submit(&mut self) -> Action {
        match self.draft.missing_required() {
            None => Action::SubmitGame,
            Some(field) => {
                log::debug!("Game form: '{}' is required", field.label());
                self.active_field = field;
                Action::None
            }
        }
    }
}

impl Component for GameFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::FocusPanel(Focus::Games),
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Tab | KeyCode::Down => {
                self.active_field = self.active_field.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.active_field = self.active_field.previous();
                Action::None
            }
            KeyCode::Char(c) => self.edit_active(|value| value.push(c)),
            KeyCode::Backspace => {
                if self.draft.field(self.active_field).is_empty() {
                    Action::None
                } else {
                    self.edit_active(|value| {
                        value.pop();
                    })
                }
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_panel_block(TITLE_NEW_GAME, self.focused);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(inner);

        for (index, field) in DraftField::ALL.into_iter().enumerate() {
            let title = if field.is_required() {
                format!("{} *", field.label())
            } else {
                field.label().to_string()
            };
            let active = self.focused && field == self.active_field;
            let input = create_input_paragraph(self.draft.field(field), &title, active);
            f.render_widget(input, chunks[index]);
        }

        if self.focused {
            let instructions = create_instructions_paragraph(&[
                ("Enter", Color::Green, " Add"),
                shortcuts::SEPARATOR,
                shortcuts::TAB_NEXT,
                shortcuts::SEPARATOR,
                shortcuts::ESC_LEAVE,
            ]);
            f.render_widget(instructions, chunks[4]);
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
