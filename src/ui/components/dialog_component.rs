//! Modal overlays: the help screen and the diagnostic log viewer.

use crate::logger::Logger;
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    /// Upper bound for `scroll_offset`, tightened to the viewport on render
    max_scroll: usize,
    logger: Logger,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new(Logger::new())
    }
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            max_scroll: 0,
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
        self.max_scroll = 0;
    }

    pub fn max_scroll(&self) -> usize {
        self.max_scroll
    }

    fn content_line_count(&self, dialog_type: &DialogType) -> usize {
        match dialog_type {
            DialogType::Help => system_dialogs::HELP_TEXT.lines().count(),
            DialogType::Logs => system_dialogs::logs_content(&self.logger).lines().count(),
        }
    }

    fn scroll_to(&mut self, offset: usize) {
        let offset = offset.min(self.max_scroll);
        self.scroll_offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }

    /// Shared scrolling keys; `None` when the key is not a scroll key
    fn handle_scroll_key(&mut self, key: KeyEvent) -> Option<Action> {
        let offset = match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_offset.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_offset.saturating_add(1),
            KeyCode::PageUp => self.scroll_offset.saturating_sub(10),
            KeyCode::PageDown => self.scroll_offset.saturating_add(10),
            KeyCode::Home => 0,
            KeyCode::End => self.max_scroll,
            _ => return None,
        };
        self.scroll_to(offset);
        Some(Action::None)
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        if let Some(action) = self.handle_scroll_key(key) {
            return action;
        }

        match (dialog_type, key.code) {
            (_, KeyCode::Esc) => Action::HideDialog,
            (DialogType::Help, KeyCode::Char('?') | KeyCode::Char('h')) => Action::HideDialog,
            (DialogType::Logs, KeyCode::Char('G') | KeyCode::Char('q')) => Action::HideDialog,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.max_scroll = self.content_line_count(&dialog_type).saturating_sub(1);
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let max_scroll = match self.dialog_type {
            Some(DialogType::Help) => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state)
            }
            Some(DialogType::Logs) => system_dialogs::render_logs_dialog(
                f,
                rect,
                &self.logger,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            None => return,
        };
        self.max_scroll = max_scroll;
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }
}
