//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the main screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub games: Rect,
    pub game_form: Rect,
    pub review_form: Rect,
    pub reviews: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Height of the new-game form: four bordered inputs plus instructions
    pub const GAME_FORM_HEIGHT: u16 = 15;
    /// Height of the review form: game selector, content input, instructions
    pub const REVIEW_FORM_HEIGHT: u16 = 9;

    /// Split the screen into the games column, the reviews column and the status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> ScreenLayout {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(Self::GAME_FORM_HEIGHT)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(Self::REVIEW_FORM_HEIGHT), Constraint::Min(0)])
            .split(columns[1]);

        ScreenLayout {
            games: left[0],
            game_form: left[1],
            review_form: right[0],
            reviews: right[1],
            status: rows[1],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
