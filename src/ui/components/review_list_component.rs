use crate::constants::{EMPTY_REVIEWS_MESSAGE, TITLE_REVIEWS, UNKNOWN_GAME_TITLE};
use crate::models::{Game, Review};
use crate::ui::components::common::create_panel_block;
use crate::ui::core::{Action, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Title of the game a review points at, if that game is loaded
pub fn resolve_game_title<'a>(games: &'a [Game], game_id: &str) -> Option<&'a str> {
    games.iter().find(|game| game.id == game_id).map(|game| game.name.as_str())
}

/// Read-only list of reviews with their game titles resolved.
pub struct ReviewListComponent {
    pub reviews: Vec<Review>,
    pub games: Vec<Game>,
}

impl Default for ReviewListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewListComponent {
    pub fn new() -> Self {
        Self {
            reviews: Vec::new(),
            games: Vec::new(),
        }
    }

    pub fn update_data(&mut self, reviews: &[Review], games: &[Game]) {
        self.reviews = reviews.to_vec();
        self.games = games.to_vec();
    }

    /// Title shown for `review`, falling back to a placeholder
    pub fn display_title(&self, review: &Review) -> &str {
        resolve_game_title(&self.games, &review.game_id).unwrap_or(UNKNOWN_GAME_TITLE)
    }

    fn create_review_items(&self) -> Vec<ListItem<'static>> {
        self.reviews
            .iter()
            .map(|review| {
                let title_style = if resolve_game_title(&self.games, &review.game_id).is_some() {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
                };
                ListItem::new(vec![
                    Line::from(Span::styled(self.display_title(review).to_string(), title_style)),
                    Line::from(Span::styled(
                        format!("  {}", review.content),
                        Style::default().fg(Color::White),
                    )),
                ])
            })
            .collect()
    }
}

impl Component for ReviewListComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!("{} ({})", TITLE_REVIEWS, self.reviews.len());
        let block = create_panel_block(&title, false);

        if self.reviews.is_empty() {
            let empty = Paragraph::new(EMPTY_REVIEWS_MESSAGE)
                .block(block)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(empty, rect);
            return;
        }

        // Newest reviews are appended, keep the tail visible
        let visible = (rect.height.saturating_sub(2) / 2) as usize;
        let mut state = ListState::default().with_offset(self.reviews.len().saturating_sub(visible));

        let list = List::new(self.create_review_items()).block(block);
        f.render_stateful_widget(list, rect, &mut state);
    }
}
