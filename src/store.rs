//! In-memory state containers owned by the app component.
//!
//! Each store exposes read access plus the few mutations the app performs.
//! None of them talk to the network.

use crate::models::{DraftField, Game, GameDraft, Review};

#[derive(Debug, Clone, Default)]
pub struct GamesStore {
    games: Vec<Game>,
}

impl GamesStore {
    pub fn all(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    /// Replace the whole list with a fresh server response
    pub fn replace_all(&mut self, games: Vec<Game>) {
        self.games = games;
    }

    pub fn append(&mut self, game: Game) {
        self.games.push(game);
    }

    /// Remove every entry with `id`, returning the first one and its position
    pub fn remove(&mut self, id: &str) -> Option<(usize, Game)> {
        let position = self.games.iter().position(|game| game.id == id)?;
        let removed = self.games.remove(position);
        self.games.retain(|game| game.id != id);
        Some((position, removed))
    }

    /// Put a removed entry back where it was (or at the end if the list shrank)
    pub fn restore(&mut self, position: usize, game: Game) {
        let position = position.min(self.games.len());
        self.games.insert(position, game);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReviewsStore {
    reviews: Vec<Review>,
}

impl ReviewsStore {
    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    pub fn replace_all(&mut self, reviews: Vec<Review>) {
        self.reviews = reviews;
    }

    pub fn append(&mut self, review: Review) {
        self.reviews.push(review);
    }
}

#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    draft: GameDraft,
}

impl DraftStore {
    pub fn get(&self) -> &GameDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        *self.draft.field_mut(field) = value;
    }

    pub fn reset(&mut self) {
        self.draft = GameDraft::default();
    }
}
