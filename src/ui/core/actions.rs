use crate::models::{DraftField, Game, Review};
use reqwest::StatusCode;

/// Which panel receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Games,
    GameForm,
    ReviewForm,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    FocusPanel(Focus),
    NextGame,
    PreviousGame,

    // Data loading
    Reload,
    GamesLoaded(Vec<Game>),
    ReviewsLoaded(Vec<Review>),

    // Game operations
    EditDraft { field: DraftField, value: String },
    SubmitGame,
    GameCreated(Game),
    DeleteGame(String),
    DeleteResolved { id: String, status: StatusCode },
    DeleteFailed(String),

    // Review operations
    AddReview(Review),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
