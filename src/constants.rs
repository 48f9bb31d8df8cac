//! Constants used throughout the application
//!
//! This module centralizes endpoint paths, UI text, and other constant values
//! to improve maintainability and consistency.

// Remote API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const GAMES_PATH: &str = "/api/juegos";
pub const REVIEWS_PATH: &str = "/api/reseñas";

// Panel titles
pub const TITLE_GAMES: &str = "🎮 Games";
pub const TITLE_NEW_GAME: &str = "Add a new game";
pub const TITLE_REVIEWS: &str = "📝 Reviews";
pub const TITLE_NEW_REVIEW: &str = "Write a review";

// UI Messages
pub const EMPTY_GAMES_MESSAGE: &str = "No games registered yet 😢";
pub const EMPTY_REVIEWS_MESSAGE: &str = "No reviews yet";
pub const UNKNOWN_GAME_TITLE: &str = "Unknown game";
pub const NO_GAME_SELECTED: &str = "No games to review";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const STATUS_HINTS: &str = "j/k: select • d: delete • n: new game • w: review • R: reload • ?: help • q: quit";

// Log Messages
pub const LOG_GAMES_LOADED: &str = "✅ Games received from backend";
pub const LOG_REVIEWS_LOADED: &str = "✅ Reviews received from backend";
pub const LOG_ERROR_LOAD_GAMES: &str = "❌ Failed to load games";
pub const LOG_ERROR_LOAD_REVIEWS: &str = "❌ Failed to load reviews";
pub const LOG_GAME_CREATED: &str = "🎉 Game added";
pub const LOG_ERROR_CREATE_GAME: &str = "❌ Failed to add game";
pub const LOG_GAME_DELETED: &str = "🗑 Game deleted";
pub const LOG_ERROR_DELETE_GAME: &str = "❌ Failed to delete game";

// Layout
/// Minimum tick interval for the event loop
pub const TICK_RATE_MIN_MS: u64 = 10;
/// Maximum tick interval for the event loop
pub const TICK_RATE_MAX_MS: u64 = 1000;
/// Default tick interval for the event loop
pub const TICK_RATE_DEFAULT_MS: u64 = 100;
/// Maximum number of log lines kept in memory for the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 1000;
