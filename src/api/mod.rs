//! Remote games API abstraction
//!
//! The app only talks to the backend through the [`GameApi`] trait, so the
//! orchestration logic can run against the HTTP client or an in-memory fake.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::models::{CreateGameArgs, Game, Review};

/// reqwest-backed implementation
pub mod http;

pub use http::HttpGameApi;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors raised by API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A read resolved with a non-success status
    #[error("Unexpected response from {endpoint}: {status}")]
    NetworkResponse { endpoint: String, status: StatusCode },

    /// The server refused to create a game
    #[error("Failed to save game: {0}")]
    GameCreation(String),

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success body could not be decoded
    #[error("Invalid response body from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Operations the games backend offers.
#[async_trait]
pub trait GameApi: Send + Sync {
    /// Fetch every game
    async fn list_games(&self) -> ApiResult<Vec<Game>>;

    /// Fetch every review
    async fn list_reviews(&self) -> ApiResult<Vec<Review>>;

    /// Create a game and return the stored record, identifier included
    async fn create_game(&self, args: &CreateGameArgs) -> ApiResult<Game>;

    /// Issue a delete for `id`.
    ///
    /// Any HTTP status counts as a resolved request and is returned as-is;
    /// only transport failures are errors.
    async fn delete_game(&self, id: &str) -> ApiResult<StatusCode>;
}
