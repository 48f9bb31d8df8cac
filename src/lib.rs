//! gameshelf - A Terminal User Interface (TUI) for a games and reviews catalog
//!
//! This library fetches games and reviews from a REST API, shows the games
//! as cards, lets the user add and delete games through a form, and keeps
//! locally written reviews next to the fetched ones. The interface is built
//! with Ratatui.
//!
//! # Modules
//!
//! * [`api`] - HTTP client for the games API
//! * [`config`] - Application configuration management
//! * [`models`] - Game, review and draft data types
//! * [`store`] - In-memory state containers
//! * [`ui`] - Terminal user interface components

/// HTTP client and error types for the games API
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Game, review and form draft types
pub mod models;

/// In-memory stores for games, reviews and the game draft
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

pub use models::{Game, Review};
