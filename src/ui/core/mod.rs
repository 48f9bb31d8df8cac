//! Core UI functionality for gameshelf.
//!
//! This module contains the building blocks every panel relies on: the
//! [`Action`] vocabulary children use to report intent upward, the
//! [`Component`] trait, terminal event polling, and the [`TaskManager`] that
//! runs API calls in the background.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and never touch the network
//! 2. **Actions** carry user intent up and background results back in
//! 3. **Events** are polled through the [`EventHandler`]
//! 4. **Tasks** are spawned on the tokio runtime via the [`TaskManager`]

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
