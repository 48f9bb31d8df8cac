//! Reusable UI components

pub mod common;
pub mod dialogs;

// Component architecture
pub mod dialog_component;
pub mod game_card;
pub mod game_form_component;
pub mod game_list_component;
pub mod review_form_component;
pub mod review_list_component;
pub mod status_bar;

// Component exports
pub use dialog_component::DialogComponent;
pub use game_card::GameCard;
pub use game_form_component::GameFormComponent;
pub use game_list_component::GameListComponent;
pub use review_form_component::ReviewFormComponent;
pub use review_list_component::{resolve_game_title, ReviewListComponent};
pub use status_bar::StatusBar;
