use crate::api::GameApi;
use crate::config::DeletePolicy;
use crate::constants::{LOG_ERROR_DELETE_GAME, LOG_GAME_DELETED};
use crate::logger::Logger;
use crate::models::Game;
use crate::store::{DraftStore, GamesStore, ReviewsStore};
use crate::ui::components::{
    DialogComponent, GameFormComponent, GameListComponent, ReviewFormComponent, ReviewListComponent, StatusBar,
};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub games: GamesStore,
    pub reviews: ReviewsStore,
    pub draft: DraftStore,
    pub focus: Focus,
}

/// Top-level component: owns the state, talks to the API and feeds the panels.
pub struct AppComponent {
    // Component composition
    game_list: GameListComponent,
    game_form: GameFormComponent,
    review_form: ReviewFormComponent,
    review_list: ReviewListComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    /// Entries removed ahead of an optimistic delete, keyed by game id
    pending_deletes: HashMap<String, (usize, Game)>,

    // Services
    api: Arc<dyn GameApi>,
    delete_policy: DeletePolicy,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(api: Arc<dyn GameApi>, delete_policy: DeletePolicy, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut app = Self {
            game_list: GameListComponent::new(),
            game_form: GameFormComponent::new(),
            review_form: ReviewFormComponent::new(),
            review_list: ReviewListComponent::new(),
            dialog: DialogComponent::new(logger),
            state: AppState::default(),
            pending_deletes: HashMap::new(),
            api,
            delete_policy,
            task_manager,
            background_action_rx,
            should_quit: false,
        };
        app.apply_focus(Focus::Games);
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Fire both startup loads; they run concurrently and write disjoint state
    pub fn trigger_initial_load(&mut self) {
        log::info!("App: loading games and reviews");
        self.task_manager.spawn_games_load(self.api.clone());
        self.task_manager.spawn_reviews_load(self.api.clone());
    }

    /// Push the current state slices down to the panels
    fn sync_component_data(&mut self) {
        let games = self.state.games.all();
        self.game_list.update_data(games);
        self.game_form.update_data(self.state.draft.get());
        self.review_form.update_data(games);
        self.review_list.update_data(self.state.reviews.all(), games);
    }

    fn apply_focus(&mut self, focus: Focus) {
        self.state.focus = focus;
        self.game_list.on_blur();
        self.game_form.on_blur();
        self.review_form.on_blur();
        match focus {
            Focus::Games => self.game_list.on_focus(),
            Focus::GameForm => self.game_form.on_focus(),
            Focus::ReviewForm => self.review_form.on_focus(),
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('n') => Action::FocusPanel(Focus::GameForm),
            KeyCode::Char('w') => Action::FocusPanel(Focus::ReviewForm),
            KeyCode::Char('R') => Action::Reload,
            _ => Action::None,
        }
    }

    /// Route a key to whoever owns input right now
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.state.focus {
            Focus::GameForm => self.game_form.handle_key_events(key),
            Focus::ReviewForm => self.review_form.handle_key_events(key),
            Focus::Games => match self.game_list.handle_key_events(key) {
                Action::None => self.handle_global_key(key),
                action => action,
            },
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::FocusPanel(focus) => {
                self.apply_focus(focus);
                Action::None
            }
            Action::Reload => {
                self.trigger_initial_load();
                Action::None
            }
            Action::GamesLoaded(games) => {
                log::debug!("Data: replacing {} games with {}", self.state.games.len(), games.len());
                self.state.games.replace_all(games);
                Action::None
            }
            Action::ReviewsLoaded(reviews) => {
                log::debug!(
                    "Data: replacing {} reviews with {}",
                    self.state.reviews.all().len(),
                    reviews.len()
                );
                self.state.reviews.replace_all(reviews);
                Action::None
            }
            Action::EditDraft { field, value } => {
                self.state.draft.set_field(field, value);
                Action::None
            }
            Action::SubmitGame => {
                let draft = self.state.draft.get();
                if let Some(field) = draft.missing_required() {
                    log::debug!("Game: not submitted, '{}' is empty", field.label());
                    return Action::None;
                }
                let args = draft.to_create_args();
                log::info!(
                    "Game: creating '{}' on {} ({} hours)",
                    args.name,
                    args.platform,
                    args.hours_played
                );
                self.task_manager.spawn_game_creation(self.api.clone(), args);
                Action::None
            }
            Action::GameCreated(game) => {
                self.state.games.append(game);
                self.state.draft.reset();
                Action::None
            }
            Action::DeleteGame(id) => {
                log::info!("Game: deleting {}", id);
                if self.delete_policy == DeletePolicy::Optimistic {
                    if let Some(removed) = self.state.games.remove(&id) {
                        self.pending_deletes.insert(id.clone(), removed);
                    }
                }
                self.task_manager.spawn_game_deletion(self.api.clone(), id);
                Action::None
            }
            Action::DeleteResolved { id, status } => {
                self.finish_delete(&id, status.is_success());
                if !status.is_success() {
                    log::warn!("{} {}: server answered {}", LOG_ERROR_DELETE_GAME, id, status);
                }
                Action::None
            }
            Action::DeleteFailed(id) => {
                self.restore_pending_delete(&id);
                Action::None
            }
            Action::AddReview(review) => {
                log::info!("Review: added for game {}", review.game_id);
                self.state.reviews.append(review);
                Action::None
            }
            // Pass through other actions
            _ => action,
        }
    }

    /// Apply the delete policy once the server has answered
    fn finish_delete(&mut self, id: &str, succeeded: bool) {
        match self.delete_policy {
            DeletePolicy::OnResolve => {
                self.state.games.remove(id);
                log::info!("{}: {}", LOG_GAME_DELETED, id);
            }
            DeletePolicy::Confirmed => {
                if succeeded {
                    self.state.games.remove(id);
                    log::info!("{}: {}", LOG_GAME_DELETED, id);
                }
            }
            DeletePolicy::Optimistic => {
                if succeeded {
                    self.pending_deletes.remove(id);
                    // A reload may have landed while the request was in flight
                    self.state.games.remove(id);
                    log::info!("{}: {}", LOG_GAME_DELETED, id);
                } else {
                    self.restore_pending_delete(id);
                }
            }
        }
    }

    /// Put back an optimistically removed game unless a reload already brought it back
    fn restore_pending_delete(&mut self, id: &str) {
        let Some((position, game)) = self.pending_deletes.remove(id) else {
            return;
        };
        if self.state.games.get(id).is_some() {
            log::debug!("Game: {} already present after reload, not restoring", id);
            return;
        }
        log::info!("Game: restoring {} after failed delete", id);
        self.state.games.restore(position, game);
    }

    /// Run an action through the component hierarchy, then the app
    pub fn dispatch(&mut self, action: Action) -> Action {
        let action = self.update(action);
        let action = self.handle_app_action(action);
        self.sync_component_data();
        action
    }

    /// Drain results reported by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", finished.len());
        }

        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.game_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::main_layout(rect);

        self.game_list.render(f, layout.games);
        self.game_form.render(f, layout.game_form);
        self.review_form.render(f, layout.review_form);
        self.review_list.render(f, layout.reviews);
        StatusBar::render(f, layout.status, self.state.focus, self.task_manager.task_count());

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
