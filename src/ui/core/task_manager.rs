use super::actions::Action;
use crate::api::GameApi;
use crate::constants::{
    LOG_ERROR_CREATE_GAME, LOG_ERROR_DELETE_GAME, LOG_ERROR_LOAD_GAMES, LOG_ERROR_LOAD_REVIEWS, LOG_GAMES_LOADED,
    LOG_GAME_CREATED, LOG_REVIEWS_LOADED,
};
use crate::models::CreateGameArgs;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs API calls off the UI loop and reports their outcome as actions.
///
/// Failures are logged inside the task and never retried.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a future whose result, if any, is sent back as an action
    fn spawn<Fut>(&mut self, description: String, operation: Fut) -> TaskId
    where
        Fut: Future<Output = Option<Action>> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            if let Some(action) = operation.await {
                let _ = action_sender.send(action);
            }
        });

        log::debug!("Background: spawned task {} '{}'", task_id, description);
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Fetch the games list
    pub fn spawn_games_load(&mut self, api: Arc<dyn GameApi>) -> TaskId {
        self.spawn("Load games".to_string(), async move {
            match api.list_games().await {
                Ok(games) => {
                    log::info!("{}: {} games", LOG_GAMES_LOADED, games.len());
                    Some(Action::GamesLoaded(games))
                }
                Err(e) => {
                    log::error!("{}: {}", LOG_ERROR_LOAD_GAMES, e);
                    None
                }
            }
        })
    }

    /// Fetch the reviews list
    pub fn spawn_reviews_load(&mut self, api: Arc<dyn GameApi>) -> TaskId {
        self.spawn("Load reviews".to_string(), async move {
            match api.list_reviews().await {
                Ok(reviews) => {
                    log::info!("{}: {} reviews", LOG_REVIEWS_LOADED, reviews.len());
                    Some(Action::ReviewsLoaded(reviews))
                }
                Err(e) => {
                    log::error!("{}: {}", LOG_ERROR_LOAD_REVIEWS, e);
                    None
                }
            }
        })
    }

    /// Create a game
    pub fn spawn_game_creation(&mut self, api: Arc<dyn GameApi>, args: CreateGameArgs) -> TaskId {
        let description = format!("Create game '{}'", args.name);
        self.spawn(description, async move {
            match api.create_game(&args).await {
                Ok(game) => {
                    log::info!("{}: '{}' ({})", LOG_GAME_CREATED, game.name, game.id);
                    Some(Action::GameCreated(game))
                }
                Err(e) => {
                    log::error!("{}: {}", LOG_ERROR_CREATE_GAME, e);
                    None
                }
            }
        })
    }

    /// Delete a game; any HTTP answer is reported, transport failures too
    pub fn spawn_game_deletion(&mut self, api: Arc<dyn GameApi>, id: String) -> TaskId {
        let description = format!("Delete game {}", id);
        self.spawn(description, async move {
            match api.delete_game(&id).await {
                Ok(status) => Some(Action::DeleteResolved { id, status }),
                Err(e) => {
                    log::error!("{} {}: {}", LOG_ERROR_DELETE_GAME, id, e);
                    Some(Action::DeleteFailed(id))
                }
            }
        })
    }

    /// Drop finished tasks, returning their descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<String> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| self.tasks.remove(&id))
            .map(|task| {
                log::debug!(
                    "Background: task {} '{}' finished after {:?}",
                    task.id,
                    task.description,
                    task.started_at.elapsed()
                );
                task.description
            })
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
