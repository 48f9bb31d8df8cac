use async_trait::async_trait;
use gameshelf::api::{ApiError, ApiResult, GameApi};
use gameshelf::models::{CreateGameArgs, Game, Review};
use reqwest::StatusCode;
use std::sync::Mutex;

pub fn game(id: &str, name: &str) -> Game {
    Game {
        id: id.to_string(),
        name: name.to_string(),
        platform: "PC".to_string(),
        hours_played: Some(10.0),
        image_url: None,
    }
}

/// In-memory backend recording the calls it receives.
pub struct FakeApi {
    pub games: Vec<Game>,
    pub reviews: Vec<Review>,
    pub fail_loads: bool,
    pub fail_create: bool,
    /// `None` simulates a transport failure
    pub delete_status: Option<StatusCode>,
    pub created: Mutex<Vec<CreateGameArgs>>,
    pub deleted: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new(games: Vec<Game>, reviews: Vec<Review>) -> Self {
        Self {
            games,
            reviews,
            fail_loads: false,
            fail_create: false,
            delete_status: Some(StatusCode::OK),
            created: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delete_status(mut self, status: Option<StatusCode>) -> Self {
        self.delete_status = status;
        self
    }

    pub fn failing_loads(mut self) -> Self {
        self.fail_loads = true;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }
}

#[async_trait]
impl GameApi for FakeApi {
    async fn list_games(&self) -> ApiResult<Vec<Game>> {
        if self.fail_loads {
            return Err(ApiError::NetworkResponse {
                endpoint: "/api/juegos".to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(self.games.clone())
    }

    async fn list_reviews(&self) -> ApiResult<Vec<Review>> {
        if self.fail_loads {
            return Err(ApiError::NetworkResponse {
                endpoint: "/api/reseñas".to_string(),
                status: StatusCode::SERVICE_UNAVAILABLE,
            });
        }
        Ok(self.reviews.clone())
    }

    async fn create_game(&self, args: &CreateGameArgs) -> ApiResult<Game> {
        if self.fail_create {
            return Err(ApiError::GameCreation("Name already taken".to_string()));
        }
        let mut created = self.created.lock().unwrap();
        created.push(args.clone());
        Ok(Game {
            id: format!("new-{}", created.len()),
            name: args.name.clone(),
            platform: args.platform.clone(),
            hours_played: Some(args.hours_played).filter(|hours| !hours.is_nan()),
            image_url: Some(args.image_url.clone()),
        })
    }

    async fn delete_game(&self, id: &str) -> ApiResult<StatusCode> {
        self.deleted.lock().unwrap().push(id.to_string());
        self.delete_status
            .ok_or_else(|| ApiError::InvalidUrl("connection refused".to_string()))
    }
}
