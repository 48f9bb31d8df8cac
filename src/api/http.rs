//! HTTP client for the games backend.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{ApiError, ApiResult, GameApi};
use crate::config::ApiConfig;
use crate::constants::{GAMES_PATH, REVIEWS_PATH};
use crate::models::{CreateGameArgs, Game, Review};

/// Talks to the REST endpoints under a fixed base address.
#[derive(Clone)]
pub struct HttpGameApi {
    client: Client,
    base_url: String,
}

impl HttpGameApi {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// URL of a single game, with the identifier escaped as one path segment
    pub fn game_url(&self, id: &str) -> ApiResult<Url> {
        let mut url = self.endpoint(GAMES_PATH)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        let url = self.endpoint(path)?;
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::NetworkResponse {
                endpoint: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            endpoint: url.to_string(),
            source,
        })
    }
}

/// Pull a human readable reason out of an error response body.
pub fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn list_games(&self) -> ApiResult<Vec<Game>> {
        self.get_list(GAMES_PATH).await
    }

    async fn list_reviews(&self) -> ApiResult<Vec<Review>> {
        self.get_list(REVIEWS_PATH).await
    }

    async fn create_game(&self, args: &CreateGameArgs) -> ApiResult<Game> {
        let url = self.endpoint(GAMES_PATH)?;
        let response = self.client.post(url.clone()).json(args).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Server error while saving game ({}): {}", status, body);
            return Err(ApiError::GameCreation(extract_error_message(status, &body)));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            endpoint: url.to_string(),
            source,
        })
    }

    async fn delete_game(&self, id: &str) -> ApiResult<StatusCode> {
        let url = self.game_url(id)?;
        let response = self.client.delete(url).send().await?;
        Ok(response.status())
    }
}
