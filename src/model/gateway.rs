//! Remote data gateway for the Viberfy backend API

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use super::types::{Profile, Track};

/// Errors that can occur when talking to the backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested entity does not exist (404). Terminal for the view that
    /// asked; never retried.
    #[error("not found")]
    NotFound,

    /// HTTP transport failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Invalid base URL in configuration
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Authoritative counters returned by the like-toggle endpoint
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct LikeResponse {
    pub is_liked: bool,
    pub likes_count: u64,
}

/// Authoritative counter returned by the play-register endpoint
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PlayResponse {
    pub plays_count: u64,
}

/// Backend operations consumed by the client.
///
/// Transport-agnostic so the intent handlers can be exercised against an
/// in-memory implementation in tests.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    async fn list_tracks(&self) -> Result<Vec<Track>>;
    async fn track_by_slug(&self, slug: &str) -> Result<Track>;
    async fn similar_tracks(&self, slug: &str) -> Result<Vec<Track>>;
    async fn toggle_like(&self, slug: &str) -> Result<LikeResponse>;
    async fn register_play(&self, slug: &str) -> Result<PlayResponse>;
    async fn me(&self) -> Result<Profile>;
    async fn logout(&self) -> Result<()>;
}

/// HTTP implementation of [`ApiGateway`] over the platform's JSON API.
pub struct HttpGateway {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpGateway {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let url = base_url.trim_end_matches('/').to_string();
        if url.is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("viberfy-tui/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: url,
            token,
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, &url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "API: GET");
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::decode(path, response).await
    }

    async fn post_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "API: POST");
        let response = self.request(reqwest::Method::POST, path).send().await?;
        Self::decode(path, response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("{path}: {e}")))
        } else if status.as_u16() == 404 {
            Err(ApiError::NotFound)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ApiGateway for HttpGateway {
    async fn list_tracks(&self) -> Result<Vec<Track>> {
        self.get_json("/api/tracks").await
    }

    async fn track_by_slug(&self, slug: &str) -> Result<Track> {
        self.get_json(&format!("/api/tracks/{slug}")).await
    }

    async fn similar_tracks(&self, slug: &str) -> Result<Vec<Track>> {
        self.get_json(&format!("/api/tracks/{slug}/similar")).await
    }

    async fn toggle_like(&self, slug: &str) -> Result<LikeResponse> {
        self.post_json(&format!("/api/tracks/{slug}/like")).await
    }

    async fn register_play(&self, slug: &str) -> Result<PlayResponse> {
        self.post_json(&format!("/api/tracks/{slug}/play")).await
    }

    async fn me(&self) -> Result<Profile> {
        self.get_json("/api/me").await
    }

    async fn logout(&self) -> Result<()> {
        tracing::debug!("API: POST /api/auth/logout");
        let response = self
            .request(reqwest::Method::POST, "/api/auth/logout")
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}
