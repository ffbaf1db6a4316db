//! HTTP client for the learning service.

use crate::api::models::{HealthStatus, LearningMaterials, TranscriptRequest, VideoRequest};
use crate::api::StudyBackend;
use crate::config::Settings;
use crate::error::{LaerError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Fallback message when an error response carries no `detail` field.
const GENERIC_ERROR: &str = "An error occurred while processing";

/// Client for the learning service's JSON API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client from settings, validating the base URL.
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut base_url = Url::parse(&settings.api.base_url).map_err(|e| {
            LaerError::Config(format!(
                "Invalid API base URL '{}': {}",
                settings.api.base_url, e
            ))
        })?;

        // A trailing slash makes Url::join treat the last path segment as a
        // directory, so endpoint paths append instead of replacing it.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .build()?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| LaerError::Config(format!("Invalid endpoint '{}': {}", path, e)))
    }

    /// POST a JSON body and decode the learning-materials response.
    ///
    /// The body is parsed as JSON regardless of HTTP status: error responses
    /// carry `{"detail": ...}`, which becomes the displayed message.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);

        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| LaerError::Parse(format!("{} (HTTP {})", e, status.as_u16())))?;

        if !status.is_success() {
            let message = value
                .get("detail")
                .and_then(|d| d.as_str())
                .unwrap_or(GENERIC_ERROR)
                .to_string();
            return Err(LaerError::Request {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_value(value).map_err(|e| LaerError::Parse(e.to_string()))
    }

    /// Check that the service is up.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("health")?;
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(LaerError::Request {
                status: status.as_u16(),
                message: format!("Health check failed with HTTP {}", status.as_u16()),
            });
        }

        serde_json::from_str(&text).map_err(|e| LaerError::Parse(e.to_string()))
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl StudyBackend for ApiClient {
    async fn process_video(&self, request: &VideoRequest) -> Result<LearningMaterials> {
        info!("Processing video: {}", request.youtube_url);
        self.post_json("process-video", request).await
    }

    async fn process_transcript(&self, request: &TranscriptRequest) -> Result<LearningMaterials> {
        info!(
            "Processing transcript '{}' ({} chars)",
            request.video_title,
            request.transcript.len()
        );
        self.post_json("process-transcript", request).await
    }
}
