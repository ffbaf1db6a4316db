//! Learning service API: models, backend trait, and the HTTP client.
//!
//! The processing service (transcript fetching, summarization, quiz
//! generation) is an opaque external collaborator; this crate only speaks
//! its two JSON endpoints. The trait seam exists so session logic can be
//! exercised against an in-memory stub.

mod client;
pub mod models;

pub use client::ApiClient;

use crate::error::Result;
use async_trait::async_trait;
use models::{LearningMaterials, TranscriptRequest, VideoRequest};

/// Trait for backends that turn a video or transcript into learning
/// materials.
#[async_trait]
pub trait StudyBackend: Send + Sync {
    /// Process a YouTube video by URL.
    async fn process_video(&self, request: &VideoRequest) -> Result<LearningMaterials>;

    /// Process a pasted transcript.
    async fn process_transcript(&self, request: &TranscriptRequest) -> Result<LearningMaterials>;
}
