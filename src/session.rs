//! Study session state and submission control.
//!
//! A [`StudySession`] owns the current input mode, the draft form fields,
//! and the most recent successful result. There is a single writer: the
//! prompt loop (or a one-shot command) driving the session. Submission takes
//! `&mut self`, so at most one request is in flight at a time.

use crate::api::models::{LearningMaterials, Mode, TranscriptRequest, VideoRequest};
use crate::api::StudyBackend;
use crate::error::{LaerError, Result};
use crate::report;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Minimum transcript length accepted before contacting the service.
pub const MIN_TRANSCRIPT_CHARS: usize = 100;

/// Draft input fields, one per form control.
///
/// All fields persist across mode switches; only the active mode's fields
/// are consulted on submit.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub youtube_url: String,
    pub transcript: String,
    pub video_title: String,
}

/// An interactive study session against a learning-service backend.
pub struct StudySession {
    backend: Arc<dyn StudyBackend>,
    default_title: String,
    mode: Mode,
    form: FormFields,
    last_result: Option<LearningMaterials>,
}

impl StudySession {
    /// Create a session in URL mode with empty fields.
    pub fn new(backend: Arc<dyn StudyBackend>, default_title: impl Into<String>) -> Self {
        Self {
            backend,
            default_title: default_title.into(),
            mode: Mode::default(),
            form: FormFields::default(),
            last_result: None,
        }
    }

    /// The currently active input mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the active input mode. Re-selecting the active mode is a no-op.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// The current draft fields.
    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.form.youtube_url = url.into();
    }

    pub fn set_transcript(&mut self, transcript: impl Into<String>) {
        self.form.transcript = transcript.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.video_title = title.into();
    }

    /// The most recent successful result, if any.
    pub fn last_result(&self) -> Option<&LearningMaterials> {
        self.last_result.as_ref()
    }

    /// Validate the active mode's fields and submit one request.
    ///
    /// Validation failures return [`LaerError::Validation`] without touching
    /// the network. On success the result is stored (overwriting any
    /// previous one) and a copy is returned for rendering. Every failure is
    /// terminal for this attempt; there are no retries.
    pub async fn submit(&mut self) -> Result<LearningMaterials> {
        let materials = match self.mode {
            Mode::Url => {
                let request = self.video_request()?;
                self.backend.process_video(&request).await?
            }
            Mode::Transcript => {
                let request = self.transcript_request()?;
                self.backend.process_transcript(&request).await?
            }
        };

        debug!("Storing result for '{}'", materials.video_title);
        self.last_result = Some(materials.clone());
        Ok(materials)
    }

    fn video_request(&self) -> Result<VideoRequest> {
        let url = self.form.youtube_url.trim();
        if url.is_empty() {
            return Err(LaerError::Validation(
                "Please enter a YouTube URL".to_string(),
            ));
        }

        Ok(VideoRequest {
            youtube_url: url.to_string(),
        })
    }

    fn transcript_request(&self) -> Result<TranscriptRequest> {
        let transcript = self.form.transcript.trim();
        if transcript.is_empty() {
            return Err(LaerError::Validation(
                "Please paste a video transcript".to_string(),
            ));
        }

        if transcript.chars().count() < MIN_TRANSCRIPT_CHARS {
            return Err(LaerError::Validation(format!(
                "Transcript is too short. Please provide a longer transcript (at least {} characters)",
                MIN_TRANSCRIPT_CHARS
            )));
        }

        let title = self.form.video_title.trim();
        let video_title = if title.is_empty() {
            self.default_title.clone()
        } else {
            title.to_string()
        };

        Ok(TranscriptRequest {
            transcript: transcript.to_string(),
            video_title,
        })
    }

    /// Clear the form fields back to their defaults.
    ///
    /// The stored result is kept, so export still works after a reset.
    pub fn reset(&mut self) {
        self.form = FormFields::default();
    }

    /// Export the stored result as a text report into a directory, using the
    /// sanitized-title filename. Returns `Ok(None)` when there is nothing to
    /// export; no file is written in that case.
    pub fn export_report_into(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(materials) = &self.last_result else {
            return Ok(None);
        };

        let filename = report::report_filename(&materials.video_title, report::ReportFormat::Text);
        self.write_report(materials, &dir.join(filename)).map(Some)
    }

    /// Export the stored result as a text report to an explicit path.
    /// Returns `Ok(None)` when there is nothing to export.
    pub fn export_report_to(&self, path: &Path) -> Result<Option<PathBuf>> {
        let Some(materials) = &self.last_result else {
            return Ok(None);
        };

        self.write_report(materials, path).map(Some)
    }

    fn write_report(&self, materials: &LearningMaterials, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, report::build_report(materials))?;
        debug!("Wrote report to {}", path.display());
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::QuizQuestion;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records requests and replies with queued or canned responses.
    #[derive(Default)]
    struct StubBackend {
        video_requests: Mutex<Vec<VideoRequest>>,
        transcript_requests: Mutex<Vec<TranscriptRequest>>,
        queued: Mutex<Vec<LearningMaterials>>,
        fail_with_status: Option<u16>,
    }

    impl StubBackend {
        fn failing(status: u16) -> Self {
            Self {
                fail_with_status: Some(status),
                ..Default::default()
            }
        }

        fn enqueue(&self, materials: LearningMaterials) {
            self.queued.lock().unwrap().push(materials);
        }

        fn materials() -> LearningMaterials {
            LearningMaterials {
                video_title: "Intro to ML".to_string(),
                duration: "0:15:30".to_string(),
                summary: "An overview.".to_string(),
                key_points: vec!["ML is a subset of AI".to_string()],
                notes: vec![],
                quiz: vec![QuizQuestion {
                    question: "What is ML?".to_string(),
                    options: vec!["A type of AI".to_string(), "A database".to_string()],
                    correct_answer: "A type of AI".to_string(),
                }],
            }
        }

        fn respond(&self) -> Result<LearningMaterials> {
            if let Some(status) = self.fail_with_status {
                return Err(LaerError::Request {
                    status,
                    message: "Unable to fetch transcript".to_string(),
                });
            }

            let mut queued = self.queued.lock().unwrap();
            if queued.is_empty() {
                Ok(Self::materials())
            } else {
                Ok(queued.remove(0))
            }
        }
    }

    #[async_trait]
    impl StudyBackend for StubBackend {
        async fn process_video(&self, request: &VideoRequest) -> Result<LearningMaterials> {
            self.video_requests.lock().unwrap().push(request.clone());
            self.respond()
        }

        async fn process_transcript(
            &self,
            request: &TranscriptRequest,
        ) -> Result<LearningMaterials> {
            self.transcript_requests
                .lock()
                .unwrap()
                .push(request.clone());
            self.respond()
        }
    }

    fn session_with(backend: Arc<StubBackend>) -> StudySession {
        StudySession::new(backend, crate::api::models::DEFAULT_VIDEO_TITLE)
    }

    #[tokio::test]
    async fn test_empty_url_fails_validation_without_network() {
        let backend = Arc::new(StubBackend::default());
        let mut session = session_with(backend.clone());

        session.set_url("   ");
        let err = session.submit().await.unwrap_err();

        assert!(matches!(err, LaerError::Validation(_)));
        assert_eq!(err.to_string(), "Please enter a YouTube URL");
        assert!(backend.video_requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_short_transcript_fails_validation_without_network() {
        let backend = Arc::new(StubBackend::default());
        let mut session = session_with(backend.clone());

        session.switch_mode(Mode::Transcript);
        session.set_transcript("too short");
        let err = session.submit().await.unwrap_err();

        assert!(err.to_string().contains("at least 100 characters"));
        assert!(backend.transcript_requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_url_submit_issues_one_request_and_stores_result() {
        let backend = Arc::new(StubBackend::default());
        let mut session = session_with(backend.clone());

        session.set_url("  https://youtu.be/dQw4w9WgXcQ  ");
        let materials = session.submit().await.unwrap();

        let requests = backend.video_requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].youtube_url, "https://youtu.be/dQw4w9WgXcQ");

        assert_eq!(materials, StubBackend::materials());
        assert_eq!(session.last_result(), Some(&StubBackend::materials()));
    }

    #[tokio::test]
    async fn test_blank_title_defaults_and_custom_title_passes_through() {
        let long_transcript = "x".repeat(150);

        let backend = Arc::new(StubBackend::default());
        let mut session = session_with(backend.clone());
        session.switch_mode(Mode::Transcript);
        session.set_transcript(long_transcript.clone());
        session.submit().await.unwrap();

        session.set_title("  My Lecture  ");
        session.submit().await.unwrap();

        let requests = backend.transcript_requests.lock().unwrap();
        assert_eq!(requests[0].video_title, "Video Learning Materials");
        assert_eq!(requests[1].video_title, "My Lecture");
        assert_eq!(requests[1].transcript, long_transcript);
    }

    #[tokio::test]
    async fn test_validation_failure_keeps_previous_result() {
        let backend = Arc::new(StubBackend::default());
        let mut session = session_with(backend);
        session.set_url("https://youtu.be/dQw4w9WgXcQ");
        session.submit().await.unwrap();

        session.set_url("");
        assert!(session.submit().await.is_err());
        assert!(session.last_result().is_some());
    }

    #[tokio::test]
    async fn test_request_error_is_surfaced_and_stores_nothing() {
        let backend = Arc::new(StubBackend::failing(404));
        let mut session = session_with(backend);

        session.set_url("https://youtu.be/xxxxxxxxxxx");
        let err = session.submit().await.unwrap_err();

        assert!(matches!(err, LaerError::Request { status: 404, .. }));
        assert!(session.last_result().is_none());
    }

    #[tokio::test]
    async fn test_reset_clears_fields_but_keeps_result() {
        let backend = Arc::new(StubBackend::default());
        let mut session = session_with(backend);

        session.set_url("https://youtu.be/dQw4w9WgXcQ");
        session.set_title("Some title");
        session.submit().await.unwrap();

        session.reset();

        assert!(session.form().youtube_url.is_empty());
        assert!(session.form().video_title.is_empty());
        assert!(session.last_result().is_some());

        let dir = tempfile::tempdir().unwrap();
        let exported = session.export_report_into(dir.path()).unwrap();
        assert!(exported.is_some());
    }

    #[tokio::test]
    async fn test_export_without_result_writes_nothing() {
        let backend = Arc::new(StubBackend::default());
        let session = session_with(backend);

        let dir = tempfile::tempdir().unwrap();
        let exported = session.export_report_into(dir.path()).unwrap();

        assert!(exported.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_export_writes_sanitized_filename_and_content() {
        let backend = Arc::new(StubBackend::default());
        let mut session = session_with(backend);

        session.set_url("https://youtu.be/dQw4w9WgXcQ");
        session.submit().await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = session.export_report_into(dir.path()).unwrap().unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Intro_to_ML_learning_materials.txt"
        );

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Video: Intro to ML"));
        assert!(content.contains("Duration: 0:15:30"));
        assert!(content.contains("1. ML is a subset of AI"));
        assert!(content.contains("A. A type of AI ✓ (Correct)"));
    }

    #[tokio::test]
    async fn test_new_success_overwrites_stored_result() {
        let backend = Arc::new(StubBackend::default());

        let mut first = StubBackend::materials();
        first.video_title = "First Video".to_string();
        let mut second = StubBackend::materials();
        second.video_title = "Second Video".to_string();
        backend.enqueue(first);
        backend.enqueue(second);

        let mut session = session_with(backend);
        session.set_url("https://youtu.be/aaaaaaaaaaa");
        session.submit().await.unwrap();
        session.set_url("https://youtu.be/bbbbbbbbbbb");
        session.submit().await.unwrap();

        assert_eq!(
            session.last_result().map(|m| m.video_title.as_str()),
            Some("Second Video")
        );
    }
}
