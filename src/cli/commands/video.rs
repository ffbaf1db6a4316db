//! Video command implementation.

use crate::api::ApiClient;
use crate::cli::Output;
use crate::config::Settings;
use crate::report::ReportFormat;
use crate::session::StudySession;
use crate::view::build_view;
use crate::{report, LaerError};
use anyhow::Result;
use std::sync::Arc;

/// Run the video command: one-shot URL-mode submission.
pub async fn run_video(
    url: &str,
    output: Option<String>,
    format: &str,
    settings: Settings,
) -> Result<()> {
    let format: ReportFormat = format.parse().map_err(LaerError::Validation)?;

    let client = Arc::new(ApiClient::new(&settings)?);
    let mut session = StudySession::new(client, settings.defaults.video_title.clone());
    session.set_url(url);

    let spinner = Output::spinner("Generating learning materials...");
    let result = session.submit().await;
    spinner.finish_and_clear();

    let materials = match result {
        Ok(materials) => materials,
        Err(e) => {
            Output::error_banner(&e);
            return Err(e.into());
        }
    };

    Output::materials(&build_view(&materials));

    if let Some(path) = output {
        let content = report::render(&materials, format)?;
        std::fs::write(&path, content)?;
        Output::success(&format!("Saved learning materials to {}", path));
    }

    Ok(())
}
