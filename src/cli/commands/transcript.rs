//! Transcript command implementation.

use crate::api::models::Mode;
use crate::api::ApiClient;
use crate::cli::Output;
use crate::config::Settings;
use crate::report::ReportFormat;
use crate::session::StudySession;
use crate::view::build_view;
use crate::{report, LaerError};
use anyhow::Result;
use std::io::Read;
use std::sync::Arc;

/// Run the transcript command: one-shot transcript-mode submission.
pub async fn run_transcript(
    input: &str,
    title: Option<String>,
    output: Option<String>,
    format: &str,
    settings: Settings,
) -> Result<()> {
    let format: ReportFormat = format.parse().map_err(LaerError::Validation)?;

    let transcript = read_transcript(input)?;

    let client = Arc::new(ApiClient::new(&settings)?);
    let mut session = StudySession::new(client, settings.defaults.video_title.clone());
    session.switch_mode(Mode::Transcript);
    session.set_transcript(transcript);
    if let Some(title) = title {
        session.set_title(title);
    }

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

/// Read the transcript text from a file, or stdin when the input is '-'.
fn read_transcript(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}
