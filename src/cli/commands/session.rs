//! Interactive study session command.
//!
//! A prompt loop over a [`StudySession`]: switch modes, fill in fields,
//! submit, export the latest result, reset. The session keeps the last
//! successful result in memory for export until the process exits.

use crate::api::models::Mode;
use crate::api::ApiClient;
use crate::cli::Output;
use crate::config::Settings;
use crate::session::StudySession;
use crate::view::build_view;
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

/// Run the interactive session command.
pub async fn run_session(settings: Settings) -> Result<()> {
    let client = Arc::new(ApiClient::new(&settings)?);
    let mut session = StudySession::new(client, settings.defaults.video_title.clone());

    println!("\n{}", style("Laer Study Session").bold().cyan());
    println!(
        "{}\n",
        style("Type 'help' for commands, 'exit' to quit.").dim()
    );
    describe_mode(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("laer>").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command.to_lowercase().as_str() {
            "exit" | "quit" => {
                Output::info("Goodbye!");
                break;
            }
            "help" => print_help(),
            "mode" => match rest.parse::<Mode>() {
                Ok(mode) => {
                    session.switch_mode(mode);
                    describe_mode(&session);
                }
                Err(e) => Output::error(&e),
            },
            "url" => {
                if rest.is_empty() {
                    Output::error("Usage: url <youtube link>");
                } else {
                    session.set_url(rest);
                    Output::info(&format!("URL set to {}", rest));
                }
            }
            "load" => {
                if rest.is_empty() {
                    Output::error("Usage: load <file>");
                } else {
                    match std::fs::read_to_string(rest) {
                        Ok(text) => {
                            let chars = text.chars().count();
                            session.set_transcript(text);
                            Output::info(&format!("Loaded transcript ({} characters)", chars));
                        }
                        Err(e) => Output::error(&format!("Could not read '{}': {}", rest, e)),
                    }
                }
            }
            "title" => {
                session.set_title(rest);
                if rest.is_empty() {
                    Output::info("Title cleared; the default will be used.");
                } else {
                    Output::info(&format!("Title set to '{}'", rest));
                }
            }
            "show" => show_form(&session),
            "submit" => {
                let spinner = Output::spinner("Generating learning materials...");
                let result = session.submit().await;
                spinner.finish_and_clear();

                match result {
                    Ok(materials) => Output::materials(&build_view(&materials)),
                    Err(e) => Output::error_banner(&e),
                }
            }
            "export" => {
                let exported = if rest.is_empty() {
                    session.export_report_into(&settings.download_dir())
                } else {
                    session.export_report_to(Path::new(rest))
                };

                match exported {
                    Ok(Some(path)) => {
                        Output::success(&format!("Saved report to {}", path.display()));
                    }
                    Ok(None) => {
                        Output::warning("Nothing to export yet. Submit a video or transcript first.");
                    }
                    Err(e) => Output::error_banner(&e),
                }
            }
            "reset" => {
                session.reset();
                Output::info("Form cleared.");
            }
            _ => {
                Output::error(&format!("Unknown command: {}", command));
                Output::info("Type 'help' for the list of commands.");
            }
        }
    }

    Ok(())
}

fn describe_mode(session: &StudySession) {
    Output::info(&format!("Input mode: {}", session.mode()));
    match session.mode() {
        Mode::Url => {
            println!("   {}", style("Set a link with 'url <link>', then 'submit'.").dim());
        }
        Mode::Transcript => {
            println!(
                "   {}",
                style("Load text with 'load <file>', optionally 'title <text>', then 'submit'.")
                    .dim()
            );
        }
    }
}

fn show_form(session: &StudySession) {
    let form = session.form();
    Output::header("Current form");
    Output::kv("mode", &session.mode().to_string());
    Output::kv(
        "url",
        if form.youtube_url.is_empty() {
            "(empty)"
        } else {
            &form.youtube_url
        },
    );
    Output::kv(
        "transcript",
        &if form.transcript.is_empty() {
            "(empty)".to_string()
        } else {
            format!("{} characters", form.transcript.chars().count())
        },
    );
    Output::kv(
        "title",
        if form.video_title.is_empty() {
            "(default)"
        } else {
            &form.video_title
        },
    );
    Output::kv(
        "last result",
        &match session.last_result() {
            Some(materials) => materials.video_title.clone(),
            None => "(none)".to_string(),
        },
    );
}

fn print_help() {
    Output::header("Commands");
    Output::kv("mode url|transcript", "switch the input mode");
    Output::kv("url <link>", "set the YouTube URL field");
    Output::kv("load <file>", "load a transcript file into the form");
    Output::kv("title <text>", "set the video title for transcript mode");
    Output::kv("show", "show the current form state");
    Output::kv("submit", "send the active mode's input for processing");
    Output::kv("export [path]", "save the latest result as a text report");
    Output::kv("reset", "clear the form fields");
    Output::kv("exit", "leave the session");
}
