//! Laer - Video Learning Materials
//!
//! A CLI client for a video-learning service: submit a YouTube URL or a
//! pasted transcript, get back a summary, key points, study notes, and a
//! multiple-choice quiz, then export everything as a plain-text report.
//!
//! The name "Laer" comes from the Norwegian word for "learn."
//!
//! # Overview
//!
//! Laer lets you:
//! - Generate learning materials from a YouTube video URL
//! - Generate learning materials from a transcript you already have
//! - Review the results in the terminal and export them as a report
//! - Drive everything from an interactive study session
//!
//! The heavy lifting (transcript fetching, summarization, quiz generation)
//! happens in an external processing service reachable over HTTP; this
//! crate validates input, talks to the service, renders results, and keeps
//! the most recent result around for export.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `api` - Service models, backend trait, and the HTTP client
//! - `session` - Study session state and submission control
//! - `view` - Pure view models for rendering
//! - `report` - Report building and export naming
//! - `cli` - Command-line interface and terminal output
//!
//! # Example
//!
//! ```rust,no_run
//! use laer::api::ApiClient;
//! use laer::config::Settings;
//! use laer::session::StudySession;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let client = Arc::new(ApiClient::new(&settings)?);
//!
//!     let mut session = StudySession::new(client, settings.defaults.video_title.clone());
//!     session.set_url("https://youtu.be/dQw4w9WgXcQ");
//!
//!     let materials = session.submit().await?;
//!     println!("{} key points", materials.key_points.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod session;
pub mod view;

pub use error::{LaerError, Result};
