//! CLI module for Laer.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Laer - Video Learning Materials
///
/// A CLI client for turning YouTube videos and pasted transcripts into
/// learning materials: a summary, key points, study notes, and a quiz.
/// The name "Laer" comes from the Norwegian word for "learn."
#[derive(Parser, Debug)]
#[command(name = "laer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate learning materials from a YouTube video URL
    Video {
        /// YouTube video URL
        url: String,

        /// Write the materials to this file as well as the console
        #[arg(short, long)]
        output: Option<String>,

        /// Output format when using --output (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Generate learning materials from a transcript file
    Transcript {
        /// Path to a transcript text file, or '-' for stdin
        input: String,

        /// Title for the materials (defaults to a generic title)
        #[arg(short, long)]
        title: Option<String>,

        /// Write the materials to this file as well as the console
        #[arg(short, long)]
        output: Option<String>,

        /// Output format when using --output (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Start an interactive study session
    Session,

    /// Check that the processing service is reachable
    Health,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
