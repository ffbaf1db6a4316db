//! CLI output formatting utilities.

use crate::error::LaerError;
use crate::view::MaterialsView;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print the error banner for a failed submission, with a hint when one
    /// exists for this kind of failure.
    pub fn error_banner(err: &LaerError) {
        Self::error(&err.to_string());
        if let Some(hint) = err.hint() {
            eprintln!("   {}", style(hint).dim());
        }
    }

    /// Print a full set of learning materials.
    pub fn materials(view: &MaterialsView) {
        println!("\n{}", style(&view.title).bold().cyan());
        println!("{}", style(format!("Duration: {}", view.duration)).dim());

        Self::header("Summary");
        println!("{}", view.summary);

        Self::header("Key points");
        for (i, point) in view.key_points.iter().enumerate() {
            println!("  {}. {}", i + 1, point);
        }

        if !view.notes.is_empty() {
            Self::header("Study notes");
            for (i, note) in view.notes.iter().enumerate() {
                println!("  {}. {}", i + 1, note);
            }
        }

        Self::header("Quiz");
        for question in &view.quiz {
            println!("\n{}. {}", question.number, style(&question.question).bold());
            for option in &question.options {
                if option.correct {
                    println!(
                        "   {}. {} {}",
                        option.label,
                        option.text,
                        style("✓").green().bold()
                    );
                } else {
                    println!("   {}. {}", option.label, option.text);
                }
            }
        }
        println!();
    }

    /// Create a spinner for the in-flight request.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}
