//! Plain-text report building and export naming.

use crate::api::models::LearningMaterials;
use crate::error::Result;
use crate::view::build_view;
use regex::Regex;
use std::sync::OnceLock;

/// Suffix appended to the sanitized title for text exports.
pub const REPORT_SUFFIX: &str = "_learning_materials";

/// Export format for learning materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Fixed-format plain-text report.
    #[default]
    Text,
    /// Raw learning materials as pretty-printed JSON.
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown format: {} (expected 'text' or 'json')", s)),
        }
    }
}

impl ReportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

/// Render learning materials in the given format.
pub fn render(materials: &LearningMaterials, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(build_report(materials)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(materials)?),
    }
}

/// Build the fixed-format plain-text report.
pub fn build_report(materials: &LearningMaterials) -> String {
    let view = build_view(materials);
    let mut out = String::new();

    out.push_str("Laer - Video Learning Materials\n");
    out.push_str("===============================\n\n");
    out.push_str(&format!("Video: {}\n", view.title));
    out.push_str(&format!("Duration: {}\n\n", view.duration));

    out.push_str("SUMMARY\n");
    out.push_str("-------\n");
    out.push_str(&view.summary);
    out.push_str("\n\n");

    out.push_str("KEY POINTS\n");
    out.push_str("----------\n");
    for (i, point) in view.key_points.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, point));
    }

    if !view.notes.is_empty() {
        out.push_str("\nSTUDY NOTES\n");
        out.push_str("-----------\n");
        for (i, note) in view.notes.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, note));
        }
    }

    out.push_str("\nQUIZ QUESTIONS\n");
    out.push_str("--------------\n");
    for question in &view.quiz {
        out.push_str(&format!("\n{}. {}\n\n", question.number, question.question));
        for option in &question.options {
            let marker = if option.correct { " ✓ (Correct)" } else { "" };
            out.push_str(&format!("   {}. {}{}\n", option.label, option.text, marker));
        }
    }

    out.push_str("\nGenerated by Laer\n");
    out
}

/// Filename for an exported report, derived from the video title.
///
/// Every character outside `[A-Za-z0-9]` is replaced by an underscore.
pub fn report_filename(title: &str, format: ReportFormat) -> String {
    format!(
        "{}{}.{}",
        sanitize_title(title),
        REPORT_SUFFIX,
        format.extension()
    )
}

fn sanitize_title(title: &str) -> String {
    static SANITIZER: OnceLock<Regex> = OnceLock::new();
    let re = SANITIZER.get_or_init(|| Regex::new(r"[^A-Za-z0-9]").expect("Invalid regex"));
    re.replace_all(title, "_").into_owned()
}
