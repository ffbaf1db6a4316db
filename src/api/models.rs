//! Request and response models for the learning service API.

use serde::{Deserialize, Serialize};

/// Title used for transcript submissions when the user leaves it blank.
pub const DEFAULT_VIDEO_TITLE: &str = "Video Learning Materials";

/// Which of the two input styles is currently active.
///
/// The mode decides which form fields are consulted and which endpoint the
/// submission goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Submit a YouTube URL; the service fetches the transcript itself.
    #[default]
    Url,
    /// Submit a pasted transcript directly.
    Transcript,
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "url" | "video" => Ok(Mode::Url),
            "transcript" | "text" => Ok(Mode::Transcript),
            _ => Err(format!("Unknown mode: {} (expected 'url' or 'transcript')", s)),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Url => write!(f, "url"),
            Mode::Transcript => write!(f, "transcript"),
        }
    }
}

/// Request body for `POST /process-video`.
#[derive(Debug, Clone, Serialize)]
pub struct VideoRequest {
    pub youtube_url: String,
}

/// Request body for `POST /process-transcript`.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptRequest {
    pub transcript: String,
    pub video_title: String,
}

/// Learning materials returned by the service for one video or transcript.
///
/// Held as the single most recent successful result; each new success
/// overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningMaterials {
    pub video_title: String,
    /// Preformatted duration string, e.g. "0:15:30" or "N/A".
    pub duration: String,
    pub summary: String,
    pub key_points: Vec<String>,
    /// Detailed study notes. Older service versions omit this field.
    #[serde(default)]
    pub notes: Vec<String>,
    pub quiz: Vec<QuizQuestion>,
}

/// One multiple-choice quiz question.
///
/// `correct_answer` is expected to equal exactly one element of `options`;
/// rendering flags the matching option and silently flags none when no
/// option matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizQuestion {
    /// Whether the given option text is the designated correct answer.
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("url".parse::<Mode>().unwrap(), Mode::Url);
        assert_eq!("URL".parse::<Mode>().unwrap(), Mode::Url);
        assert_eq!("transcript".parse::<Mode>().unwrap(), Mode::Transcript);
        assert!("browser".parse::<Mode>().is_err());
    }

    #[test]
    fn test_quiz_correct_answer() {
        let question = QuizQuestion {
            question: "What is machine learning?".to_string(),
            options: vec!["A type of AI".to_string(), "A database".to_string()],
            correct_answer: "A type of AI".to_string(),
        };

        assert!(question.is_correct("A type of AI"));
        assert!(!question.is_correct("A database"));
    }

    #[test]
    fn test_materials_deserialize_without_notes() {
        // Older service versions do not send `notes`; it must default empty.
        let json = r#"{
            "video_title": "Intro to ML",
            "duration": "0:15:30",
            "summary": "An overview.",
            "key_points": ["ML is a subset of AI"],
            "quiz": []
        }"#;

        let materials: LearningMaterials = serde_json::from_str(json).unwrap();
        assert_eq!(materials.video_title, "Intro to ML");
        assert!(materials.notes.is_empty());
    }

    #[test]
    fn test_materials_roundtrip_preserves_order() {
        let json = r#"{
            "video_title": "Intro to ML",
            "duration": "N/A",
            "summary": "An overview.",
            "key_points": ["first", "second", "third"],
            "notes": ["note one"],
            "quiz": [
                {"question": "Q1", "options": ["a", "b"], "correct_answer": "a"},
                {"question": "Q2", "options": ["c", "d"], "correct_answer": "d"}
            ]
        }"#;

        let materials: LearningMaterials = serde_json::from_str(json).unwrap();
        assert_eq!(materials.key_points, vec!["first", "second", "third"]);
        assert_eq!(materials.quiz[0].question, "Q1");
        assert_eq!(materials.quiz[1].correct_answer, "d");
    }
}
