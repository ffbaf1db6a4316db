//! View models for rendering learning materials.
//!
//! Pure mapping from API data to a presentation-ready structure: numbering,
//! option lettering, and correct-answer marking happen here, so the console
//! adapter and the report builder agree on what is shown and stay free of
//! those decisions.

use crate::api::models::{LearningMaterials, QuizQuestion};

/// Presentation-ready learning materials.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialsView {
    pub title: String,
    pub duration: String,
    pub summary: String,
    /// Key points in input order; numbering starts at 1 when displayed.
    pub key_points: Vec<String>,
    /// Study notes in input order; empty when the service sent none.
    pub notes: Vec<String>,
    pub quiz: Vec<QuestionView>,
}

/// One quiz question, numbered from 1.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub number: usize,
    pub question: String,
    pub options: Vec<OptionView>,
}

/// One quiz option with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    /// Letter label: A, B, C, ...
    pub label: char,
    pub text: String,
    /// Whether this option equals the question's correct answer. When no
    /// option matches, no option is marked; that is a silent degradation,
    /// not an error.
    pub correct: bool,
}

/// Build the view for a set of learning materials.
pub fn build_view(materials: &LearningMaterials) -> MaterialsView {
    MaterialsView {
        title: materials.video_title.clone(),
        duration: materials.duration.clone(),
        summary: materials.summary.clone(),
        key_points: materials.key_points.clone(),
        notes: materials.notes.clone(),
        quiz: materials
            .quiz
            .iter()
            .enumerate()
            .map(|(i, q)| build_question(i + 1, q))
            .collect(),
    }
}

fn build_question(number: usize, question: &QuizQuestion) -> QuestionView {
    QuestionView {
        number,
        question: question.question.clone(),
        options: question
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| OptionView {
                label: option_label(i),
                text: text.clone(),
                correct: question.is_correct(text),
            })
            .collect(),
    }
}

/// Letter label for a zero-based option index: 0 -> A, 1 -> B, ...
pub fn option_label(index: usize) -> char {
    char::from_u32('A' as u32 + index as u32).unwrap_or('?')
}
