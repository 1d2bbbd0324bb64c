//! Quiz questions and answer scoring.
//!
//! Questions are loaded from a JSON array file whose records spell the
//! answer key `Answer` (upstream content convention, preserved here).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Conventional file name for the quiz questions content file.
pub const QUIZ_QUESTIONS_FILE: &str = "quiz_questions.json";

/// One quiz question with its multiple-choice options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    /// Difficulty level, e.g. "beginner".
    pub level: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// The correct option text.
    #[serde(rename = "Answer")]
    pub answer: String,
}

/// One submitted answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question_id: u32,
    pub selected_option: String,
}

/// Outcome of scoring a submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    /// Number of correct answers.
    pub score: u32,
    /// Number of answers submitted.
    pub total: u32,
    /// Encouragement line based on the score.
    pub feedback: String,
}

/// In-memory store of quiz questions.
#[derive(Debug, Clone, Default)]
pub struct QuizStore {
    questions: Vec<QuizQuestion>,
}

impl QuizStore {
    /// Load questions from a JSON array file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let questions = serde_json::from_str(&raw).map_err(|source| Error::MalformedContent {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { questions })
    }

    /// Build a store from already-loaded questions (used by tests).
    pub fn from_questions(questions: Vec<QuizQuestion>) -> Self {
        Self { questions }
    }

    /// Questions at one difficulty level (case-insensitive), or all of them.
    pub fn questions(&self, level: Option<&str>) -> Vec<&QuizQuestion> {
        match level {
            None => self.questions.iter().collect(),
            Some(filter) => self
                .questions
                .iter()
                .filter(|q| q.level.eq_ignore_ascii_case(filter))
                .collect(),
        }
    }

    /// Score a submission: one point per answer whose selected option
    /// matches the stored answer for that question id. Unknown question ids
    /// score nothing. Feedback is "Great job!" when more than half the
    /// answers were correct, "Keep practicing!" otherwise.
    pub fn score(&self, answers: &[QuizAnswer]) -> QuizResult {
        let mut score = 0u32;
        for answer in answers {
            let correct = self
                .questions
                .iter()
                .find(|q| q.id == answer.question_id)
                .map(|q| q.answer.as_str());
            if correct == Some(answer.selected_option.as_str()) {
                score += 1;
            }
        }

        let total = answers.len() as u32;
        let feedback = if score * 2 > total {
            "Great job!"
        } else {
            "Keep practicing!"
        };

        QuizResult {
            score,
            total,
            feedback: feedback.to_string(),
        }
    }

    /// Number of loaded questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the store holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
