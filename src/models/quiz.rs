use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub lesson_id: Option<String>,
    #[serde(default)]
    pub module_id: Option<String>,
    /// Percentage required to pass
    #[serde(default = "default_passing_score")]
    pub passing_score: u32,
    #[serde(default)]
    pub questions: Vec<Question>,
}

fn default_passing_score() -> u32 {
    70
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(alias = "question")]
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub order_index: i32,
}

/// Answers keyed by question id, value is the chosen option index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub answers: HashMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub passed: bool,
    #[serde(default)]
    pub correct_answers: u32,
    #[serde(default)]
    pub total_questions: u32,
}

impl QuizSubmission {
    pub fn answer(mut self, question_id: impl Into<String>, option: usize) -> Self {
        self.answers.insert(question_id.into(), option);
        self
    }
}
