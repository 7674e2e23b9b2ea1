use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub course_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub enrolled_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Viewer progress for one course. Both sets only grow, except on module reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub completed_lessons: HashSet<String>,
    #[serde(default)]
    pub passed_quizzes: HashSet<String>,
    #[serde(default)]
    pub percentage: f64,
}
