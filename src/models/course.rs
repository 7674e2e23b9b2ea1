use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    /// Total duration in minutes
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    #[serde(default)]
    pub course_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "orderIndex", alias = "position")]
    pub order_index: i32,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    /// Module-level final quiz
    #[serde(default, alias = "hasQuiz")]
    pub has_quiz: bool,
    #[serde(default, alias = "quizId")]
    pub quiz_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    #[serde(default)]
    pub module_id: Option<String>,
    pub title: String,
    #[serde(default, alias = "videoUrl")]
    pub video_url: Option<String>,
    /// Minutes
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(alias = "orderIndex", alias = "position")]
    pub order_index: i32,
    #[serde(default, alias = "quizId")]
    pub quiz_id: Option<String>,
    #[serde(default, alias = "hasQuiz")]
    pub has_quiz: bool,
}

impl Module {
    /// Lessons ordered by their position within the module.
    pub fn sorted_lessons(&self) -> Vec<Lesson> {
        let mut lessons = self.lessons.clone();
        lessons.sort_by_key(|l| l.order_index);
        lessons
    }

    pub fn total_duration(&self) -> u32 {
        self.lessons.iter().filter_map(|l| l.duration).sum()
    }
}

impl Lesson {
    /// Quiz that gates the next lesson, if this lesson declares one.
    pub fn gating_quiz(&self) -> Option<&str> {
        if self.has_quiz {
            self.quiz_id.as_deref()
        } else {
            None
        }
    }
}

/// Body for course create / update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseInput {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    pub published: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleInput {
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub order_index: i32,
    pub has_quiz: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonInput {
    pub module_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub order_index: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_id: Option<String>,
    pub has_quiz: bool,
}
