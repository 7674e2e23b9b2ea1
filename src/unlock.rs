//! Progressive lesson unlocking inside a module.
//!
//! A lesson opens once its immediate predecessor's gate is satisfied: the
//! predecessor's quiz must be passed when it declares one, otherwise the
//! predecessor itself must be completed. Only one lesson is looked back at;
//! an older incomplete lesson does not block a later one.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Lesson, Module};

/// Whether `lesson` (at `lesson_index` in `module_lessons`) can be opened.
///
/// `module_lessons` must already be in module order.
pub fn is_unlocked(
    _lesson: &Lesson,
    lesson_index: usize,
    module_lessons: &[Lesson],
    completed_lessons: &HashSet<String>,
    passed_quizzes: &HashSet<String>,
) -> bool {
    if lesson_index == 0 {
        return true;
    }

    let Some(previous) = module_lessons.get(lesson_index - 1) else {
        return false;
    };

    match previous.gating_quiz() {
        Some(quiz_id) => passed_quizzes.contains(quiz_id),
        None => completed_lessons.contains(&previous.id),
    }
}

/// Unlock flag for every lesson of an ordered lesson list.
pub fn unlock_states(
    module_lessons: &[Lesson],
    completed_lessons: &HashSet<String>,
    passed_quizzes: &HashSet<String>,
) -> Vec<bool> {
    module_lessons
        .iter()
        .enumerate()
        .map(|(i, lesson)| is_unlocked(lesson, i, module_lessons, completed_lessons, passed_quizzes))
        .collect()
}

/// What a locked lesson is waiting on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gate {
    PreviousLesson { lesson_id: String },
    PreviousQuiz { quiz_id: String },
}

impl Gate {
    pub fn caption(&self) -> &'static str {
        match self {
            Gate::PreviousLesson { .. } => "Complete the previous lesson to unlock",
            Gate::PreviousQuiz { .. } => "Pass the previous lesson's quiz to unlock",
        }
    }
}

/// Display state of a lesson row in the module accordion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LessonAccess {
    Locked { gate: Gate },
    Unlocked,
    Completed,
}

impl LessonAccess {
    pub fn is_accessible(&self) -> bool {
        !matches!(self, LessonAccess::Locked { .. })
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LessonAccess::Locked { .. } => "🔒",
            LessonAccess::Unlocked => "▶",
            LessonAccess::Completed => "✓",
        }
    }
}

/// One accordion row: the lesson plus its derived access state.
#[derive(Debug, Clone, Serialize)]
pub struct LessonRow {
    pub lesson: Lesson,
    pub access: LessonAccess,
}

/// Evaluate a module's lessons in position order.
pub fn lesson_rows(
    module: &Module,
    completed_lessons: &HashSet<String>,
    passed_quizzes: &HashSet<String>,
) -> Vec<LessonRow> {
    let lessons = module.sorted_lessons();
    let states = unlock_states(&lessons, completed_lessons, passed_quizzes);

    lessons
        .iter()
        .zip(states)
        .enumerate()
        .map(|(i, (lesson, unlocked))| {
            let access = if !unlocked {
                // i > 0 here, the first lesson is always unlocked
                let previous = &lessons[i - 1];
                let gate = match previous.gating_quiz() {
                    Some(quiz_id) => Gate::PreviousQuiz { quiz_id: quiz_id.to_string() },
                    None => Gate::PreviousLesson { lesson_id: previous.id.clone() },
                };
                LessonAccess::Locked { gate }
            } else if completed_lessons.contains(&lesson.id) {
                LessonAccess::Completed
            } else {
                LessonAccess::Unlocked
            };
            LessonRow { lesson: lesson.clone(), access }
        })
        .collect()
}

/// (completed, total) lesson counts for the accordion header.
pub fn module_progress(module: &Module, completed_lessons: &HashSet<String>) -> (usize, usize) {
    let done = module
        .lessons
        .iter()
        .filter(|l| completed_lessons.contains(&l.id))
        .count();
    (done, module.lessons.len())
}

/// The module final quiz is reachable whenever the module declares one.
pub fn module_quiz_available(module: &Module) -> bool {
    module.has_quiz
}
