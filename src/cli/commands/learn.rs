use clap::Subcommand;
use serde_json::json;

use crate::api::{ApiClient, RemoteData};
use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::models::{Progress, QuizSubmission};
use crate::presentation::{render_module, render_video, VideoEmbed};
use crate::unlock::lesson_rows;

#[derive(Subcommand)]
pub enum LessonCommands {
    #[command(about = "Show a lesson and its video")]
    Show {
        #[arg(help = "Lesson ID")]
        id: String,
    },

    #[command(about = "Mark a lesson as completed")]
    Complete {
        #[arg(help = "Lesson ID")]
        id: String,
    },

    #[command(about = "Reset progress for every lesson in a module")]
    ResetModule {
        #[arg(help = "Module ID")]
        module: String,
    },
}

#[derive(Subcommand)]
pub enum QuizCommands {
    #[command(about = "Show a quiz's questions")]
    Show {
        #[arg(help = "Quiz ID")]
        id: String,
    },

    #[command(about = "Submit answers as QUESTION=OPTION pairs (option index starts at 0)")]
    Submit {
        #[arg(help = "Quiz ID")]
        id: String,
        #[arg(long = "answer", short = 'a', value_parser = parse_answer, help = "Answer, e.g. -a q1=2")]
        answers: Vec<(String, usize)>,
    },
}

fn parse_answer(raw: &str) -> Result<(String, usize), String> {
    let (question, option) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=OPTION, got '{}'", raw))?;
    let option = option
        .trim()
        .parse()
        .map_err(|_| format!("option must be a number, got '{}'", option))?;
    Ok((question.trim().to_string(), option))
}

/// Module accordion for a course. Progress failures degrade to "nothing completed".
pub async fn show_modules(course_id: &str, api: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut modules = api.list_modules(course_id).await?;
    if modules.is_empty() {
        return output_empty_collection(&output_format, "modules", "This course has no modules yet");
    }

    for module in modules.iter_mut().filter(|m| m.lessons.is_empty()) {
        module.lessons = RemoteData::from(api.list_lessons(&module.id).await).unwrap_or_default();
    }

    let progress: Progress = RemoteData::from(api.course_progress(course_id).await).unwrap_or_default();
    let label = &crate::config::config().display.module_quiz_label;

    let structured: Vec<_> = modules
        .iter()
        .map(|m| {
            json!({
                "module": m.id,
                "title": m.title,
                "has_quiz": m.has_quiz,
                "lessons": lesson_rows(m, &progress.completed_lessons, &progress.passed_quizzes),
            })
        })
        .collect();

    output_value(&output_format, &json!({ "course_id": course_id, "modules": structured }), || {
        modules
            .iter()
            .map(|m| render_module(m, &progress.completed_lessons, &progress.passed_quizzes, label))
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

pub async fn handle_lesson(cmd: LessonCommands, api: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        LessonCommands::Show { id } => {
            let lesson = api.get_lesson(&id).await?;
            let embed = lesson.video_url.as_deref().map(VideoEmbed::parse).unwrap_or(VideoEmbed::Invalid);

            output_value(&output_format, &json!({ "lesson": lesson, "video": embed }), || {
                let mut lines = vec![lesson.title.clone(), render_video(lesson.video_url.as_deref())];
                if let Some(minutes) = lesson.duration {
                    lines.push(format!("Duration: {}min", minutes));
                }
                if let Some(quiz) = lesson.gating_quiz() {
                    lines.push(format!("Quiz: {}", quiz));
                }
                lines.join("\n")
            })
        }
        LessonCommands::Complete { id } => {
            api.complete_lesson(&id).await?;
            output_success(&output_format, &format!("Lesson {} completed", id), None)
        }
        LessonCommands::ResetModule { module } => {
            api.reset_module(&module).await?;
            output_success(&output_format, &format!("Progress for module {} reset", module), None)
        }
    }
}

pub async fn handle_quiz(cmd: QuizCommands, api: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        QuizCommands::Show { id } => {
            let mut quiz = api.get_quiz(&id).await?;
            quiz.questions.sort_by_key(|q| q.order_index);

            output_value(&output_format, &quiz, || {
                let mut lines = vec![format!("{} (pass: {}%)", quiz.title, quiz.passing_score)];
                for (n, question) in quiz.questions.iter().enumerate() {
                    lines.push(format!("{}. [{}] {}", n + 1, question.id, question.text));
                    for (i, option) in question.options.iter().enumerate() {
                        lines.push(format!("     {}) {}", i, option));
                    }
                }
                lines.join("\n")
            })
        }
        QuizCommands::Submit { id, answers } => {
            let submission = answers
                .into_iter()
                .fold(QuizSubmission::default(), |s, (q, o)| s.answer(q, o));
            let result = api.submit_quiz(&id, &submission).await?;

            output_value(&output_format, &result, || {
                format!(
                    "{} - score {}% ({}/{} correct)",
                    if result.passed { "Passed" } else { "Not passed" },
                    result.score,
                    result.correct_answers,
                    result.total_questions
                )
            })
        }
    }
}
