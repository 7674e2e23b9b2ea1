use std::collections::HashSet;

use clap::Subcommand;
use serde_json::json;

use crate::api::{ApiClient, RemoteData};
use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::presentation::render_course_card;

#[derive(Subcommand)]
pub enum CourseCommands {
    #[command(about = "List published courses")]
    List,

    #[command(about = "Show a course")]
    Show {
        #[arg(help = "Course ID")]
        id: String,
    },

    #[command(about = "Enrol in a course")]
    Enroll {
        #[arg(help = "Course ID")]
        id: String,
    },
}

/// Course ids the viewer is enrolled in; empty when signed out or on failure.
async fn enrolled_ids(api: &ApiClient) -> HashSet<String> {
    if !api.session().is_signed_in() {
        return HashSet::new();
    }
    RemoteData::from(api.list_enrollments().await)
        .map(|list| list.into_iter().map(|e| e.course_id).collect())
        .unwrap_or_default()
}

/// The landing view: the course catalogue.
pub async fn render_catalog(api: &ApiClient, output_format: &OutputFormat) -> anyhow::Result<()> {
    let courses: Vec<_> = RemoteData::from(api.list_courses().await)
        .unwrap_or_default()
        .into_iter()
        .filter(|c| c.published)
        .collect();

    if courses.is_empty() {
        return output_empty_collection(output_format, "courses", "No courses available");
    }

    let enrolled = enrolled_ids(api).await;
    output_value(output_format, &json!({ "courses": courses }), || {
        courses
            .iter()
            .map(|c| render_course_card(c, enrolled.contains(&c.id)))
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

pub async fn handle(cmd: CourseCommands, api: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        CourseCommands::List => render_catalog(api, &output_format).await,
        CourseCommands::Show { id } => {
            let course = api.get_course(&id).await?;
            let enrolled = enrolled_ids(api).await.contains(&course.id);
            output_value(&output_format, &course, || render_course_card(&course, enrolled))
        }
        CourseCommands::Enroll { id } => {
            let enrollment = api.enroll(&id).await?;
            output_success(
                &output_format,
                &format!("Enrolled in course {}", id),
                Some(json!({ "enrollment": enrollment })),
            )
        }
    }
}
