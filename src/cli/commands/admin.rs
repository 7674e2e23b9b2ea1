use clap::Subcommand;
use serde_json::{json, Value};

use crate::api::{ApiClient, RemoteData};
use crate::cli::commands::courses::render_catalog;
use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::guard::{Guard, GuardView, Route};
use crate::models::{CourseInput, LessonInput, ModuleInput, NewFaq, NewGroup};
use crate::roles::{Capability, RoleResolver};

#[derive(Subcommand)]
pub enum AdminCommands {
    #[command(about = "List groups (admin)")]
    Groups,

    #[command(about = "Create a group (admin)")]
    GroupCreate {
        #[arg(help = "Group name")]
        name: String,
        #[arg(long, help = "Leader user ID")]
        leader: Option<String>,
    },

    #[command(about = "Add a member to a group (admin)")]
    GroupAddMember {
        #[arg(help = "Group ID")]
        group: String,
        #[arg(help = "User ID")]
        user: String,
    },

    #[command(about = "Course progress of a group's members (leader)")]
    GroupProgress {
        #[arg(help = "Group ID")]
        group: String,
    },

    #[command(about = "Create a course (editor)")]
    CourseCreate {
        #[arg(long, help = "Course title")]
        title: String,
        #[arg(long, default_value = "", help = "Course description")]
        description: String,
        #[arg(long, help = "Instructor name")]
        instructor: Option<String>,
        #[arg(long, help = "Publish immediately")]
        publish: bool,
    },

    #[command(about = "Delete a course (editor)")]
    CourseDelete {
        #[arg(help = "Course ID")]
        id: String,
    },

    #[command(about = "Add a module to a course (editor)")]
    ModuleCreate {
        #[arg(help = "Course ID")]
        course: String,
        #[arg(long, help = "Module title")]
        title: String,
        #[arg(long, help = "Position within the course")]
        order: i32,
        #[arg(long, help = "Module has a final quiz")]
        quiz: bool,
    },

    #[command(about = "Add a lesson to a module (editor)")]
    LessonCreate {
        #[arg(help = "Module ID")]
        module: String,
        #[arg(long, help = "Lesson title")]
        title: String,
        #[arg(long, help = "Position within the module")]
        order: i32,
        #[arg(long, help = "Video URL")]
        video: Option<String>,
        #[arg(long, help = "Duration in minutes")]
        duration: Option<u32>,
        #[arg(long, help = "Quiz that gates the next lesson")]
        quiz: Option<String>,
    },

    #[command(about = "List FAQs (editor)")]
    Faqs,

    #[command(about = "Add a FAQ entry (editor)")]
    FaqAdd {
        #[arg(help = "Question")]
        question: String,
        #[arg(help = "Answer")]
        answer: String,
        #[arg(long, default_value_t = 0, help = "Display position")]
        order: i32,
    },

    #[command(about = "Delete a FAQ entry (editor)")]
    FaqDelete {
        #[arg(help = "FAQ ID")]
        id: String,
    },

    #[command(about = "Show site settings (admin master)")]
    Settings,

    #[command(about = "Change a site setting (admin master)")]
    SettingsSet {
        #[arg(help = "Setting key")]
        key: String,
        #[arg(help = "Value (parsed as JSON when possible)")]
        value: String,
    },
}

impl AdminCommands {
    fn capability(&self) -> Capability {
        match self {
            AdminCommands::Groups
            | AdminCommands::GroupCreate { .. }
            | AdminCommands::GroupAddMember { .. } => Capability::Admin,
            AdminCommands::GroupProgress { .. } => Capability::Leader,
            AdminCommands::CourseCreate { .. }
            | AdminCommands::CourseDelete { .. }
            | AdminCommands::ModuleCreate { .. }
            | AdminCommands::LessonCreate { .. }
            | AdminCommands::Faqs
            | AdminCommands::FaqAdd { .. }
            | AdminCommands::FaqDelete { .. } => Capability::Editor,
            AdminCommands::Settings | AdminCommands::SettingsSet { .. } => Capability::AdminMaster,
        }
    }

    fn section(&self) -> &'static str {
        match self.capability() {
            Capability::Admin => "Admin",
            Capability::AdminMaster => "Admin master",
            Capability::Editor => "Editor",
            Capability::Leader => "Leader",
        }
    }
}

pub async fn handle(cmd: AdminCommands, api: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    let resolver = RoleResolver::new(api, api);
    let landing = Route(crate::config::config().display.landing_route.clone());
    let mut guard = Guard::new(cmd.capability()).with_shell().redirect_to(landing);

    match guard.check(&resolver).await {
        GuardView::Render { shell } => {
            if shell {
                print_shell(&output_format, cmd.section());
            }
            run_authorized(cmd, api, &output_format).await
        }
        GuardView::Redirect { to, .. } => {
            tracing::info!(capability = guard.capability().as_str(), to = %to.0, "access denied, redirecting");
            output_error(
                &output_format,
                &format!("This area requires the {} role", guard.capability().as_str()),
                Some("FORBIDDEN"),
            )?;
            render_catalog(api, &output_format).await
        }
        GuardView::Placeholder => {
            output_error(&output_format, "Permission check did not complete", None)
        }
    }
}

async fn run_authorized(cmd: AdminCommands, api: &ApiClient, output_format: &OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AdminCommands::Groups => {
            let groups = RemoteData::from(api.list_groups().await).unwrap_or_default();
            if groups.is_empty() {
                return output_empty_collection(output_format, "groups", "No groups");
            }
            output_value(output_format, &json!({ "groups": groups }), || {
                let mut lines = vec![format!("{:<24} {:<30} {:>8}", "ID", "NAME", "MEMBERS")];
                lines.push("-".repeat(64));
                for group in &groups {
                    lines.push(format!("{:<24} {:<30} {:>8}", group.id, group.name, group.member_count));
                }
                lines.join("\n")
            })
        }
        AdminCommands::GroupCreate { name, leader } => {
            let group = api.create_group(&NewGroup { name, leader_id: leader }).await?;
            output_success(
                output_format,
                &format!("Group '{}' created", group.name),
                Some(json!({ "group": group })),
            )
        }
        AdminCommands::GroupAddMember { group, user } => {
            api.add_group_member(&group, &user).await?;
            output_success(output_format, &format!("User {} added to group {}", user, group), None)
        }
        AdminCommands::GroupProgress { group } => {
            let rows = api.group_progress(&group).await?;
            if rows.is_empty() {
                return output_empty_collection(output_format, "members", "No progress recorded for this group");
            }
            output_value(output_format, &json!({ "members": rows }), || {
                let mut lines = vec![format!("{:<30} {:<24} {:>8}", "MEMBER", "COURSE", "DONE")];
                lines.push("-".repeat(64));
                for row in &rows {
                    lines.push(format!(
                        "{:<30} {:<24} {:>7.0}%",
                        row.name.as_deref().unwrap_or(&row.user_id),
                        row.course_id,
                        row.percentage
                    ));
                }
                lines.join("\n")
            })
        }
        AdminCommands::CourseCreate { title, description, instructor, publish } => {
            let course = api
                .create_course(&CourseInput {
                    title,
                    description,
                    thumbnail_url: None,
                    instructor,
                    published: publish,
                })
                .await?;
            output_success(
                output_format,
                &format!("Course '{}' created ({})", course.title, course.id),
                Some(json!({ "course": course })),
            )
        }
        AdminCommands::CourseDelete { id } => {
            api.delete_course(&id).await?;
            output_success(output_format, &format!("Course {} deleted", id), None)
        }
        AdminCommands::ModuleCreate { course, title, order, quiz } => {
            let module = api
                .create_module(&ModuleInput {
                    course_id: course,
                    title,
                    description: String::new(),
                    order_index: order,
                    has_quiz: quiz,
                })
                .await?;
            output_success(
                output_format,
                &format!("Module '{}' created ({})", module.title, module.id),
                Some(json!({ "module": module })),
            )
        }
        AdminCommands::LessonCreate { module, title, order, video, duration, quiz } => {
            let lesson = api
                .create_lesson(&LessonInput {
                    module_id: module,
                    title,
                    video_url: video,
                    duration,
                    order_index: order,
                    has_quiz: quiz.is_some(),
                    quiz_id: quiz,
                })
                .await?;
            output_success(
                output_format,
                &format!("Lesson '{}' created ({})", lesson.title, lesson.id),
                Some(json!({ "lesson": lesson })),
            )
        }
        AdminCommands::Faqs => {
            let faqs = RemoteData::from(api.list_faqs().await).unwrap_or_default();
            if faqs.is_empty() {
                return output_empty_collection(output_format, "faqs", "No FAQ entries");
            }
            output_value(output_format, &json!({ "faqs": faqs }), || {
                faqs.iter()
                    .map(|f| format!("[{}] {}\n    {}", f.id, f.question, f.answer))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        AdminCommands::FaqAdd { question, answer, order } => {
            let faq = api.create_faq(&NewFaq { question, answer, order_index: order }).await?;
            output_success(output_format, &format!("FAQ {} added", faq.id), Some(json!({ "faq": faq })))
        }
        AdminCommands::FaqDelete { id } => {
            api.delete_faq(&id).await?;
            output_success(output_format, &format!("FAQ {} deleted", id), None)
        }
        AdminCommands::Settings => {
            let settings = api.get_settings().await?;
            output_value(output_format, &settings, || {
                settings
                    .0
                    .iter()
                    .map(|(k, v)| format!("{:<30} {}", k, v))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        AdminCommands::SettingsSet { key, value } => {
            let mut settings = api.get_settings().await?;
            let parsed = match serde_json::from_str::<Value>(&value) {
                Ok(v) => v,
                Err(_) => Value::String(value),
            };
            settings.set(key.clone(), parsed);
            let updated = api.update_settings(&settings).await?;
            output_success(
                output_format,
                &format!("Setting '{}' updated", key),
                Some(json!({ "settings": updated })),
            )
        }
    }
}
