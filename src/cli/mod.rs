pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "academy")]
#[command(about = "Academy CLI - courses, lessons, quizzes and certificates from the command line")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, help = "Output in YAML format")]
    pub yaml: bool,

    #[arg(long, global = true, help = "API base URL (overrides ACADEMY_API_URL)")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Sign in, sign out and session information")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Course catalogue and enrolment")]
    Courses {
        #[command(subcommand)]
        cmd: commands::courses::CourseCommands,
    },

    #[command(about = "Show a course's modules with lesson unlock state")]
    Modules {
        #[arg(help = "Course ID")]
        course: String,
    },

    #[command(about = "Lesson viewing and progress")]
    Lesson {
        #[command(subcommand)]
        cmd: commands::learn::LessonCommands,
    },

    #[command(about = "Quizzes")]
    Quiz {
        #[command(subcommand)]
        cmd: commands::learn::QuizCommands,
    },

    #[command(about = "Certificates")]
    Certificates {
        #[command(subcommand)]
        cmd: commands::certificates::CertificateCommands,
    },

    #[command(about = "Role-restricted dashboards (admin, editor, leader)")]
    Admin {
        #[command(subcommand)]
        cmd: commands::admin::AdminCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else if cli.yaml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Text
        }
    }
}

/// Build the API client from the environment config and the persisted token slot.
pub fn client(api_url: Option<String>) -> anyhow::Result<ApiClient> {
    let mut config: AppConfig = crate::config::config().clone();
    if let Some(url) = api_url {
        config.api.base_url = url;
    }

    let session = Session::from_config(&config.session)?;
    Ok(ApiClient::new(&config, session)?)
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let api = client(cli.api_url.clone())?;

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, &api, output_format).await,
        Commands::Courses { cmd } => commands::courses::handle(cmd, &api, output_format).await,
        Commands::Modules { course } => commands::learn::show_modules(&course, &api, output_format).await,
        Commands::Lesson { cmd } => commands::learn::handle_lesson(cmd, &api, output_format).await,
        Commands::Quiz { cmd } => commands::learn::handle_quiz(cmd, &api, output_format).await,
        Commands::Certificates { cmd } => commands::certificates::handle(cmd, &api, output_format).await,
        Commands::Admin { cmd } => commands::admin::handle(cmd, &api, output_format).await,
    }
}
