use std::io::{self, BufRead, Write};

use clap::Subcommand;
use serde_json::json;

use crate::api::ApiClient;
use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::models::{Credentials, Registration};
use crate::roles::{IdentitySource, RoleResolver};

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Sign in and store the session token")]
    Login {
        #[arg(help = "Email")]
        email: String,
        #[arg(long, help = "Password (will prompt if not provided)")]
        password: Option<String>,
    },

    #[command(about = "Sign out and clear the stored token")]
    Logout,

    #[command(about = "Show the stored token's subject and expiry")]
    Status,

    #[command(about = "Show current user information and roles")]
    Whoami,

    #[command(about = "Register a new account")]
    Register {
        #[arg(help = "Full name")]
        name: String,
        #[arg(help = "Email")]
        email: String,
        #[arg(long, help = "Password (will prompt if not provided)")]
        password: Option<String>,
    },
}

fn read_password(provided: Option<String>) -> anyhow::Result<String> {
    if let Some(password) = provided {
        return Ok(password);
    }

    eprint!("Password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("Password is required");
    }
    Ok(password)
}

pub async fn handle(cmd: AuthCommands, api: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { email, password } => {
            let password = read_password(password)?;
            let response = api.login(&Credentials { email: email.clone(), password }).await?;
            output_success(
                &output_format,
                &format!("Signed in as {}", email),
                Some(json!({ "user": response.user })),
            )
        }
        AuthCommands::Logout => {
            api.logout()?;
            output_success(&output_format, "Signed out", None)
        }
        AuthCommands::Status => {
            let session = api.session();
            let claims = session.claims();
            let expired = session.is_expired_at(chrono::Utc::now());
            let status = json!({
                "signed_in": session.is_signed_in() && !expired,
                "subject": claims.as_ref().and_then(|c| c.sub.clone()),
                "email": claims.as_ref().and_then(|c| c.email.clone()),
                "expires_at": claims.as_ref().and_then(|c| c.expires_at()),
                "expired": expired,
            });

            output_value(&output_format, &status, || {
                if !session.is_signed_in() {
                    return "Not signed in".to_string();
                }
                let mut lines = vec![if expired {
                    "Session token has expired".to_string()
                } else {
                    "Signed in".to_string()
                }];
                if let Some(email) = claims.as_ref().and_then(|c| c.email.as_deref()) {
                    lines.push(format!("Email: {}", email));
                }
                if let Some(exp) = claims.as_ref().and_then(|c| c.expires_at()) {
                    lines.push(format!("Expires: {}", exp.format("%Y-%m-%d %H:%M UTC")));
                }
                lines.join("\n")
            })
        }
        AuthCommands::Whoami => {
            let Some(identity) = api.current_identity().await? else {
                return output_error(&output_format, "Not signed in", Some("UNAUTHENTICATED"));
            };
            let roles = RoleResolver::new(api, api).resolve_roles().await;

            let data = json!({ "user": identity, "roles": roles });
            output_value(&output_format, &data, || {
                let mut lines = vec![format!("User: {}", identity.id)];
                if let Some(name) = &identity.name {
                    lines.push(format!("Name: {}", name));
                }
                if let Some(email) = &identity.email {
                    lines.push(format!("Email: {}", email));
                }
                let roles: Vec<_> = roles.iter().map(|r| r.as_str()).collect();
                lines.push(format!(
                    "Roles: {}",
                    if roles.is_empty() { "-".to_string() } else { roles.join(", ") }
                ));
                lines.join("\n")
            })
        }
        AuthCommands::Register { name, email, password } => {
            let password = read_password(password)?;
            let response = api
                .register(&Registration { name, email: email.clone(), password })
                .await?;
            output_success(
                &output_format,
                &format!("Registered and signed in as {}", email),
                Some(json!({ "user": response.user })),
            )
        }
    }
}
