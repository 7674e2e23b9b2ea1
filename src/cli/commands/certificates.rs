use clap::Subcommand;
use serde_json::json;

use crate::api::{ApiClient, RemoteData};
use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::presentation::render_certificate_card;

#[derive(Subcommand)]
pub enum CertificateCommands {
    #[command(about = "List your certificates")]
    List,

    #[command(about = "Issue the certificate for a completed course")]
    Issue {
        #[arg(help = "Course ID")]
        course: String,
    },

    #[command(about = "Verify a certificate by its number")]
    Verify {
        #[arg(help = "Certificate number")]
        number: String,
    },
}

pub async fn handle(cmd: CertificateCommands, api: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        CertificateCommands::List => {
            let certificates = RemoteData::from(api.list_certificates().await).unwrap_or_default();
            if certificates.is_empty() {
                return output_empty_collection(&output_format, "certificates", "No certificates yet");
            }
            output_value(&output_format, &json!({ "certificates": certificates }), || {
                certificates
                    .iter()
                    .map(render_certificate_card)
                    .collect::<Vec<_>>()
                    .join("\n\n")
            })
        }
        CertificateCommands::Issue { course } => {
            let certificate = api.issue_certificate(&course).await?;
            output_value(&output_format, &certificate, || render_certificate_card(&certificate))
        }
        CertificateCommands::Verify { number } => match api.verify_certificate(&number).await {
            Ok(certificate) => output_value(
                &output_format,
                &json!({ "valid": true, "certificate": certificate }),
                || format!("Valid certificate\n{}", render_certificate_card(&certificate)),
            ),
            Err(e) if e.is_not_found() => output_error(
                &output_format,
                &format!("Certificate {} not found", number),
                Some(e.error_code()),
            ),
            Err(e) => Err(e.into()),
        },
    }
}
