use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::OutputFormat;

fn print_structured<T: Serialize + ?Sized>(output_format: &OutputFormat, value: &T) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        _ => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
        _ => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(Value::Object(extra)) = data {
                if let Some(object) = response.as_object_mut() {
                    object.extend(extra);
                }
            }

            print_structured(output_format, &response)?;
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    error_code: Option<&str>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
        _ => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }

            print_structured(output_format, &response)?;
        }
    }
    Ok(())
}

/// Output an empty collection in the appropriate format
pub fn output_empty_collection(
    output_format: &OutputFormat,
    collection_name: &str,
    message: &str,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Text => {
            println!("{}", message);
        }
        _ => {
            print_structured(output_format, &json!({ collection_name: [] }))?;
        }
    }
    Ok(())
}

/// Output a value: structured formats serialize it, text calls `render`.
pub fn output_value<T, F>(output_format: &OutputFormat, value: &T, render: F) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match output_format {
        OutputFormat::Text => println!("{}", render()),
        _ => print_structured(output_format, value)?,
    }
    Ok(())
}

/// Header printed above views rendered inside the navigation shell
pub fn print_shell(output_format: &OutputFormat, section: &str) {
    if let OutputFormat::Text = output_format {
        println!("Academy › {}", section);
        println!("{}", "-".repeat(60));
    }
}
