use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Print a command result. Text mode prints `text`; JSON mode wraps `data`
/// in a success envelope.
pub fn output_result(output_format: OutputFormat, text: &str, data: Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "success": true,
                "data": data
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("{}", text);
        }
    }
    Ok(())
}

/// Yes/no rendering for predicate results in text mode
pub fn verdict(allowed: bool) -> &'static str {
    if allowed {
        "allowed"
    } else {
        "denied"
    }
}

/// Render a list as one item per line, or a placeholder when empty
pub fn text_list<I, S>(items: I, empty: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<String> = items
        .into_iter()
        .map(|item| format!("  {}", item.as_ref()))
        .collect();

    if lines.is_empty() {
        empty.to_string()
    } else {
        lines.join("\n")
    }
}
