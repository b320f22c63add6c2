//! Status message formatting helpers

use gradebook_core::error::Result;
use serde_json::json;

/// Print a JSON status message with optional fields
///
/// # Examples
/// ```ignore
/// print_json_status("ok", Some("Department created"), &[("subject", json!("CS"))])?;
/// ```
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print the records header line
///
/// # Examples
/// ```ignore
/// print_records_header("gpa", &[("student", "u0000001")]);
/// // H gradebook=1 records=1 mode=gpa student=u0000001
/// ```
pub fn print_records_header(mode: &str, extra_fields: &[(&str, &str)]) {
    println!("{}", records_header(mode, extra_fields));
}

fn records_header(mode: &str, extra_fields: &[(&str, &str)]) -> String {
    let mut parts = vec![
        "H gradebook=1 records=1".to_string(),
        format!("mode={}", mode),
    ];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    parts.join(" ")
}
