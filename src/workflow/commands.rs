//! Workflow commands printed on stdout (`::name key=value::message`).

use std::io::Write;

pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

pub fn format_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let properties = properties
        .iter()
        .map(|(key, value)| format!("{key}={}", escape_property(value)))
        .collect::<Vec<_>>()
        .join(",");

    if properties.is_empty() {
        format!("::{command}::{}", escape_data(message))
    } else {
        format!("::{command} {properties}::{}", escape_data(message))
    }
}

/// Marks the step as failed. The caller is responsible for the exit code.
pub fn set_failed(out: &mut impl Write, message: &str) {
    if let Err(err) = writeln!(out, "{}", format_command("error", &[], message)) {
        tracing::error!(error = %err, message, "unable to report step failure");
    }
}
