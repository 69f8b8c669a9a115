//! Pure formatting functions for UI output.
//!
//! Everything except the command result goes to stderr so that stdout can be
//! captured by release scripts.

use console::style;

use crate::boundary::VersionWarning;
use crate::config::OutputFormat;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Display a version warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_version_warning(warning: &VersionWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render a command result for stdout.
///
/// `Plain` prints the bare value. `Pipeline` wraps it in an Azure Pipelines
/// logging command that sets `variable`.
pub fn format_output(value: &str, format: OutputFormat, variable: &str) -> String {
    match format {
        OutputFormat::Plain => value.to_string(),
        OutputFormat::Pipeline => {
            format!("##vso[task.setvariable variable={}]{}", variable, value)
        }
    }
}

/// Join an error and its sources, skipping causes already in the message.
pub fn format_error_chain<'a>(
    causes: impl IntoIterator<Item = &'a (dyn std::error::Error + 'static)>,
) -> String {
    let mut message = String::new();
    for cause in causes {
        let text = cause.to_string();
        if message.contains(&text) {
            continue;
        }
        if !message.is_empty() {
            message.push_str(": ");
        }
        message.push_str(&text);
    }
    message
}
