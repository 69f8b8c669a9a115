//! User interface module - result emission and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Writing command results to stdout

use std::io::{self, Write};

use anyhow::Result;

use crate::config::OutputFormat;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_success, display_version_warning, format_error_chain,
    format_output,
};

/// Writes a command result to stdout in the requested format.
pub fn emit(value: &str, format: OutputFormat, variable: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", format_output(value, format, variable))?;
    stdout.flush()?;
    Ok(())
}
