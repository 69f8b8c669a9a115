//! Command workflow orchestration
//!
//! Turns a parsed [`Command`] into a result value plus any warnings. No
//! terminal output happens here, so every command can be driven from tests
//! without spawning the binary.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::boundary::VersionWarning;
use crate::cli::{Command, VersionSource};
use crate::config::Config;
use crate::domain::{ParsedVersion, SemanticVersion};
use crate::error::{RelverError, Result};
use crate::update;
use crate::version_file::{read_version_file, write_version_file};

/// Result of a successful command
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// The value printed on stdout
    pub value: String,

    /// Non-fatal issues noticed along the way
    pub warnings: Vec<VersionWarning>,

    /// Version file that was rewritten, if any
    pub written: Option<PathBuf>,
}

impl CommandOutput {
    fn new(value: impl Into<String>, warnings: Vec<VersionWarning>) -> Self {
        CommandOutput {
            value: value.into(),
            warnings,
            written: None,
        }
    }
}

/// Runs one command against the loaded configuration.
pub fn run_command(command: &Command, config: &Config) -> Result<CommandOutput> {
    match command {
        Command::Parse { source } => {
            let (version, warnings) = resolve_version(source, config)?;
            Ok(CommandOutput::new(version.to_string(), warnings))
        }
        Command::NextPrerelease {
            source,
            new_version,
            write,
        } => {
            let (current, warnings) = resolve_version(source, config)?;
            let next = match new_version {
                Some(explicit) => explicit_prerelease(explicit)?,
                None => {
                    let mut next = current.clone();
                    next.increment_prerelease(&config.prerelease.fresh_label()?)?;
                    next
                }
            };
            tracing::info!(%current, %next, "computed next prerelease");
            finish_with_write(next, warnings, *write, source, config)
        }
        Command::Release {
            source,
            bump,
            new_version,
            write,
        } => {
            let (current, warnings) = resolve_version(source, config)?;
            let next = match new_version {
                Some(explicit) => explicit_release(&current, explicit)?,
                None => current.next_release(*bump)?,
            };
            tracing::info!(%current, %next, "computed next release");
            finish_with_write(next, warnings, *write, source, config)
        }
        Command::Installer { source, patch_only } => {
            let (version, warnings) = resolve_version(source, config)?;
            let value = if *patch_only {
                version.installer_patch_number().to_string()
            } else {
                version.installer_version()
            };
            Ok(CommandOutput::new(value, warnings))
        }
        Command::PackageVersion { source } => {
            let (version, warnings) = resolve_version(source, config)?;
            Ok(CommandOutput::new(version.four_component_version(), warnings))
        }
        Command::ShouldRelease {
            source,
            allow_prerelease,
        } => {
            let (version, mut warnings) = resolve_version(source, config)?;
            if version.is_prerelease_by_major_zero() && !version.is_prerelease() {
                warnings.push(VersionWarning::ImplicitPrerelease {
                    version: version.to_string(),
                });
            }
            let allow = *allow_prerelease || config.prerelease.allow;
            Ok(CommandOutput::new(
                version.should_release(allow).to_string(),
                warnings,
            ))
        }
        Command::Compare { left, right } => {
            let left = SemanticVersion::parse(left)?;
            let right = SemanticVersion::parse(right)?;
            let value = match left.cmp(&right) {
                Ordering::Less => "lt",
                Ordering::Equal => "eq",
                Ordering::Greater => "gt",
            };
            Ok(CommandOutput::new(value, Vec::new()))
        }
        Command::CheckUpdate {
            current,
            latest,
            channel,
        } => {
            let has_update = update::has_update(current, latest, *channel)?;
            Ok(CommandOutput::new(has_update.to_string(), Vec::new()))
        }
    }
}

/// Reads the input version from the argument or the version file.
fn resolve_version(
    source: &VersionSource,
    config: &Config,
) -> Result<(SemanticVersion, Vec<VersionWarning>)> {
    let (input, parsed) = match &source.version {
        Some(text) => (text.clone(), SemanticVersion::parse_detailed(text)?),
        None => read_version_file(version_file_path(source, config))?,
    };

    Ok((parsed.version.clone(), collect_warnings(&input, &parsed)))
}

fn collect_warnings(input: &str, parsed: &ParsedVersion) -> Vec<VersionWarning> {
    let mut warnings = Vec::new();
    if parsed.discarded.is_some() {
        warnings.push(VersionWarning::DiscardedQualifier {
            input: input.to_string(),
            canonical: parsed.version.to_string(),
        });
    }
    if let Some(prerelease) = parsed.version.prerelease.as_ref() {
        if !prerelease.is_recognized() {
            warnings.push(VersionWarning::UnrecognizedLabel {
                version: parsed.version.to_string(),
                label: prerelease.label().to_string(),
            });
        }
    }
    warnings
}

fn version_file_path<'a>(source: &'a VersionSource, config: &'a Config) -> &'a Path {
    source.file.as_deref().unwrap_or(config.version_file.as_path())
}

/// Parses an explicit next-prerelease target.
fn explicit_prerelease(explicit: &str) -> Result<SemanticVersion> {
    let target = SemanticVersion::parse(explicit)?;
    if target.is_prerelease() && !target.has_recognized_prerelease() {
        return Err(RelverError::config(format!(
            "Prerelease version '{}' must use an alpha, beta or rc label",
            explicit
        )));
    }
    Ok(target)
}

/// Applies an explicit release target to the current version.
fn explicit_release(current: &SemanticVersion, explicit: &str) -> Result<SemanticVersion> {
    let target = SemanticVersion::parse(explicit)?;
    if target.is_prerelease() {
        return Err(RelverError::config(format!(
            "Release version '{}' must not be a prerelease",
            explicit
        )));
    }

    let mut next = current.clone();
    next.set_release(target.major, target.minor, target.patch);
    Ok(next)
}

fn finish_with_write(
    next: SemanticVersion,
    warnings: Vec<VersionWarning>,
    write: bool,
    source: &VersionSource,
    config: &Config,
) -> Result<CommandOutput> {
    let mut output = CommandOutput::new(next.to_string(), warnings);
    if write {
        let path = version_file_path(source, config);
        write_version_file(path, &next)?;
        output.written = Some(path.to_path_buf());
    }
    Ok(output)
}
