//! Command-line argument model.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;
use crate::domain::VersionBump;
use crate::update::Channel;

pub mod orchestration;

#[derive(Parser, Debug)]
#[command(
    name = "relver",
    version,
    about = "Parse, bump and derive release versions for CLI release tooling"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    #[arg(short, long, global = true, env = "RELVER_CONFIG", help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Only log errors")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Disable colored log output")]
    pub no_color: bool,

    #[arg(long, global = true, value_enum, help = "Output format (overrides config)")]
    pub format: Option<OutputFormat>,

    #[arg(long, global = true, help = "Variable name for pipeline output")]
    pub variable: Option<String>,
}

/// Where the input version comes from: an argument, or a version file.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct VersionSource {
    #[arg(help = "Version string (defaults to the configured version file)")]
    pub version: Option<String>,

    #[arg(long, help = "Read the version from this file")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the canonical form of a version
    Parse {
        #[command(flatten)]
        source: VersionSource,
    },
    /// Compute the next prerelease version
    NextPrerelease {
        #[command(flatten)]
        source: VersionSource,

        #[arg(long, help = "Use this version instead of the computed one")]
        new_version: Option<String>,

        #[arg(long, help = "Write the result back to the version file")]
        write: bool,
    },
    /// Compute the next release version
    Release {
        #[command(flatten)]
        source: VersionSource,

        #[arg(long, value_enum, default_value_t = VersionBump::Patch, help = "Component to bump when already a release")]
        bump: VersionBump,

        #[arg(long, help = "Use this release version instead of the computed one")]
        new_version: Option<String>,

        #[arg(long, help = "Write the result back to the version file")]
        write: bool,
    },
    /// Print the installer (MSI) version
    Installer {
        #[command(flatten)]
        source: VersionSource,

        #[arg(long, help = "Print only the installer patch number")]
        patch_only: bool,
    },
    /// Print the four-component package version
    PackageVersion {
        #[command(flatten)]
        source: VersionSource,
    },
    /// Print whether a release should be published
    ShouldRelease {
        #[command(flatten)]
        source: VersionSource,

        #[arg(long, help = "Publish prereleases even when config leaves prerelease.allow off")]
        allow_prerelease: bool,
    },
    /// Compare two versions, printing lt, eq or gt
    Compare { left: String, right: String },
    /// Print whether the latest published version is an update
    CheckUpdate {
        #[arg(long)]
        current: String,

        #[arg(long)]
        latest: String,

        #[arg(long, value_enum, default_value_t = Channel::Stable)]
        channel: Channel,
    },
}

impl Command {
    /// Variable name used for pipeline output when `--variable` is not given.
    pub fn default_variable(&self) -> &'static str {
        match self {
            Command::Parse { .. } => "CLI_VERSION",
            Command::NextPrerelease { .. } => "NEXT_VERSION",
            Command::Release { .. } => "RELEASE_VERSION",
            Command::Installer { .. } => "MSI_VERSION",
            Command::PackageVersion { .. } => "PACKAGE_VERSION",
            Command::ShouldRelease { .. } => "SHOULD_RELEASE",
            Command::Compare { .. } => "VERSION_COMPARISON",
            Command::CheckUpdate { .. } => "HAS_UPDATE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_next_prerelease_args() {
        let cli = Cli::try_parse_from([
            "relver",
            "next-prerelease",
            "0.1.0-beta.1",
            "--write",
            "--file",
            "cli/version.txt",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::NextPrerelease {
                source: VersionSource {
                    version: Some("0.1.0-beta.1".to_string()),
                    file: Some(PathBuf::from("cli/version.txt")),
                },
                new_version: None,
                write: true,
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["relver", "parse", "1.2.3", "-vv", "--format", "pipeline"])
            .unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.format, Some(OutputFormat::Pipeline));
    }

    #[test]
    fn test_release_bump_default() {
        let cli = Cli::try_parse_from(["relver", "release", "1.2.3"]).unwrap();
        match cli.command {
            Command::Release { bump, .. } => assert_eq!(bump, VersionBump::Patch),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_default_variable_names() {
        let cli = Cli::try_parse_from(["relver", "installer", "1.2.3"]).unwrap();
        assert_eq!(cli.command.default_variable(), "MSI_VERSION");
    }
}
