//! Free-function entry points used by the release tooling.
//!
//! Each function takes the structured [`SemanticVersion`]; nothing here
//! re-parses strings except [`parse_version`] itself.

use crate::domain::PrereleaseLabel;
use crate::error::{ParseError, Result};

pub use crate::domain::{SemanticVersion, VersionBump};

/// Parses a version string, tolerating a CI qualifier after the prerelease.
///
/// # Example
/// ```
/// use relver::version::parse_version;
///
/// let v = parse_version("0.4.0-beta.2-pr.2021242").unwrap();
/// assert_eq!(v.to_string(), "0.4.0-beta.2");
/// assert!(parse_version("1.2.3-beta.0").is_err());
/// ```
pub fn parse_version(input: &str) -> std::result::Result<SemanticVersion, ParseError> {
    SemanticVersion::parse(input)
}

/// Moves a version to its next prerelease.
///
/// - **Recognized prerelease**: number += 1
/// - **Release or unrecognized prerelease**: minor += 1, patch = 0, `beta.1`
///
/// Fails when the prerelease number is already at its ceiling.
pub fn increment_to_next_prerelease(version: SemanticVersion) -> Result<SemanticVersion> {
    increment_to_next_prerelease_with(version, &PrereleaseLabel::Beta)
}

/// Like [`increment_to_next_prerelease`] with a configurable label for fresh series.
pub fn increment_to_next_prerelease_with(
    mut version: SemanticVersion,
    fresh_label: &PrereleaseLabel,
) -> Result<SemanticVersion> {
    version.increment_prerelease(fresh_label)?;
    Ok(version)
}

/// Promotes a prerelease to its release, or bumps a release.
pub fn increment_to_next_release(
    version: SemanticVersion,
    bump_type: VersionBump,
) -> Result<SemanticVersion> {
    version.next_release(bump_type)
}

pub fn derive_installer_patch_number(version: &SemanticVersion) -> u64 {
    version.installer_patch_number()
}

pub fn derive_installer_version(version: &SemanticVersion) -> String {
    version.installer_version()
}

pub fn derive_four_component_version(version: &SemanticVersion) -> String {
    version.four_component_version()
}

pub fn is_prerelease_by_major_zero(version: &SemanticVersion) -> bool {
    version.is_prerelease_by_major_zero()
}

pub fn should_release(version: &SemanticVersion, allow_prerelease: bool) -> bool {
    version.should_release(allow_prerelease)
}
