//! Platform version formats derived from a [`SemanticVersion`]
//!
//! MSI versions have no prerelease slot and package managers such as WinGet
//! and Chocolatey want four numeric components, so both are derived from the
//! structured version rather than from its string form.

use crate::domain::version::SemanticVersion;

/// Numeric slots reserved per patch level in the installer patch number.
pub const INSTALLER_SLOTS_PER_PATCH: u64 = 100;

impl SemanticVersion {
    /// Monotonic installer patch number.
    ///
    /// A release maps to `(patch + 1) * 100`, a prerelease to
    /// `patch * 100 + number`, so every prerelease of `X.Y.Z` sorts below
    /// the `X.Y.Z` release. An unrecognized prerelease contributes no number.
    pub fn installer_patch_number(&self) -> u64 {
        let patch = u64::from(self.patch);
        if self.is_prerelease() {
            patch * INSTALLER_SLOTS_PER_PATCH + u64::from(self.prerelease_number().unwrap_or(0))
        } else {
            (patch + 1) * INSTALLER_SLOTS_PER_PATCH
        }
    }

    /// `{major}.{minor}.{installer_patch}`, the form used for MSI product versions.
    pub fn installer_version(&self) -> String {
        format!(
            "{}.{}.{}",
            self.major,
            self.minor,
            self.installer_patch_number()
        )
    }

    /// `{major}.{minor}.{patch}.{n}` where `n` is the recognized prerelease
    /// number, or 0.
    pub fn four_component_version(&self) -> String {
        let n = if self.has_recognized_prerelease() {
            self.prerelease_number().unwrap_or(0)
        } else {
            0
        };
        format!("{}.{}.{}.{}", self.major, self.minor, self.patch, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::parse(s).unwrap()
    }

    #[test]
    fn test_installer_patch_number() {
        assert_eq!(v("0.4.0-beta.2").installer_patch_number(), 2);
        assert_eq!(v("0.4.1").installer_patch_number(), 200);
        assert_eq!(v("1.2.3-beta.5").installer_patch_number(), 305);
    }

    #[test]
    fn test_installer_patch_number_release_beats_prereleases() {
        let release = v("1.2.3").installer_patch_number();
        let last_prerelease = v("1.2.3-beta.99").installer_patch_number();
        let next_patch_prerelease = v("1.2.4-beta.1").installer_patch_number();
        assert!(last_prerelease < release);
        assert!(release < next_patch_prerelease);
    }

    #[test]
    fn test_installer_patch_number_unrecognized_prerelease() {
        assert_eq!(v("1.2.3-preview.4").installer_patch_number(), 300);
    }

    #[test]
    fn test_installer_patch_number_large_patch() {
        let version = SemanticVersion::new(1, 0, u32::MAX);
        assert_eq!(
            version.installer_patch_number(),
            (u64::from(u32::MAX) + 1) * 100
        );
    }

    #[test]
    fn test_installer_version() {
        assert_eq!(v("1.24.0-beta.3").installer_version(), "1.24.3");
        assert_eq!(v("1.24.0").installer_version(), "1.24.100");
    }

    #[test]
    fn test_four_component_version() {
        assert_eq!(v("1.2.3-beta.4").four_component_version(), "1.2.3.4");
        assert_eq!(v("1.2.3").four_component_version(), "1.2.3.0");
        assert_eq!(v("1.2.3-nightly.4").four_component_version(), "1.2.3.0");
    }
}
