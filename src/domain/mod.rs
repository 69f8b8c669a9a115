//! Domain logic - pure version rules independent of files, config and terminals

pub mod installer;
pub mod prerelease;
pub mod qualifier;
pub mod version;

pub use prerelease::{Prerelease, PrereleaseLabel, MAX_PRERELEASE_NUMBER, MIN_PRERELEASE_NUMBER};
pub use qualifier::{daily_build_number, BuildQualifier};
pub use version::{ParsedVersion, SemanticVersion, VersionBump};
