use std::fmt;

/// Warnings raised while interpreting versions at the edges of the rules.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionWarning {
    /// Trailing qualifier dropped to recover the canonical version
    DiscardedQualifier { input: String, canonical: String },
    /// Prerelease label outside the recognized set; its number was dropped
    UnrecognizedLabel { version: String, label: String },
    /// Major version 0 without an explicit prerelease decoration
    ImplicitPrerelease { version: String },
}

impl fmt::Display for VersionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionWarning::DiscardedQualifier { input, canonical } => {
                write!(
                    f,
                    "Discarded trailing qualifier from '{}' (using '{}')",
                    input, canonical
                )
            }
            VersionWarning::UnrecognizedLabel { version, label } => {
                write!(
                    f,
                    "Version '{}' has unrecognized prerelease label '{}'",
                    version, label
                )
            }
            VersionWarning::ImplicitPrerelease { version } => {
                write!(
                    f,
                    "Version '{}' has major version 0 and is not considered stable",
                    version
                )
            }
        }
    }
}
