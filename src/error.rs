use thiserror::Error;

/// Reasons a version string can be rejected.
///
/// The strict parser reports one of the specific kinds. The public parser
/// wraps whatever the strict pass reported in [`ParseError::Unparseable`]
/// together with the original input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid version core '{core}': expected three non-negative integers (X.Y.Z)")]
    InvalidCoreFormat { core: String },

    #[error("Invalid prerelease label '{label}': expected letters only")]
    InvalidPrereleaseLabel { label: String },

    #[error("Invalid prerelease number '{number}': {reason}")]
    InvalidPrereleaseNumber { number: String, reason: String },

    #[error("Unparseable version '{input}'")]
    Unparseable {
        input: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub fn core(core: impl Into<String>) -> Self {
        ParseError::InvalidCoreFormat { core: core.into() }
    }

    pub fn label(label: impl Into<String>) -> Self {
        ParseError::InvalidPrereleaseLabel {
            label: label.into(),
        }
    }

    pub fn number(number: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::InvalidPrereleaseNumber {
            number: number.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a strict-parse failure with the original input.
    pub fn unparseable(input: impl Into<String>, cause: ParseError) -> Self {
        ParseError::Unparseable {
            input: input.into(),
            source: Box::new(cause),
        }
    }

    /// The original input attached to an `Unparseable` error.
    pub fn input(&self) -> Option<&str> {
        match self {
            ParseError::Unparseable { input, .. } => Some(input),
            _ => None,
        }
    }
}

/// Unified error type for relver operations
#[derive(Error, Debug)]
pub enum RelverError {
    #[error("Version parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Version overflow: {0}")]
    Overflow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Semver comparison failed: {0}")]
    Semver(#[from] semver::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in relver
pub type Result<T> = std::result::Result<T, RelverError>;

impl RelverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RelverError::Config(msg.into())
    }

    /// Create an overflow error with context
    pub fn overflow(msg: impl Into<String>) -> Self {
        RelverError::Overflow(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = RelverError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RelverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_parse_error_kinds_display() {
        assert!(ParseError::core("1.2")
            .to_string()
            .contains("Invalid version core '1.2'"));
        assert!(ParseError::label("be7a")
            .to_string()
            .contains("Invalid prerelease label 'be7a'"));
        assert!(ParseError::number("0", "must be at least 1")
            .to_string()
            .contains("must be at least 1"));
    }

    #[test]
    fn test_unparseable_keeps_input_and_source() {
        let err = ParseError::unparseable("1.2.x", ParseError::core("1.2.x"));
        assert_eq!(err.input(), Some("1.2.x"));
        assert_eq!(err.to_string(), "Unparseable version '1.2.x'");

        let source = err.source().expect("source should be attached");
        assert!(source.to_string().contains("Invalid version core"));
    }

    #[test]
    fn test_specific_kinds_have_no_input() {
        assert_eq!(ParseError::core("x").input(), None);
        assert_eq!(ParseError::label("x").input(), None);
    }

    #[test]
    fn test_parse_error_converts_into_relver_error() {
        let err: RelverError = ParseError::unparseable("bad", ParseError::core("bad")).into();
        assert!(err.to_string().starts_with("Version parsing error"));
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (RelverError::config("x"), "Configuration error"),
            (RelverError::overflow("x"), "Version overflow"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
