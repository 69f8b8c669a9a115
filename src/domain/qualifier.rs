//! CI build qualifiers appended after a canonical version
//!
//! Pull-request and daily builds publish versions such as
//! `1.24.0-beta.1-pr.5678` or `1.24.0-beta.1-daily.5935787`. The qualifier is
//! not part of the canonical version but its number is useful on its own.

use crate::error::ParseError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const DAILY_PREFIX: &str = "daily.";

static QUALIFIER_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)\.(\d+)$").ok());

/// A `{kind}.{number}` qualifier such as `pr.1234` or `daily.5678`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildQualifier {
    pub kind: String,
    pub number: u64,
}

impl BuildQualifier {
    pub fn new(kind: impl Into<String>, number: u64) -> Self {
        BuildQualifier {
            kind: kind.into(),
            number,
        }
    }

    pub fn pull_request(number: u64) -> Self {
        BuildQualifier::new("pr", number)
    }

    pub fn daily(number: u64) -> Self {
        BuildQualifier::new("daily", number)
    }
}

impl FromStr for BuildQualifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::unparseable(s, ParseError::label(s));

        let re = QUALIFIER_RE.as_ref().ok_or_else(invalid)?;
        let captures = re.captures(s).ok_or_else(invalid)?;

        let kind = captures.get(1).map(|m| m.as_str()).ok_or_else(invalid)?;
        let number = captures
            .get(2)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .ok_or_else(invalid)?;

        Ok(BuildQualifier::new(kind, number))
    }
}

impl fmt::Display for BuildQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.number)
    }
}

/// Extract the build number after the last `daily.` in a version string.
///
/// Anything after the number that starts with a space is ignored, which
/// covers strings like `1.24.0-beta.1-daily.5935787 (commit abc123)`.
pub fn daily_build_number(version: &str) -> Result<u64, ParseError> {
    let idx = version.rfind(DAILY_PREFIX).ok_or_else(|| {
        ParseError::unparseable(
            version,
            ParseError::number("", format!("no '{}' qualifier", DAILY_PREFIX)),
        )
    })?;

    let tail = &version[idx + DAILY_PREFIX.len()..];
    let digits = tail.split(' ').next().unwrap_or_default();

    digits.parse::<u64>().map_err(|_| {
        ParseError::unparseable(
            version,
            ParseError::number(digits, "invalid daily build number"),
        )
    })
}
