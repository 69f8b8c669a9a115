//! Prerelease decoration for release versions
//!
//! A prerelease suffix has the shape `{label}.{number}`, e.g. `beta.2`.
//! Labels are letters only. `alpha`, `beta` and `rc` are recognized; any other
//! alphabetic label is kept as an unrecognized label whose number is dropped.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Smallest accepted prerelease number.
pub const MIN_PRERELEASE_NUMBER: u32 = 1;

/// Largest accepted prerelease number. Installer patch numbers reserve 100
/// slots per patch level, so 100 would collide with the next release.
pub const MAX_PRERELEASE_NUMBER: u32 = 99;

/// Prerelease label (alpha, beta, rc, or an unrecognized alphabetic label)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrereleaseLabel {
    Alpha,
    Beta,
    ReleaseCandidate,
    /// Alphabetic but not one of the labels the release tooling produces
    Unrecognized(String),
}

impl PrereleaseLabel {
    /// Parse a label token. Fails when the token is empty or not purely alphabetic.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        s.parse()
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, PrereleaseLabel::Unrecognized(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            PrereleaseLabel::Alpha => "alpha",
            PrereleaseLabel::Beta => "beta",
            PrereleaseLabel::ReleaseCandidate => "rc",
            PrereleaseLabel::Unrecognized(s) => s,
        }
    }
}

impl FromStr for PrereleaseLabel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ParseError::label(s));
        }

        Ok(match s {
            "alpha" => PrereleaseLabel::Alpha,
            "beta" => PrereleaseLabel::Beta,
            "rc" => PrereleaseLabel::ReleaseCandidate,
            other => PrereleaseLabel::Unrecognized(other.to_string()),
        })
    }
}

impl fmt::Display for PrereleaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a prerelease number token, enforcing the `1..=99` window.
///
/// Only ASCII digits are accepted, so `-1` and `+1` fail here rather than
/// slipping through the integer parser.
pub fn parse_prerelease_number(s: &str) -> Result<u32, ParseError> {
    if s.is_empty() {
        return Err(ParseError::number(s, "missing prerelease number"));
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::number(s, "expected a positive integer"));
    }

    let number = s
        .parse::<u32>()
        .map_err(|_| ParseError::number(s, "number is out of range"))?;
    validate_prerelease_number(number).map_err(|_| {
        ParseError::number(
            s,
            format!(
                "must be between {} and {}",
                MIN_PRERELEASE_NUMBER, MAX_PRERELEASE_NUMBER
            ),
        )
    })
}

fn validate_prerelease_number(number: u32) -> Result<u32, ParseError> {
    if (MIN_PRERELEASE_NUMBER..=MAX_PRERELEASE_NUMBER).contains(&number) {
        Ok(number)
    } else {
        Err(ParseError::number(
            number.to_string(),
            format!(
                "must be between {} and {}",
                MIN_PRERELEASE_NUMBER, MAX_PRERELEASE_NUMBER
            ),
        ))
    }
}

/// Prerelease decoration of a version.
///
/// `number` is present exactly when the label is recognized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prerelease {
    label: PrereleaseLabel,
    number: Option<u32>,
}

impl Prerelease {
    /// Build a prerelease from a label and number.
    ///
    /// The number is range-checked even for unrecognized labels, then
    /// dropped for them.
    pub fn new(label: PrereleaseLabel, number: u32) -> Result<Self, ParseError> {
        let number = validate_prerelease_number(number)?;
        let number = label.is_recognized().then_some(number);
        Ok(Prerelease { label, number })
    }

    /// First prerelease of a series, e.g. `beta.1`
    pub fn first(label: PrereleaseLabel) -> Result<Self, ParseError> {
        Prerelease::new(label, MIN_PRERELEASE_NUMBER)
    }

    /// Parse a `{label}.{number}` suffix.
    ///
    /// Everything after the first `.` is the number token, so `beta.1.2`
    /// fails on the number rather than being truncated.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let (label, number) = match s.split_once('.') {
            Some((label, number)) => (label, number),
            None => (s, ""),
        };

        let label = PrereleaseLabel::parse(label)?;
        let number = parse_prerelease_number(number)?;
        Prerelease::new(label, number)
    }

    pub fn label(&self) -> &PrereleaseLabel {
        &self.label
    }

    pub fn number(&self) -> Option<u32> {
        self.number
    }

    pub fn is_recognized(&self) -> bool {
        self.label.is_recognized()
    }

    /// Next prerelease in the same series, or `None` when the label is
    /// unrecognized or the number would leave the accepted window.
    pub fn next(&self) -> Option<Self> {
        let number = self.number?.checked_add(1)?;
        Prerelease::new(self.label.clone(), number).ok()
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if let Some(number) = self.number {
            write!(f, ".{}", number)?;
        }
        Ok(())
    }
}
