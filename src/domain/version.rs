use crate::domain::prerelease::{Prerelease, PrereleaseLabel};
use crate::domain::qualifier::BuildQualifier;
use crate::error::{ParseError, RelverError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Release version: `major.minor.patch` with an optional prerelease decoration.
///
/// Clearing `prerelease` drops the label and the number together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease: Option<Prerelease>,
}

/// Outcome of a tolerant parse: the canonical version plus whatever
/// trailing text the fallback pass threw away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub version: SemanticVersion,
    pub discarded: Option<String>,
}

impl ParsedVersion {
    /// The discarded tail as a build qualifier, when it has that shape.
    pub fn qualifier(&self) -> Option<BuildQualifier> {
        self.discarded
            .as_deref()
            .and_then(|tail| tail.parse::<BuildQualifier>().ok())
    }
}

/// Version bump type for stepping a release forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl SemanticVersion {
    /// Create a new release version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            prerelease: None,
        }
    }

    pub fn with_prerelease(mut self, prerelease: Prerelease) -> Self {
        self.prerelease = Some(prerelease);
        self
    }

    /// Parse `X.Y.Z` or `X.Y.Z-{label}.{number}` exactly, with nothing trailing.
    pub fn parse_strict(input: &str) -> std::result::Result<Self, ParseError> {
        let (core, suffix) = match input.split_once('-') {
            Some((core, suffix)) => (core, Some(suffix)),
            None => (input, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(ParseError::core(core));
        }

        let major = parse_core_component(core, parts[0])?;
        let minor = parse_core_component(core, parts[1])?;
        let patch = parse_core_component(core, parts[2])?;

        let prerelease = suffix.map(Prerelease::parse).transpose()?;

        Ok(SemanticVersion {
            major,
            minor,
            patch,
            prerelease,
        })
    }

    /// Parse a version, tolerating CI qualifiers appended after the prerelease.
    ///
    /// The whole input is tried first. If that fails, only the first two
    /// dash-delimited segments are parsed, so `0.4.0-beta.2-pr.2021242`
    /// yields `0.4.0-beta.2`.
    pub fn parse(input: &str) -> std::result::Result<Self, ParseError> {
        Self::parse_detailed(input).map(|parsed| parsed.version)
    }

    /// Same as [`SemanticVersion::parse`] but also reports the discarded tail.
    pub fn parse_detailed(input: &str) -> std::result::Result<ParsedVersion, ParseError> {
        tracing::trace!(input, "parsing version");

        let strict_err = match Self::parse_strict(input) {
            Ok(version) => {
                return Ok(ParsedVersion {
                    version,
                    discarded: None,
                })
            }
            Err(e) => e,
        };

        let mut segments = input.splitn(3, '-');
        let head = match (segments.next(), segments.next()) {
            (Some(core), Some(pre)) => format!("{}-{}", core, pre),
            _ => return Err(ParseError::unparseable(input, strict_err)),
        };
        let Some(tail) = segments.next() else {
            return Err(ParseError::unparseable(input, strict_err));
        };

        match Self::parse_strict(&head) {
            Ok(version) => {
                tracing::debug!(input, canonical = %version, "discarded trailing qualifier");
                Ok(ParsedVersion {
                    version,
                    discarded: Some(tail.to_string()),
                })
            }
            Err(_) => Err(ParseError::unparseable(input, strict_err)),
        }
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// True when the prerelease label is one the release tooling produces.
    pub fn has_recognized_prerelease(&self) -> bool {
        self.prerelease
            .as_ref()
            .is_some_and(Prerelease::is_recognized)
    }

    pub fn prerelease_number(&self) -> Option<u32> {
        self.prerelease.as_ref().and_then(Prerelease::number)
    }

    /// Drop any prerelease decoration.
    pub fn clear_prerelease(&mut self) {
        self.prerelease = None;
    }

    /// Point at an explicit release version.
    pub fn set_release(&mut self, major: u32, minor: u32, patch: u32) {
        self.major = major;
        self.minor = minor;
        self.patch = patch;
        self.clear_prerelease();
    }

    /// The release this prerelease leads up to.
    pub fn promote(&self) -> Self {
        SemanticVersion::new(self.major, self.minor, self.patch)
    }

    /// Step to the next prerelease in place.
    ///
    /// A recognized prerelease bumps its number. A release, or a prerelease
    /// with an unrecognized label, moves to the next minor and starts a fresh
    /// series at `{fresh_label}.1`.
    pub fn increment_prerelease(&mut self, fresh_label: &PrereleaseLabel) -> Result<()> {
        if let Some(current) = self.prerelease.as_ref().filter(|pr| pr.is_recognized()) {
            let next = current.next().ok_or_else(|| {
                RelverError::overflow(format!(
                    "{} has no next prerelease number; release it or start a new series",
                    self
                ))
            })?;
            self.prerelease = Some(next);
            return Ok(());
        }

        if !fresh_label.is_recognized() {
            return Err(RelverError::config(format!(
                "Cannot start a prerelease series with unrecognized label '{}'",
                fresh_label
            )));
        }

        self.minor = self
            .minor
            .checked_add(1)
            .ok_or_else(|| RelverError::overflow(format!("minor version of {}", self)))?;
        self.patch = 0;
        self.prerelease = Some(Prerelease::first(fresh_label.clone())?);
        Ok(())
    }

    /// Next prerelease, starting fresh series with `beta`.
    pub fn next_prerelease(&self) -> Result<Self> {
        let mut next = self.clone();
        next.increment_prerelease(&PrereleaseLabel::Beta)?;
        Ok(next)
    }

    /// Bump a component and reset the lower ones. Prerelease state is cleared.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow = |component: &str| {
            RelverError::overflow(format!("{} version of {}", component, self))
        };

        Ok(match bump_type {
            VersionBump::Major => SemanticVersion::new(
                self.major.checked_add(1).ok_or_else(|| overflow("major"))?,
                0,
                0,
            ),
            VersionBump::Minor => SemanticVersion::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(|| overflow("minor"))?,
                0,
            ),
            VersionBump::Patch => SemanticVersion::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(|| overflow("patch"))?,
            ),
        })
    }

    /// Next release: a prerelease is promoted to its own core, a release is bumped.
    pub fn next_release(&self, bump_type: VersionBump) -> Result<Self> {
        if self.is_prerelease() {
            Ok(self.promote())
        } else {
            self.bump(bump_type)
        }
    }

    /// Major version zero counts as not yet stable, whatever the decoration says.
    pub fn is_prerelease_by_major_zero(&self) -> bool {
        self.major == 0
    }

    /// Whether a release should be published for this version.
    ///
    /// Only the explicit prerelease decoration is consulted.
    pub fn should_release(&self, allow_prerelease: bool) -> bool {
        !self.is_prerelease() || allow_prerelease
    }

    /// Canonical form with a CI qualifier appended, e.g. `1.2.0-beta.3-pr.1234`.
    pub fn qualified(&self, qualifier: &BuildQualifier) -> String {
        format!("{}-{}", self, qualifier)
    }
}

fn parse_core_component(core: &str, part: &str) -> std::result::Result<u32, ParseError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::core(core));
    }
    part.parse::<u32>().map_err(|_| ParseError::core(core))
}

impl FromStr for SemanticVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, ParseError> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        Ok(())
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let core = (self.major, self.minor, self.patch).cmp(&(
            other.major,
            other.minor,
            other.patch,
        ));
        if core != Ordering::Equal {
            return core;
        }

        match (&self.prerelease, &other.prerelease) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                (a.label().as_str(), a.number()).cmp(&(b.label().as_str(), b.number()))
            }
        }
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
