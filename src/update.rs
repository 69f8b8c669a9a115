//! Update availability between an installed version and a published one.
//!
//! Daily builds carry a globally increasing build number after `daily.`, so
//! when both sides have one it decides. Otherwise full semver precedence is
//! used, which keeps a stable 1.23.5 from "updating" to a daily 1.5.0.

use crate::domain::daily_build_number;
use crate::error::Result;

/// Release channel a published version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Channel {
    #[default]
    Stable,
    Daily,
}

/// Parse with the `semver` crate after dropping a trailing ` (commit ...)`.
fn parse_semver(text: &str) -> std::result::Result<semver::Version, semver::Error> {
    let text = text.trim();
    let text = text.split(' ').next().unwrap_or(text);
    semver::Version::parse(text)
}

/// Whether `latest` on `channel` is newer than `current`.
///
/// Stable versions that fail to parse are an error. An unparseable daily
/// version counts as an update.
pub fn has_update(current: &str, latest: &str, channel: Channel) -> Result<bool> {
    match channel {
        Channel::Stable => {
            let latest = parse_semver(latest)?;
            let current = parse_semver(current)?;
            Ok(latest > current)
        }
        Channel::Daily => {
            let latest_build = daily_build_number(latest).ok();
            let current_build = daily_build_number(current).ok().filter(|n| *n > 0);

            if let (Some(latest_build), Some(current_build)) = (latest_build, current_build) {
                tracing::debug!(latest_build, current_build, "comparing daily build numbers");
                return Ok(latest_build > current_build);
            }

            match (parse_semver(latest), parse_semver(current)) {
                (Ok(latest), Ok(current)) => Ok(latest > current),
                (Err(e), _) => {
                    tracing::debug!(error = %e, latest, "daily version not comparable, assuming update");
                    Ok(true)
                }
                (Ok(_), Err(e)) => Err(e.into()),
            }
        }
    }
}
