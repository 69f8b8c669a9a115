pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod ui;
pub mod update;
pub mod version;
pub mod version_file;

pub use domain::{Prerelease, PrereleaseLabel, SemanticVersion, VersionBump};
pub use error::{ParseError, RelverError, Result};
