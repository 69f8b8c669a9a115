//! Plain-text version file holding a single version string.

use crate::domain::{ParsedVersion, SemanticVersion};
use crate::error::{ParseError, RelverError, Result};
use std::fs;
use std::path::Path;

/// Reads and parses the version stored in `path`.
///
/// Returns the file text with surrounding whitespace (including the trailing
/// newline) removed, along with the parse result.
pub fn read_version_file(path: &Path) -> Result<(String, ParsedVersion)> {
    let contents = fs::read_to_string(path)?;
    let text = contents.trim();
    tracing::debug!(path = %path.display(), version = text, "read version file");

    let parsed = SemanticVersion::parse_detailed(text)
        .map_err(|e| match e {
            ParseError::Unparseable { source, .. } => {
                ParseError::unparseable(format!("{} (in {})", text, path.display()), *source)
            }
            other => other,
        })?;
    Ok((text.to_string(), parsed))
}

/// Writes the canonical form of `version` followed by a newline.
///
/// A prerelease with an unrecognized label is refused: its canonical form has
/// no number, so [`read_version_file`] could not read it back.
pub fn write_version_file(path: &Path, version: &SemanticVersion) -> Result<()> {
    if version.is_prerelease() && !version.has_recognized_prerelease() {
        return Err(RelverError::config(format!(
            "Refusing to write '{}' to {}: prerelease label is not alpha, beta or rc",
            version,
            path.display()
        )));
    }
    fs::write(path, format!("{}\n", version))?;
    tracing::info!(path = %path.display(), %version, "wrote version file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_trims_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.txt");
        fs::write(&path, "  1.2.3-beta.4\n").unwrap();

        let (text, parsed) = read_version_file(&path).unwrap();
        assert_eq!(text, "1.2.3-beta.4");
        assert_eq!(parsed.version.to_string(), "1.2.3-beta.4");
    }

    #[test]
    fn test_read_invalid_mentions_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.txt");
        fs::write(&path, "not-a-version\n").unwrap();

        let err = read_version_file(&path).unwrap_err();
        assert!(err.to_string().contains("not-a-version"));
        assert!(err.to_string().contains("version.txt"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_version_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.txt");
        let version = SemanticVersion::parse("0.2.0-beta.1").unwrap();

        write_version_file(&path, &version).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "0.2.0-beta.1\n");
        assert_eq!(read_version_file(&path).unwrap().1.version, version);
    }

    #[test]
    fn test_read_keeps_qualified_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.txt");
        fs::write(&path, "0.4.0-beta.2-pr.77\n").unwrap();

        let (text, parsed) = read_version_file(&path).unwrap();
        assert_eq!(text, "0.4.0-beta.2-pr.77");
        assert_eq!(parsed.version.to_string(), "0.4.0-beta.2");
        assert_eq!(parsed.discarded.as_deref(), Some("pr.77"));
    }

    #[test]
    fn test_write_refuses_unrecognized_prerelease() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.txt");
        fs::write(&path, "1.0.0\n").unwrap();
        let version = SemanticVersion::parse("2.0.0-preview.3").unwrap();

        let err = write_version_file(&path, &version).unwrap_err();
        assert!(err.to_string().contains("2.0.0-preview"), "got: {}", err);
        assert_eq!(fs::read_to_string(&path).unwrap(), "1.0.0\n");
    }
}
