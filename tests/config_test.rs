// tests/config_test.rs
use relver::config::{load_config, Config, OutputFormat};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.version_file, PathBuf::from("version.txt"));
    assert_eq!(config.prerelease.label, "beta");
    assert!(!config.prerelease.allow);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
version_file = "cli/azd/version.txt"

[prerelease]
label = "rc"
allow = true

[output]
format = "pipeline"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.version_file, PathBuf::from("cli/azd/version.txt"));
    assert_eq!(config.prerelease.label, "rc");
    assert!(config.prerelease.allow);
    assert_eq!(config.output.format, OutputFormat::Pipeline);
}

#[test]
fn test_invalid_file_names_path() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[prerelease]\nlabel = \"preview\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path())).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("preview"), "got: {}", msg);
    assert!(
        msg.contains(&temp_file.path().display().to_string()),
        "got: {}",
        msg
    );
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config(Some(dir.path().join("nope.toml").as_path())).is_err());
}
