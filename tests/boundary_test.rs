use relver::boundary::VersionWarning;
use relver::ui;

// ============================================================================
// VersionWarning Display Tests
// ============================================================================

#[test]
fn test_discarded_qualifier_display() {
    let warning = VersionWarning::DiscardedQualifier {
        input: "0.4.0-beta.2-pr.2021242".to_string(),
        canonical: "0.4.0-beta.2".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("0.4.0-beta.2-pr.2021242"),
        "Message should contain the original input, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("'0.4.0-beta.2'"),
        "Message should contain the canonical version, got: {}",
        display_msg
    );
}

#[test]
fn test_unrecognized_label_display() {
    let warning = VersionWarning::UnrecognizedLabel {
        version: "1.0.0-badlabel".to_string(),
        label: "badlabel".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("unrecognized prerelease label 'badlabel'"),
        "got: {}",
        display_msg
    );
}

#[test]
fn test_implicit_prerelease_display() {
    let warning = VersionWarning::ImplicitPrerelease {
        version: "0.9.0".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("0.9.0"), "got: {}", display_msg);
    assert!(display_msg.contains("major version 0"), "got: {}", display_msg);
}

#[test]
fn test_display_version_warning_does_not_panic() {
    ui::display_version_warning(&VersionWarning::ImplicitPrerelease {
        version: "0.1.0".to_string(),
    });
}
