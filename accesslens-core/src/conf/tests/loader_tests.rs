use crate::conf::types::UaEngineKind;
use crate::conf::{ConfigError, config_error_hint, load_config, parse_config, validate_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn empty_file_yields_defaults() {
    // Act
    let cfg = parse_config(Path::new("accesslens.hcl"), "").unwrap();

    // Assert
    assert_eq!(cfg.enrichment.ua_engine, UaEngineKind::Woothee);
    assert_eq!(cfg.enrichment.uaparser_regexes, None);
    assert_eq!(cfg.enrichment.max_user_agent_length, 2048);
    assert!(cfg.output.pretty);
}

#[test]
fn parses_enrichment_and_output_blocks() {
    // Arrange
    let src = r#"
enrichment {
  ua_engine             = "uaparser"
  uaparser_regexes      = "/etc/accesslens/regexes.yaml"
  max_user_agent_length = 512
}

output {
  pretty = false
}
"#;

    // Act
    let cfg = parse_config(Path::new("accesslens.hcl"), src).unwrap();

    // Assert
    assert_eq!(cfg.enrichment.ua_engine, UaEngineKind::UaParser);
    assert_eq!(
        cfg.enrichment.uaparser_regexes.as_deref(),
        Some(Path::new("/etc/accesslens/regexes.yaml"))
    );
    assert_eq!(cfg.enrichment.max_user_agent_length, 512);
    assert!(!cfg.output.pretty);
}

#[test]
fn unknown_fields_are_rejected() {
    // Arrange
    let src = r#"
output {
  pretty = true
  colour = "blue"
}
"#;

    // Act
    let err = parse_config(Path::new("bad.hcl"), src).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.hcl"));
}

#[test]
fn unknown_engine_is_rejected() {
    // Arrange
    let src = r#"
enrichment {
  ua_engine = "magic"
}
"#;

    // Act
    let result = parse_config(Path::new("accesslens.hcl"), src);

    // Assert
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn uaparser_without_regexes_fails_validation() {
    // Arrange
    let src = r#"
enrichment {
  ua_engine = "uaparser"
}
"#;
    let cfg = parse_config(Path::new("accesslens.hcl"), src).unwrap();

    // Act
    let err = validate_config(&cfg).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::MissingRegexes));
    assert!(config_error_hint(&err).is_some());
}

#[test]
fn uaparser_with_missing_regexes_file_fails_validation() {
    // Arrange
    let dir = tempdir().unwrap();
    let missing = dir.path().join("regexes.yaml");
    let src = format!(
        "enrichment {{\n  ua_engine = \"uaparser\"\n  uaparser_regexes = \"{}\"\n}}\n",
        missing.display()
    );
    let cfg = parse_config(Path::new("accesslens.hcl"), &src).unwrap();

    // Act
    let err = validate_config(&cfg).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::RegexesNotFound { path } if path == missing));
}

#[test]
fn zero_max_user_agent_length_fails_validation() {
    // Arrange
    let src = r#"
enrichment {
  max_user_agent_length = 0
}
"#;
    let cfg = parse_config(Path::new("accesslens.hcl"), src).unwrap();

    // Act
    let err = validate_config(&cfg).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::InvalidMaxUserAgentLength));
}

#[test]
fn load_config_reads_and_validates_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("accesslens.hcl");
    fs::write(&path, "output {\n  pretty = false\n}\n").unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert!(!cfg.output.pretty);
    assert_eq!(cfg.enrichment.ua_engine, UaEngineKind::Woothee);
}

#[test]
fn load_config_reports_missing_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.hcl");

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.to_string().contains("nope.hcl"));
    let cause = std::error::Error::source(&err).unwrap().to_string();
    assert!(!err.to_string().contains(&cause));
}
