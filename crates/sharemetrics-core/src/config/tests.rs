use super::*;
use std::io::Write;

#[test]
fn test_parse_metrics_section() {
    let config = SharedRegistriesConfig::from_toml_str(
        r#"
        [metrics]
        default_registry = "app"
        preload = ["http", "db"]
        "#,
    )
    .unwrap();

    assert_eq!(config.default_registry.as_deref(), Some("app"));
    assert_eq!(config.preload, vec!["http", "db"]);
}

#[test]
fn test_parse_bare_table() {
    let config = SharedRegistriesConfig::from_toml_str(r#"preload = ["jobs"]"#).unwrap();
    assert_eq!(config.default_registry, None);
    assert_eq!(config.preload, vec!["jobs"]);
}

#[test]
fn test_empty_document_is_default() {
    let config = SharedRegistriesConfig::from_toml_str("").unwrap();
    assert_eq!(config, SharedRegistriesConfig::default());
}

#[test]
fn test_blank_names_rejected() {
    let err = SharedRegistriesConfig::from_toml_str(r#"default_registry = "  ""#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { ref field, .. } if field == "default_registry"));

    let err = SharedRegistriesConfig::from_toml_str(r#"preload = ["ok", ""]"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { ref field, .. } if field == "preload"));
}

#[test]
fn test_malformed_toml() {
    let err = SharedRegistriesConfig::from_toml_str("preload = [").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[metrics]\ndefault_registry = \"from-file\"").unwrap();

    let config = SharedRegistriesConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.default_registry.as_deref(), Some("from-file"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SharedRegistriesConfig::load_from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_default_override() {
    let config = SharedRegistriesConfig {
        default_registry: Some("file".to_string()),
        preload: Vec::new(),
    };

    let kept = config.clone().with_default_override(Some("   ".to_string()));
    assert_eq!(kept.default_registry.as_deref(), Some("file"));

    let replaced = config.with_default_override(Some(" env ".to_string()));
    assert_eq!(replaced.default_registry.as_deref(), Some("env"));
}
