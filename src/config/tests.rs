use super::{Config, ConfigKey};
use crate::core::types::UnitPricePolicy;
use crate::errors::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_path() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("galactic-config-test-{nanos}-{uniq}.json"))
}

fn sample_config_file(path: &std::path::Path) {
    let json = r#"{
  "unit_price_policy": { "value": "whole-credits", "description": "policy" },
  "file_logging_enabled": { "value": "False", "description": "file logging" },
  "show_banner": { "value": "True", "description": "banner" }
}"#;
    fs::write(path, json).unwrap();
}

#[test]
fn load_from_reads_config_and_rows() {
    let path = temp_path();
    sample_config_file(&path);
    let cfg = Config::load_from(&path).expect("config should load");

    assert_eq!(cfg.unit_price_policy(), UnitPricePolicy::WholeCredits);
    assert!(!cfg.file_logging_enabled());
    assert!(cfg.show_banner());

    let rows = cfg.rows();
    assert_eq!(rows.len(), 3);
    assert!(
        rows.iter()
            .any(|(k, d, v)| k == "UNIT_PRICE_POLICY" && d == "policy" && v == "whole-credits")
    );
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let path = temp_path();
    fs::write(&path, "{}").unwrap();
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.unit_price_policy(), UnitPricePolicy::AllowFractional);
    assert!(cfg.file_logging_enabled());
    assert!(cfg.show_banner());
}

#[test]
fn load_from_reports_missing_file() {
    let path = temp_path();
    let err = Config::load_from(&path).unwrap_err();
    match err {
        Error::Config(msg) => {
            let expected = format!("Configuration file '{}' not found.", path.display());
            assert_eq!(msg, expected);
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn load_or_default_does_not_create_file() {
    let path = temp_path();
    let cfg = Config::load_or_default(&path).unwrap();
    assert_eq!(cfg.unit_price_policy(), UnitPricePolicy::AllowFractional);
    assert!(!path.exists());
}

#[test]
fn load_from_reports_invalid_json() {
    let path = temp_path();
    fs::write(&path, "{").unwrap();
    let err = Config::load_or_default(&path).unwrap_err();
    match err {
        Error::Config(msg) => {
            let prefix = format!("Invalid JSON in '{}':", path.display());
            assert!(msg.starts_with(&prefix));
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn load_from_rejects_unknown_policy() {
    let path = temp_path();
    fs::write(
        &path,
        r#"{ "unit_price_policy": { "value": "round-down", "description": "p" } }"#,
    )
    .unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn set_validates_and_persists() {
    let path = temp_path();
    sample_config_file(&path);
    let mut cfg = Config::load_from(&path).unwrap();

    cfg.set("UNIT_PRICE_POLICY", "allow-fractional").unwrap();
    cfg.set_key(ConfigKey::ShowBanner, "false").unwrap();
    assert_eq!(cfg.unit_price_policy(), UnitPricePolicy::AllowFractional);

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.unit_price_policy(), UnitPricePolicy::AllowFractional);
    assert!(!reloaded.show_banner());
}

#[test]
fn set_rejects_unknown_key_and_bad_value() {
    let path = temp_path();
    sample_config_file(&path);
    let mut cfg = Config::load_from(&path).unwrap();

    match cfg.set("CURRENCY", "Credits").unwrap_err() {
        Error::Parse(msg) => assert!(msg.contains("UNIT_PRICE_POLICY")),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(cfg.set("FILE_LOGGING_ENABLED", "sometimes").is_err());
    assert!(!cfg.file_logging_enabled());
}

#[test]
fn set_on_defaults_writes_new_file() {
    let path = temp_path();
    let mut cfg = Config::load_or_default(&path).unwrap();
    cfg.set_key(ConfigKey::UnitPricePolicy, "whole-credits").unwrap();
    assert!(path.exists());
    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.unit_price_policy(), UnitPricePolicy::WholeCredits);
}
