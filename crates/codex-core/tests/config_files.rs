//! Config file loading tests

use std::fs;

use codex_core::{CodexError, SiteConfig};
use tempfile::TempDir;

#[test]
fn test_load_full_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "owner": "Test Owner",
            "tagline": "Lab",
            "form_endpoint": "https://example.com/f/abc",
            "splash_ms": 1200,
            "shake_ms": 300
        }"#,
    )?;

    let config = SiteConfig::load(&path)?;
    assert_eq!(config.owner, "Test Owner");
    assert_eq!(config.form_endpoint, "https://example.com/f/abc");
    assert_eq!(config.splash_duration().as_millis(), 1200);
    assert_eq!(config.window_title(), "The Identity Codex | Lab");
    Ok(())
}

#[test]
fn test_missing_file_falls_back_to_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("absent.json");

    let config = SiteConfig::load_or_default(Some(path.as_path()))?;
    assert_eq!(config, SiteConfig::default());
    Ok(())
}

#[test]
fn test_malformed_json_is_reported() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.json");
    fs::write(&path, "{ splash_ms: ")?;

    let err = SiteConfig::load_or_default(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, CodexError::Json(_)));
    Ok(())
}

#[test]
fn test_invalid_values_are_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "shake_ms": 0 }"#)?;

    let err = SiteConfig::load(&path).unwrap_err();
    assert!(matches!(err, CodexError::Config(_)));
    Ok(())
}
