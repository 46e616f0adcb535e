//! Site configuration.
//!
//! Loaded from an optional JSON file and then overridden by command-line
//! flags in the desktop binary. Every field has a default, so a missing
//! file is not an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CodexError, CodexResult};
use crate::splash::SPLASH_DURATION;
use crate::subscribe::DEFAULT_FORM_ENDPOINT;
use crate::threat::SHAKE_DURATION;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown in the navbar and footer
    pub owner: String,
    /// Window title suffix
    pub tagline: String,
    /// POST target of the footer form
    pub form_endpoint: String,
    /// Preloader duration; 0 disables the preloader
    pub splash_ms: u64,
    /// Page shake duration when threat mode engages
    pub shake_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: crate::content::OWNER_NAME.to_string(),
            tagline: "Neural Research & Code".to_string(),
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            splash_ms: SPLASH_DURATION.as_millis() as u64,
            shake_ms: SHAKE_DURATION.as_millis() as u64,
        }
    }
}

impl SiteConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> CodexResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Read `path` (or the default location) if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> CodexResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn validate(&self) -> CodexResult<()> {
        if self.form_endpoint.trim().is_empty() {
            return Err(CodexError::Config("form_endpoint must not be empty".to_string()));
        }
        if !self.form_endpoint.starts_with("https://") && !self.form_endpoint.starts_with("http://") {
            return Err(CodexError::Config(format!(
                "form_endpoint must be an http(s) URL: {}",
                self.form_endpoint
            )));
        }
        if self.shake_ms == 0 {
            return Err(CodexError::Config("shake_ms must be positive".to_string()));
        }
        Ok(())
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    pub fn splash_enabled(&self) -> bool {
        self.splash_ms > 0
    }

    pub fn shake_duration(&self) -> Duration {
        Duration::from_millis(self.shake_ms)
    }

    pub fn window_title(&self) -> String {
        format!("The Identity Codex | {}", self.tagline)
    }
}

/// `<config dir>/codex/config.json`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("codex").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        config.validate().unwrap();
        assert_eq!(config.splash_duration(), SPLASH_DURATION);
        assert_eq!(config.shake_duration(), SHAKE_DURATION);
        assert!(config.splash_enabled());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{"splash_ms": 0}"#).unwrap();
        assert!(!config.splash_enabled());
        assert_eq!(config.form_endpoint, DEFAULT_FORM_ENDPOINT);
    }

    #[test]
    fn rejects_bad_endpoint() {
        let config = SiteConfig {
            form_endpoint: "ftp://example.com".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(CodexError::Config(_))));

        let config = SiteConfig {
            form_endpoint: "  ".to_string(),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn window_title_uses_tagline() {
        assert_eq!(
            SiteConfig::default().window_title(),
            "The Identity Codex | Neural Research & Code"
        );
    }
}
