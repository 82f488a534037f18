//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, or the default location if it exists)
//! 3. Built-in defaults (always present)
//!
//! Every section and key is optional in the file; missing keys fall back to
//! the built-in defaults via `#[serde(default)]`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default answers for `init`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Detection settings.
    pub detector: DetectorConfig,
    /// VCS host settings.
    pub vcs: VcsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Database used when neither `--database` nor a prompt supplies one.
    pub database: Option<String>,
    /// Environment used when neither `--env` nor a prompt supplies one.
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Override of the PHP versions considered during constraint resolution,
    /// newest first (e.g. `["8.3.0", "8.2.0"]`).  Empty means the built-in
    /// candidate list.
    pub php_candidates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VcsConfig {
    /// Branches that `init` offers to protect.
    pub protected_branches: Vec<String>,
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            protected_branches: vec!["main".into(), "develop".into()],
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// A path passed via `--config` must exist; the default location is
    /// optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.shipkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "shipkit", "shipkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".shipkit.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_preset_answers() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.database.is_none());
        assert!(cfg.defaults.environment.is_none());
    }

    #[test]
    fn default_protected_branches() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.vcs.protected_branches, ["main", "develop"]);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: AppConfig = toml::from_str("[defaults]\ndatabase = \"mysql\"\n").unwrap();
        assert_eq!(cfg.defaults.database.as_deref(), Some("mysql"));
        assert_eq!(cfg.vcs.protected_branches, ["main", "develop"]);
        assert!(cfg.detector.php_candidates.is_empty());
    }

    #[test]
    fn detector_candidates_parse() {
        let cfg: AppConfig =
            toml::from_str("[detector]\nphp_candidates = [\"8.3.0\", \"8.2.0\"]\n").unwrap();
        assert_eq!(cfg.detector.php_candidates, ["8.3.0", "8.2.0"]);
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let path = PathBuf::from("/definitely/not/a/config.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
