//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `VITAE_` prefix, `__` between sections,
//!    e.g. `VITAE_STORE__DIR` or `VITAE_DEFAULTS__LOCALE`
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

const QUALIFIER: (&str, &str, &str) = ("com", "vitae", "vitae");

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for generated documents.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Document store settings.
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Locale tag used when `--locale` is not given.
    pub locale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `human`, `plain`, `json`, or anything else for terminal detection.
    pub format: String,
    /// Pretty-print generated documents.
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding `<id>.json` documents.
    pub dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                locale: "en-US".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
                pretty: true,
            },
            store: StoreConfig {
                dir: Self::default_store_dir(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then `VITAE_*`
    /// environment variables.
    ///
    /// A file passed via `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = ::config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let settings = ::config::Config::builder()
            .add_source(defaults)
            .add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                ::config::Environment::with_prefix("VITAE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.vitae.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        let (qualifier, organization, application) = QUALIFIER;
        directories::ProjectDirs::from(qualifier, organization, application)
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".vitae.toml"))
    }

    fn default_store_dir() -> PathBuf {
        let (qualifier, organization, application) = QUALIFIER;
        directories::ProjectDirs::from(qualifier, organization, application)
            .map(|d| d.data_dir().join("documents"))
            .unwrap_or_else(|| PathBuf::from(".vitae/documents"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_english() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.locale, "en-US");
        assert!(cfg.output.pretty);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_required_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn file_overrides_some_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitae.toml");
        std::fs::write(
            &path,
            "[defaults]\nlocale = \"pl-PL\"\n\n[store]\ndir = \"/srv/cv\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.locale, "pl-PL");
        assert_eq!(cfg.store.dir, PathBuf::from("/srv/cv"));
        // untouched keys keep their defaults
        assert!(cfg.output.pretty);
    }

    #[test]
    fn serialised_defaults_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitae.toml");
        std::fs::write(&path, toml::to_string_pretty(&AppConfig::default()).unwrap()).unwrap();
        assert!(AppConfig::load(Some(&path)).is_ok());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
