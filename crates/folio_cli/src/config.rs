//! Folio configuration file handling

use anyhow::{Context, Result};
use folio_theme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "folio.toml";

/// Top-level Folio configuration (folio.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FolioConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Site metadata
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
}

fn default_name() -> String {
    "portfolio".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            author: None,
        }
    }
}

/// Translation catalogs
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct I18nConfig {
    /// Directory holding `pt.yaml` and `en.yaml`. Bundled catalogs when unset.
    #[serde(default)]
    pub catalog_dir: Option<PathBuf>,
}

/// Where the language preference is stored
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct PreferencesConfig {
    /// Preference file. Platform config dir when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Timeline content
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct TimelineConfig {
    /// Milestone document (relative to the working directory)
    #[serde(default = "default_timeline_data")]
    pub data: PathBuf,
}

fn default_timeline_data() -> PathBuf {
    PathBuf::from("content/timeline.json")
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            data: default_timeline_data(),
        }
    }
}

/// Initial color scheme
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ThemeConfig {
    #[serde(default)]
    pub scheme: ColorScheme,
}

impl FolioConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `folio.toml` in the working
    /// directory is used when present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: FolioConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Create a new configuration with the given site name
    pub fn new(name: &str) -> Self {
        Self {
            site: SiteConfig {
                name: name.to_string(),
                author: None,
            },
            ..Self::default()
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config: FolioConfig = toml::from_str("").unwrap();
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.timeline.data, PathBuf::from("content/timeline.json"));
        assert_eq!(config.theme.scheme, ColorScheme::Light);
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: FolioConfig = toml::from_str(
            r#"
[site]
author = "Ana"

[theme]
scheme = "dark"

[preferences]
path = "/tmp/folio-prefs.toml"
"#,
        )
        .unwrap();
        assert_eq!(config.site.name, "portfolio");
        assert_eq!(config.site.author.as_deref(), Some("Ana"));
        assert_eq!(config.theme.scheme, ColorScheme::Dark);
        assert_eq!(
            config.preferences.path,
            Some(PathBuf::from("/tmp/folio-prefs.toml"))
        );
        assert_eq!(config.i18n.catalog_dir, None);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FolioConfig::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn serialized_config_parses_back() {
        let config = FolioConfig::new("ana-site");
        let parsed: FolioConfig = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
