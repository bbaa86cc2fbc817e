//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treestore/treestore.toml`
//! 3. Local config: `<dir>/.treestore.toml`
//! 4. Environment variables: `TREESTORE_*` prefix (`__` separates nested keys,
//!    e.g. `TREESTORE_LABELS__GROUP`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::Category;

/// Display names for row categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LabelsConfig {
    /// Label for nodes with children
    pub group: String,
    /// Label for leaf nodes
    pub item: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            group: Category::Group.to_string(),
            item: Category::Item.to_string(),
        }
    }
}

/// Raw labels for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawLabelsConfig {
    pub group: Option<String>,
    pub item: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub items_file: Option<PathBuf>,
    pub path_separator: Option<String>,
    pub labels: RawLabelsConfig,
}

/// Unified configuration for treestore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Items file loaded when `--file` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_file: Option<PathBuf>,
    /// Separator between labels of a row path (default: " / ")
    pub path_separator: String,
    pub labels: LabelsConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            items_file: None,
            path_separator: " / ".into(),
            labels: LabelsConfig::default(),
        }
    }
}

/// Get the XDG config directory for treestore.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treestore").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treestore.toml"))
}

/// Get the path to the local config file in `dir`.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".treestore.toml")
}

/// Expand `~`, `$VAR` and `${VAR}`; unexpandable input is returned unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Display label for a row category.
    pub fn category_label(&self, category: Category) -> &str {
        match category {
            Category::Group => &self.labels.group,
            Category::Item => &self.labels.item,
        }
    }

    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            items_file: overlay
                .items_file
                .clone()
                .or_else(|| self.items_file.clone()),
            path_separator: overlay
                .path_separator
                .clone()
                .unwrap_or_else(|| self.path_separator.clone()),
            labels: LabelsConfig {
                group: overlay
                    .labels
                    .group
                    .clone()
                    .unwrap_or_else(|| self.labels.group.clone()),
                item: overlay
                    .labels
                    .item
                    .clone()
                    .unwrap_or_else(|| self.labels.item.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Directory searched for `.treestore.toml`
    ///
    /// A relative `items_file` in the local config resolves against `local_dir`.
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!(path = %local_path.display(), "loading local config");
                let mut raw = load_raw_settings(&local_path)?;
                raw.items_file = raw.items_file.map(|p| {
                    let expanded = PathBuf::from(expand_env_vars(&p.to_string_lossy()));
                    if expanded.is_absolute() {
                        expanded
                    } else {
                        dir.join(expanded)
                    }
                });
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply TREESTORE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TREESTORE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("items_file") {
            settings.items_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("path_separator") {
            settings.path_separator = val;
        }
        if let Ok(val) = config.get_string("labels.group") {
            settings.labels.group = val;
        }
        if let Ok(val) = config.get_string("labels.item") {
            settings.labels.item = val;
        }

        Ok(settings)
    }

    fn expand_paths(&mut self) {
        if let Some(path) = &self.items_file {
            self.items_file = Some(PathBuf::from(expand_env_vars(&path.to_string_lossy())));
        }
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
